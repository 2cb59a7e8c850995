use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

const FEATURES: [&str; 5] = [
    "Explore a collection of common Indian plants",
    "Learn about their medicinal uses and cultural significance",
    "Read descriptions in both English and Hindi",
    "Test your knowledge with the plant quiz",
    "Search and filter plants by category",
];

pub fn render(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
        .margin(1)
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            "About Nature Explorer",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(""),
        Line::from(
            "Nature Explorer promotes awareness of the rich botanical heritage of India, \
             helping people of all ages learn about the plants woven into Indian culture, \
             medicine and ecosystems.",
        ),
        Line::from(""),
    ];
    lines.extend(FEATURES.iter().map(|feature| Line::from(format!("  🌱 {feature}"))));
    lines.push(Line::from(""));
    lines.push(Line::from(
        "All plant information ships with the application, so it works completely offline."
            .fg(Color::DarkGray),
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(
        "\"In every walk with nature one receives far more than he seeks.\" — John Muir"
            .fg(Color::Gray)
            .italic(),
    ));

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(widget, chunks[0]);
    super::render_controls(frame, chunks[1], "esc back  ·  q quit");
}
