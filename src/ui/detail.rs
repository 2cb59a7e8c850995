use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Language, PlantRecord};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    match app.detail_plant() {
        Some(Ok(plant)) => render_plant(frame, area, plant, app.language()),
        Some(Err(_)) | None => render_not_found(frame, area),
    }
}

fn render_plant(frame: &mut Frame, area: Rect, plant: &PlantRecord, language: Language) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0], plant);
    render_language_switch(frame, chunks[1], language);
    render_body(frame, chunks[2], plant, language);
    super::render_controls(frame, chunks[3], "l language  ·  esc back  ·  q quit");
}

fn render_title(frame: &mut Frame, area: Rect, plant: &PlantRecord) {
    let content = vec![
        Line::from(Span::styled(
            format!("{} {}", plant.icon(), plant.name),
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(plant.scientific_name.as_str().fg(Color::Gray).italic()),
        Line::from(plant.plant_type.as_str().fg(Color::Cyan)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_language_switch(frame: &mut Frame, area: Rect, current: Language) {
    let spans: Vec<Span> = Language::ALL
        .iter()
        .map(|&language| {
            let style = if language == current {
                Style::default().fg(Color::Black).bg(Color::Green).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!(" {} ", language.label()), style)
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Right), area);
}

fn render_body(frame: &mut Frame, area: Rect, plant: &PlantRecord, language: Language) {
    let mut lines = Vec::new();

    for (label, value) in [
        ("Native Region", &plant.native_region),
        ("Habitat", &plant.habitat),
    ] {
        if let Some(value) = value {
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
                Span::raw(value.as_str()),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(plant.description(language).fg(Color::White)));
    lines.push(Line::from(""));

    if !plant.uses.is_empty() {
        lines.push(Line::from(Span::styled(
            "Uses & Benefits",
            Style::default().fg(Color::Green).bold(),
        )));
        for usage in &plant.uses {
            lines.push(Line::from(format!("  • {usage}")));
        }
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::new(1, 1, 1, 0)),
    );
    frame.render_widget(widget, area);
}

fn render_not_found(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(Span::styled(
            "Plant Not Found",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from("We couldn't find the plant you're looking for.".fg(Color::DarkGray)),
        Line::from(""),
        Line::from("esc  explore other plants".fg(Color::DarkGray)),
    ];
    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        chunks[1],
    );
}
