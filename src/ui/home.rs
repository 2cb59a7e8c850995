use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
};

use crate::app::App;
use crate::models::PlantRecord;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0]);
    render_filters(frame, chunks[1], app);
    render_plants(frame, chunks[2], app);
    render_notice(frame, chunks[3], app);
    super::render_controls(
        frame,
        chunks[4],
        "type to search  ·  tab filter  ·  ↑/↓ move  ·  enter open  ·  F2 quiz  ·  F1 about  ·  esc quit",
    );
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "🌿 NATURE EXPLORER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("Discover the amazing plants of India".fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_filters(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Length(20)]).split(area);

    let search = if app.search_term().is_empty() {
        Line::from("Search plants...".fg(Color::DarkGray))
    } else {
        Line::from(app.search_term().fg(Color::White))
    };
    let search_widget = Paragraph::new(search).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Green)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(search_widget, chunks[0]);

    let filter_widget = Paragraph::new(app.type_filter_label())
        .alignment(Alignment::Center)
        .fg(Color::Cyan)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(filter_widget, chunks[1]);
}

fn render_plants(frame: &mut Frame, area: Rect, app: &App) {
    let plants = app.filtered_plants();

    if plants.is_empty() {
        let widget = Paragraph::new("No plants found matching your search.")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
        frame.render_widget(widget, area);
        return;
    }

    let items: Vec<ListItem> = plants.iter().map(|plant| plant_item(plant)).collect();
    let list = List::new(items)
        .highlight_style(Style::default().fg(Color::Cyan).bold())
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.list_cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn plant_item(plant: &PlantRecord) -> ListItem<'_> {
    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{} ", plant.icon())),
        Span::styled(plant.name.as_str(), Style::default().fg(Color::White).bold()),
        Span::styled(
            format!("  {}", plant.scientific_name),
            Style::default().fg(Color::Gray).italic(),
        ),
        Span::styled(
            format!("  [{}]", plant.plant_type),
            Style::default().fg(Color::Green),
        ),
    ])];

    if let Some(summary) = &plant.short_description {
        lines.push(Line::from(Span::styled(
            format!("   {}", summary),
            Style::default().fg(Color::DarkGray),
        )));
    }

    ListItem::new(lines)
}

fn render_notice(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(notice) = app.notice() {
        let widget = Paragraph::new(notice)
            .alignment(Alignment::Center)
            .fg(Color::Red);
        frame.render_widget(widget, area);
    }
}
