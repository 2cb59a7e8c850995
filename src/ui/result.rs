use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::quiz::{QuizSession, ResultTier};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], session);
    render_question_breakdown(frame, chunks[2], session);
    super::render_controls(frame, chunks[3], "r try again  ·  h home  ·  q quit");
}

fn tier_color(tier: ResultTier) -> Color {
    match tier {
        ResultTier::Perfect => Color::Green,
        ResultTier::WellDone => Color::Cyan,
        ResultTier::KeepLearning => Color::Yellow,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let tier = session.tier();
    let color = tier_color(tier);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ RESULTS",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({}%)",
                session.score(),
                session.len(),
                session.percentage()
            ),
            Style::default().fg(color).bold(),
        )),
        Line::from(""),
        Line::from(tier.message().fg(Color::Gray)),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let lines: Vec<Line> = session
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            Line::from(vec![
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(question.question.as_str(), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("  → {}", question.correct_answer),
                    Style::default().fg(Color::Green),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}
