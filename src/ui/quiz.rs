use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::quiz::{OptionState, QuizSession};

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], session);
    render_progress_bar(frame, chunks[1], session);
    render_question_text(frame, chunks[2], &session.current_question().question);
    render_options(frame, chunks[3], session, app.option_cursor());
    render_controls(frame, chunks[4], session);
}

fn render_progress(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let position = format!("Question {} of {}", session.question_number(), session.len());
    frame.render_widget(Paragraph::new(position).fg(Color::DarkGray), chunks[0]);

    let score = Line::from(vec![
        Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            session.score().to_string(),
            Style::default().fg(Color::Green).bold(),
        ),
    ]);
    frame.render_widget(Paragraph::new(score).alignment(Alignment::Right), chunks[1]);
}

fn render_progress_bar(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .ratio(session.progress())
        .label("");
    frame.render_widget(gauge, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(format!("Q  {text}"))
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, session: &QuizSession, cursor: usize) {
    let options = &session.current_question().options;
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let under_cursor = !session.is_answered() && index == cursor;
        let (style, verdict) = match session.option_state(option) {
            OptionState::SelectedCorrect => {
                (Style::default().fg(Color::Green).bold(), "  ✓ Correct answer!")
            }
            OptionState::SelectedIncorrect => {
                (Style::default().fg(Color::Red).bold(), "  ✗ Incorrect answer")
            }
            OptionState::RevealedCorrect => (Style::default().fg(Color::Green), ""),
            OptionState::Neutral if under_cursor => (Style::default().fg(Color::Cyan).bold(), ""),
            OptionState::Neutral => (Style::default().fg(Color::Gray), ""),
        };
        let marker = if under_cursor { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
            Span::styled(verdict, style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let text = match (session.is_answered(), session.is_last_question()) {
        (false, _) => "j/k navigate  ·  enter select  ·  esc home  ·  q quit",
        (true, false) => "enter next question  ·  esc home  ·  q quit",
        (true, true) => "enter finish quiz  ·  esc home  ·  q quit",
    };
    super::render_controls(frame, area, text);
}
