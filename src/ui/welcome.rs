use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let height = 9 + app.total_topics() as u16;
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TOPIC QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];

    for set in app.question_sets() {
        let label = if set.is_empty() {
            format!("{} · couldn't load questions", set.topic)
        } else {
            format!("{} · {} questions", set.topic, set.len())
        };
        let color = if set.is_empty() {
            Color::Red
        } else {
            Color::DarkGray
        };
        content.push(Line::from(label.fg(color)));
    }

    content.extend([
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
