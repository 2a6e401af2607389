use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::scoring::ScoreReport;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let report = app.score();
    let percentage = report.percentage();
    let grade_color = get_grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], &report, percentage, grade_color);
    render_topic_breakdown(frame, chunks[2], &report, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    report: &ScoreReport,
    percentage: f64,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.0}%)",
                report.correct, report.total, percentage
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_topic_breakdown(frame: &mut Frame, area: Rect, report: &ScoreReport, scroll: usize) {
    let lines: Vec<Line> = report
        .topics
        .iter()
        .map(|topic| {
            let all_correct = topic.correct == topic.total;
            let (symbol, color) = if all_correct {
                ("+", Color::Green)
            } else {
                ("-", Color::Yellow)
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(topic.topic.clone(), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("  {}/{}", topic.correct, topic.total),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
