use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Question;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_topic_header(frame, chunks[0], app);

    match app.current_question() {
        Some(question) => {
            render_progress(frame, chunks[1], app);
            render_question_text(frame, chunks[2], &question.text);
            render_options(frame, chunks[3], question, app.selected_option(), app.current_answer());
            render_controls(frame, chunks[4], app.current_answer().is_some());
        }
        None => render_failed_topic(frame, chunks[3]),
    }
}

fn render_topic_header(frame: &mut Frame, area: Rect, app: &App) {
    let topic = app.current_topic().map_or("", |set| set.topic.as_str());
    let header = Line::from(vec![
        Span::styled(topic, Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("   topic {} of {}", app.topic_number(), app.total_topics()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!("{}/{}", app.question_number(), app.questions_in_topic());
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    selected: usize,
    answered: Option<usize>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_cursor = index == selected;
        let is_answered = answered == Some(index);

        let style = if is_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else if is_answered {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_cursor {
            ">"
        } else if is_answered {
            "+"
        } else {
            " "
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_failed_topic(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "Couldn't load questions for this topic.",
            Style::default().fg(Color::Red),
        )),
        Line::from(""),
        Line::from("n to skip  ·  q quit".fg(Color::DarkGray)),
    ];
    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, answered: bool) {
    let text = if answered {
        "j/k navigate  ·  enter answer  ·  n next  ·  q quit"
    } else {
        "j/k navigate  ·  enter answer  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
