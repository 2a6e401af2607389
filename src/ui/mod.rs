mod quiz;
mod result;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::NotStarted => welcome::render(frame, area, app),
        AppState::InProgress => quiz::render(frame, area, app),
        AppState::Completed => result::render(frame, area, app),
    }
}
