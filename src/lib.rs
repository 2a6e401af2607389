//! # topic-quiz
//!
//! Generates multiple-choice quizzes from a generative-text service, one
//! question set per topic, and runs them in the terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use topic_quiz::{QuestionClient, Quiz, DEFAULT_ENDPOINT};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), topic_quiz::QuizError> {
//!     let client = QuestionClient::new(DEFAULT_ENDPOINT, "api-key");
//!     let topics = vec!["rust".to_string(), "sql".to_string()];
//!
//!     // Fetch all topics concurrently; failed topics become empty sets.
//!     let quiz = Quiz::fetch(&client, &topics).await;
//!
//!     // Run the quiz in the terminal.
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod client;
mod data;
mod models;
mod scoring;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, SessionError};
pub use client::{GenerateError, QuestionClient, DEFAULT_ENDPOINT};
pub use data::{load_question_sets, parse_question_set, sanitize, ParseError};
pub use models::{AppState, Question, TopicQuestions};
pub use scoring::{score, ScoreReport, TopicScore};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A multi-topic quiz that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a quiz from already-loaded question sets.
    pub fn new(question_sets: Vec<TopicQuestions>) -> Self {
        Self {
            app: App::new(question_sets),
        }
    }

    /// Fetch question sets for every topic and build a quiz from them.
    ///
    /// Topics that fail to generate or parse come back with empty sets;
    /// the quiz skips over them at navigation time.
    pub async fn fetch(client: &QuestionClient, topics: &[String]) -> Self {
        Self::new(load_question_sets(client, topics).await)
    }

    /// True when no topic produced any questions, so there is nothing to ask.
    pub fn is_empty(&self) -> bool {
        self.app.question_sets().iter().all(TopicQuestions::is_empty)
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying session for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying session for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::NotStarted => handle_welcome_input(app, key),
        AppState::InProgress => handle_quiz_input(app, key),
        AppState::Completed => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_session();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            // Rejected on a failed topic; the view says so already.
            let _ = app.select_answer(app.selected_option());
            false
        }
        KeyCode::Char('n') | KeyCode::Right => {
            // A rejected advance means the question is unanswered; stay put.
            let _ = app.advance();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.start_session();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
