mod question;

pub use question::{Question, TopicQuestions};

/// Coarse lifecycle phase of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Question sets are loaded but the session has not begun.
    NotStarted,
    /// The learner is answering questions.
    InProgress,
    /// All topics have been traversed; results can be scored.
    Completed,
}
