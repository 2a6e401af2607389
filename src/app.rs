use std::collections::HashMap;

use crate::models::{AppState, Question, TopicQuestions};
use crate::scoring::{self, ScoreReport};

const OPTION_COUNT: usize = 4;

/// A session operation that violated the state machine's contract.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The operation is only valid while a session is in progress.
    NotInProgress,
    /// `select_answer` was called with an option index outside 0..=3.
    InvalidOption(usize),
    /// `select_answer` was called on a topic with no questions.
    NoQuestion,
    /// `advance` was called before the current question was answered.
    AdvanceRejected,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::NotInProgress => write!(f, "no session in progress"),
            SessionError::InvalidOption(index) => {
                write!(f, "option index {} out of range 0..=3", index)
            }
            SessionError::NoQuestion => write!(f, "no current question to answer"),
            SessionError::AdvanceRejected => {
                write!(f, "current question must be answered before advancing")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// One quiz session across all configured topics.
///
/// Owns the topic/question pointers, the phase, and the recorded answers.
/// All mutation goes through [`start_session`](App::start_session),
/// [`select_answer`](App::select_answer), and [`advance`](App::advance);
/// the struct performs no I/O and is built from already-loaded question sets.
pub struct App {
    pub state: AppState,
    question_sets: Vec<TopicQuestions>,
    current_topic: usize,
    current_question: usize,
    answers: HashMap<(usize, usize), usize>,
    selected_option: usize,
    result_scroll: usize,
}

impl App {
    pub fn new(question_sets: Vec<TopicQuestions>) -> Self {
        Self {
            state: AppState::NotStarted,
            question_sets,
            current_topic: 0,
            current_question: 0,
            answers: HashMap::new(),
            selected_option: 0,
            result_scroll: 0,
        }
    }

    /// Begin a fresh session: both pointers back to zero, answers cleared.
    ///
    /// Also the only way out of `Completed`; calling it repeatedly just
    /// re-zeros the same state.
    pub fn start_session(&mut self) {
        self.state = AppState::InProgress;
        self.current_topic = 0;
        self.current_question = 0;
        self.answers.clear();
        self.selected_option = 0;
        self.result_scroll = 0;
    }

    /// Record an answer for the current question. Last write wins.
    pub fn select_answer(&mut self, option: usize) -> Result<(), SessionError> {
        if self.state != AppState::InProgress {
            return Err(SessionError::NotInProgress);
        }
        if self.current_question().is_none() {
            return Err(SessionError::NoQuestion);
        }
        if option >= OPTION_COUNT {
            return Err(SessionError::InvalidOption(option));
        }

        self.answers
            .insert((self.current_topic, self.current_question), option);
        Ok(())
    }

    /// Move to the next question, next topic, or completion, in that order.
    ///
    /// Rejected while the current question is unanswered. A topic whose set
    /// failed to load has nothing to answer, so it is skipped outright.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        if self.state != AppState::InProgress {
            return Err(SessionError::NotInProgress);
        }

        let set_len = self
            .question_sets
            .get(self.current_topic)
            .map_or(0, TopicQuestions::len);

        if set_len > 0 {
            let key = (self.current_topic, self.current_question);
            if !self.answers.contains_key(&key) {
                return Err(SessionError::AdvanceRejected);
            }
            if self.current_question + 1 < set_len {
                self.current_question += 1;
                self.selected_option = 0;
                return Ok(());
            }
        }

        if self.current_topic + 1 < self.question_sets.len() {
            self.current_topic += 1;
            self.current_question = 0;
            self.selected_option = 0;
        } else {
            self.state = AppState::Completed;
        }
        Ok(())
    }

    /// The question at the current pointers.
    ///
    /// `None` outside an in-progress session and on topics whose question
    /// set is empty; callers render that as a skippable state, not a fault.
    pub fn current_question(&self) -> Option<&Question> {
        if self.state != AppState::InProgress {
            return None;
        }
        self.question_sets
            .get(self.current_topic)?
            .questions
            .get(self.current_question)
    }

    pub fn current_topic(&self) -> Option<&TopicQuestions> {
        self.question_sets.get(self.current_topic)
    }

    pub fn question_sets(&self) -> &[TopicQuestions] {
        &self.question_sets
    }

    pub fn answers(&self) -> &HashMap<(usize, usize), usize> {
        &self.answers
    }

    /// The recorded answer for the current question, if any.
    pub fn current_answer(&self) -> Option<usize> {
        self.answers
            .get(&(self.current_topic, self.current_question))
            .copied()
    }

    pub fn topic_number(&self) -> usize {
        self.current_topic + 1
    }

    pub fn total_topics(&self) -> usize {
        self.question_sets.len()
    }

    pub fn question_number(&self) -> usize {
        self.current_question + 1
    }

    pub fn questions_in_topic(&self) -> usize {
        self.current_topic().map_or(0, TopicQuestions::len)
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % OPTION_COUNT;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option = (self.selected_option + OPTION_COUNT - 1) % OPTION_COUNT;
    }

    /// Score the session. Pure over the recorded answers and question sets,
    /// so re-invoking it for every render is fine.
    pub fn score(&self) -> ScoreReport {
        scoring::score(&self.question_sets, &self.answers)
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn scroll_results_down(&mut self) {
        self.result_scroll = self.result_scroll.saturating_add(1);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, correct_answer: usize) -> Question {
        Question {
            text: text.to_string(),
            options: [
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct_answer,
        }
    }

    fn two_topic_app() -> App {
        App::new(vec![
            TopicQuestions::new("rust", vec![question("q1", 1), question("q2", 2)]),
            TopicQuestions::new("sql", vec![question("q3", 3)]),
        ])
    }

    #[test]
    fn test_no_question_before_start() {
        let app = two_topic_app();
        assert_eq!(app.state, AppState::NotStarted);
        assert!(app.current_question().is_none());
    }

    #[test]
    fn test_start_session_resets_everything() {
        let mut app = two_topic_app();
        app.start_session();
        app.select_answer(2).unwrap();
        app.advance().unwrap();

        app.start_session();
        assert_eq!(app.state, AppState::InProgress);
        assert_eq!(app.topic_number(), 1);
        assert_eq!(app.question_number(), 1);
        assert!(app.answers().is_empty());
    }

    #[test]
    fn test_select_answer_rejects_out_of_range() {
        let mut app = two_topic_app();
        app.start_session();
        assert_eq!(app.select_answer(4), Err(SessionError::InvalidOption(4)));
        assert!(app.answers().is_empty());
    }

    #[test]
    fn test_select_answer_requires_session() {
        let mut app = two_topic_app();
        assert_eq!(app.select_answer(0), Err(SessionError::NotInProgress));
    }

    #[test]
    fn test_resubmission_overwrites() {
        let mut app = two_topic_app();
        app.start_session();
        app.select_answer(0).unwrap();
        app.select_answer(3).unwrap();
        assert_eq!(app.current_answer(), Some(3));
        assert_eq!(app.answers().len(), 1);
    }

    #[test]
    fn test_advance_without_answer_is_rejected() {
        let mut app = two_topic_app();
        app.start_session();
        assert_eq!(app.advance(), Err(SessionError::AdvanceRejected));
        assert_eq!(app.topic_number(), 1);
        assert_eq!(app.question_number(), 1);
        assert_eq!(app.state, AppState::InProgress);
    }

    #[test]
    fn test_traversal_visits_every_question_in_order() {
        let mut app = two_topic_app();
        app.start_session();

        let mut visited = Vec::new();
        while app.state == AppState::InProgress {
            visited.push((app.topic_number(), app.question_number()));
            app.select_answer(0).unwrap();
            app.advance().unwrap();
        }

        assert_eq!(visited, vec![(1, 1), (1, 2), (2, 1)]);
        assert_eq!(app.state, AppState::Completed);
    }

    #[test]
    fn test_completed_session_rejects_mutation() {
        let mut app = App::new(vec![TopicQuestions::new("one", vec![question("q", 1)])]);
        app.start_session();
        app.select_answer(0).unwrap();
        app.advance().unwrap();
        assert_eq!(app.state, AppState::Completed);

        assert_eq!(app.select_answer(0), Err(SessionError::NotInProgress));
        assert_eq!(app.advance(), Err(SessionError::NotInProgress));
    }

    #[test]
    fn test_empty_topic_is_skipped_without_answer() {
        let mut app = App::new(vec![
            TopicQuestions::new("failed", Vec::new()),
            TopicQuestions::new("ok", vec![question("q", 1)]),
        ]);
        app.start_session();

        assert!(app.current_question().is_none());
        assert_eq!(app.select_answer(0), Err(SessionError::NoQuestion));

        app.advance().unwrap();
        assert_eq!(app.topic_number(), 2);
        assert!(app.current_question().is_some());
    }

    #[test]
    fn test_trailing_empty_topic_completes() {
        let mut app = App::new(vec![
            TopicQuestions::new("ok", vec![question("q", 1)]),
            TopicQuestions::new("failed", Vec::new()),
        ]);
        app.start_session();
        app.select_answer(0).unwrap();
        app.advance().unwrap();
        assert_eq!(app.topic_number(), 2);

        app.advance().unwrap();
        assert_eq!(app.state, AppState::Completed);
    }

    #[test]
    fn test_no_topics_completes_immediately_on_advance() {
        let mut app = App::new(Vec::new());
        app.start_session();
        assert!(app.current_question().is_none());
        app.advance().unwrap();
        assert_eq!(app.state, AppState::Completed);
    }
}
