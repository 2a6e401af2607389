//! Generative-service client module.

mod generate;

pub use generate::{GenerateError, QuestionClient, DEFAULT_ENDPOINT};
