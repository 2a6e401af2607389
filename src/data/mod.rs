//! Question set acquisition: sanitizing, parsing, and multi-topic loading.

mod loader;
mod parser;

pub use loader::load_question_sets;
pub use parser::{parse_question_set, sanitize, ParseError};
