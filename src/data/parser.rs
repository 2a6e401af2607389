//! Sanitizes raw generative-service output and parses it into questions.
//!
//! The service is asked for a bare JSON array but routinely wraps it in
//! markdown fences, emphasis markers, and heading lines anyway. Sanitization
//! strips that decoration before the JSON parser runs.

use serde::Deserialize;

use crate::models::Question;

/// Why a raw response could not be turned into a question set.
#[derive(Debug)]
pub enum ParseError {
    /// The sanitized text is not a JSON array of question objects.
    Json(serde_json::Error),
    /// A question did not carry exactly four options.
    OptionCount { question: usize, found: usize },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Json(e) => write!(f, "invalid question JSON: {}", e),
            ParseError::OptionCount { question, found } => {
                write!(f, "question {} has {} options, expected 4", question, found)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Json(e) => Some(e),
            ParseError::OptionCount { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Json(err)
    }
}

/// Wire shape of one question as the service emits it.
#[derive(Deserialize)]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    correct_answer: usize,
}

/// Strip markdown decoration from a raw service response.
///
/// Drops code-fence lines (``` with or without a language tag) and heading
/// lines, removes emphasis marker characters everywhere, and trims the
/// result. Running it twice yields the same text as running it once.
pub fn sanitize(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());

    for line in raw.lines() {
        let lead = line.trim_start();
        if lead.starts_with("```") || lead.starts_with('#') {
            continue;
        }
        cleaned.extend(line.chars().filter(|&c| !matches!(c, '*' | '_' | '~' | '`')));
        cleaned.push('\n');
    }

    cleaned.trim().to_string()
}

/// Parse a raw service response into an ordered question set.
///
/// Any structural problem is an error, never a panic; the loader maps
/// errors to an empty set so one bad topic cannot take down the rest.
pub fn parse_question_set(raw: &str) -> Result<Vec<Question>, ParseError> {
    let cleaned = sanitize(raw);
    let parsed: Vec<RawQuestion> = serde_json::from_str(&cleaned)?;

    let mut questions = Vec::with_capacity(parsed.len());
    for (index, raw) in parsed.into_iter().enumerate() {
        let options: [String; 4] =
            raw.options
                .try_into()
                .map_err(|options: Vec<String>| ParseError::OptionCount {
                    question: index,
                    found: options.len(),
                })?;

        questions.push(Question {
            text: raw.question,
            options,
            correct_answer: raw.correct_answer,
        });
    }

    Ok(questions)
}
