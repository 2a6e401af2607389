//! HTTP client for the generative-text service.
//!
//! One request per topic, no internal retries. Every failure mode (transport
//! error, non-success status, empty candidate list) surfaces as a
//! [`GenerateError`] for the loader to collapse into an empty question set.

use serde::Deserialize;
use serde_json::json;

/// Default generation endpoint (Gemini-style `generateContent` API).
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent";

/// Why a generation request produced no usable text.
#[derive(Debug)]
pub enum GenerateError {
    /// Transport-level failure (connect, timeout, body read).
    Http(reqwest::Error),
    /// The service answered with a non-success status.
    Status(reqwest::StatusCode),
    /// The service answered but produced no candidates.
    NoCandidates,
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::Http(e) => write!(f, "request failed: {}", e),
            GenerateError::Status(code) => write!(f, "service returned {}", code),
            GenerateError::NoCandidates => write!(f, "no candidates generated"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GenerateError {
    fn from(err: reqwest::Error) -> Self {
        GenerateError::Http(err)
    }
}

/// Response shape of the generation API.
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: String,
}

/// Client for fetching quiz questions for a topic.
#[derive(Clone)]
pub struct QuestionClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl QuestionClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Request questions for one topic and return the raw response text.
    ///
    /// The returned text is unsanitized; callers hand it to
    /// [`crate::data::parse_question_set`].
    pub async fn fetch_questions(&self, topic: &str) -> Result<String, GenerateError> {
        let body = json!({
            "contents": [
                { "parts": [ { "text": question_prompt(topic) } ] }
            ]
        });

        let url = format!("{}?key={}", self.endpoint, self.api_key);
        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Status(status));
        }

        let payload: GenerateResponse = response.json().await?;
        extract_text(payload).ok_or(GenerateError::NoCandidates)
    }
}

/// Prompt fixing the output shape the parser expects.
fn question_prompt(topic: &str) -> String {
    format!(
        "Generate 5 multiple choice questions about {}. Each question should have \
         4 options (A, B, C, D) and indicate the correct answer. Format the response \
         as a JSON array of objects, where each object has properties: \"question\", \
         \"options\" (array of 4 strings), and \"correctAnswer\" (a number between \
         1 and 4 naming the correct option). Respond with the JSON array only.",
        topic
    )
}

/// Join all text parts of the first candidate, if any.
fn extract_text(payload: GenerateResponse) -> Option<String> {
    let candidate = payload.candidates.into_iter().next()?;
    let text: String = candidate
        .content
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect();
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_joins_parts() {
        let payload: GenerateResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [ { "text": "[{\"a\":" }, { "text": "1}]" } ] } }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(extract_text(payload).unwrap(), "[{\"a\":1}]");
    }

    #[test]
    fn test_empty_candidates_yield_nothing() {
        let empty: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(extract_text(empty).is_none());

        let absent: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(extract_text(absent).is_none());
    }

    #[test]
    fn test_prompt_names_the_topic_and_shape() {
        let prompt = question_prompt("block chain");
        assert!(prompt.contains("block chain"));
        assert!(prompt.contains("correctAnswer"));
        assert!(prompt.contains("5 multiple choice"));
    }
}
