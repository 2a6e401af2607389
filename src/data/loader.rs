//! Loads question sets for every configured topic.

use futures_util::future;
use log::{info, warn};

use crate::client::QuestionClient;
use crate::data::parse_question_set;
use crate::models::TopicQuestions;

/// Fetch and parse question sets for all topics concurrently.
///
/// One request per topic, all in flight at once, joined only after every
/// topic has settled. A topic that fails to generate or parse comes back
/// with an empty question set; it never aborts the other topics.
///
/// The returned sets are in the same order as `topics`.
pub async fn load_question_sets(
    client: &QuestionClient,
    topics: &[String],
) -> Vec<TopicQuestions> {
    let fetches = topics.iter().cloned().map(|topic| {
        let client = client.clone();
        async move {
            let questions = match client.fetch_questions(&topic).await {
                Ok(raw) => match parse_question_set(&raw) {
                    Ok(questions) => questions,
                    Err(e) => {
                        warn!("discarding response for topic {:?}: {}", topic, e);
                        Vec::new()
                    }
                },
                Err(e) => {
                    warn!("generation failed for topic {:?}: {}", topic, e);
                    Vec::new()
                }
            };

            info!("loaded {} questions for topic {:?}", questions.len(), topic);
            TopicQuestions::new(topic, questions)
        }
    });

    future::join_all(fetches).await
}
