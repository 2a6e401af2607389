//! Scores a completed session against its question sets.

use std::collections::HashMap;

use crate::models::TopicQuestions;

/// Correct/total counts for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicScore {
    pub topic: String,
    pub correct: usize,
    pub total: usize,
}

/// Per-topic and aggregate results, in topic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub topics: Vec<TopicScore>,
    pub correct: usize,
    pub total: usize,
}

impl ScoreReport {
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.correct as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Compute per-topic and aggregate scores.
///
/// Pure function of its inputs. Topics with empty question sets are left
/// out of the report; a question with no recorded answer counts as
/// incorrect. The service's `correct_answer` is 1-indexed, so a recorded
/// 0-indexed answer matches when it equals `correct_answer - 1`; checked
/// subtraction keeps a stray 0 from ever matching.
pub fn score(
    question_sets: &[TopicQuestions],
    answers: &HashMap<(usize, usize), usize>,
) -> ScoreReport {
    let mut topics = Vec::new();
    let mut correct = 0;
    let mut total = 0;

    for (topic_index, set) in question_sets.iter().enumerate() {
        if set.is_empty() {
            continue;
        }

        let mut correct_for_topic = 0;
        for (question_index, question) in set.questions.iter().enumerate() {
            let answer = answers.get(&(topic_index, question_index)).copied();
            if answer.is_some() && answer == question.correct_answer.checked_sub(1) {
                correct_for_topic += 1;
            }
        }

        topics.push(TopicScore {
            topic: set.topic.clone(),
            correct: correct_for_topic,
            total: set.len(),
        });
        correct += correct_for_topic;
        total += set.len();
    }

    ScoreReport {
        topics,
        correct,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    fn question(correct_answer: usize) -> Question {
        Question {
            text: "q".to_string(),
            options: [
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct_answer,
        }
    }

    #[test]
    fn test_one_indexed_correct_answer_translation() {
        let sets = vec![TopicQuestions::new("t", vec![question(2)])];

        // Service says 2 (1-indexed), so the 0-indexed answer 1 is correct.
        let answers = HashMap::from([((0, 0), 1)]);
        let report = score(&sets, &answers);
        assert_eq!(report.correct, 1);
        assert_eq!(report.total, 1);

        let answers = HashMap::from([((0, 0), 2)]);
        assert_eq!(score(&sets, &answers).correct, 0);
    }

    #[test]
    fn test_missing_answer_counts_incorrect() {
        let sets = vec![TopicQuestions::new("t", vec![question(2)])];
        let report = score(&sets, &HashMap::new());
        assert_eq!(report.correct, 0);
        assert_eq!(report.total, 1);
    }

    #[test]
    fn test_aggregate_starts_from_zero() {
        // A perfect 2+3 run scores exactly 5/5, with per-topic breakdowns.
        let sets = vec![
            TopicQuestions::new("a", vec![question(1), question(2)]),
            TopicQuestions::new("b", vec![question(3), question(4), question(1)]),
        ];
        let answers = HashMap::from([
            ((0, 0), 0),
            ((0, 1), 1),
            ((1, 0), 2),
            ((1, 1), 3),
            ((1, 2), 0),
        ]);

        let report = score(&sets, &answers);
        assert_eq!(report.correct, 5);
        assert_eq!(report.total, 5);
        assert_eq!(
            report.topics,
            vec![
                TopicScore {
                    topic: "a".to_string(),
                    correct: 2,
                    total: 2,
                },
                TopicScore {
                    topic: "b".to_string(),
                    correct: 3,
                    total: 3,
                },
            ]
        );
    }

    #[test]
    fn test_empty_sets_are_excluded() {
        let sets = vec![
            TopicQuestions::new("failed", Vec::new()),
            TopicQuestions::new("ok", vec![question(1)]),
        ];
        let answers = HashMap::from([((1, 0), 0)]);

        let report = score(&sets, &answers);
        assert_eq!(report.topics.len(), 1);
        assert_eq!(report.topics[0].topic, "ok");
        assert_eq!(report.correct, 1);
        assert_eq!(report.total, 1);
    }

    #[test]
    fn test_out_of_range_correct_answer_never_matches() {
        // correct_answer 0 would underflow the translation; it just never matches.
        let sets = vec![TopicQuestions::new("t", vec![question(0)])];
        for option in 0..4 {
            let answers = HashMap::from([((0, 0), option)]);
            assert_eq!(score(&sets, &answers).correct, 0);
        }
    }

    #[test]
    fn test_percentage_guards_zero_total() {
        let report = score(&[], &HashMap::new());
        assert_eq!(report.total, 0);
        assert_eq!(report.percentage(), 0.0);

        let sets = vec![TopicQuestions::new("t", vec![question(1), question(1)])];
        let answers = HashMap::from([((0, 0), 0)]);
        assert_eq!(score(&sets, &answers).percentage(), 50.0);
    }
}
