/// A single multiple-choice question.
///
/// `correct_answer` holds the raw value the generative service produced,
/// which is 1-indexed over the four options (values 1..=4). The scoring
/// engine performs the translation to a 0-indexed option; nothing else
/// may reinterpret this field.
#[derive(Debug, Clone)]
pub struct Question {
    pub text: String,
    pub options: [String; 4],
    pub correct_answer: usize,
}

/// The ordered question set generated for one topic.
///
/// `questions` is empty when generation or parsing failed for the topic;
/// navigation and scoring both treat that as "nothing to ask here", never
/// as an error.
#[derive(Debug, Clone)]
pub struct TopicQuestions {
    pub topic: String,
    pub questions: Vec<Question>,
}

impl TopicQuestions {
    pub fn new(topic: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            topic: topic.into(),
            questions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}
