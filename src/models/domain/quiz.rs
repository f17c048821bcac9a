use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Marker separating an option's letter label from its text, as in `"B) Solar power"`.
const OPTION_LABEL_MARKER: &str = ") ";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Kept as raw JSON so a malformed index degrades to no answer instead of failing the load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_index: Option<Value>,
    /// Any other fields stored with the question, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuizQuestion {
    /// Text of the correct option without its letter label.
    ///
    /// Returns `None` when `answer_index` is missing, not an integer, or does not point into `options`.
    pub fn resolved_answer(&self) -> Option<String> {
        let index = usize::try_from(self.answer_index.as_ref()?.as_i64()?).ok()?;
        let option = self.options.get(index)?;

        let text = option
            .split_once(OPTION_LABEL_MARKER)
            .map(|(_, rest)| rest)
            .unwrap_or(option);
        Some(text.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizTopic {
    pub topic_name: String,
    pub questions: Vec<QuizQuestion>,
    pub linked_game: Option<String>,
}

impl QuizTopic {
    pub fn matches(&self, theme: &str) -> bool {
        self.topic_name.trim().to_lowercase() == theme.trim().to_lowercase()
    }
}
