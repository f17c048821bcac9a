use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::domain::{QuizQuestion, QuizTopic};

/// A catalog question enriched with its resolved answer text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestionDto {
    pub question: String,
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_index: Option<Value>,
    pub answer: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<QuizQuestion> for QuizQuestionDto {
    fn from(question: QuizQuestion) -> Self {
        let answer = question.resolved_answer();
        let mut extra = question.extra;
        extra.remove("answer");
        QuizQuestionDto {
            question: question.question,
            options: question.options,
            answer_index: question.answer_index,
            answer,
            extra,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizDto {
    pub theme: String,
    pub questions: Vec<QuizQuestionDto>,
    pub game: Option<String>,
}

impl From<QuizTopic> for QuizDto {
    fn from(topic: QuizTopic) -> Self {
        QuizDto {
            theme: topic.topic_name,
            questions: topic.questions.into_iter().map(QuizQuestionDto::from).collect(),
            game: topic.linked_game,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_dto_resolves_answers_and_keeps_nulls() {
        let topic = QuizTopic {
            topic_name: "AI Ethics".to_string(),
            questions: vec![
                QuizQuestion {
                    question: "Q1".to_string(),
                    options: vec!["A) Fair".to_string(), "B) Fast".to_string()],
                    answer_index: Some(Value::from(0)),
                    extra: Map::new(),
                },
                QuizQuestion {
                    question: "Q2".to_string(),
                    options: vec!["A) Yes".to_string()],
                    answer_index: Some(Value::from(4)),
                    extra: Map::new(),
                },
            ],
            linked_game: Some("balloon_debate".to_string()),
        };

        let dto = QuizDto::from(topic);
        assert_eq!(dto.theme, "AI Ethics");
        assert_eq!(dto.questions[0].answer.as_deref(), Some("Fair"));
        assert_eq!(dto.questions[1].answer, None);

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["game"], "balloon_debate");
        assert!(json["questions"][1]["answer"].is_null());
        assert_eq!(json["questions"][0]["answer_index"], 0);
    }

    #[test]
    fn extra_fields_are_passed_through_and_answer_is_recomputed() {
        let question: QuizQuestion = serde_json::from_value(serde_json::json!({
            "question": "Q1",
            "options": ["A) Wind", "B) Coal"],
            "answer_index": 0,
            "explanation": "Wind is renewable",
            "answer": "stale"
        }))
        .unwrap();

        let json = serde_json::to_value(QuizQuestionDto::from(question)).unwrap();
        assert_eq!(json["explanation"], "Wind is renewable");
        assert_eq!(json["answer"], "Wind");
    }

    #[test]
    fn missing_game_serializes_as_null() {
        let dto = QuizDto {
            theme: "Space".to_string(),
            questions: vec![],
            game: None,
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("game").is_some());
        assert!(json["game"].is_null());
    }
}
