use serde::Serialize;

use super::quiz_dto::QuizDto;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct StoryResponse {
    pub success: bool,
    pub story: String,
    pub images: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub success: bool,
    pub image_url: String,
}

/// Quiz lookups report a missing theme through `success: false`, not an HTTP status.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuizResponse {
    Found { success: bool, quiz: QuizDto },
    Missing { success: bool, message: String },
}

impl QuizResponse {
    pub fn found(quiz: QuizDto) -> Self {
        QuizResponse::Found {
            success: true,
            quiz,
        }
    }

    pub fn missing(message: impl Into<String>) -> Self {
        QuizResponse::Missing {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_response_shapes() {
        let found = serde_json::to_value(QuizResponse::found(QuizDto {
            theme: "Smart Home".to_string(),
            questions: vec![],
            game: None,
        }))
        .unwrap();
        assert_eq!(found["success"], true);
        assert_eq!(found["quiz"]["theme"], "Smart Home");
        assert!(found.get("message").is_none());

        let missing = serde_json::to_value(QuizResponse::missing("No quiz found for theme x")).unwrap();
        assert_eq!(missing["success"], false);
        assert_eq!(missing["message"], "No quiz found for theme x");
        assert!(missing.get("quiz").is_none());
    }
}
