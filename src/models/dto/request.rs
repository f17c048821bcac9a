use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize)]
pub struct StoryRequest {
    pub query: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ImageRequest {
    #[validate(length(max = 2000, message = "Prompt must be at most 2000 characters"))]
    pub prompt: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub theme: String,
}
