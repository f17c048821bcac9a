use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::dto::quiz_dto::QuizDto,
    repositories::QuizCatalog,
};

pub struct QuizService {
    catalog: Arc<dyn QuizCatalog>,
}

impl QuizService {
    pub fn new(catalog: Arc<dyn QuizCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn lookup_quiz(&self, theme: &str) -> AppResult<QuizDto> {
        let theme = theme.trim();
        let topic = self
            .catalog
            .find_by_theme(theme)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No quiz found for theme {}", theme)))?;

        Ok(QuizDto::from(topic))
    }

    pub async fn available_themes(&self) -> AppResult<Vec<String>> {
        self.catalog.list_themes().await
    }
}
