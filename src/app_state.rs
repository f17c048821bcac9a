use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    inference::{DiffusionParams, HttpImageGenerator, HttpTextGenerator, ImageGenerator, TextGenerator},
    repositories::{QuizCatalog, StaticQuizCatalog},
    services::{image_service::ImageService, quiz_service::QuizService, story_service::StoryService},
};

#[derive(Clone)]
pub struct AppState {
    pub story_service: Arc<StoryService>,
    pub image_service: Arc<ImageService>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
    text_model: Arc<dyn TextGenerator>,
    image_model: Arc<dyn ImageGenerator>,
}

impl AppState {
    /// Builds the HTTP model clients and loads the quiz catalog.
    pub fn new(config: Config) -> AppResult<Self> {
        let timeout = config.generation_timeout();

        let text_model = Arc::new(HttpTextGenerator::new(
            &config.text_model_url,
            config.inference_api_token.clone(),
            timeout,
        )?);
        let image_model = Arc::new(HttpImageGenerator::new(
            &config.image_model_url,
            config.inference_api_token.clone(),
            timeout,
        )?);
        let catalog = Arc::new(StaticQuizCatalog::load(&config.quiz_data_path)?);

        Ok(Self::with_components(config, text_model, image_model, catalog))
    }

    pub fn with_components(
        config: Config,
        text_model: Arc<dyn TextGenerator>,
        image_model: Arc<dyn ImageGenerator>,
        catalog: Arc<dyn QuizCatalog>,
    ) -> Self {
        let deadline = config.generation_timeout();

        let story_service = Arc::new(StoryService::new(
            Arc::clone(&text_model),
            config.story_iterations,
            config.max_topic_chars,
            deadline,
        ));
        let image_service = Arc::new(ImageService::new(
            Arc::clone(&image_model),
            config.static_dir.clone(),
            DiffusionParams::turbo(config.image_width, config.image_height),
            deadline,
        ));
        let quiz_service = Arc::new(QuizService::new(catalog));

        Self {
            story_service,
            image_service,
            quiz_service,
            config: Arc::new(config),
            text_model,
            image_model,
        }
    }

    /// Checks both models before the server starts accepting requests.
    pub async fn warm_up(&self) -> AppResult<()> {
        self.text_model.warm_up().await?;
        self.image_model.warm_up().await?;
        Ok(())
    }

    pub async fn shutdown(&self) {
        self.text_model.shutdown().await;
        self.image_model.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::AppError,
        inference::{MockImageGenerator, MockTextGenerator},
        test_utils::fixtures::bundled_catalog,
    };

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[actix_web::test]
    async fn warm_up_and_shutdown_reach_both_models() {
        let mut text = MockTextGenerator::new();
        text.expect_warm_up().times(1).returning(|| Ok(()));
        text.expect_shutdown().times(1).returning(|| ());
        let mut image = MockImageGenerator::new();
        image.expect_warm_up().times(1).returning(|| Ok(()));
        image.expect_shutdown().times(1).returning(|| ());

        let state = AppState::with_components(
            Config::test_config(),
            Arc::new(text),
            Arc::new(image),
            Arc::new(bundled_catalog()),
        );

        state.warm_up().await.unwrap();
        state.shutdown().await;
    }

    #[actix_web::test]
    async fn warm_up_failure_is_reported() {
        let mut text = MockTextGenerator::new();
        text.expect_warm_up()
            .returning(|| Err(AppError::GenerationError("connection refused".into())));
        let image = MockImageGenerator::new();

        let state = AppState::with_components(
            Config::test_config(),
            Arc::new(text),
            Arc::new(image),
            Arc::new(bundled_catalog()),
        );

        assert!(state.warm_up().await.is_err());
    }

    #[test]
    fn new_fails_without_quiz_data() {
        let config = Config {
            quiz_data_path: "missing/quizzes.json".into(),
            ..Config::test_config()
        };
        assert!(AppState::new(config).is_err());
    }
}
