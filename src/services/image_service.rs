use std::{path::PathBuf, sync::Arc, time::Duration};

use base64::Engine;
use uuid::Uuid;

use crate::{
    constants::prompts::render_illustration_prompts,
    errors::{AppError, AppResult},
    inference::{with_deadline, DiffusionParams, ImageGenerator},
};

/// URL prefix under which `static_dir` is served.
pub const STATIC_URL_PREFIX: &str = "/static";

pub const EMPTY_PROMPT_MESSAGE: &str = "Prompt cannot be empty.";

pub struct ImageService {
    generator: Arc<dyn ImageGenerator>,
    static_dir: PathBuf,
    params: DiffusionParams,
    deadline: Duration,
}

impl ImageService {
    pub fn new(
        generator: Arc<dyn ImageGenerator>,
        static_dir: PathBuf,
        params: DiffusionParams,
        deadline: Duration,
    ) -> Self {
        Self {
            generator,
            static_dir,
            params,
            deadline,
        }
    }

    /// Three base64 PNGs illustrating `story`, in framing order.
    ///
    /// A failure on any image discards the whole batch.
    pub async fn synthesize_story_images(&self, story: &str) -> AppResult<Vec<String>> {
        let mut images = Vec::with_capacity(3);

        for prompt in render_illustration_prompts(story) {
            let png = self.render(&prompt).await?;
            images.push(base64::engine::general_purpose::STANDARD.encode(png));
        }

        Ok(images)
    }

    /// Generates one image, stores it under the static directory and returns its URL.
    pub async fn synthesize_single_image(&self, prompt: &str) -> AppResult<String> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AppError::ValidationError(EMPTY_PROMPT_MESSAGE.to_string()));
        }

        let png = self.render(prompt).await?;

        let filename = format!("{}.png", Uuid::new_v4());
        let path = self.static_dir.join(&filename);
        tokio::fs::write(&path, png).await?;

        log::info!("Stored generated image at {}", path.display());
        Ok(format!("{}/{}", STATIC_URL_PREFIX, filename))
    }

    async fn render(&self, prompt: &str) -> AppResult<Vec<u8>> {
        with_deadline(
            self.deadline,
            "Image generation",
            self.generator.generate(prompt, &self.params),
        )
        .await
    }
}
