pub mod image_model;
pub mod text_model;

use std::{future::Future, time::Duration};

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::{AppError, AppResult};

pub use image_model::HttpImageGenerator;
pub use text_model::HttpTextGenerator;

/// Sampling settings for a single text-generation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplingParams {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub repetition_penalty: f32,
    pub do_sample: bool,
    pub return_full_text: bool,
}

impl SamplingParams {
    /// Settings used for every story increment.
    pub fn story() -> Self {
        Self {
            max_new_tokens: 400,
            temperature: 0.8,
            top_p: 0.9,
            repetition_penalty: 1.2,
            do_sample: true,
            return_full_text: false,
        }
    }
}

/// Settings for a single text-to-image call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffusionParams {
    pub num_inference_steps: u32,
    pub guidance_scale: f32,
    pub width: u32,
    pub height: u32,
}

impl DiffusionParams {
    /// Two steps without guidance: fast turbo-style sampling.
    pub fn turbo(width: u32, height: u32) -> Self {
        Self {
            num_inference_steps: 2,
            guidance_scale: 0.0,
            width,
            height,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns only the newly generated continuation, never the prompt.
    async fn generate(&self, prompt: &str, params: &SamplingParams) -> AppResult<String>;

    async fn warm_up(&self) -> AppResult<()> {
        Ok(())
    }

    async fn shutdown(&self) {}
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Returns PNG-encoded image bytes.
    async fn generate(&self, prompt: &str, params: &DiffusionParams) -> AppResult<Vec<u8>>;

    async fn warm_up(&self) -> AppResult<()> {
        Ok(())
    }

    async fn shutdown(&self) {}
}

/// Runs a model call under a deadline. The call is dropped, and so cancelled, once it expires.
pub async fn with_deadline<T, F>(deadline: Duration, what: &str, call: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match tokio::time::timeout(deadline, call).await {
        Ok(result) => result,
        Err(_) => {
            log::warn!("{} exceeded deadline of {:?}", what, deadline);
            Err(AppError::Timeout(format!(
                "{} did not finish within {} seconds",
                what,
                deadline.as_secs()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_sampling_matches_fixed_settings() {
        let params = SamplingParams::story();

        assert_eq!(params.max_new_tokens, 400);
        assert_eq!(params.temperature, 0.8);
        assert_eq!(params.top_p, 0.9);
        assert_eq!(params.repetition_penalty, 1.2);
        assert!(params.do_sample);
        assert!(!params.return_full_text);
    }

    #[test]
    fn turbo_diffusion_uses_two_unguided_steps() {
        let params = DiffusionParams::turbo(512, 512);
        assert_eq!(params.num_inference_steps, 2);
        assert_eq!(params.guidance_scale, 0.0);
    }

    #[actix_web::test]
    async fn deadline_passes_through_results() {
        let ok = with_deadline(Duration::from_secs(1), "call", async { Ok(7) }).await;
        assert_eq!(ok.unwrap(), 7);

        let err: AppResult<i32> = with_deadline(Duration::from_secs(1), "call", async {
            Err(AppError::GenerationError("boom".into()))
        })
        .await;
        assert!(matches!(err, Err(AppError::GenerationError(_))));
    }

    #[actix_web::test]
    async fn deadline_expiry_is_a_timeout() {
        let result: AppResult<()> = with_deadline(Duration::from_millis(20), "Slow call", async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        match result {
            Err(AppError::Timeout(msg)) => assert!(msg.starts_with("Slow call")),
            other => panic!("expected timeout, got {:?}", other),
        }
    }
}
