//! Client for a text-generation-inference style `/generate` endpoint.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::{SamplingParams, TextGenerator};
use crate::errors::{AppError, AppResult};

#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters<'a>,
}

#[derive(Serialize, Debug)]
struct GenerateParameters<'a> {
    #[serde(flatten)]
    sampling: &'a SamplingParams,
    /// Always null: an over-long prompt must fail instead of being cut.
    truncate: Option<u32>,
}

#[derive(Deserialize, Debug)]
struct Generation {
    generated_text: String,
}

/// Hosted endpoints answer with a list, self-hosted servers with a single object.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum GenerateResponse {
    Single(Generation),
    Batch(Vec<Generation>),
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        match self {
            GenerateResponse::Single(g) => Some(g.generated_text),
            GenerateResponse::Batch(items) => items.into_iter().next().map(|g| g.generated_text),
        }
    }
}

pub struct HttpTextGenerator {
    base_url: String,
    api_token: Option<SecretString>,
    client: reqwest::Client,
}

impl HttpTextGenerator {
    pub fn new(
        base_url: &str,
        api_token: Option<SecretString>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            client,
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn generate(&self, prompt: &str, params: &SamplingParams) -> AppResult<String> {
        let request = GenerateRequest {
            inputs: prompt,
            parameters: GenerateParameters {
                sampling: params,
                truncate: None,
            },
        };

        let started = Instant::now();
        let response = self
            .authorize(self.client.post(format!("{}/generate", self.base_url)))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::GenerationError(format!(
                "Text model returned {}: {}",
                status, body
            )));
        }

        let text = response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| AppError::GenerationError(format!("Malformed text model output: {}", e)))?
            .into_text()
            .ok_or_else(|| AppError::GenerationError("Text model returned no output".into()))?;

        log::debug!(
            "Generated {} chars in {:.1}s",
            text.len(),
            started.elapsed().as_secs_f64()
        );
        Ok(text)
    }

    async fn warm_up(&self) -> AppResult<()> {
        let response = self
            .authorize(self.client.get(format!("{}/health", self.base_url)))
            .send()
            .await?;

        if response.status().is_success() {
            log::info!("Text model at {} is ready", self.base_url);
            Ok(())
        } else {
            Err(AppError::GenerationError(format!(
                "Text model health check returned {}",
                response.status()
            )))
        }
    }

    async fn shutdown(&self) {
        log::info!("Releasing text model client for {}", self.base_url);
    }
}
