//! Client for a text-to-image server exposing `POST /generate`.

use std::{io::Cursor, time::Duration};

use async_trait::async_trait;
use base64::Engine;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::{DiffusionParams, ImageGenerator};
use crate::errors::{AppError, AppResult};

#[derive(Serialize, Debug)]
struct ImageGenRequest<'a> {
    prompt: &'a str,
    #[serde(flatten)]
    params: &'a DiffusionParams,
}

/// Servers differ in where they put the encoded image.
#[derive(Deserialize, Debug)]
struct ImageGenResponse {
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    images: Option<Vec<String>>,
    #[serde(default)]
    data: Option<Vec<ImageData>>,
}

#[derive(Deserialize, Debug)]
struct ImageData {
    #[serde(default)]
    b64_json: Option<String>,
}

impl ImageGenResponse {
    fn into_base64(self) -> Option<String> {
        self.image
            .or_else(|| self.images.and_then(|images| images.into_iter().next()))
            .or_else(|| {
                self.data
                    .and_then(|data| data.into_iter().next())
                    .and_then(|d| d.b64_json)
            })
    }
}

pub struct HttpImageGenerator {
    base_url: String,
    api_token: Option<SecretString>,
    client: reqwest::Client,
}

impl HttpImageGenerator {
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
impl ImageGenerator for HttpImageGenerator {
    async fn generate(&self, prompt: &str, params: &DiffusionParams) -> AppResult<Vec<u8>> {
        let response = self
            .authorize(self.client.post(format!("{}/generate", self.base_url)))
            .json(&ImageGenRequest { prompt, params })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::GenerationError(format!(
                "Image model returned {}: {}",
                status, body
            )));
        }

        let is_raw_image = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.starts_with("image/"))
            .unwrap_or(false);

        let bytes = if is_raw_image {
            response.bytes().await?.to_vec()
        } else {
            let encoded = response
                .json::<ImageGenResponse>()
                .await
                .map_err(|e| {
                    AppError::GenerationError(format!("Malformed image model output: {}", e))
                })?
                .into_base64()
                .ok_or_else(|| AppError::GenerationError("Image model returned no image".into()))?;
            base64::engine::general_purpose::STANDARD.decode(encoded.trim())?
        };

        to_png(&bytes)
    }

    async fn warm_up(&self) -> AppResult<()> {
        let response = self
            .authorize(self.client.get(format!("{}/health", self.base_url)))
            .send()
            .await?;

        if response.status().is_success() {
            log::info!("Image model at {} is ready", self.base_url);
            Ok(())
        } else {
            Err(AppError::GenerationError(format!(
                "Image model health check returned {}",
                response.status()
            )))
        }
    }

    async fn shutdown(&self) {
        log::info!("Releasing image model client for {}", self.base_url);
    }
}

/// Decodes any supported image format and re-encodes it as PNG.
pub fn to_png(bytes: &[u8]) -> AppResult<Vec<u8>> {
    let decoded = image::load_from_memory(bytes)?;
    let mut png = Cursor::new(Vec::new());
    decoded.write_to(&mut png, image::ImageFormat::Png)?;
    Ok(png.into_inner())
}
