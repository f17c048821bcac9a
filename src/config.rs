use std::{env, path::PathBuf, time::Duration};

use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub quiz_data_path: PathBuf,
    pub static_dir: PathBuf,
    pub text_model_url: String,
    pub image_model_url: String,
    pub inference_api_token: Option<SecretString>,
    pub generation_timeout_secs: u64,
    pub story_iterations: usize,
    pub max_topic_chars: usize,
    pub image_width: u32,
    pub image_height: u32,
    /// Zero keeps generated images forever.
    pub image_retention_secs: u64,
    pub retention_sweep_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_server_host: "0.0.0.0".to_string(),
            web_server_port: 8000,
            quiz_data_path: PathBuf::from("data/quizzes.json"),
            static_dir: PathBuf::from("static"),
            text_model_url: "http://localhost:8080".to_string(),
            image_model_url: "http://localhost:8001".to_string(),
            inference_api_token: None,
            generation_timeout_secs: 300,
            story_iterations: 2,
            max_topic_chars: 500,
            image_width: 512,
            image_height: 512,
            image_retention_secs: 86_400,
            retention_sweep_interval_secs: 600,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or(defaults.web_server_host),
            web_server_port: parse_var("WEB_SERVER_PORT").unwrap_or(defaults.web_server_port),
            quiz_data_path: env::var("QUIZ_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.quiz_data_path),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            text_model_url: env::var("TEXT_MODEL_URL").unwrap_or(defaults.text_model_url),
            image_model_url: env::var("IMAGE_MODEL_URL").unwrap_or(defaults.image_model_url),
            inference_api_token: env::var("INFERENCE_API_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty())
                .map(SecretString::from),
            generation_timeout_secs: parse_var("GENERATION_TIMEOUT_SECS")
                .unwrap_or(defaults.generation_timeout_secs),
            story_iterations: parse_var("STORY_ITERATIONS").unwrap_or(defaults.story_iterations),
            max_topic_chars: parse_var("MAX_TOPIC_CHARS").unwrap_or(defaults.max_topic_chars),
            image_width: parse_var("IMAGE_WIDTH").unwrap_or(defaults.image_width),
            image_height: parse_var("IMAGE_HEIGHT").unwrap_or(defaults.image_height),
            image_retention_secs: parse_var("IMAGE_RETENTION_SECS")
                .unwrap_or(defaults.image_retention_secs),
            retention_sweep_interval_secs: parse_var("RETENTION_SWEEP_INTERVAL_SECS")
                .unwrap_or(defaults.retention_sweep_interval_secs),
        }
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    pub fn image_retention(&self) -> Option<Duration> {
        (self.image_retention_secs > 0).then(|| Duration::from_secs(self.image_retention_secs))
    }

    /// Validate settings that would otherwise only fail on the first request
    pub fn validate(&self) -> Result<(), String> {
        if self.story_iterations == 0 {
            return Err("STORY_ITERATIONS must be at least 1".to_string());
        }
        if self.generation_timeout_secs == 0 {
            return Err("GENERATION_TIMEOUT_SECS must be at least 1".to_string());
        }
        if self.image_width == 0 || self.image_height == 0 {
            return Err("IMAGE_WIDTH and IMAGE_HEIGHT must be non-zero".to_string());
        }
        if self.image_retention_secs > 0 && self.retention_sweep_interval_secs == 0 {
            return Err(
                "RETENTION_SWEEP_INTERVAL_SECS must be non-zero when retention is enabled"
                    .to_string(),
            );
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            quiz_data_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/quizzes.json"),
            static_dir: env::temp_dir().join("techtales-test-static"),
            generation_timeout_secs: 5,
            image_retention_secs: 0,
            ..Self::default()
        }
    }
}

/// Unparseable values are logged and treated as unset.
fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring invalid value {:?} for {}, using the default", raw, key);
            None
        }
    }
}
