// src/config.rs
use crate::errors::{EvalError, Result};

/// Configuration for the OpenAI-backed provider.
///
/// Everything here is fixed at construction time: the credential, the model
/// identifiers, the sampling temperature, and the logo image size. Nothing is
/// mutable per call.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub image_model: String,
    pub image_size: String,
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai: OpenAiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            EvalError::Config("OPENAI_API_KEY is not set. Please set it in your environment or .env file.".to_string())
        })?;

        let api_base = std::env::var("OPENAI_API_BASE")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = std::env::var("MEME_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());
        let temperature = match std::env::var("MEME_TEMPERATURE") {
            Ok(raw) => raw.parse::<f32>().map_err(|_| {
                EvalError::Config(format!("MEME_TEMPERATURE is not a number: {}", raw))
            })?,
            Err(_) => 0.7,
        };
        let image_model =
            std::env::var("MEME_IMAGE_MODEL").unwrap_or_else(|_| "dall-e-3".to_string());
        let image_size =
            std::env::var("MEME_IMAGE_SIZE").unwrap_or_else(|_| "1024x1024".to_string());

        Ok(AppConfig {
            openai: OpenAiConfig {
                api_base,
                api_key,
                model,
                temperature,
                image_model,
                image_size,
            },
        })
    }
}
