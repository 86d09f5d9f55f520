// src/providers/openai.rs

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Instant;

use crate::config::OpenAiConfig;
use crate::errors::{EvalError, Result};
use crate::providers::ModelBackend;

/// A backend for interacting with OpenAI models.
pub struct OpenAiProvider {
    client: Client,
    config: OpenAiConfig,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ImagesResponse {
    data: Vec<ImageData>,
}

#[derive(Deserialize)]
struct ImageData {
    url: Option<String>,
}

impl OpenAiProvider {
    /// Creates a new `OpenAiProvider`.
    pub fn new(client: Client, config: OpenAiConfig) -> Self {
        Self { client, config }
    }

    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(EvalError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }
        Ok(resp)
    }
}

impl ModelBackend for OpenAiProvider {
    /// Calls the chat completions API with the classification prompt and
    /// returns the model's reply text and latency.
    async fn classify(&self, prompt: &str, image_url: Option<&str>) -> Result<String> {
        let url = format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        );

        println!("📡 Calling OpenAI: {} with model: {}", url, self.config.model);

        let mut parts = vec![json!({"type": "text", "text": prompt})];
        if let Some(image) = image_url {
            parts.push(json!({"type": "image_url", "image_url": {"url": image}}));
        }

        let body = json!({
            "model": self.config.model,
            "messages": [{"role": "user", "content": parts}],
            "temperature": self.config.temperature,
            "response_format": {"type": "json_object"},
        });

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        println!("📥 OpenAI response status: {} ({}ms)", resp.status(), latency_ms);

        let resp = Self::check_status(resp).await?;
        let chat_resp: ChatResponse = resp.json().await?;

        first_choice_text(chat_resp)
    }

    /// Calls the images API for exactly one logo at the configured size and
    /// returns the generated image's URL.
    async fn generate_logo(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/images/generations",
            self.config.api_base.trim_end_matches('/')
        );

        println!(
            "📡 Calling OpenAI images: {} with model: {}",
            url, self.config.image_model
        );

        let body = json!({
            "model": self.config.image_model,
            "prompt": prompt,
            "n": 1,
            "size": self.config.image_size,
        });

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        println!("📥 OpenAI images status: {} ({}ms)", resp.status(), latency_ms);

        let resp = Self::check_status(resp).await?;
        let images_resp: ImagesResponse = resp.json().await?;

        images_resp
            .data
            .into_iter()
            .next()
            .and_then(|d| d.url)
            .ok_or_else(|| EvalError::UnexpectedResponse("No image URL in response".to_string()))
    }
}

/// Pulls the reply text out of a chat response. A missing choice is a
/// structural surprise; a present choice with null or empty content means
/// the model returned no usable text.
fn first_choice_text(resp: ChatResponse) -> Result<String> {
    let choice = resp
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| EvalError::UnexpectedResponse("No choices in response".to_string()))?;

    let output = choice.message.content.ok_or(EvalError::EmptyResponse)?;

    if output.is_empty() {
        return Err(EvalError::EmptyResponse);
    }

    Ok(output)
}
