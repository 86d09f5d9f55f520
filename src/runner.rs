// src/runner.rs
use reqwest::Client;

use crate::config::AppConfig;
use crate::errors::{EvalError, Result};
use crate::extract::interpret_response;
use crate::models::{EvaluationRequest, EvaluationResult};
use crate::prompt::build_eval_prompt;
use crate::providers::{ModelBackend, openai::OpenAiProvider};

/// Sequences the pipeline: prompt construction, the classification call,
/// response interpretation, and the conditional logo-generation call.
///
/// Configuration is injected at construction; there is no process-global
/// state and no state shared across evaluations.
pub struct Evaluator<B> {
    backend: B,
}

impl Evaluator<OpenAiProvider> {
    /// Creates an evaluator backed by the OpenAI API.
    pub fn new(client: Client, config: AppConfig) -> Self {
        Self {
            backend: OpenAiProvider::new(client, config.openai),
        }
    }
}

impl<B: ModelBackend> Evaluator<B> {
    /// Creates an evaluator over an arbitrary backend.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Runs one full evaluation.
    ///
    /// The image-generation call is issued only after the classification
    /// reply has been fully received and interpreted, never concurrently.
    /// Any stage failure aborts the evaluation; a logo-generation failure
    /// discards the otherwise-valid classification rather than returning a
    /// candidate without a logo.
    pub async fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationResult> {
        println!("🎯 Evaluating post for meme potential");
        println!("📝 Post: {}", request.text);

        let prompt = build_eval_prompt(&request.text);

        let raw = self
            .backend
            .classify(&prompt, request.image_url.as_deref())
            .await
            .map_err(|e| {
                log_failure("Classification", &e);
                e
            })?;

        log::debug!("Raw classification reply: {}", raw);

        let result = interpret_response(&raw).map_err(|e| {
            log_failure("Interpretation", &e);
            e
        })?;

        match result {
            EvaluationResult::MemeCandidate(mut candidate) => {
                let logo_prompt = candidate.logo_prompt.clone().unwrap_or_default();
                println!("🎨 Meme candidate! Generating logo for: {}", logo_prompt);

                let logo_url = self
                    .backend
                    .generate_logo(&logo_prompt)
                    .await
                    .map_err(|e| {
                        log_failure("Logo generation", &e);
                        EvalError::ImageGeneration {
                            source: Box::new(e),
                        }
                    })?;

                println!("🖼️  Logo ready: {}", logo_url);
                candidate.logo_url = Some(logo_url);
                Ok(EvaluationResult::MemeCandidate(candidate))
            }
            not_meme => {
                println!("ℹ️  Not a meme, skipping logo generation");
                Ok(not_meme)
            }
        }
    }
}

/// Emits diagnostic context before a failure is re-raised: status code and
/// body for transport-layer failures, the message otherwise.
fn log_failure(stage: &str, err: &EvalError) {
    match err {
        EvalError::ApiError { status, body } => {
            eprintln!("❌ {} failed with status {}: {}", stage, status, body);
        }
        other => eprintln!("❌ {} failed: {}", stage, other),
    }
}
