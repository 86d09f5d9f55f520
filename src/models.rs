// src/models.rs
use serde::{Deserialize, Serialize};

use crate::errors::{EvalError, Result};

/// The inputs to a single evaluation run. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub text: String,
    pub image_url: Option<String>,
}

impl EvaluationRequest {
    /// Creates a new `EvaluationRequest`.
    ///
    /// The text must be non-empty. An empty or whitespace-only image
    /// reference is dropped rather than rejected.
    pub fn new(text: impl Into<String>, image_url: Option<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(EvalError::InvalidRequest(
                "text must be a non-empty string".to_string(),
            ));
        }
        let image_url = image_url.filter(|u| !u.trim().is_empty());
        Ok(Self { text, image_url })
    }
}

/// The outcome of a classification, tagged by the model's verdict.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub enum EvaluationResult {
    /// The post was judged not meme-worthy; only the reason is meaningful.
    NotMeme { reason: String },
    /// The post was judged meme-worthy.
    MemeCandidate(MemeCandidate),
}

/// A fully assembled meme candidate.
///
/// The model is asked for all five descriptive fields but nothing enforces
/// that it complies, so each one is optional. `logo_url` is populated by the
/// image-generation stage, never by the model itself.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemeCandidate {
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub logo_prompt: Option<String>,
    #[serde(default)]
    pub tweet: Option<String>,
    #[serde(default)]
    pub backstory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}
