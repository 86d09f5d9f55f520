// src/providers/mod.rs

use crate::errors::Result;

pub mod openai;

/// The network seam of the pipeline: one backend covers both outbound calls.
/// Tests substitute a mock implementation; production uses `OpenAiProvider`.
///
/// Note: We're not using async_trait here, so implementers must handle async directly.
pub trait ModelBackend: Send + Sync {
    /// Sends the rendered classification prompt (plus an optional image
    /// reference for multimodal grounding) and returns the model's reply text.
    fn classify(
        &self,
        prompt: &str,
        image_url: Option<&str>,
    ) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Requests a single generated logo image and returns its URL.
    fn generate_logo(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}
