mod client;
mod config;

pub use client::ChatCompletionsClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_MODEL, LlmConfig};

use async_trait::async_trait;

use crate::error::LlmError;

/// Text-in, text-out access to a hosted model.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Send `prompt` as a single user message and return the trimmed reply.
    ///
    /// # Errors
    ///
    /// Returns `LlmError` when the model is unavailable or the request fails.
    /// An empty reply is `Ok("")`; callers decide whether that is usable.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}
