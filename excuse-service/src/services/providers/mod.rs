//! Text-generation provider abstraction.
//!
//! A trait seam over the external model so the request handler never cares
//! which backend answered, and so tests can point the provider elsewhere.

pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for prompt-in/text-out generation backends.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Issue exactly one generation call for the prompt. No retries;
    /// the caller owns any fallback.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
