//! Completion provider abstraction.
//!
//! The relay speaks to exactly one upstream completion API, but the seam is
//! trait-based so tests can substitute a mock.

pub mod mock;
pub mod together;

use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MalformedResponse(_) => AppError::UpstreamParse(anyhow::Error::new(err)),
            _ => AppError::UpstreamCall(anyhow::Error::new(err)),
        }
    }
}

/// Trait for chat-completion providers.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send `prompt` upstream as a single user-role message and return the
    /// first choice's content, untrimmed.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}
