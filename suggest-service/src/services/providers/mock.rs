//! Mock provider implementation for testing.

use super::{CompletionProvider, ProviderError};
use async_trait::async_trait;

/// Mock completion provider for testing.
///
/// Echoes the prompt back unless a canned reply is set; a disabled mock
/// fails every call, exercising the upstream-failure path.
pub struct MockCompletionProvider {
    enabled: bool,
    reply: Option<String>,
}

impl MockCompletionProvider {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            reply: None,
        }
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            enabled: true,
            reply: Some(reply.into()),
        }
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock completion provider not enabled".to_string(),
            ));
        }

        Ok(self
            .reply
            .clone()
            .unwrap_or_else(|| format!("Mock response for: {}", prompt)))
    }
}
