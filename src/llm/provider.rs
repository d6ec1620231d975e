use async_trait::async_trait;

use super::types::LlmResponse;
use crate::errors::PageLensError;

/// A chat-completion backend. Backend choice is a strategy selection: the
/// analyzer builds one prompt and normalizes one reply regardless of which
/// provider answered it.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Single blocking completion; no timeout, no retries.
    async fn complete(
        &self,
        system: &str,
        prompt: &str,
    ) -> Result<LlmResponse, PageLensError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;

    /// Model identifier
    fn model_name(&self) -> &str;

    /// Context window size, where the backend exposes one.
    fn context_window(&self) -> Option<u32>;
}
