pub mod normalize;
pub mod prompt;

use tracing::info;

use crate::errors::PageLensError;
use crate::llm::LlmProvider;
use crate::models::{AnalysisRecord, Assessment};

/// Runs the AI assessment stage: one prompt, one completion, one
/// normalization pass. The backend is whatever [`LlmProvider`] was chosen
/// at construction.
pub struct Analyzer {
    provider: Box<dyn LlmProvider>,
}

impl Analyzer {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Assess a classified record. Blocks until the backend responds; no
    /// timeout or retry.
    pub async fn assess(&self, record: &AnalysisRecord) -> Result<Assessment, PageLensError> {
        let user_prompt = prompt::build_audit_prompt(record)?;

        info!(
            provider = self.provider.provider_name(),
            model = self.provider.model_name(),
            url = %record.url,
            "Requesting AI assessment"
        );

        let response = self.provider.complete(prompt::SYSTEM_PROMPT, &user_prompt).await?;

        normalize::normalize_reply(
            &response.content,
            &response.model,
            self.provider.context_window(),
        )
    }
}
