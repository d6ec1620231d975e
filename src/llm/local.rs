use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::provider::LlmProvider;
use super::types::LlmResponse;
use crate::config::LocalLlmConfig;
use crate::errors::PageLensError;

/// Ollama-style local inference backend.
///
/// Generation parameters (context window, thread count, batch size,
/// temperature, top-p) come from configuration and are forwarded verbatim
/// in the request's `options` block.
pub struct LocalProvider {
    client: Client,
    config: LocalLlmConfig,
}

impl LocalProvider {
    pub fn new(config: &LocalLlmConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }
}

#[async_trait]
impl LlmProvider for LocalProvider {
    async fn complete(&self, system: &str, prompt: &str) -> Result<LlmResponse, PageLensError> {
        let opts = &self.config.options;
        let body = json!({
            "model": self.config.model,
            "stream": false,
            "options": {
                "num_ctx": opts.num_ctx,
                "num_thread": opts.num_thread,
                "num_batch": opts.num_batch,
                "temperature": opts.temperature,
                "top_p": opts.top_p,
            },
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": prompt},
            ],
        });

        let resp = self
            .client
            .post(format!("{}/api/chat", self.config.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| PageLensError::Network(format!("Local LLM request failed: {}", e)))?;

        let data: Value = resp
            .json()
            .await
            .map_err(|e| PageLensError::LlmApi(format!("Failed to parse local LLM response: {}", e)))?;

        if let Some(error) = data.get("error") {
            return Err(PageLensError::LlmApi(
                error.as_str().unwrap_or("Unknown local LLM error").to_string(),
            ));
        }

        let content = data["message"]["content"]
            .as_str()
            .ok_or_else(|| PageLensError::LlmApi("No content in local LLM response".into()))?
            .to_string();

        Ok(LlmResponse {
            content,
            input_tokens: data["prompt_eval_count"].as_u64(),
            output_tokens: data["eval_count"].as_u64(),
            model: self.config.model.clone(),
        })
    }

    fn provider_name(&self) -> &str {
        "local"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn context_window(&self) -> Option<u32> {
        Some(self.config.options.num_ctx)
    }
}
