use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::provider::LlmProvider;
use super::types::LlmResponse;
use crate::config::{credentials::is_resolved, HostedLlmConfig};
use crate::errors::PageLensError;

/// Hosted chat-completion backend (OpenAI-compatible).
///
/// The credential is taken from the configuration object at construction;
/// a missing or unresolved key fails here, before any request is made.
#[derive(Debug)]
pub struct HostedProvider {
    client: Client,
    config: HostedLlmConfig,
    api_key: String,
}

impl HostedProvider {
    pub fn new(config: &HostedLlmConfig) -> Result<Self, PageLensError> {
        let api_key = match config.api_key.as_deref() {
            Some(key) if is_resolved(key) => key.to_string(),
            _ => {
                return Err(PageLensError::Config(
                    "Hosted LLM API key not configured (set hosted_llm.api_key or OPENAI_API_KEY)"
                        .into(),
                ))
            }
        };
        Ok(Self {
            client: Client::new(),
            config: config.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl LlmProvider for HostedProvider {
    async fn complete(&self, system: &str, prompt: &str) -> Result<LlmResponse, PageLensError> {
        let body = json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": prompt},
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
            "response_format": { "type": "json_object" },
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| PageLensError::Network(format!("Hosted LLM request failed: {}", e)))?;

        if resp.status().as_u16() == 401 {
            return Err(PageLensError::Config("Invalid hosted LLM API key".into()));
        }

        let data: Value = resp
            .json()
            .await
            .map_err(|e| PageLensError::LlmApi(format!("Failed to parse hosted LLM response: {}", e)))?;

        if let Some(error) = data.get("error") {
            return Err(PageLensError::LlmApi(
                error["message"].as_str().unwrap_or("Unknown hosted LLM error").to_string(),
            ));
        }

        let content = data["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| PageLensError::LlmApi("No content in hosted LLM response".into()))?
            .to_string();

        Ok(LlmResponse {
            content,
            input_tokens: data["usage"]["prompt_tokens"].as_u64(),
            output_tokens: data["usage"]["completion_tokens"].as_u64(),
            model: self.config.model.clone(),
        })
    }

    fn provider_name(&self) -> &str {
        "hosted"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn context_window(&self) -> Option<u32> {
        None
    }
}
