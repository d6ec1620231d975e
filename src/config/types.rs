use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PageLensConfig {
    pub server: ServerConfig,
    pub browser: BrowserSettings,
    pub local_llm: LocalLlmConfig,
    pub hosted_llm: HostedLlmConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 5002 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BrowserSettings {
    /// Upper bound on waiting for `document.readyState == "complete"`.
    pub ready_timeout_ms: u64,
    /// Settle delay after readiness, letting client-side scripts populate
    /// storage and fire trackers.
    pub settle_ms: u64,
    /// Required when Chromium runs as root (containers, CI).
    pub no_sandbox: bool,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            ready_timeout_ms: 10_000,
            settle_ms: 5_000,
            no_sandbox: true,
        }
    }
}

/// Generation options forwarded to the local inference service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub num_ctx: u32,
    pub num_thread: u32,
    pub num_batch: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            num_ctx: 4096,
            num_thread: 16,
            num_batch: 14,
            temperature: 0.2,
            top_p: 0.9,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocalLlmConfig {
    pub base_url: String,
    pub model: String,
    pub options: GenerationOptions,
}

impl Default for LocalLlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3:8b-instruct-q6_K".to_string(),
            options: GenerationOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HostedLlmConfig {
    pub base_url: String,
    pub model: String,
    /// Literal key, or a `$VAR` reference resolved from the environment at
    /// config load time. Never read ambiently at call time.
    pub api_key: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for HostedLlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4-1106-preview".to_string(),
            api_key: Some("$OPENAI_API_KEY".to_string()),
            temperature: 0.5,
            max_tokens: 2000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for the flat-file analysis dump written by the CLI.
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: ".".to_string() }
    }
}
