use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageLensError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parsing error: {0}")]
    Parsing(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("LLM API error: {0}")]
    LlmApi(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PageLensError {
    /// Error kind label used in the HTTP error envelope and text reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::Config(_) => "ConfigurationError",
            Self::Parsing(_) => "ParsingError",
            _ => "AnalysisError",
        }
    }
}
