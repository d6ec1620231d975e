use std::path::Path;

use crate::errors::PageLensError;

use super::credentials::resolve_credential;
use super::types::PageLensConfig;

/// Load configuration from a YAML file, or fall back to defaults when no
/// path is given. Credential references are resolved here, once, so the
/// rest of the system only ever sees an explicit configuration object.
pub async fn load_config(path: Option<&Path>) -> Result<PageLensConfig, PageLensError> {
    let mut config = match path {
        Some(p) => {
            let raw = tokio::fs::read_to_string(p).await.map_err(|e| {
                PageLensError::Config(format!("Cannot read config {}: {}", p.display(), e))
            })?;
            serde_yaml::from_str(&raw)?
        }
        None => PageLensConfig::default(),
    };

    if let Some(key) = config.hosted_llm.api_key.take() {
        config.hosted_llm.api_key = Some(resolve_credential(&key));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_defaults_without_file() {
        let config = load_config(None).await.unwrap();
        assert_eq!(config.server.port, 5002);
        assert_eq!(config.local_llm.options.num_ctx, 4096);
        assert_eq!(config.hosted_llm.model, "gpt-4-1106-preview");
    }

    #[tokio::test]
    async fn test_partial_yaml_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "server:\n  port: 8080\nlocal_llm:\n  model: llama3:latest\n  options:\n    temperature: 0.7"
        )
        .unwrap();

        let config = load_config(Some(file.path())).await.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.local_llm.model, "llama3:latest");
        assert!((config.local_llm.options.temperature - 0.7).abs() < f32::EPSILON);
        // Untouched sections keep their defaults.
        assert_eq!(config.local_llm.options.top_p, 0.9);
        assert_eq!(config.browser.settle_ms, 5_000);
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let err = load_config(Some(Path::new("/nonexistent/pagelens.yaml")))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "ConfigurationError");
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server: [not a map").unwrap();
        assert!(load_config(Some(file.path())).await.is_err());
    }

    #[tokio::test]
    async fn test_api_key_env_reference_resolved_at_load() {
        std::env::set_var("PAGELENS_PARSER_TEST_KEY", "sk-from-env");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hosted_llm:\n  api_key: $PAGELENS_PARSER_TEST_KEY").unwrap();

        let config = load_config(Some(file.path())).await.unwrap();
        assert_eq!(config.hosted_llm.api_key.as_deref(), Some("sk-from-env"));
        std::env::remove_var("PAGELENS_PARSER_TEST_KEY");
    }
}
