pub mod chrome;

pub use chrome::ChromeFetcher;

use url::Url;

use crate::errors::PageLensError;

/// Default bare hostnames to https and validate the result.
pub fn normalize_url(raw: &str) -> Result<String, PageLensError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PageLensError::Validation("URL is required".into()));
    }
    let candidate = if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };
    let parsed = Url::parse(&candidate)
        .map_err(|e| PageLensError::Validation(format!("Invalid URL '{}': {}", raw, e)))?;
    Ok(parsed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_hostname_gets_https_scheme() {
        assert_eq!(normalize_url("example.com").unwrap(), "https://example.com/");
    }

    #[test]
    fn test_http_urls_kept_as_is() {
        assert_eq!(
            normalize_url("http://example.com/page").unwrap(),
            "http://example.com/page"
        );
    }

    #[test]
    fn test_empty_url_is_validation_error() {
        let err = normalize_url("   ").unwrap_err();
        assert_eq!(err.kind(), "ValidationError");
    }

    #[test]
    fn test_garbage_url_is_validation_error() {
        let err = normalize_url("https://").unwrap_err();
        assert_eq!(err.kind(), "ValidationError");
    }
}
