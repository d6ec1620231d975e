const MAX_SAMPLE_LENGTH: usize = 50;
const MAX_ERROR_LENGTH: usize = 200;

/// Produce a bounded sample of a stored value for inclusion in a risk item.
///
/// Empty values yield `None` rather than an empty sample. Values longer than
/// 50 characters are cut at 50 and marked with an ellipsis; shorter values
/// pass through untouched.
pub fn sample_value(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    if value.chars().count() <= MAX_SAMPLE_LENGTH {
        return Some(value.to_string());
    }
    let head: String = value.chars().take(MAX_SAMPLE_LENGTH).collect();
    Some(format!("{}...", head))
}

/// Bound a raw-content sample attached to parse failures.
pub fn truncate_content(content: &str) -> String {
    if content.chars().count() <= MAX_ERROR_LENGTH {
        content.to_string()
    } else {
        let head: String = content.chars().take(MAX_ERROR_LENGTH).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_value_passes_through() {
        assert_eq!(sample_value("a@b.com").as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_empty_value_yields_none() {
        assert_eq!(sample_value(""), None);
    }

    #[test]
    fn test_long_value_truncated_with_ellipsis() {
        let value = "x".repeat(80);
        let sample = sample_value(&value).unwrap();
        assert_eq!(sample.len(), 53);
        assert!(sample.ends_with("..."));
        assert_eq!(&sample[..50], &value[..50]);
    }

    #[test]
    fn test_exactly_fifty_chars_not_truncated() {
        let value = "y".repeat(50);
        assert_eq!(sample_value(&value).as_deref(), Some(value.as_str()));
    }

    #[test]
    fn test_multibyte_value_truncated_on_char_boundary() {
        let value = "é".repeat(60);
        let sample = sample_value(&value).unwrap();
        assert!(sample.ends_with("..."));
        assert_eq!(sample.chars().count(), 53);
    }

    #[test]
    fn test_truncate_content_bounds_long_replies() {
        let content = "z".repeat(500);
        let truncated = truncate_content(&content);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }
}
