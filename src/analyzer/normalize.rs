use chrono::Utc;
use regex::Regex;

use crate::errors::PageLensError;
use crate::models::{Assessment, AssessmentMetadata};
use crate::utils::truncation::truncate_content;

/// Pull the JSON object out of a model reply.
///
/// Models regularly wrap JSON in a markdown fence despite instructions not
/// to. Two fence patterns are tried in order (```json first, then a bare
/// fence); when neither matches, the trimmed reply is used as-is.
pub fn extract_json_block(content: &str) -> String {
    let trimmed = content.trim();
    let patterns = [
        r"(?s)```(?:json)?\s*(\{.*\})\s*```",
        r"(?s)```\s*(\{.*\})\s*```",
    ];
    for pattern in patterns {
        let re = Regex::new(pattern).expect("static pattern");
        if let Some(captures) = re.captures(trimmed) {
            return captures[1].to_string();
        }
    }
    trimmed.to_string()
}

/// Parse a model reply into an [`Assessment`], attaching the metadata block.
///
/// A reply that is not valid JSON after fence-stripping is a
/// [`PageLensError::Parsing`] carrying the parse failure and a bounded
/// sample of the raw content. Nothing is salvaged from a malformed reply.
pub fn normalize_reply(
    content: &str,
    model: &str,
    context_window: Option<u32>,
) -> Result<Assessment, PageLensError> {
    let json_str = extract_json_block(content);
    let body: serde_json::Value = serde_json::from_str(&json_str).map_err(|e| {
        PageLensError::Parsing(format!(
            "Failed to parse LLM response: {} (content sample: {})",
            e,
            truncate_content(content)
        ))
    })?;
    if !body.is_object() {
        return Err(PageLensError::Parsing(format!(
            "LLM response is not a JSON object (content sample: {})",
            truncate_content(content)
        )));
    }

    Ok(Assessment {
        body,
        metadata: AssessmentMetadata {
            model: model.to_string(),
            context_window,
            analysis_timestamp: Utc::now().to_rfc3339(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_fence_extracted_ignoring_prose() {
        let reply = "Here is the audit you asked for:\n```json\n{\"PII\": {\"risk_count\": 1}}\n```\nLet me know if you need more detail.";
        let assessment = normalize_reply(reply, "llama3:8b-instruct-q6_K", Some(4096)).unwrap();
        assert_eq!(assessment.body["PII"]["risk_count"], 1);
    }

    #[test]
    fn test_bare_fence_extracted() {
        let reply = "```\n{\"TRACKERS\": {\"risk_count\": 0}}\n```";
        let assessment = normalize_reply(reply, "m", None).unwrap();
        assert_eq!(assessment.body["TRACKERS"]["risk_count"], 0);
    }

    #[test]
    fn test_unfenced_json_parsed_directly() {
        let reply = "  {\"BOTS\": {\"detected\": false}}  ";
        let assessment = normalize_reply(reply, "m", None).unwrap();
        assert_eq!(assessment.body["BOTS"]["detected"], false);
    }

    #[test]
    fn test_invalid_json_is_parsing_error_with_sample() {
        let err = normalize_reply("I could not produce JSON, sorry.", "m", None).unwrap_err();
        assert_eq!(err.kind(), "ParsingError");
        let message = err.to_string();
        assert!(message.contains("Failed to parse LLM response"));
        assert!(message.contains("I could not produce JSON"));
    }

    #[test]
    fn test_scalar_json_reply_rejected() {
        let err = normalize_reply("42", "m", None).unwrap_err();
        assert_eq!(err.kind(), "ParsingError");
        assert!(err.to_string().contains("not a JSON object"));
    }

    #[test]
    fn test_metadata_attached_on_success() {
        let assessment = normalize_reply("{\"LOCAL_CACHE\": {}}", "gpt-4-1106-preview", None).unwrap();
        assert_eq!(assessment.metadata.model, "gpt-4-1106-preview");
        assert!(assessment.metadata.context_window.is_none());
        assert!(!assessment.metadata.analysis_timestamp.is_empty());
    }

    #[test]
    fn test_fenced_extraction_keeps_inner_braces() {
        let reply = "```json\n{\"OVERALL_SECURITY_ASSESSMENT\": {\"risk_score\": 40}}\n```";
        let block = extract_json_block(reply);
        assert_eq!(
            block,
            "{\"OVERALL_SECURITY_ASSESSMENT\": {\"risk_score\": 40}}"
        );
    }
}
