use serde::{Deserialize, Serialize};

/// Metadata injected into every successful assessment under `_metadata`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentMetadata {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u32>,
    pub analysis_timestamp: String,
}

/// The AI-generated risk report.
///
/// The body is whatever JSON the model returned, expected to follow the
/// audit schema (PII / TRACKERS / COOKIES / BOTS / DATA_EXFILTRATION /
/// LOCAL_CACHE / OVERALL_SECURITY_ASSESSMENT) but only checked for
/// JSON-parseability. Treated as opaque beyond that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(flatten)]
    pub body: serde_json::Value,
    #[serde(rename = "_metadata")]
    pub metadata: AssessmentMetadata,
}
