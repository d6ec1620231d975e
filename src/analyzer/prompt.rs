use crate::errors::PageLensError;
use crate::models::AnalysisRecord;

/// System message sent with every audit request.
pub const SYSTEM_PROMPT: &str =
    "You are a privacy compliance auditor. Respond ONLY with valid JSON.";

/// The audit instruction template. One schema serves both backends; the
/// mule/drop-house indicators live under DATA_EXFILTRATION.
const AUDIT_TEMPLATE: &str = r#"[SYSTEM INSTRUCTIONS]
You are a senior privacy/security analyst. Perform a technical audit of this website data.
Respond ONLY with valid JSON matching the exact structure below.
Never include markdown, comments, or explanatory text.

[ANALYSIS FOCUS AREAS]
1. PII collection risks (prioritize email, phone, location, identifiers)
2. Tracker analysis (vendor, purpose, data flows)
3. Cookie compliance (expiration, security flags, consent requirements)
4. Malicious activity indicators (bots, data mules, drop houses)
5. Local/session storage risks

[INPUT DATA]
{input_data}

[REQUIRED RESPONSE FORMAT]
{
  "PII": {
    "risk_count": <int>,
    "risk_items": [
      {
        "field": <str>,
        "type": <str>,
        "risk_level": "low/medium/high",
        "evidence": <str>
      }
    ],
    "compliance_violations": ["GDPR", "CCPA", ...]
  },
  "TRACKERS": {
    "risk_count": <int>,
    "domains": [<str>, ...],
    "vendor_analysis": {
      "<domain>": {
        "purpose": <str>,
        "data_collected": [<str>, ...],
        "reputation": "known-good/neutral/high-risk"
      }
    }
  },
  "COOKIES": {
    "risk_count": <int>,
    "issues_by_type": {
      "expiration": <int>,
      "security_flags": <int>,
      "consent_issues": <int>
    },
    "high_risk_cookies": [
      {
        "name": <str>,
        "issues": [<str>, ...],
        "expiration_days": <int>
      }
    ]
  },
  "BOTS": {
    "detected": <bool>,
    "confidence": "low/medium/high",
    "indicators": [<str>, ...]
  },
  "DATA_EXFILTRATION": {
    "mules_detected": <bool>,
    "drop_houses_detected": <bool>,
    "suspicious_endpoints": [<str>, ...]
  },
  "LOCAL_CACHE": {
    "risk_count": <int>,
    "sensitive_data_found": <bool>,
    "items": [<str>, ...]
  },
  "OVERALL_SECURITY_ASSESSMENT": {
    "risk_score": 0-100,
    "critical_issues": [<str>, ...],
    "recommended_actions": [<str>, ...]
  }
}"#;

/// Render the audit prompt with the JSON-serialized record embedded.
pub fn build_audit_prompt(record: &AnalysisRecord) -> Result<String, PageLensError> {
    let input_data = serde_json::to_string_pretty(record)?;
    Ok(AUDIT_TEMPLATE.replace("{input_data}", &input_data))
}
