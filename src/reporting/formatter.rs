use crate::errors::PageLensError;
use crate::models::{AnalysisRecord, Assessment};

/// Render the human-readable text report: a short summary block followed by
/// the technical record and, when present, the AI assessment.
pub fn format_text_report(
    record: &AnalysisRecord,
    assessment: Option<&Assessment>,
) -> Result<String, PageLensError> {
    let mut report = String::new();

    report.push_str(&format!("Privacy Analysis Report\n=======================\n\nURL: {}\n", record.url));
    report.push_str(&format!(
        "Scripts: {}  Cookies: {}  Trackers: {}  PII risks: {}\n\n",
        record.scripts.len(),
        record.cookies.len(),
        record.trackers.len(),
        record.pii_risks.len(),
    ));

    report.push_str("Technical Analysis:\n");
    report.push_str(&serde_json::to_string_pretty(record)?);
    report.push_str("\n\n");

    if let Some(assessment) = assessment {
        report.push_str("AI Security Assessment:\n");
        report.push_str(&serde_json::to_string_pretty(assessment)?);
        report.push('\n');
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StorageState;

    fn record() -> AnalysisRecord {
        AnalysisRecord {
            url: "https://example.com/".to_string(),
            scripts: vec!["https://www.google-analytics.com/ga.js".to_string()],
            cookies: Vec::new(),
            local_storage: StorageState::default(),
            session_storage: StorageState::default(),
            meta_data: Default::default(),
            trackers: Vec::new(),
            pii_risks: Vec::new(),
        }
    }

    #[test]
    fn test_report_without_assessment_has_single_section() {
        let report = format_text_report(&record(), None).unwrap();
        assert!(report.contains("Technical Analysis:"));
        assert!(!report.contains("AI Security Assessment:"));
        assert!(report.contains("https://example.com/"));
    }

    #[test]
    fn test_report_with_assessment_has_both_sections() {
        let assessment = crate::analyzer::normalize::normalize_reply(
            "{\"PII\": {\"risk_count\": 0}}",
            "llama3:8b-instruct-q6_K",
            Some(4096),
        )
        .unwrap();
        let report = format_text_report(&record(), Some(&assessment)).unwrap();
        assert!(report.contains("Technical Analysis:"));
        assert!(report.contains("AI Security Assessment:"));
        assert!(report.contains("_metadata"));
    }
}
