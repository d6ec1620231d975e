use crate::models::{PiiLocation, PiiRisk, StorageState};
use crate::utils::truncation::sample_value;

use super::features::extract_form_fields;

/// Storage keys and input names containing any of these (lower-cased)
/// are treated as PII collection points.
const PII_KEYWORDS: &[&str] = &[
    "user", "email", "name", "address", "phone", "credit", "ssn", "password",
];

/// Input types that can carry PII when paired with a keyword-bearing name.
const PII_INPUT_TYPES: &[&str] = &["email", "password", "tel", "text"];

fn matches_keyword(lowered: &str) -> bool {
    PII_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

fn scan_storage(state: &StorageState, location: PiiLocation, risks: &mut Vec<PiiRisk>) {
    let Some(entries) = state.entries() else {
        // Unreadable storage already degraded to a sentinel; nothing to scan.
        return;
    };
    for (key, value) in entries {
        if matches_keyword(&key.to_lowercase()) {
            risks.push(PiiRisk::storage(location, key, sample_value(value)));
        }
    }
}

/// Flag storage keys whose name suggests PII, across both storage areas.
pub fn detect_storage_pii(local: &StorageState, session: &StorageState) -> Vec<PiiRisk> {
    let mut risks = Vec::new();
    scan_storage(local, PiiLocation::LocalStorage, &mut risks);
    scan_storage(session, PiiLocation::SessionStorage, &mut risks);
    risks
}

/// Flag form inputs that collect PII: type in the PII set and a
/// keyword-bearing name.
pub fn detect_form_pii(html: &str) -> Vec<PiiRisk> {
    extract_form_fields(html)
        .into_iter()
        .filter(|field| {
            PII_INPUT_TYPES.contains(&field.input_type.as_str())
                && matches_keyword(&field.input_name.to_lowercase())
        })
        .map(|field| PiiRisk::form_input(&field.form_action, &field.input_name, &field.input_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn storage(entries: &[(&str, &str)]) -> StorageState {
        StorageState::Available(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    #[test]
    fn test_keyword_key_flagged_high() {
        let risks = detect_storage_pii(
            &storage(&[("user_email", "a@b.com"), ("theme", "dark")]),
            &StorageState::default(),
        );
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].key.as_deref(), Some("user_email"));
        assert_eq!(risks[0].value_sample.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_key_matching_is_case_insensitive() {
        let risks = detect_storage_pii(
            &storage(&[("UserToken", "abc")]),
            &StorageState::default(),
        );
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].key.as_deref(), Some("UserToken"));
    }

    #[test]
    fn test_long_value_sample_truncated() {
        let long = "v".repeat(120);
        let risks = detect_storage_pii(
            &storage(&[("shipping_address", long.as_str())]),
            &StorageState::default(),
        );
        let sample = risks[0].value_sample.as_deref().unwrap();
        assert_eq!(sample.len(), 53);
        assert!(sample.ends_with("..."));
    }

    #[test]
    fn test_empty_value_has_no_sample() {
        let risks = detect_storage_pii(
            &storage(&[("phone_number", "")]),
            &StorageState::default(),
        );
        assert_eq!(risks.len(), 1);
        assert!(risks[0].value_sample.is_none());
    }

    #[test]
    fn test_session_storage_scanned_too() {
        let risks = detect_storage_pii(
            &StorageState::default(),
            &storage(&[("session_username", "bob")]),
        );
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].location, PiiLocation::SessionStorage);
    }

    #[test]
    fn test_unavailable_storage_contributes_nothing() {
        let risks = detect_storage_pii(
            &StorageState::unavailable("localStorage"),
            &StorageState::unavailable("sessionStorage"),
        );
        assert!(risks.is_empty());
    }

    #[test]
    fn test_form_password_input_flagged() {
        let html = r#"<form action="/login"><input type="password" name="user_pass"></form>"#;
        let risks = detect_form_pii(html);
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].location, PiiLocation::FormInput);
        assert_eq!(risks[0].input_name.as_deref(), Some("user_pass"));
    }

    #[test]
    fn test_form_input_needs_both_type_and_keyword() {
        // Keyword name but non-PII type.
        let html = r#"<form><input type="checkbox" name="remember_user"></form>"#;
        assert!(detect_form_pii(html).is_empty());

        // PII type but no keyword in the name.
        let html = r#"<form><input type="text" name="query"></form>"#;
        assert!(detect_form_pii(html).is_empty());
    }

    #[test]
    fn test_form_input_name_keeps_original_case() {
        let html = r#"<form action=""><input type="email" name="Billing_Email"></form>"#;
        let risks = detect_form_pii(html);
        assert_eq!(risks[0].input_name.as_deref(), Some("Billing_Email"));
    }
}
