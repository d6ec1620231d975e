use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::snapshot::{CookieRecord, PageSnapshot, StorageState};
use crate::extract;

/// Risk level attached to a classified item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// A third-party script attributed to a known tracker category.
///
/// One script can produce several hits when it matches multiple categories;
/// hits keep document order and are not deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerHit {
    #[serde(rename = "type")]
    pub category: String,
    pub source: String,
    pub risk: RiskLevel,
}

/// Where a potential PII exposure was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PiiLocation {
    #[serde(rename = "localStorage")]
    LocalStorage,
    #[serde(rename = "sessionStorage")]
    SessionStorage,
    #[serde(rename = "form_input")]
    FormInput,
}

/// A storage key or form field whose name suggests PII collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiiRisk {
    pub location: PiiLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_sample: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    pub risk: RiskLevel,
}

impl PiiRisk {
    /// A risk observed in localStorage or sessionStorage.
    pub fn storage(location: PiiLocation, key: &str, value_sample: Option<String>) -> Self {
        Self {
            location,
            key: Some(key.to_string()),
            value_sample,
            form_action: None,
            input_name: None,
            input_type: None,
            risk: RiskLevel::High,
        }
    }

    /// A risk observed on a form input field.
    pub fn form_input(form_action: &str, input_name: &str, input_type: &str) -> Self {
        Self {
            location: PiiLocation::FormInput,
            key: None,
            value_sample: None,
            form_action: Some(form_action.to_string()),
            input_name: Some(input_name.to_string()),
            input_type: Some(input_type.to_string()),
            risk: RiskLevel::High,
        }
    }
}

/// The full technical snapshot of a page, classified and ready for AI review.
///
/// Derived from exactly one [`PageSnapshot`]; immutable after construction.
///
/// Deserialization fills absent fields with empty defaults; the assessment
/// endpoints accept partial records and forward them unvalidated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRecord {
    pub url: String,
    pub scripts: Vec<String>,
    pub cookies: Vec<CookieRecord>,
    pub local_storage: StorageState,
    pub session_storage: StorageState,
    pub meta_data: BTreeMap<String, String>,
    pub trackers: Vec<TrackerHit>,
    pub pii_risks: Vec<PiiRisk>,
}

impl AnalysisRecord {
    /// Run the classification pipeline over a snapshot.
    pub fn from_snapshot(snapshot: &PageSnapshot) -> Self {
        let trackers = extract::detect_trackers(&snapshot.scripts);

        let mut pii_risks = extract::detect_storage_pii(
            &snapshot.local_storage,
            &snapshot.session_storage,
        );
        pii_risks.extend(extract::detect_form_pii(&snapshot.html));

        Self {
            url: snapshot.url.clone(),
            scripts: snapshot.scripts.clone(),
            cookies: snapshot.cookies.clone(),
            local_storage: snapshot.local_storage.clone(),
            session_storage: snapshot.session_storage.clone(),
            meta_data: snapshot.meta_data.clone(),
            trackers,
            pii_risks,
        }
    }
}
