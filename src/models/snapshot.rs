use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::extract;

/// A cookie as captured from the browser after the page settled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    /// Expiry as seconds since the epoch; negative for session cookies.
    pub expires: f64,
    pub secure: bool,
    pub http_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_site: Option<String>,
    pub session: bool,
}

/// Contents of one web storage area (localStorage or sessionStorage).
///
/// Storage reads can fail under browser security restrictions (e.g. opaque
/// origins). A failed read degrades to a sentinel string instead of failing
/// the whole capture, matching the serialized form consumers expect: either
/// a key/value object or a plain string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StorageState {
    Available(BTreeMap<String, String>),
    Unavailable(String),
}

impl StorageState {
    pub fn unavailable(kind: &str) -> Self {
        StorageState::Unavailable(format!("Could not access {}", kind))
    }

    /// The key/value entries, if the storage area was readable.
    pub fn entries(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            StorageState::Available(map) => Some(map),
            StorageState::Unavailable(_) => None,
        }
    }
}

impl Default for StorageState {
    fn default() -> Self {
        StorageState::Available(BTreeMap::new())
    }
}

/// Everything captured from a single rendered page.
///
/// Built once per fetch and never mutated afterwards; script sources and
/// meta tags are extracted from the rendered HTML at construction. Every
/// downstream stage derives from this snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// The URL that was navigated to (after scheme defaulting).
    pub url: String,
    /// Rendered document HTML after client-side scripts settled.
    pub html: String,
    /// External script sources in document order.
    pub scripts: Vec<String>,
    /// Meta tag name → content, last occurrence winning.
    pub meta_data: BTreeMap<String, String>,
    pub cookies: Vec<CookieRecord>,
    pub local_storage: StorageState,
    pub session_storage: StorageState,
}

impl PageSnapshot {
    pub fn capture(
        url: &str,
        html: String,
        cookies: Vec<CookieRecord>,
        local_storage: StorageState,
        session_storage: StorageState,
    ) -> Self {
        let scripts = extract::extract_scripts(&html);
        let meta_data = extract::extract_meta(&html);
        Self {
            url: url.to_string(),
            html,
            scripts,
            meta_data,
            cookies,
            local_storage,
            session_storage,
        }
    }
}
