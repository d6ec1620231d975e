pub mod features;
pub mod trackers;
pub mod pii;

pub use features::{extract_form_fields, extract_meta, extract_scripts, FormField};
pub use trackers::detect_trackers;
pub use pii::{detect_form_pii, detect_storage_pii};
