pub mod formatter;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::PageLensError;
use crate::models::{AnalysisRecord, Assessment};

pub const JSON_FILENAME: &str = "analysis_results.json";
pub const TEXT_FILENAME: &str = "analysis_results.txt";

/// Write the flat-file dump: structured JSON and the text report as sibling
/// files. No schema versioning; both are overwritten on every run.
pub async fn write_report_files(
    dir: &Path,
    record: &AnalysisRecord,
    assessment: Option<&Assessment>,
) -> Result<(PathBuf, PathBuf), PageLensError> {
    tokio::fs::create_dir_all(dir).await?;

    let json_path = dir.join(JSON_FILENAME);
    let text_path = dir.join(TEXT_FILENAME);

    tokio::fs::write(&json_path, serde_json::to_string_pretty(record)?).await?;
    tokio::fs::write(&text_path, formatter::format_text_report(record, assessment)?).await?;

    info!(json = %json_path.display(), text = %text_path.display(), "Results written");
    Ok((json_path, text_path))
}
