use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::api::models::AnalyzePageRequest;
use crate::api::AppState;
use crate::browser::{normalize_url, ChromeFetcher};
use crate::errors::PageLensError;
use crate::models::AnalysisRecord;

/// Fetch, extract, and classify a page. Returns the technical record only;
/// the AI stage is a separate client-driven call.
pub async fn analyze_page(
    State(state): State<AppState>,
    Json(req): Json<AnalyzePageRequest>,
) -> Result<Json<AnalysisRecord>, PageLensError> {
    let raw_url = req
        .url
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| PageLensError::Validation("url is required".into()))?;

    let url = normalize_url(raw_url)?;

    let fetcher = ChromeFetcher::new(state.config.browser.clone());
    let snapshot = fetcher.fetch(&url).await?;
    let record = AnalysisRecord::from_snapshot(&snapshot);

    info!(
        url = %record.url,
        scripts = record.scripts.len(),
        trackers = record.trackers.len(),
        pii_risks = record.pii_risks.len(),
        "Page analyzed"
    );

    Ok(Json(record))
}
