use serde::Deserialize;

use crate::models::AnalysisRecord;

/// Body of `POST /api/v1/analyze-page`. Presence of `url` is checked by
/// the handler, not the decoder.
#[derive(Deserialize)]
pub struct AnalyzePageRequest {
    pub url: Option<String>,
}

/// Body of both LLM assessment endpoints.
#[derive(Deserialize)]
pub struct AssessRequest {
    pub analysis_data: Option<AnalysisRecord>,
}
