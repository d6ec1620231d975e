use axum::extract::State;
use axum::Json;

use crate::analyzer::Analyzer;
use crate::api::models::AssessRequest;
use crate::api::AppState;
use crate::errors::PageLensError;
use crate::llm::{HostedProvider, LocalProvider};
use crate::models::{AnalysisRecord, Assessment};

fn require_record(req: AssessRequest) -> Result<AnalysisRecord, PageLensError> {
    req.analysis_data
        .ok_or_else(|| PageLensError::Validation("analysis_data is required".into()))
}

/// Assess a record with the local inference backend.
pub async fn analyze_with_local_llm(
    State(state): State<AppState>,
    Json(req): Json<AssessRequest>,
) -> Result<Json<Assessment>, PageLensError> {
    let record = require_record(req)?;
    let provider = LocalProvider::new(&state.config.local_llm);
    let assessment = Analyzer::new(Box::new(provider)).assess(&record).await?;
    Ok(Json(assessment))
}

/// Assess a record with the hosted chat-completion backend.
pub async fn analyze_with_hosted_llm(
    State(state): State<AppState>,
    Json(req): Json<AssessRequest>,
) -> Result<Json<Assessment>, PageLensError> {
    let record = require_record(req)?;
    let provider = HostedProvider::new(&state.config.hosted_llm)?;
    let assessment = Analyzer::new(Box::new(provider)).assess(&record).await?;
    Ok(Json(assessment))
}
