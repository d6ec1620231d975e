use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::errors::PageLensError;

/// Uniform error envelope: {error, message, code, timestamp}.
/// Missing input maps to 400; every processing failure maps to 500.
impl IntoResponse for PageLensError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            PageLensError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = json!({
            "error": self.kind(),
            "message": self.to_string(),
            "code": status.as_u16(),
            "timestamp": Utc::now().to_rfc3339(),
        });

        (status, Json(body)).into_response()
    }
}
