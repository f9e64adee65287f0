use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::ExtractionError;
use crate::application::services::ExtractTextError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

fn classify(error: &ExtractTextError) -> (StatusCode, &'static str) {
    match error {
        ExtractTextError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
        ExtractTextError::DownloadFailed(_) => (StatusCode::BAD_REQUEST, "download_failed"),
        ExtractTextError::UnsupportedFormat(_) => (StatusCode::BAD_REQUEST, "unsupported_format"),
        ExtractTextError::Extraction { source, .. } => match source {
            ExtractionError::UnsupportedFormat(_) => {
                (StatusCode::BAD_REQUEST, "unsupported_format")
            }
            ExtractionError::MalformedInput(_) => (StatusCode::BAD_REQUEST, "malformed_input"),
            ExtractionError::NoTextFound(_) => (StatusCode::BAD_REQUEST, "no_text_found"),
            ExtractionError::DecodeFailure(_) => (StatusCode::BAD_REQUEST, "decode_failure"),
            ExtractionError::ToolFailure(_) => (StatusCode::BAD_REQUEST, "tool_failure"),
            ExtractionError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        },
        ExtractTextError::RecordNotFound(_) => (StatusCode::NOT_FOUND, "record_not_found"),
        ExtractTextError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    }
}

/// Maps a service failure onto a stable status code and JSON body.
pub fn error_response(error: &ExtractTextError) -> Response {
    let (status, kind) = classify(error);

    if status.is_server_error() {
        tracing::error!(error = %error, kind, "Text extraction failed");
    } else {
        tracing::warn!(error = %error, kind, "Text extraction rejected");
    }

    (
        status,
        Json(ErrorResponse {
            error: kind.to_string(),
            detail: error.to_string(),
        }),
    )
        .into_response()
}
