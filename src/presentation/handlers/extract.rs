use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::application::ports::{DocumentFetcher, TextExtractor};
use crate::application::services::ExtractTextError;
use crate::domain::ExtractionRequest;
use crate::infrastructure::observability::redact_url;
use crate::presentation::handlers::error::error_response;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractTextRequest {
    pub file_url: String,
    #[serde(default)]
    pub song_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractTextResponse {
    pub text: String,
    pub status: String,
    pub file_type: String,
    pub updated_supabase: bool,
    pub char_count: usize,
    pub timestamp: String,
}

pub async fn extract_text_handler<F, E>(
    State(state): State<AppState<F, E>>,
    Json(body): Json<ExtractTextRequest>,
) -> impl IntoResponse
where
    F: DocumentFetcher + 'static,
    E: TextExtractor + 'static + ?Sized,
{
    tracing::debug!(song_id = body.song_id.as_deref(), "Extraction requested");

    let request = match ExtractionRequest::new(&body.file_url, body.song_id.as_deref()) {
        Ok(request) => request,
        Err(e) => return error_response(&ExtractTextError::InvalidRequest(e.to_string())),
    };
    tracing::info!(url = %redact_url(&request.source_url), "Extracting text from URL");

    let outcome = match state.extraction_service.extract(&request).await {
        Ok(outcome) => outcome,
        Err(e) => return error_response(&e),
    };

    let file_type = outcome.extracted.format().extension().to_string();
    let char_count = outcome.extracted.char_count();

    (
        StatusCode::OK,
        Json(ExtractTextResponse {
            text: outcome.extracted.into_text(),
            status: "success".to_string(),
            file_type,
            updated_supabase: outcome.record_updated,
            char_count,
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
        .into_response()
}
