use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde::Serialize;

use crate::application::ports::{DocumentFetcher, TextExtractor};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub supabase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_store_backend: Option<String>,
}

pub async fn health_handler<F, E>(State(state): State<AppState<F, E>>) -> impl IntoResponse
where
    F: DocumentFetcher + 'static,
    E: TextExtractor + 'static + ?Sized,
{
    let backend = state.extraction_service.notifier().backend();

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            supabase: if backend.is_some() {
                "connected"
            } else {
                "disabled"
            }
            .to_string(),
            record_store_backend: backend.map(str::to_string),
        }),
    )
}
