use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{DocumentFetcher, TextExtractor};
use crate::presentation::state::AppState;

pub const SERVICE_NAME: &str = "Scriptract Text Extraction API";

#[derive(Serialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub supported_formats: Vec<String>,
    pub endpoints: BTreeMap<String, String>,
}

pub async fn root_handler<F, E>(State(state): State<AppState<F, E>>) -> impl IntoResponse
where
    F: DocumentFetcher + 'static,
    E: TextExtractor + 'static + ?Sized,
{
    let supported_formats = state
        .extraction_service
        .supported_formats()
        .iter()
        .map(|format| format.label().to_string())
        .collect();

    let endpoints = BTreeMap::from([
        (
            "POST /extract-text".to_string(),
            "Extract text from a file URL and optionally update the song record".to_string(),
        ),
        ("GET /health".to_string(), "Service health".to_string()),
        ("GET /".to_string(), "Service description".to_string()),
    ]);

    Json(ServiceInfo {
        name: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        supported_formats,
        endpoints,
    })
}
