use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{DocumentFetcher, TextExtractor};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{extract_text_handler, health_handler, root_handler};
use crate::presentation::state::AppState;

pub fn create_router<F, E>(state: AppState<F, E>) -> Router
where
    F: DocumentFetcher + 'static,
    E: TextExtractor + 'static + ?Sized,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(root_handler::<F, E>))
        .route("/health", get(health_handler::<F, E>))
        .route("/extract-text", post(extract_text_handler::<F, E>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
