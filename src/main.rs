use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use scriptract::application::services::{ExtractionService, PersistenceNotifier};
use scriptract::infrastructure::http::HttpDocumentFetcher;
use scriptract::infrastructure::observability::{TracingConfig, init_tracing};
use scriptract::infrastructure::persistence::RecordStoreFactory;
use scriptract::infrastructure::text_processing::ExtractorFactory;
use scriptract::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load().context("failed to load settings")?;
    let environment = std::env::var(Environment::VARIABLE)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let fetcher = Arc::new(
        HttpDocumentFetcher::new(
            settings.fetch.timeout(),
            settings.fetch.max_download_bytes(),
        )
        .context("failed to build HTTP client")?,
    );

    let extractor = Arc::new(
        ExtractorFactory::create(&settings.extraction).context("invalid extraction settings")?,
    );

    let record_store = RecordStoreFactory::connect_or_disable(&settings.record_store).await;
    let notifier = PersistenceNotifier::new(record_store, settings.record_store.notify_mode);

    let extraction_service = Arc::new(ExtractionService::new(fetcher, extractor, notifier));

    tracing::info!(
        formats = ?extraction_service.supported_formats(),
        record_store = extraction_service.notifier().backend().unwrap_or("disabled"),
        notify_mode = %settings.record_store.notify_mode,
        fetch_timeout_secs = settings.fetch.timeout_secs,
        "Extraction service ready"
    );

    let router = create_router(AppState { extraction_service });

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .with_context(|| format!("invalid listen address {}", settings.server.host))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, environment = %environment, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
