use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use scriptract::application::ports::RecordStoreError;
use scriptract::application::services::NotifyMode;
use scriptract::infrastructure::persistence::RecordStoreFactory;
use scriptract::presentation::config::{RecordStoreProvider, RecordStoreSettings};

use crate::helpers::spawn_origin;

fn settings(url: Option<&str>, key: Option<&str>) -> RecordStoreSettings {
    RecordStoreSettings {
        provider: RecordStoreProvider::Supabase,
        url: url.map(str::to_string),
        service_key: key.map(str::to_string),
        database_url: None,
        table: "song_scripts".to_string(),
        content_column: "content".to_string(),
        updated_at_column: Some("updated_at".to_string()),
        notify_mode: NotifyMode::Sync,
        max_connections: 5,
    }
}

#[tokio::test]
async fn given_missing_credentials_when_creating_then_store_is_disabled() {
    let store = RecordStoreFactory::create(&settings(None, Some("key")))
        .await
        .unwrap();

    assert!(store.is_none());
}

#[tokio::test]
async fn given_blank_credentials_when_creating_then_store_is_disabled() {
    let store = RecordStoreFactory::create(&settings(Some("  "), Some("")))
        .await
        .unwrap();

    assert!(store.is_none());
}

#[tokio::test]
async fn given_postgres_without_database_url_when_creating_then_store_is_disabled() {
    let mut settings = settings(Some("https://x.supabase.co"), Some("key"));
    settings.provider = RecordStoreProvider::Postgres;

    let store = RecordStoreFactory::create(&settings).await.unwrap();

    assert!(store.is_none());
}

#[tokio::test]
async fn given_reachable_supabase_when_creating_then_returns_probed_store() {
    let url = spawn_origin(Router::new().route(
        "/rest/v1/song_scripts",
        get(|| async { StatusCode::OK }),
    ))
    .await;

    let store = RecordStoreFactory::create(&settings(Some(&url), Some("key")))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(store.backend(), "supabase");
}

#[tokio::test]
async fn given_invalid_table_name_when_creating_then_returns_configuration_error() {
    let mut settings = settings(Some("https://x.supabase.co"), Some("key"));
    settings.table = "song scripts".to_string();

    let result = RecordStoreFactory::create(&settings).await;

    assert!(matches!(
        result,
        Err(RecordStoreError::InvalidConfiguration(_))
    ));
}

#[tokio::test]
async fn given_unreachable_supabase_when_connecting_at_startup_then_persistence_is_disabled() {
    let store =
        RecordStoreFactory::connect_or_disable(&settings(Some("http://127.0.0.1:1"), Some("key")))
            .await;

    assert!(store.is_none());
}
