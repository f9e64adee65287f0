use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use scriptract::application::ports::{RecordStore, RecordStoreError};
use scriptract::domain::RecordId;
use scriptract::infrastructure::persistence::{RecordTable, SupabaseRecordStore};

use crate::helpers::spawn_origin;

const SERVICE_KEY: &str = "service-role-key";

#[derive(Clone, Default)]
struct Captured {
    bodies: Arc<Mutex<Vec<Value>>>,
}

async fn patch_rows(
    State(captured): State<Captured>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if headers.get("apikey").and_then(|v| v.to_str().ok()) != Some(SERVICE_KEY) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"message": "bad key"})));
    }
    captured.bodies.lock().unwrap().push(body);

    match query.get("id").map(String::as_str) {
        Some("eq.song-1") => (StatusCode::OK, Json(json!([{"id": "song-1"}]))),
        _ => (StatusCode::OK, Json(json!([]))),
    }
}

async fn probe(headers: HeaderMap) -> StatusCode {
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) if value == format!("Bearer {SERVICE_KEY}") => StatusCode::OK,
        _ => StatusCode::UNAUTHORIZED,
    }
}

async fn supabase() -> (String, Captured) {
    let captured = Captured::default();
    let router = Router::new()
        .route("/rest/v1/song_scripts", get(probe).patch(patch_rows))
        .with_state(captured.clone());

    (spawn_origin(router).await, captured)
}

fn id(raw: &str) -> RecordId {
    RecordId::parse(raw).unwrap()
}

#[tokio::test]
async fn given_known_record_when_updating_then_sends_content_and_timestamp() {
    let (url, captured) = supabase().await;
    let store = SupabaseRecordStore::new(&url, SERVICE_KEY, RecordTable::default()).unwrap();

    store.update_content(&id("song-1"), "Verse 1").await.unwrap();

    let bodies = captured.bodies.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["content"], "Verse 1");
    assert!(bodies[0]["updated_at"].as_str().is_some());
}

#[tokio::test]
async fn given_unknown_record_when_updating_then_returns_not_found() {
    let (url, _) = supabase().await;
    let store = SupabaseRecordStore::new(&url, SERVICE_KEY, RecordTable::default()).unwrap();

    let result = store.update_content(&id("song-9"), "Verse 1").await;

    assert!(matches!(result, Err(RecordStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_wrong_key_when_updating_then_returns_query_failed() {
    let (url, _) = supabase().await;
    let store = SupabaseRecordStore::new(&url, "other-key", RecordTable::default()).unwrap();

    let result = store.update_content(&id("song-1"), "Verse 1").await;

    assert!(matches!(result, Err(RecordStoreError::QueryFailed(_))));
}

#[tokio::test]
async fn given_table_without_timestamp_column_when_updating_then_only_content_is_sent() {
    let (url, captured) = supabase().await;
    let table = RecordTable::new("song_scripts", "content", None).unwrap();
    let store = SupabaseRecordStore::new(&url, SERVICE_KEY, table).unwrap();

    store.update_content(&id("song-1"), "Verse 1").await.unwrap();

    let bodies = captured.bodies.lock().unwrap().clone();
    assert_eq!(bodies[0], json!({"content": "Verse 1"}));
}

#[tokio::test]
async fn given_valid_key_when_checking_connection_then_succeeds() {
    let (url, _) = supabase().await;
    let store = SupabaseRecordStore::new(&url, SERVICE_KEY, RecordTable::default()).unwrap();

    store.check_connection().await.unwrap();
    assert_eq!(store.backend(), "supabase");
}

#[tokio::test]
async fn given_rejected_key_when_checking_connection_then_fails() {
    let (url, _) = supabase().await;
    let store = SupabaseRecordStore::new(&url, "other-key", RecordTable::default()).unwrap();

    let result = store.check_connection().await;

    assert!(matches!(result, Err(RecordStoreError::ConnectionFailed(_))));
}

#[test]
fn given_blank_service_key_when_constructing_then_fails() {
    let result = SupabaseRecordStore::new("https://x.supabase.co", " ", RecordTable::default());

    assert!(matches!(
        result,
        Err(RecordStoreError::InvalidConfiguration(_))
    ));
}
