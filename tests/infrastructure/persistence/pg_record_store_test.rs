use scriptract::application::ports::{RecordStore, RecordStoreError};
use scriptract::domain::RecordId;
use scriptract::infrastructure::persistence::{PgRecordStore, RecordTable};

use crate::helpers::TestPostgres;

#[tokio::test]
#[ignore = "requires Docker"]
async fn given_existing_row_when_updating_then_content_and_timestamp_are_written() {
    let pg = TestPostgres::new().await;
    let store = PgRecordStore::new(pg.pool.clone(), &RecordTable::default());
    let id = RecordId::parse(&pg.seeded_id).unwrap();

    store.update_content(&id, "Amazing Grace").await.unwrap();

    let (content, touched): (Option<String>, bool) = sqlx::query_as(
        "SELECT content, updated_at IS NOT NULL FROM song_scripts WHERE id::text = $1",
    )
    .bind(&pg.seeded_id)
    .fetch_one(&pg.pool)
    .await
    .unwrap();
    assert_eq!(content.as_deref(), Some("Amazing Grace"));
    assert!(touched);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn given_unknown_id_when_updating_then_returns_not_found() {
    let pg = TestPostgres::new().await;
    let store = PgRecordStore::new(pg.pool.clone(), &RecordTable::default());
    let id = RecordId::parse("00000000-0000-0000-0000-000000000000").unwrap();

    let result = store.update_content(&id, "text").await;

    assert!(matches!(result, Err(RecordStoreError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn given_running_database_when_checking_connection_then_succeeds() {
    let pg = TestPostgres::new().await;
    let store = PgRecordStore::new(pg.pool.clone(), &RecordTable::default());

    store.check_connection().await.unwrap();
    assert_eq!(store.backend(), "postgres");
}
