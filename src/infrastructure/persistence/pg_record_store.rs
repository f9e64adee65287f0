use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::instrument;

use crate::application::ports::{RecordStore, RecordStoreError};
use crate::domain::RecordId;

use super::record_table::RecordTable;

const CONNECT_ATTEMPTS: u32 = 3;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Record store writing straight to the Postgres database behind Supabase.
pub struct PgRecordStore {
    pool: PgPool,
    update_sql: String,
    touches_updated_at: bool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool, table: &RecordTable) -> Self {
        // Ids stay opaque: compare as text whatever the column type is.
        let update_sql = match table.updated_at_column() {
            Some(updated_at) => format!(
                "UPDATE {} SET {} = $1, {} = $2 WHERE id::text = $3",
                table.table(),
                table.content_column(),
                updated_at
            ),
            None => format!(
                "UPDATE {} SET {} = $1 WHERE id::text = $2",
                table.table(),
                table.content_column()
            ),
        };

        Self {
            pool,
            update_sql,
            touches_updated_at: table.updated_at_column().is_some(),
        }
    }

    #[instrument(skip(url))]
    pub async fn connect(
        url: &str,
        max_connections: u32,
        table: &RecordTable,
    ) -> Result<Self, RecordStoreError> {
        let mut delay = Duration::from_millis(250);
        let mut attempt = 1;

        let pool = loop {
            let result = PgPoolOptions::new()
                .max_connections(max_connections)
                .acquire_timeout(ACQUIRE_TIMEOUT)
                .connect(url)
                .await;

            match result {
                Ok(pool) => break pool,
                Err(e) if attempt < CONNECT_ATTEMPTS => {
                    tracing::warn!(
                        error = %e,
                        attempt,
                        delay_ms = delay.as_millis(),
                        "Postgres connection failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                    attempt += 1;
                }
                Err(e) => return Err(RecordStoreError::ConnectionFailed(e.to_string())),
            }
        };

        tracing::info!("Postgres record store connected");
        Ok(Self::new(pool, table))
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    #[instrument(skip(self, content), fields(record_id = %id))]
    async fn update_content(&self, id: &RecordId, content: &str) -> Result<(), RecordStoreError> {
        let query = sqlx::query(&self.update_sql).bind(content);
        let query = if self.touches_updated_at {
            query.bind(Utc::now()).bind(id.as_str())
        } else {
            query.bind(id.as_str())
        };

        let result = query
            .execute(&self.pool)
            .await
            .map_err(|e| RecordStoreError::QueryFailed(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RecordStoreError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn check_connection(&self) -> Result<(), RecordStoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| RecordStoreError::ConnectionFailed(e.to_string()))
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
