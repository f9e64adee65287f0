use async_trait::async_trait;

use crate::domain::RecordId;

/// Externally owned table whose records this service updates by id.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Writes `content` into the record's content field (and its
    /// last-modified column when the store is configured with one).
    /// Returns `NotFound` when no record has the given id.
    async fn update_content(&self, id: &RecordId, content: &str) -> Result<(), RecordStoreError>;

    async fn check_connection(&self) -> Result<(), RecordStoreError>;

    /// Backend name used in logs and `/health`.
    fn backend(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("record not found: {0}")]
    NotFound(String),
}
