use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{RecordStore, RecordStoreError};
use crate::domain::RecordId;

/// In-memory store that knows a fixed set of ids and records every write.
#[derive(Default)]
pub struct MockRecordStore {
    known_ids: HashSet<String>,
    updates: Mutex<Vec<(String, String)>>,
    misses: Mutex<Vec<String>>,
}

impl MockRecordStore {
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_ids: ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn updates(&self) -> Vec<(String, String)> {
        self.updates
            .lock()
            .map(|u| u.clone())
            .unwrap_or_default()
    }

    pub fn misses(&self) -> Vec<String> {
        self.misses.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn update_content(&self, id: &RecordId, content: &str) -> Result<(), RecordStoreError> {
        if !self.known_ids.contains(id.as_str()) {
            if let Ok(mut misses) = self.misses.lock() {
                misses.push(id.to_string());
            }
            return Err(RecordStoreError::NotFound(id.to_string()));
        }

        if let Ok(mut updates) = self.updates.lock() {
            updates.push((id.to_string(), content.to_string()));
        }
        Ok(())
    }

    async fn check_connection(&self) -> Result<(), RecordStoreError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "mock"
    }
}
