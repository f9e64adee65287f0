use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use tracing::Instrument;

use crate::application::ports::{RecordStore, RecordStoreError};
use crate::domain::RecordId;

/// Whether the record write blocks the response or runs in the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyMode {
    #[default]
    Sync,
    Async,
}

impl fmt::Display for NotifyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync => f.write_str("sync"),
            Self::Async => f.write_str("async"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// No record store is available for this process.
    Skipped,
    /// The record was written before returning.
    Updated,
    /// The write was handed to a background task.
    Dispatched,
}

impl NotifyOutcome {
    pub fn record_updated(&self) -> bool {
        matches!(self, Self::Updated | Self::Dispatched)
    }
}

/// Best-effort writer of extracted text into the external record store.
///
/// The store handle is resolved once at startup. When it is absent every
/// notification is a logged no-op for the lifetime of the process.
#[derive(Clone)]
pub struct PersistenceNotifier {
    store: Option<Arc<dyn RecordStore>>,
    mode: NotifyMode,
}

impl PersistenceNotifier {
    pub fn new(store: Option<Arc<dyn RecordStore>>, mode: NotifyMode) -> Self {
        Self { store, mode }
    }

    pub fn disabled() -> Self {
        Self::new(None, NotifyMode::default())
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    pub fn backend(&self) -> Option<&'static str> {
        self.store.as_ref().map(|store| store.backend())
    }

    pub fn mode(&self) -> NotifyMode {
        self.mode
    }

    /// In `Sync` mode store failures are returned to the caller. In `Async`
    /// mode the write may finish before or after the HTTP response is sent
    /// and its failures only reach the logs.
    pub async fn notify(
        &self,
        id: &RecordId,
        content: &str,
    ) -> Result<NotifyOutcome, RecordStoreError> {
        let Some(store) = &self.store else {
            tracing::warn!(record_id = %id, "Record store disabled, skipping record update");
            return Ok(NotifyOutcome::Skipped);
        };

        match self.mode {
            NotifyMode::Sync => {
                store.update_content(id, content).await?;
                tracing::info!(record_id = %id, backend = store.backend(), "Record updated");
                Ok(NotifyOutcome::Updated)
            }
            NotifyMode::Async => {
                let store = Arc::clone(store);
                let id = id.clone();
                let content = content.to_string();
                let span = tracing::info_span!("record_update", record_id = %id);

                tokio::spawn(
                    async move {
                        match store.update_content(&id, &content).await {
                            Ok(()) => tracing::info!(backend = store.backend(), "Record updated"),
                            Err(RecordStoreError::NotFound(_)) => {
                                tracing::warn!("Record update matched no record")
                            }
                            Err(e) => tracing::error!(error = %e, "Background record update failed"),
                        }
                    }
                    .instrument(span),
                );

                Ok(NotifyOutcome::Dispatched)
            }
        }
    }
}
