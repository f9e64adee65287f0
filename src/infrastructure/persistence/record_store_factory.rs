use std::sync::Arc;

use crate::application::ports::{RecordStore, RecordStoreError};
use crate::presentation::config::{RecordStoreProvider, RecordStoreSettings};

use super::pg_record_store::PgRecordStore;
use super::record_table::RecordTable;
use super::supabase_record_store::SupabaseRecordStore;

pub struct RecordStoreFactory;

impl RecordStoreFactory {
    /// Builds and probes the configured store. `Ok(None)` means the
    /// credentials for the selected provider are not set.
    pub async fn create(
        settings: &RecordStoreSettings,
    ) -> Result<Option<Arc<dyn RecordStore>>, RecordStoreError> {
        let table = RecordTable::new(
            &settings.table,
            &settings.content_column,
            settings.updated_at_column.as_deref(),
        )?;

        match settings.provider {
            RecordStoreProvider::Supabase => {
                let (Some(url), Some(key)) = (
                    non_blank(settings.url.as_deref()),
                    non_blank(settings.service_key.as_deref()),
                ) else {
                    return Ok(None);
                };

                let store = SupabaseRecordStore::new(url, key, table)?;
                store.check_connection().await?;
                Ok(Some(Arc::new(store)))
            }
            RecordStoreProvider::Postgres => {
                let Some(url) = non_blank(settings.database_url.as_deref()) else {
                    return Ok(None);
                };

                let store = PgRecordStore::connect(url, settings.max_connections, &table).await?;
                store.check_connection().await?;
                Ok(Some(Arc::new(store)))
            }
        }
    }

    /// Startup entry point: any failure leaves persistence disabled for the
    /// life of the process instead of aborting.
    pub async fn connect_or_disable(
        settings: &RecordStoreSettings,
    ) -> Option<Arc<dyn RecordStore>> {
        match Self::create(settings).await {
            Ok(Some(store)) => {
                tracing::info!(
                    backend = store.backend(),
                    table = %settings.table,
                    "Record store connected"
                );
                Some(store)
            }
            Ok(None) => {
                tracing::warn!(
                    provider = %settings.provider,
                    "Record store credentials not set, record updates disabled"
                );
                None
            }
            Err(e) => {
                tracing::warn!(
                    provider = %settings.provider,
                    error = %e,
                    "Record store unavailable, record updates disabled"
                );
                None
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
