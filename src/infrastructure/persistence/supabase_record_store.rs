use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde_json::{Map, Value};

use crate::application::ports::{RecordStore, RecordStoreError};
use crate::domain::RecordId;

use super::record_table::RecordTable;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Record store backed by Supabase's PostgREST API.
pub struct SupabaseRecordStore {
    client: Client,
    rest_url: String,
    service_key: String,
    table: RecordTable,
}

impl SupabaseRecordStore {
    pub fn new(
        project_url: &str,
        service_key: &str,
        table: RecordTable,
    ) -> Result<Self, RecordStoreError> {
        let project_url = project_url.trim().trim_end_matches('/');
        if reqwest::Url::parse(project_url).is_err() {
            return Err(RecordStoreError::InvalidConfiguration(format!(
                "invalid Supabase URL '{project_url}'"
            )));
        }
        if service_key.trim().is_empty() {
            return Err(RecordStoreError::InvalidConfiguration(
                "Supabase service key is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RecordStoreError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            rest_url: format!("{project_url}/rest/v1/{}", table.table()),
            service_key: service_key.trim().to_string(),
            table,
        })
    }

    fn request(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        self.client
            .request(method, &self.rest_url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }
}

#[async_trait]
impl RecordStore for SupabaseRecordStore {
    #[tracing::instrument(skip(self, content), fields(table = %self.table.table(), chars = content.len()))]
    async fn update_content(&self, id: &RecordId, content: &str) -> Result<(), RecordStoreError> {
        let mut body = Map::new();
        body.insert(
            self.table.content_column().to_string(),
            Value::String(content.to_string()),
        );
        if let Some(column) = self.table.updated_at_column() {
            body.insert(column.to_string(), Value::String(Utc::now().to_rfc3339()));
        }

        let response = self
            .request(reqwest::Method::PATCH)
            .query(&[("id", format!("eq.{id}")), ("select", "id".to_string())])
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await
            .map_err(|e| RecordStoreError::ConnectionFailed(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(RecordStoreError::QueryFailed(format!(
                "Supabase returned {status}: {text}"
            )));
        }

        let rows: Vec<Value> = response.json().await.map_err(|e| {
            RecordStoreError::QueryFailed(format!("unexpected Supabase response: {e}"))
        })?;

        if rows.is_empty() {
            return Err(RecordStoreError::NotFound(id.to_string()));
        }

        tracing::debug!(rows = rows.len(), "Supabase record updated");
        Ok(())
    }

    async fn check_connection(&self) -> Result<(), RecordStoreError> {
        let response = self
            .request(reqwest::Method::GET)
            .query(&[("select", "id"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| RecordStoreError::ConnectionFailed(e.without_url().to_string()))?;

        if !response.status().is_success() {
            return Err(RecordStoreError::ConnectionFailed(format!(
                "Supabase probe returned {}",
                response.status()
            )));
        }

        Ok(())
    }

    fn backend(&self) -> &'static str {
        "supabase"
    }
}
