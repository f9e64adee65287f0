use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::NotifyMode;

use super::environment::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub fetch: FetchSettings,
    pub extraction: ExtractionSettings,
    pub record_store: RecordStoreSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive; empty means the built-in default.
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    pub timeout_secs: u64,
    pub max_download_mb: u64,
}

impl FetchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn max_download_bytes(&self) -> u64 {
        self.max_download_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub pdf: PdfExtractionSettings,
    pub doc: DocExtractionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PdfExtractionSettings {
    pub page_markers: bool,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocExtractionSettings {
    pub enabled: bool,
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStoreProvider {
    Supabase,
    Postgres,
}

impl fmt::Display for RecordStoreProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supabase => f.write_str("supabase"),
            Self::Postgres => f.write_str("postgres"),
        }
    }
}

#[derive(Clone, Deserialize)]
pub struct RecordStoreSettings {
    pub provider: RecordStoreProvider,
    pub url: Option<String>,
    pub service_key: Option<String>,
    pub database_url: Option<String>,
    pub table: String,
    pub content_column: String,
    pub updated_at_column: Option<String>,
    pub notify_mode: NotifyMode,
    pub max_connections: u32,
}

// Credentials stay out of debug output.
impl fmt::Debug for RecordStoreSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStoreSettings")
            .field("provider", &self.provider)
            .field("url", &self.url)
            .field("service_key", &self.service_key.as_ref().map(|_| "[REDACTED]"))
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[REDACTED]"),
            )
            .field("table", &self.table)
            .field("content_column", &self.content_column)
            .field("updated_at_column", &self.updated_at_column)
            .field("notify_mode", &self.notify_mode)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Environment(String),
}

impl Settings {
    /// Loads settings from the process environment.
    pub fn load() -> Result<Self, SettingsError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        let environment = match vars.get(Environment::VARIABLE) {
            Some(raw) => raw.parse().map_err(SettingsError::Environment)?,
            None => Environment::default(),
        };

        Self::load_from(environment, vars)
    }

    /// Layers, lowest priority first: built-in defaults, the optional
    /// `appsettings.<env>` file, `APP_`-prefixed variables (`__` separates
    /// nested keys, e.g. `APP_FETCH__TIMEOUT_SECS`), then the plain
    /// `PORT`, `SUPABASE_URL`, `SUPABASE_SERVICE_KEY` and `DATABASE_URL`.
    pub fn load_from(
        environment: Environment,
        vars: HashMap<String, String>,
    ) -> Result<Self, SettingsError> {
        let plain = |name: &str| {
            vars.get(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = plain("PORT");
        let supabase_url = plain("SUPABASE_URL");
        let supabase_key = plain("SUPABASE_SERVICE_KEY");
        let database_url = plain("DATABASE_URL");

        let config = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("logging.level", "")?
            .set_default("logging.enable_json", false)?
            .set_default("fetch.timeout_secs", 60_i64)?
            .set_default("fetch.max_download_mb", 50_i64)?
            .set_default("extraction.pdf.page_markers", true)?
            .set_default("extraction.pdf.timeout_secs", 30_i64)?
            .set_default("extraction.doc.enabled", true)?
            .set_default("extraction.doc.command", "antiword")?
            .set_default("extraction.doc.timeout_secs", 30_i64)?
            .set_default("record_store.provider", "supabase")?
            .set_default("record_store.table", "song_scripts")?
            .set_default("record_store.content_column", "content")?
            .set_default("record_store.updated_at_column", "updated_at")?
            .set_default("record_store.notify_mode", "sync")?
            .set_default("record_store.max_connections", 5_i64)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .source(Some(vars.clone())),
            )
            .set_override_option("server.port", port)?
            .set_override_option("record_store.url", supabase_url)?
            .set_override_option("record_store.service_key", supabase_key)?
            .set_override_option("record_store.database_url", database_url)?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
