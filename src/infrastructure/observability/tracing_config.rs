use crate::presentation::config::{Environment, LoggingSettings};

const DEFAULT_FILTER: &str = "info,scriptract=debug,tower_http=debug";

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    pub filter: String,
}

impl TracingConfig {
    /// `LOG_FORMAT=json` forces JSON output regardless of settings.
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        let json_from_env = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let filter = match logging.level.trim() {
            "" => DEFAULT_FILTER.to_string(),
            level => level.to_string(),
        };

        Self {
            environment,
            json_format: logging.enable_json || json_from_env,
            filter,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            json_format: false,
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}
