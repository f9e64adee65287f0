use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{DocumentFormat, RawDocument};

pub const DEFAULT_DOC_COMMAND: &str = "antiword";
pub const DEFAULT_DOC_TIMEOUT: Duration = Duration::from_secs(30);

/// Extracts legacy binary Word documents through an external converter.
///
/// The converter is invoked as `<command> <args..> <path>` and must print
/// UTF-8 text on stdout. Each call writes to its own randomly named temp
/// file, which is unlinked when the guard drops on every return path.
pub struct LegacyDocAdapter {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl Default for LegacyDocAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_DOC_COMMAND)
    }
}

impl LegacyDocAdapter {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            timeout: DEFAULT_DOC_TIMEOUT,
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

#[async_trait]
impl TextExtractor for LegacyDocAdapter {
    #[tracing::instrument(skip(self, document), fields(bytes = document.len(), command = %self.command))]
    async fn extract_text(&self, document: &RawDocument) -> Result<String, ExtractionError> {
        if document.format != DocumentFormat::Doc {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.label().to_string(),
            ));
        }

        let mut temp_file = tempfile::Builder::new()
            .prefix("scriptract-")
            .suffix(".doc")
            .tempfile()?;
        temp_file.write_all(&document.bytes)?;
        temp_file.flush()?;

        let output = tokio::time::timeout(
            self.timeout,
            Command::new(&self.command)
                .args(&self.args)
                .arg(temp_file.path())
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| {
            ExtractionError::ToolFailure(format!(
                "{} timed out after {}s",
                self.command,
                self.timeout.as_secs()
            ))
        })?
        .map_err(|e| ExtractionError::ToolFailure(format!("failed to run {}: {e}", self.command)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractionError::ToolFailure(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8(output.stdout).map_err(|e| {
            ExtractionError::MalformedInput(format!("{} output is not UTF-8: {e}", self.command))
        })?;

        let text = text.trim();
        if text.is_empty() {
            return Err(ExtractionError::NoTextFound(
                "DOC converter produced no text".to_string(),
            ));
        }

        tracing::debug!(chars = text.chars().count(), "DOC text extracted");
        Ok(text.to_string())
    }

    fn formats(&self) -> Vec<DocumentFormat> {
        vec![DocumentFormat::Doc]
    }
}
