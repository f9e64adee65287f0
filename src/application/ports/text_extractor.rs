use async_trait::async_trait;

use crate::domain::{DocumentFormat, RawDocument};

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the document's trimmed text. Empty results are errors.
    async fn extract_text(&self, document: &RawDocument) -> Result<String, ExtractionError>;

    /// Formats this extractor accepts.
    fn formats(&self) -> Vec<DocumentFormat>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("no text found: {0}")]
    NoTextFound(String),
    #[error("decode failure: {0}")]
    DecodeFailure(String),
    #[error("extraction tool failed: {0}")]
    ToolFailure(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
