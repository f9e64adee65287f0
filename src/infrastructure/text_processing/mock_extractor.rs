use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{DocumentFormat, RawDocument};

/// Returns the document bytes as lossy UTF-8 and counts invocations.
#[derive(Default)]
pub struct MockExtractor {
    calls: AtomicUsize,
}

impl MockExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextExtractor for MockExtractor {
    async fn extract_text(&self, document: &RawDocument) -> Result<String, ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let text = String::from_utf8_lossy(&document.bytes).trim().to_string();
        if text.is_empty() {
            return Err(ExtractionError::NoTextFound("mock document is blank".to_string()));
        }
        Ok(text)
    }

    fn formats(&self) -> Vec<DocumentFormat> {
        DocumentFormat::ALL.to_vec()
    }
}
