use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{DocumentFormat, RawDocument};

/// Routes each document to the extractor registered for its format.
pub struct CompositeExtractor {
    extractors: HashMap<DocumentFormat, Arc<dyn TextExtractor>>,
}

impl CompositeExtractor {
    /// Later registrations win when two extractors claim a format.
    pub fn new(extractors: Vec<Arc<dyn TextExtractor>>) -> Self {
        let mut by_format = HashMap::new();
        for extractor in extractors {
            for format in extractor.formats() {
                by_format.insert(format, Arc::clone(&extractor));
            }
        }

        Self {
            extractors: by_format,
        }
    }
}

#[async_trait]
impl TextExtractor for CompositeExtractor {
    async fn extract_text(&self, document: &RawDocument) -> Result<String, ExtractionError> {
        let extractor = self.extractors.get(&document.format).ok_or_else(|| {
            ExtractionError::UnsupportedFormat(format!(
                "{} is not enabled. Supported: {}",
                document.format.label(),
                DocumentFormat::describe(&self.formats())
            ))
        })?;

        extractor.extract_text(document).await
    }

    fn formats(&self) -> Vec<DocumentFormat> {
        DocumentFormat::ALL
            .into_iter()
            .filter(|format| self.extractors.contains_key(format))
            .collect()
    }
}
