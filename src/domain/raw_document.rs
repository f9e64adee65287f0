use bytes::Bytes;

use super::document_format::DocumentFormat;

/// Downloaded bytes tagged with the format declared by the source URL.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Bytes,
    pub format: DocumentFormat,
    pub source: String,
}

impl RawDocument {
    pub fn new(bytes: Bytes, format: DocumentFormat, source: impl Into<String>) -> Self {
        Self {
            bytes,
            format,
            source: source.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
