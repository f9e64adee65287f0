use super::document_format::DocumentFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    text: String,
    char_count: usize,
    format: DocumentFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no text found in {0} document")]
pub struct EmptyText(pub DocumentFormat);

impl ExtractedText {
    /// Trims `text` and rejects the result if nothing is left.
    pub fn new(text: &str, format: DocumentFormat) -> Result<Self, EmptyText> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(EmptyText(format));
        }

        Ok(Self {
            text: trimmed.to_string(),
            char_count: trimmed.chars().count(),
            format,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }
}
