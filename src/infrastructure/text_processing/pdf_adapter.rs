use std::fmt;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{DocumentFormat, RawDocument};

use super::text_normalizer::normalize_extracted_text;

pub const DEFAULT_PDF_TIMEOUT: Duration = Duration::from_secs(30);

pub struct PdfAdapter {
    page_markers: bool,
    timeout: Duration,
}

/// Normalized text of one PDF page, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfPage {
    pub number: usize,
    pub text: String,
}

/// Normalizes per-page extraction results in page order.
///
/// Unreadable and blank pages are skipped. If the document has pages and
/// every one of them failed to read, the whole document is malformed.
pub fn collect_pages<I, E>(results: I) -> Result<Vec<PdfPage>, ExtractionError>
where
    I: IntoIterator<Item = Result<String, E>>,
    E: fmt::Display,
{
    let mut pages = Vec::new();
    let mut page_count = 0usize;
    let mut failed = 0usize;

    for (index, result) in results.into_iter().enumerate() {
        page_count += 1;
        let raw = match result {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(page = index + 1, error = %e, "Page text unreadable");
                failed += 1;
                continue;
            }
        };

        let text = normalize_extracted_text(&raw);
        if !text.is_empty() {
            pages.push(PdfPage {
                number: index + 1,
                text,
            });
        }
    }

    if page_count > 0 && failed == page_count {
        return Err(ExtractionError::MalformedInput(format!(
            "none of the {page_count} PDF pages could be read"
        )));
    }

    tracing::debug!(page_count, pages_with_text = pages.len(), "PDF pages read");
    Ok(pages)
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self {
            page_markers: true,
            timeout: DEFAULT_PDF_TIMEOUT,
        }
    }

    /// Prefix each page with `--- Page N ---`.
    pub fn with_page_markers(mut self, enabled: bool) -> Self {
        self.page_markers = enabled;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn extract_pages(path: &Path) -> Result<Vec<PdfPage>, ExtractionError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| ExtractionError::MalformedInput(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            ExtractionError::MalformedInput(format!("failed to read page count: {e}"))
        })?;

        collect_pages((0..page_count).map(|page_index| doc.extract_text(page_index)))
    }

    fn render(&self, pages: &[PdfPage]) -> String {
        pages
            .iter()
            .map(|page| {
                if self.page_markers {
                    format!("--- Page {} ---\n{}", page.number, page.text)
                } else {
                    page.text.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, document), fields(bytes = document.len()))]
    async fn extract_text(&self, document: &RawDocument) -> Result<String, ExtractionError> {
        if document.format != DocumentFormat::Pdf {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.label().to_string(),
            ));
        }

        let mut temp_file = tempfile::Builder::new()
            .prefix("scriptract-")
            .suffix(".pdf")
            .tempfile()?;
        temp_file.write_all(&document.bytes)?;
        temp_file.flush()?;

        let temp_path = temp_file.path().to_path_buf();

        let pages = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| {
            ExtractionError::MalformedInput(format!(
                "PDF extraction timed out after {}s",
                self.timeout.as_secs()
            ))
        })?
        .map_err(|e| ExtractionError::MalformedInput(format!("PDF parser crashed: {e}")))??;

        if pages.is_empty() {
            return Err(ExtractionError::NoTextFound(
                "PDF has no extractable text (scanned or image-only?)".to_string(),
            ));
        }

        tracing::info!(pages = pages.len(), "PDF text extraction complete");
        Ok(self.render(&pages))
    }

    fn formats(&self) -> Vec<DocumentFormat> {
        vec![DocumentFormat::Pdf]
    }
}
