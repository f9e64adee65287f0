use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::TextExtractor;
use crate::presentation::config::ExtractionSettings;

use super::composite_extractor::CompositeExtractor;
use super::docx_adapter::DocxAdapter;
use super::legacy_doc_adapter::LegacyDocAdapter;
use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;

#[derive(Debug, thiserror::Error)]
pub enum ExtractorFactoryError {
    #[error("extraction.doc.command is required when DOC extraction is enabled")]
    MissingDocCommand,
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn create(settings: &ExtractionSettings) -> Result<CompositeExtractor, ExtractorFactoryError> {
        if settings.pdf.timeout_secs == 0 {
            return Err(ExtractorFactoryError::ZeroTimeout("extraction.pdf.timeout_secs"));
        }

        let pdf = PdfAdapter::new()
            .with_page_markers(settings.pdf.page_markers)
            .with_timeout(Duration::from_secs(settings.pdf.timeout_secs));

        let mut extractors: Vec<Arc<dyn TextExtractor>> = vec![
            Arc::new(pdf),
            Arc::new(DocxAdapter),
            Arc::new(PlainTextAdapter),
        ];

        if settings.doc.enabled {
            let command = settings.doc.command.trim();
            if command.is_empty() {
                return Err(ExtractorFactoryError::MissingDocCommand);
            }
            if settings.doc.timeout_secs == 0 {
                return Err(ExtractorFactoryError::ZeroTimeout("extraction.doc.timeout_secs"));
            }
            tracing::info!(command, "Legacy DOC extraction enabled");
            extractors.push(Arc::new(
                LegacyDocAdapter::new(command)
                    .with_args(settings.doc.args.clone())
                    .with_timeout(Duration::from_secs(settings.doc.timeout_secs)),
            ));
        } else {
            tracing::info!("Legacy DOC extraction disabled");
        }

        Ok(CompositeExtractor::new(extractors))
    }
}
