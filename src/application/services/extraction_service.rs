use std::sync::Arc;

use crate::application::ports::{
    DocumentFetcher, ExtractionError, FetchError, RecordStoreError, TextExtractor,
};
use crate::application::services::persistence_notifier::PersistenceNotifier;
use crate::domain::{
    DocumentFormat, ExtractedText, ExtractionRequest, RawDocument, RecordId, UnsupportedFormat,
};

pub struct ExtractionOutcome {
    pub extracted: ExtractedText,
    pub record_updated: bool,
}

/// Runs one request through fetch, dispatch, extraction and the optional
/// record update. Every step short-circuits on failure; nothing is retried.
pub struct ExtractionService<F, E: ?Sized>
where
    F: DocumentFetcher,
    E: TextExtractor,
{
    fetcher: Arc<F>,
    extractor: Arc<E>,
    notifier: PersistenceNotifier,
}

impl<F, E: ?Sized> ExtractionService<F, E>
where
    F: DocumentFetcher,
    E: TextExtractor,
{
    pub fn new(fetcher: Arc<F>, extractor: Arc<E>, notifier: PersistenceNotifier) -> Self {
        Self {
            fetcher,
            extractor,
            notifier,
        }
    }

    pub fn supported_formats(&self) -> Vec<DocumentFormat> {
        self.extractor.formats()
    }

    pub fn notifier(&self) -> &PersistenceNotifier {
        &self.notifier
    }

    #[tracing::instrument(
        skip(self, request),
        fields(
            host = request.source_url.host_str().unwrap_or_default(),
            record_id = request.record_id.as_ref().map(RecordId::as_str),
        )
    )]
    pub async fn extract(
        &self,
        request: &ExtractionRequest,
    ) -> Result<ExtractionOutcome, ExtractTextError> {
        tracing::debug!("Fetching document");
        let bytes = self
            .fetcher
            .fetch(&request.source_url)
            .await
            .map_err(ExtractTextError::DownloadFailed)?;

        if bytes.is_empty() {
            return Err(ExtractTextError::DownloadFailed(FetchError::EmptyBody));
        }

        tracing::debug!(bytes = bytes.len(), "Dispatching by extension");
        let format = self.dispatch(request.source_url.as_str())?;
        let document = RawDocument::new(bytes, format, request.source_url.as_str());

        tracing::debug!(%format, "Extracting text");
        let text = self
            .extractor
            .extract_text(&document)
            .await
            .map_err(|source| ExtractTextError::Extraction { format, source })?;

        let extracted = ExtractedText::new(&text, format).map_err(|e| {
            ExtractTextError::Extraction {
                format,
                source: ExtractionError::NoTextFound(e.to_string()),
            }
        })?;

        tracing::info!(
            %format,
            char_count = extracted.char_count(),
            "Text extraction complete"
        );

        let record_updated = match &request.record_id {
            Some(id) => self.update_record(id, extracted.text()).await?,
            None => false,
        };

        Ok(ExtractionOutcome {
            extracted,
            record_updated,
        })
    }

    fn dispatch(&self, url: &str) -> Result<DocumentFormat, ExtractTextError> {
        let accepted = self.extractor.formats();
        let format = DocumentFormat::from_url(url).map_err(|mut e| {
            e.accepted = accepted.clone();
            ExtractTextError::UnsupportedFormat(e)
        })?;

        if !accepted.contains(&format) {
            return Err(ExtractTextError::UnsupportedFormat(UnsupportedFormat {
                extension: Some(format.extension().to_string()),
                accepted,
            }));
        }

        Ok(format)
    }

    async fn update_record(&self, id: &RecordId, text: &str) -> Result<bool, ExtractTextError> {
        tracing::debug!(mode = %self.notifier.mode(), "Notifying record store");
        match self.notifier.notify(id, text).await {
            Ok(outcome) => Ok(outcome.record_updated()),
            Err(RecordStoreError::NotFound(_)) => {
                tracing::warn!(record_id = %id, "Record update matched no record");
                Err(ExtractTextError::RecordNotFound(id.clone()))
            }
            Err(e) => Err(ExtractTextError::Internal(format!(
                "record store update failed: {e}"
            ))),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractTextError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("failed to download file: {0}")]
    DownloadFailed(#[source] FetchError),
    #[error(transparent)]
    UnsupportedFormat(UnsupportedFormat),
    #[error("{} extraction failed: {source}", .format.label())]
    Extraction {
        format: DocumentFormat,
        source: ExtractionError,
    },
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),
    #[error("internal error: {0}")]
    Internal(String),
}
