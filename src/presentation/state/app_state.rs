use std::sync::Arc;

use crate::application::ports::{DocumentFetcher, TextExtractor};
use crate::application::services::ExtractionService;

/// Process-wide state, built once in `main` and cloned into every handler.
pub struct AppState<F, E: ?Sized>
where
    F: DocumentFetcher,
    E: TextExtractor,
{
    pub extraction_service: Arc<ExtractionService<F, E>>,
}

impl<F, E: ?Sized> Clone for AppState<F, E>
where
    F: DocumentFetcher,
    E: TextExtractor,
{
    fn clone(&self) -> Self {
        Self {
            extraction_service: Arc::clone(&self.extraction_service),
        }
    }
}
