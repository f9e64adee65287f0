mod document_fetcher;
mod record_store;
mod text_extractor;

pub use document_fetcher::{DocumentFetcher, FetchError};
pub use record_store::{RecordStore, RecordStoreError};
pub use text_extractor::{ExtractionError, TextExtractor};
