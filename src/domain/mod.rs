mod document_format;
mod extracted_text;
mod extraction_request;
mod raw_document;
mod record_id;

pub use document_format::{DocumentFormat, UnsupportedFormat};
pub use extracted_text::{EmptyText, ExtractedText};
pub use extraction_request::{ExtractionRequest, InvalidSourceUrl};
pub use raw_document::RawDocument;
pub use record_id::RecordId;
