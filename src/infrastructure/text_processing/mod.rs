mod composite_extractor;
mod docx_adapter;
mod extractor_factory;
mod legacy_doc_adapter;
mod mock_extractor;
mod pdf_adapter;
mod plain_text_adapter;
mod text_normalizer;

pub use composite_extractor::CompositeExtractor;
pub use docx_adapter::{DocxAdapter, DocxText, parse_document_xml};
pub use extractor_factory::{ExtractorFactory, ExtractorFactoryError};
pub use legacy_doc_adapter::LegacyDocAdapter;
pub use mock_extractor::MockExtractor;
pub use pdf_adapter::{PdfAdapter, PdfPage, collect_pages};
pub use plain_text_adapter::{DECODE_ORDER, PlainTextAdapter, TextEncoding, decode_plain_text};
pub use text_normalizer::normalize_extracted_text;
