mod legacy_doc_adapter_test;
mod pdf_adapter_test;
mod text_normalizer_test;
