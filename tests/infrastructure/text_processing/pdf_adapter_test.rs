use scriptract::application::ports::{ExtractionError, TextExtractor};
use scriptract::domain::{DocumentFormat, RawDocument};
use scriptract::infrastructure::text_processing::{PdfAdapter, PdfPage, collect_pages};

use crate::helpers::build_pdf;

fn pdf(bytes: Vec<u8>) -> RawDocument {
    RawDocument::new(bytes.into(), DocumentFormat::Pdf, "https://example.com/script.pdf")
}

#[tokio::test]
async fn given_pages_with_text_when_extracting_then_marks_each_page() {
    let document = pdf(build_pdf(&[Some("Amazing Grace"), Some("How sweet the sound")]));

    let text = PdfAdapter::new().extract_text(&document).await.unwrap();

    let first = text.find("--- Page 1 ---").unwrap();
    let second = text.find("--- Page 2 ---").unwrap();
    assert!(first < second);
    assert!(text.contains("Amazing"));
    assert!(text.contains("sound"));
}

#[tokio::test]
async fn given_empty_pages_when_extracting_then_they_are_skipped_and_numbers_kept() {
    let document = pdf(build_pdf(&[None, Some("Second"), None, Some("Fourth")]));

    let text = PdfAdapter::new().extract_text(&document).await.unwrap();

    assert!(text.starts_with("--- Page 2 ---"));
    assert!(text.contains("--- Page 4 ---"));
    assert!(!text.contains("--- Page 1 ---"));
    assert!(!text.contains("--- Page 3 ---"));
}

#[tokio::test]
async fn given_markers_disabled_when_extracting_then_output_has_no_markers() {
    let document = pdf(build_pdf(&[Some("Verse"), Some("Chorus")]));

    let text = PdfAdapter::new()
        .with_page_markers(false)
        .extract_text(&document)
        .await
        .unwrap();

    assert!(!text.contains("--- Page"));
    assert!(text.contains("Verse"));
    assert!(text.contains("Chorus"));
}

#[tokio::test]
async fn given_only_empty_pages_when_extracting_then_returns_no_text_found() {
    let document = pdf(build_pdf(&[None, None]));

    let result = PdfAdapter::new().extract_text(&document).await;

    assert!(matches!(result, Err(ExtractionError::NoTextFound(_))));
}

#[tokio::test]
async fn given_garbage_bytes_when_extracting_then_returns_malformed_input() {
    let document = pdf(b"this is not a pdf at all".to_vec());

    let result = PdfAdapter::new().extract_text(&document).await;

    assert!(matches!(result, Err(ExtractionError::MalformedInput(_))));
}

#[test]
fn given_every_page_unreadable_when_collecting_then_returns_malformed_input() {
    let results: Vec<Result<String, String>> =
        vec![Err("bad stream".to_string()), Err("bad font".to_string())];

    let result = collect_pages(results);

    assert!(matches!(result, Err(ExtractionError::MalformedInput(_))));
}

#[test]
fn given_some_pages_unreadable_when_collecting_then_keeps_readable_page_numbers() {
    let results: Vec<Result<String, String>> = vec![
        Err("bad stream".to_string()),
        Ok("  Chorus  \r\n".to_string()),
        Ok("   ".to_string()),
    ];

    let pages = collect_pages(results).unwrap();

    assert_eq!(
        pages,
        vec![PdfPage {
            number: 2,
            text: "Chorus".to_string(),
        }]
    );
}

#[test]
fn given_no_pages_when_collecting_then_returns_empty_list() {
    let pages = collect_pages(Vec::<Result<String, String>>::new()).unwrap();

    assert!(pages.is_empty());
}
