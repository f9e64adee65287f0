use std::path::Path;
use std::time::Duration;

use scriptract::application::ports::{ExtractionError, TextExtractor};
use scriptract::domain::{DocumentFormat, RawDocument};
use scriptract::infrastructure::text_processing::LegacyDocAdapter;

fn doc(bytes: &'static [u8]) -> RawDocument {
    RawDocument::new(bytes.into(), DocumentFormat::Doc, "https://example.com/old.doc")
}

fn shell(script: &str) -> LegacyDocAdapter {
    LegacyDocAdapter::new("sh").with_args(vec!["-c".to_string(), script.to_string()])
}

#[tokio::test]
async fn given_converter_output_when_extracting_then_returns_trimmed_stdout() {
    let adapter = shell(r#"cat "$0""#);

    let text = adapter.extract_text(&doc(b"  Verse 1\n")).await.unwrap();

    assert_eq!(text, "Verse 1");
}

#[tokio::test]
async fn given_successful_conversion_when_finished_then_temp_file_is_removed() {
    let adapter = shell(r#"printf "%s" "$0""#);

    let temp_path = adapter.extract_text(&doc(b"binary")).await.unwrap();

    assert!(temp_path.ends_with(".doc"));
    assert!(!Path::new(&temp_path).exists());
}

#[tokio::test]
async fn given_failing_converter_when_finished_then_temp_file_is_removed() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("seen-path");
    let adapter = shell(&format!(r#"printf "%s" "$0" > '{}'; exit 3"#, marker.display()));

    let result = adapter.extract_text(&doc(b"binary")).await;

    assert!(matches!(result, Err(ExtractionError::ToolFailure(_))));
    let temp_path = std::fs::read_to_string(&marker).unwrap();
    assert!(temp_path.ends_with(".doc"));
    assert!(!Path::new(&temp_path).exists());
}

#[tokio::test]
async fn given_concurrent_conversions_when_running_then_each_uses_its_own_temp_file() {
    let adapter = shell(r#"printf "%s" "$0""#);
    let first_doc = doc(b"first");
    let second_doc = doc(b"second");

    let (first, second) = tokio::join!(
        adapter.extract_text(&first_doc),
        adapter.extract_text(&second_doc)
    );

    assert_ne!(first.unwrap(), second.unwrap());
}

#[tokio::test]
async fn given_failing_converter_when_extracting_then_returns_tool_failure_with_stderr() {
    let adapter = shell("echo 'not a Word file' >&2; exit 3");

    let err = adapter.extract_text(&doc(b"binary")).await.unwrap_err();

    match err {
        ExtractionError::ToolFailure(message) => assert!(message.contains("not a Word file")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn given_missing_converter_when_extracting_then_returns_tool_failure() {
    let adapter = LegacyDocAdapter::new("scriptract-no-such-converter");

    let result = adapter.extract_text(&doc(b"binary")).await;

    assert!(matches!(result, Err(ExtractionError::ToolFailure(_))));
}

#[tokio::test]
async fn given_slow_converter_when_timeout_elapses_then_returns_tool_failure() {
    let adapter = shell("sleep 5").with_timeout(Duration::from_millis(100));

    let result = adapter.extract_text(&doc(b"binary")).await;

    assert!(matches!(result, Err(ExtractionError::ToolFailure(_))));
}

#[tokio::test]
async fn given_silent_converter_when_extracting_then_returns_no_text_found() {
    let adapter = shell("exit 0");

    let result = adapter.extract_text(&doc(b"binary")).await;

    assert!(matches!(result, Err(ExtractionError::NoTextFound(_))));
}
