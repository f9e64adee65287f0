use scriptract::infrastructure::text_processing::normalize_extracted_text;

#[test]
fn given_crlf_line_endings_when_normalizing_then_uses_newlines() {
    assert_eq!(normalize_extracted_text("one\r\ntwo\rthree"), "one\ntwo\nthree");
}

#[test]
fn given_many_blank_lines_when_normalizing_then_keeps_single_blank_line() {
    assert_eq!(
        normalize_extracted_text("Verse 1\n\n\n\n  \nChorus"),
        "Verse 1\n\nChorus"
    );
}

#[test]
fn given_trailing_spaces_when_normalizing_then_line_ends_are_trimmed() {
    assert_eq!(normalize_extracted_text("  indented   \nnext\t"), "indented\nnext");
}

#[test]
fn given_decomposed_accent_when_normalizing_then_composes_to_nfc() {
    let normalized = normalize_extracted_text("Cafe\u{301}");

    assert_eq!(normalized, "Caf\u{e9}");
    assert_eq!(normalized.chars().count(), 4);
}

#[test]
fn given_whitespace_only_when_normalizing_then_returns_empty() {
    assert_eq!(normalize_extracted_text(" \n\r\n \t"), "");
}
