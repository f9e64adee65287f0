use unicode_normalization::UnicodeNormalization;

/// Cleans text coming out of a document parser.
///
/// Line endings become `\n`, the text is NFC-composed, trailing whitespace
/// is stripped from each line and runs of blank lines shrink to one. The
/// result is trimmed.
pub fn normalize_extracted_text(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    let composed: String = unified.nfc().collect();

    let mut result = String::with_capacity(composed.len());
    let mut pending_blank = false;

    for line in composed.lines() {
        let line = line.trim_end();

        if line.is_empty() {
            pending_blank = !result.is_empty();
            continue;
        }

        if !result.is_empty() {
            result.push('\n');
            if pending_blank {
                result.push('\n');
            }
        }
        result.push_str(line);
        pending_blank = false;
    }

    result.trim().to_string()
}
