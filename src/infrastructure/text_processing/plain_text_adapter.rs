use std::borrow::Cow;
use std::fmt;

use async_trait::async_trait;
use encoding_rs::{UTF_8, WINDOWS_1252};

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{DocumentFormat, RawDocument};

/// Encodings tried for `.txt` files, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
    Windows1252,
    Iso8859_1,
}

pub const DECODE_ORDER: [TextEncoding; 4] = [
    TextEncoding::Utf8,
    TextEncoding::Latin1,
    TextEncoding::Windows1252,
    TextEncoding::Iso8859_1,
];

impl TextEncoding {
    /// `None` means the bytes are not valid in this encoding.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        match self {
            // Strict and lossless: a leading BOM is kept as U+FEFF.
            Self::Utf8 => UTF_8.decode_without_bom_handling_and_without_replacement(bytes),
            Self::Windows1252 => {
                WINDOWS_1252.decode_without_bom_handling_and_without_replacement(bytes)
            }
            // Byte-for-codepoint mapping. encoding_rs treats the
            // "iso-8859-1" label as windows-1252, so both stages use this.
            Self::Latin1 | Self::Iso8859_1 => Some(encoding_rs::mem::decode_latin1(bytes)),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => f.write_str("UTF-8"),
            Self::Latin1 => f.write_str("Latin-1"),
            Self::Windows1252 => f.write_str("Windows-1252"),
            Self::Iso8859_1 => f.write_str("ISO-8859-1"),
        }
    }
}

/// Returns the first decode, in [`DECODE_ORDER`], that is non-empty once
/// trimmed.
pub fn decode_plain_text(bytes: &[u8]) -> Result<(String, TextEncoding), ExtractionError> {
    for encoding in DECODE_ORDER {
        match encoding.decode(bytes) {
            Some(text) if !text.trim().is_empty() => {
                return Ok((text.trim().to_string(), encoding));
            }
            Some(_) => tracing::debug!(%encoding, "Decoded text is empty, trying next encoding"),
            None => tracing::debug!(%encoding, "Bytes are not valid, trying next encoding"),
        }
    }

    Err(ExtractionError::DecodeFailure(format!(
        "no encoding among {} produced any text",
        DECODE_ORDER
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    )))
}

pub struct PlainTextAdapter;

#[async_trait]
impl TextExtractor for PlainTextAdapter {
    async fn extract_text(&self, document: &RawDocument) -> Result<String, ExtractionError> {
        if document.format != DocumentFormat::Txt {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.label().to_string(),
            ));
        }

        let (text, encoding) = decode_plain_text(&document.bytes)?;
        tracing::debug!(%encoding, chars = text.chars().count(), "Plain text decoded");
        Ok(text)
    }

    fn formats(&self) -> Vec<DocumentFormat> {
        vec![DocumentFormat::Txt]
    }
}
