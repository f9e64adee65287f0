use std::fmt;

/// Document formats the service knows how to extract, keyed by URL suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Doc,
    Txt,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported file type{}. Supported: {}", describe_extension(.extension), DocumentFormat::describe(.accepted))]
pub struct UnsupportedFormat {
    pub extension: Option<String>,
    pub accepted: Vec<DocumentFormat>,
}

fn describe_extension(extension: &Option<String>) -> String {
    match extension {
        Some(ext) => format!(" '.{ext}'"),
        None => String::new(),
    }
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 4] = [Self::Pdf, Self::Docx, Self::Doc, Self::Txt];

    /// Classifies a URL by the extension of its last path segment.
    ///
    /// Query strings and fragments are ignored, so signed storage links such
    /// as `https://host/bucket/hymn.pdf?token=abc` still resolve to `Pdf`.
    /// No content sniffing happens here: the suffix is the only input.
    pub fn from_url(url: &str) -> Result<Self, UnsupportedFormat> {
        let without_fragment = url.split('#').next().unwrap_or_default();
        let path = without_fragment.split('?').next().unwrap_or_default();
        let last_segment = path.rsplit('/').next().unwrap_or_default();

        let extension = last_segment
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty());

        match extension.as_deref().and_then(Self::from_extension) {
            Some(format) => Ok(format),
            None => Err(UnsupportedFormat {
                extension,
                accepted: Self::ALL.to_vec(),
            }),
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "doc" => Some(Self::Doc),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Doc => "doc",
            Self::Txt => "txt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Doc => "DOC",
            Self::Txt => "TXT",
        }
    }

    pub fn describe(formats: &[DocumentFormat]) -> String {
        formats
            .iter()
            .map(DocumentFormat::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
