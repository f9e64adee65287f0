use reqwest::Url;

use super::record_id::RecordId;

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionRequest {
    pub source_url: Url,
    pub record_id: Option<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid file_url '{url}': {reason}")]
pub struct InvalidSourceUrl {
    pub url: String,
    pub reason: String,
}

impl ExtractionRequest {
    pub fn new(file_url: &str, record_id: Option<&str>) -> Result<Self, InvalidSourceUrl> {
        let source_url = Url::parse(file_url.trim()).map_err(|e| InvalidSourceUrl {
            url: file_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(source_url.scheme(), "http" | "https") {
            return Err(InvalidSourceUrl {
                url: file_url.to_string(),
                reason: format!("unsupported scheme '{}'", source_url.scheme()),
            });
        }

        Ok(Self {
            source_url,
            record_id: record_id.and_then(RecordId::parse),
        })
    }
}
