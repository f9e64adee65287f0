use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;

#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Bytes, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("request timed out after {0}s")]
    TimedOut(u64),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("downloaded file is empty")]
    EmptyBody,
    #[error("downloaded file exceeds {limit_bytes} bytes")]
    TooLarge { limit_bytes: u64 },
}
