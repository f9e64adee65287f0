use std::time::Duration;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use reqwest::{Client, Url};

use crate::application::ports::{DocumentFetcher, FetchError};
use crate::infrastructure::observability::redact_url;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(60);

const USER_AGENT: &str = concat!("scriptract/", env!("CARGO_PKG_VERSION"));

/// Downloads documents with a single bounded GET. Never retries.
pub struct HttpDocumentFetcher {
    client: Client,
    timeout: Duration,
    max_bytes: u64,
}

impl HttpDocumentFetcher {
    pub fn new(timeout: Duration, max_bytes: u64) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::RequestFailed(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout,
            max_bytes,
        })
    }

    fn classify(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::TimedOut(self.timeout.as_secs())
        } else {
            FetchError::RequestFailed(error.without_url().to_string())
        }
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    #[tracing::instrument(skip(self, url), fields(url = %redact_url(url)))]
    async fn fetch(&self, url: &Url) -> Result<Bytes, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Download rejected by origin");
            return Err(FetchError::Status(status.as_u16()));
        }

        if let Some(declared) = response.content_length() {
            if declared > self.max_bytes {
                return Err(FetchError::TooLarge {
                    limit_bytes: self.max_bytes,
                });
            }
        }

        let mut body = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| self.classify(e))?;
            if (body.len() + chunk.len()) as u64 > self.max_bytes {
                return Err(FetchError::TooLarge {
                    limit_bytes: self.max_bytes,
                });
            }
            body.extend_from_slice(&chunk);
        }

        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }

        tracing::info!(bytes = body.len(), "Document downloaded");
        Ok(body.freeze())
    }
}
