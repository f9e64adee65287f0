mod http_fetcher;

pub use http_fetcher::{DEFAULT_FETCH_TIMEOUT, HttpDocumentFetcher};
