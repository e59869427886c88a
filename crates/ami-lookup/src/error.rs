use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("proxy response malformed: {0}")]
    Proxy(String),

    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
