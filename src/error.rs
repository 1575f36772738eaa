use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid request for {url}: {source}")]
    RequestConstruction {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),
}

/// Every way a notification can fail to go out.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("send request failed: {0}")]
    Send(#[from] reqwest::Error),

    #[error("mail provider rejected message with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("unexpected mail provider response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("send timed out after {0:?}")]
    Timeout(Duration),
}
