//! HTTP assertion error types

use reqwest::StatusCode;

/// Error type for HTTP assertion operations
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("expected HTTP status code {}, got {}", wanted.as_u16(), got.as_u16())]
    UnexpectedStatus { wanted: StatusCode, got: StatusCode },
}
