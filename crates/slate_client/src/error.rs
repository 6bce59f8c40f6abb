//! Client error taxonomy

use thiserror::Error;

/// Errors crossing the request/response boundary.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure or non-success HTTP status.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not well-formed JSON.
    #[error("malformed response body: {0}")]
    Decode(String),
}
