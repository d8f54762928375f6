//! Error types for the remote news source.

use thiserror::Error;

/// Errors that can occur while fetching a page from the remote API.
///
/// Any of these triggers the snapshot fallback in the repository;
/// none of them reaches the caller directly.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Connection, timeout, or body-decoding failure from the HTTP client.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status without a parseable API error body.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The API answered with an error envelope (`status: "error"`).
    #[error("api error ({code}): {message}")]
    Api { code: String, message: String },
}
