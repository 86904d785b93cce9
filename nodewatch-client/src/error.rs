//! Error types for the API client.

use thiserror::Error;

/// Errors that can occur when talking to the monitoring API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed or returned a non-success status.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The server answered with a JSON-RPC error payload.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Failed to parse a response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Connection failed.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for a response.
    #[error("Request timed out")]
    Timeout,

    /// The envelope carried neither a result nor an error.
    #[error("JSON-RPC response carried no result")]
    MissingResult,
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Connection(err.to_string())
        } else if err.is_decode() {
            ClientError::Parse(err.to_string())
        } else {
            ClientError::Http(err.to_string())
        }
    }
}
