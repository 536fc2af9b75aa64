//! HTTP request execution error types.
//!
//! Any of these ends the current use case. There is no retry.

use std::fmt;

/// Errors that can occur while sending a request and reading its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Network error occurred during request execution.
    ///
    /// This includes connection failures, DNS resolution errors,
    /// and other network-level issues.
    NetworkError(String),

    /// Request timed out before completion.
    ///
    /// Only possible when a client timeout was configured.
    Timeout,

    /// The resolved endpoint is not a valid absolute URL.
    InvalidUrl { url: String, reason: String },

    /// TLS/SSL error occurred during HTTPS connection.
    TlsError(String),

    /// The response body could not be read completely.
    BodyError(String),

    /// Request building error, e.g. an invalid header name or value.
    BuildError(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            RequestError::Timeout => write!(f, "Request timed out"),
            RequestError::InvalidUrl { url, reason } => {
                write!(f, "Invalid URL `{}`: {}", url, reason)
            }
            RequestError::TlsError(msg) => write!(f, "TLS/SSL error: {}", msg),
            RequestError::BodyError(msg) => write!(f, "Failed reading response body: {}", msg),
            RequestError::BuildError(msg) => write!(f, "Request build error: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

/// Convert reqwest errors to RequestError.
impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            RequestError::Timeout
        } else if err.is_builder() {
            RequestError::BuildError(message)
        } else if err.is_body() || err.is_decode() {
            RequestError::BodyError(message)
        } else if message.contains("certificate") || message.contains("TLS") || message.contains("SSL")
        {
            RequestError::TlsError(message)
        } else {
            RequestError::NetworkError(message)
        }
    }
}
