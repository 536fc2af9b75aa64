//! HTTP response data model.
//!
//! A [`ResponseRecord`] holds everything the pipeline needs from one response:
//! the status code, headers and the complete body read into memory.

use std::collections::HashMap;
use std::time::Duration;

/// Represents an HTTP response received from a server.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseRecord {
    /// HTTP status code (e.g., 200, 404, 500).
    pub status_code: u16,

    /// Response headers as key-value pairs.
    pub headers: HashMap<String, String>,

    /// Response body as raw bytes.
    ///
    /// Read completely before the record is returned. It is only parsed as
    /// JSON when the use case declares output bindings.
    pub body: Vec<u8>,

    /// Time from dispatch to the last body byte.
    pub duration: Duration,
}

impl ResponseRecord {
    /// Creates a new ResponseRecord with the given status code and an empty body.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            body: Vec::new(),
            duration: Duration::from_secs(0),
        }
    }

    /// Builder-style helper used by transports and tests.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Adds a header to the response.
    pub fn add_header(&mut self, name: String, value: String) {
        self.headers.insert(name, value);
    }

    /// Checks if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Gets the Content-Type header value if present.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .map(|(_, v)| v.as_str())
    }

    /// Body as text. Invalid UTF-8 sequences are replaced rather than
    /// rejected, so a binary body can still be shown in a report.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
