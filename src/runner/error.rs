//! Errors of a single use case and their prefix-tagged form.

use super::assertions::AssertionMismatch;
use super::materialize::MaterializeError;
use crate::executor::RequestError;
use crate::variables::BindError;
use std::fmt;

/// Why a use case failed.
#[derive(Debug)]
pub enum UseCaseError {
    /// A template field could not be resolved.
    Template(MaterializeError),

    /// The request could not be sent or its response could not be read.
    Request(RequestError),

    /// Bindings are declared but the body is not JSON.
    Decode {
        source: serde_json::Error,
        body: String,
    },

    /// A binding could not be applied.
    Bind { source: BindError, body: String },

    /// A test-mode expectation did not hold.
    Assertion(AssertionMismatch),

    /// The body could not be pretty-printed as JSON.
    Format(serde_json::Error),
}

impl UseCaseError {
    /// Raw response body worth showing next to the error, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            UseCaseError::Decode { body, .. } | UseCaseError::Bind { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Template errors stop the run in every mode.
    pub fn is_fatal(&self) -> bool {
        matches!(self, UseCaseError::Template(_))
    }
}

impl fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UseCaseError::Template(err) => write!(f, "{}", err),
            UseCaseError::Request(err) => write!(f, "{}", err),
            UseCaseError::Decode { source, .. } => {
                write!(f, "response is not valid JSON: {}", source)
            }
            UseCaseError::Bind { source, .. } => write!(f, "{}", source),
            UseCaseError::Assertion(err) => write!(f, "{}", err),
            UseCaseError::Format(err) => write!(f, "failed formatting JSON response: {}", err),
        }
    }
}

impl std::error::Error for UseCaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UseCaseError::Template(err) => Some(err),
            UseCaseError::Request(err) => Some(err),
            UseCaseError::Decode { source, .. } => Some(source),
            UseCaseError::Bind { source, .. } => Some(source),
            UseCaseError::Assertion(err) => Some(err),
            UseCaseError::Format(err) => Some(err),
        }
    }
}

impl From<RequestError> for UseCaseError {
    fn from(err: RequestError) -> Self {
        UseCaseError::Request(err)
    }
}

impl From<AssertionMismatch> for UseCaseError {
    fn from(err: AssertionMismatch) -> Self {
        UseCaseError::Assertion(err)
    }
}

impl From<MaterializeError> for UseCaseError {
    fn from(err: MaterializeError) -> Self {
        UseCaseError::Template(err)
    }
}

/// A use case error tagged with the use case's display prefix.
#[derive(Debug)]
pub struct UseCaseFailure {
    pub prefix: String,
    pub error: UseCaseError,
}

impl fmt::Display for UseCaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix, self.error)
    }
}

impl std::error::Error for UseCaseFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
