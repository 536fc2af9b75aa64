//! Use case data models.
//!
//! A [`UseCase`] is one request definition exactly as written in the config
//! document, with its template fields still unresolved. A
//! [`MaterializedUseCase`] is the same definition with every template field
//! resolved against the environment, ready to be sent.

use super::request::HttpMethod;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One declared HTTP request plus its expectations and output bindings.
///
/// Immutable once loaded. Template fields are `name`, `endpoint`, `body` and
/// every header value; the remaining fields are taken literally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCase {
    /// Display name, used in the report prefix.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub method: HttpMethod,

    /// Full URL of the request (template).
    pub endpoint: String,

    /// Raw request body (template).
    #[serde(default)]
    pub body: String,

    /// Header name to value (template).
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Status code expected in test mode.
    #[serde(default)]
    pub want_status: u16,

    /// Expected-response pattern; the text between the first `{` and the
    /// first `}` must appear in the response body (test mode only).
    #[serde(default)]
    pub want_response: String,

    /// Output bindings: environment variable name to path expression.
    #[serde(default)]
    pub vars: BTreeMap<String, String>,

    /// Seconds to sleep before the request is sent.
    #[serde(default)]
    pub delay: u64,
}

impl UseCase {
    /// Creates a use case with the given method and endpoint.
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_var(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.vars.insert(name.into(), path.into());
        self
    }

    pub fn expecting(mut self, status: u16, response: impl Into<String>) -> Self {
        self.want_status = status;
        self.want_response = response.into();
        self
    }
}

/// A use case with every template field resolved against one environment
/// snapshot.
///
/// Created once per pipeline iteration and discarded after execution.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializedUseCase {
    pub name: String,
    pub method: HttpMethod,
    pub endpoint: String,
    pub body: String,
    pub headers: BTreeMap<String, String>,
    pub vars: BTreeMap<String, String>,
    pub want_status: u16,
    pub want_response: String,
    pub delay: u64,
}

impl MaterializedUseCase {
    /// Starts from the unresolved definition.
    ///
    /// The materializer overwrites the template fields one by one, so a
    /// partially built value still has a usable name and endpoint.
    pub fn from_definition(definition: &UseCase) -> Self {
        Self {
            name: definition.name.clone(),
            method: definition.method,
            endpoint: definition.endpoint.clone(),
            body: definition.body.clone(),
            headers: definition.headers.clone(),
            vars: definition.vars.clone(),
            want_status: definition.want_status,
            want_response: definition.want_response.clone(),
            delay: definition.delay,
        }
    }

    /// Display prefix used in every report line.
    ///
    /// `[Name] METHOD Endpoint`, or `METHOD Endpoint` when the name is empty.
    pub fn prefix(&self) -> String {
        if self.name.is_empty() {
            format!("{} {}", self.method, self.endpoint)
        } else {
            format!("[{}] {} {}", self.name, self.method, self.endpoint)
        }
    }
}
