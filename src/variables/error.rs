//! Error types for template resolution, path extraction and binding.

use serde_json::Value;
use std::fmt;

/// Kind of a JSON value, used in extraction error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "bool",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Errors raised while parsing a `{{ .name }}` template.
///
/// Referencing a variable that does not exist is not an error; it renders as
/// the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{{` with no matching `}}`.
    UnclosedAction {
        /// Byte offset of the opening braces
        offset: usize,
    },

    /// `{{ }}` with nothing inside.
    EmptyAction {
        /// Byte offset of the opening braces
        offset: usize,
    },

    /// The action is not a dotted variable reference, e.g. `{{ url }}`.
    UnsupportedAction {
        /// Trimmed action text
        action: String,
        /// Byte offset of the opening braces
        offset: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnclosedAction { offset } => {
                write!(f, "unclosed action starting at offset {}", offset)
            }
            TemplateError::EmptyAction { offset } => {
                write!(f, "empty action at offset {}", offset)
            }
            TemplateError::UnsupportedAction { action, offset } => write!(
                f,
                "unsupported action `{}` at offset {}, expected a variable like `.name`",
                action, offset
            ),
        }
    }
}

impl std::error::Error for TemplateError {}

/// Errors raised while parsing or walking a path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The bracketed index is not an integer.
    InvalidIndex {
        /// The whole segment, e.g. `data[x]`
        segment: String,
        /// The text between the brackets
        index: String,
    },

    /// Text follows the closing bracket, e.g. `data[0][1]`.
    MalformedSegment { segment: String },

    /// A key was looked up in something that is not an object.
    NotAnObject { key: String, kind: JsonKind },

    /// The object does not contain the key.
    MissingKey { key: String },

    /// An index was applied to a value that is not an array.
    NotASequence { key: String, kind: JsonKind },

    /// The index is negative or past the end of the array.
    IndexOutOfBounds {
        key: String,
        index: i64,
        length: usize,
    },
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::InvalidIndex { segment, index } => {
                write!(f, "index `{}` in `{}` is not an integer", index, segment)
            }
            ExtractionError::MalformedSegment { segment } => {
                write!(f, "unexpected text after the index in `{}`", segment)
            }
            ExtractionError::NotAnObject { key, kind } => write!(
                f,
                "response does not contain `{}`, the value searched is {} and not an object",
                key, kind
            ),
            ExtractionError::MissingKey { key } => {
                write!(f, "response does not contain `{}`", key)
            }
            ExtractionError::NotASequence { key, kind } => {
                write!(f, "`{}` picked in var is not an array, it is {}", key, kind)
            }
            ExtractionError::IndexOutOfBounds { key, index, length } => write!(
                f,
                "index {} requested is out of bounds, length of `{}` is {}",
                index, key, length
            ),
        }
    }
}

impl std::error::Error for ExtractionError {}

/// Errors raised while writing bindings into the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The binding target is not a key of the environment.
    Undeclared { name: String },

    /// The path expression could not be resolved against the response.
    Extraction {
        /// Binding target
        name: String,
        /// Path expression as written in the config
        path: String,
        source: ExtractionError,
    },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::Undeclared { name } => {
                write!(f, "var '{}' was not declared in the config", name)
            }
            BindError::Extraction { name, path, source } => {
                write!(f, "var '{}' from `{}`: {}", name, path, source)
            }
        }
    }
}

impl std::error::Error for BindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BindError::Undeclared { .. } => None,
            BindError::Extraction { source, .. } => Some(source),
        }
    }
}
