//! Path expressions for pulling values out of JSON responses.
//!
//! A path is a list of segments separated by `.`. Each segment is an object
//! key, optionally followed by one bracketed integer index:
//!
//! ```text
//! result            -> key "result"
//! data[0].id        -> key "data", index 0, then key "id"
//! ```
//!
//! Keys cannot contain `.`, `[` or `]`. Spaces inside a segment are ignored.
//!
//! # Examples
//!
//! ```
//! use courier::variables::{extract, PathExpression};
//! use serde_json::json;
//!
//! let body = json!({"data": [{"id": 1}, {"id": 2}], "result": "ok"});
//!
//! let path = PathExpression::parse("data[1].id").unwrap();
//! assert_eq!(extract(&body, &path).unwrap(), &json!(2));
//! ```

use super::error::{ExtractionError, JsonKind};
use serde_json::Value;
use std::fmt;

/// One step of a path: a key and an optional index into the value found
/// under that key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub key: String,
    pub index: Option<i64>,
}

/// A parsed path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpression {
    source: String,
    segments: Vec<PathSegment>,
}

impl PathExpression {
    /// Parses a path expression.
    ///
    /// Fails when a bracketed index is not an integer or when text follows
    /// the closing bracket. Negative indices parse here and are rejected
    /// during extraction, where the array length is known.
    pub fn parse(source: &str) -> Result<Self, ExtractionError> {
        let segments = source
            .split('.')
            .map(parse_segment)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_segment(raw: &str) -> Result<PathSegment, ExtractionError> {
    // A segment only carries an index when `[` comes before `]`. Bare keys
    // are looked up exactly as written, spaces included.
    let (open, close) = match (raw.find('['), raw.find(']')) {
        (Some(open), Some(close)) if open < close => (open, close),
        _ => {
            return Ok(PathSegment {
                key: raw.to_string(),
                index: None,
            })
        }
    };

    // Spaces are dropped from the key and the index of an indexed segment
    let strip = |text: &str| -> String { text.chars().filter(|c| *c != ' ').collect() };

    if !strip(&raw[close + 1..]).is_empty() {
        return Err(ExtractionError::MalformedSegment {
            segment: strip(raw),
        });
    }

    let index_text = strip(&raw[open + 1..close]);
    let index = index_text
        .parse::<i64>()
        .map_err(|_| ExtractionError::InvalidIndex {
            segment: strip(raw),
            index: index_text.clone(),
        })?;

    Ok(PathSegment {
        key: strip(&raw[..open]),
        index: Some(index),
    })
}

/// Resolves `path` against `root` and returns the value it points to.
///
/// The value is returned as-is, so it may itself be an object or array.
pub fn extract<'a>(root: &'a Value, path: &PathExpression) -> Result<&'a Value, ExtractionError> {
    let mut current = root;

    for segment in path.segments() {
        current = lookup_key(current, &segment.key)?;

        if let Some(index) = segment.index {
            let items = match current {
                Value::Array(items) => items,
                other => {
                    return Err(ExtractionError::NotASequence {
                        key: segment.key.clone(),
                        kind: JsonKind::of(other),
                    })
                }
            };

            current = usize::try_from(index)
                .ok()
                .and_then(|i| items.get(i))
                .ok_or_else(|| ExtractionError::IndexOutOfBounds {
                    key: segment.key.clone(),
                    index,
                    length: items.len(),
                })?;
        }
    }

    Ok(current)
}

fn lookup_key<'a>(node: &'a Value, key: &str) -> Result<&'a Value, ExtractionError> {
    match node {
        Value::Object(map) => map.get(key).ok_or_else(|| ExtractionError::MissingKey {
            key: key.to_string(),
        }),
        other => Err(ExtractionError::NotAnObject {
            key: key.to_string(),
            kind: JsonKind::of(other),
        }),
    }
}
