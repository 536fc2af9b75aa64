//! Template resolution for use case fields.
//!
//! A template is plain text with zero or more `{{ .name }}` actions. Each
//! action names a variable of the environment with a leading dot; nested
//! objects can be reached with more segments (`{{ .user.id }}`).
//!
//! Resolution rules:
//! - a variable that is not in the environment renders as the empty string
//! - an unclosed `{{`, an empty action, or anything that is not a dotted
//!   variable reference (`{{ url }}`, `{{ . }}`, `{{ .a | upper }}`) is a
//!   [`TemplateError`]
//! - values render as text: strings raw, numbers and booleans as JSON text,
//!   `null` empty, arrays and objects as compact JSON
//!
//! # Examples
//!
//! ```
//! use courier::variables::{resolve_template, VariableEnvironment};
//! use serde_json::json;
//!
//! let mut env = VariableEnvironment::new();
//! env.declare("url", json!("http://localhost:8080/api/v1"));
//!
//! let endpoint = resolve_template("{{ .url }}/users", &env).unwrap();
//! assert_eq!(endpoint, "http://localhost:8080/api/v1/users");
//!
//! let missing = resolve_template("{{ .token }}/users", &env).unwrap();
//! assert_eq!(missing, "/users");
//! ```

use super::environment::VariableEnvironment;
use super::error::TemplateError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// One or more `.identifier` segments, nothing else.
static VARIABLE_ACTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\.[A-Za-z_][A-Za-z0-9_]*)+$").expect("Failed to compile action regex")
});

/// A parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    /// Dotted path without the leading dot, split into segments.
    Variable(Vec<&'a str>),
}

fn tokenize(template: &str) -> Result<Vec<Token<'_>>, TemplateError> {
    let mut tokens = Vec::new();
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find(OPEN) {
        if start > 0 {
            tokens.push(Token::Text(&rest[..start]));
        }

        let inner_start = start + OPEN.len();
        let inner_len = rest[inner_start..]
            .find(CLOSE)
            .ok_or(TemplateError::UnclosedAction {
                offset: offset + start,
            })?;
        let action = rest[inner_start..inner_start + inner_len].trim();

        if action.is_empty() {
            return Err(TemplateError::EmptyAction {
                offset: offset + start,
            });
        }
        if !VARIABLE_ACTION_REGEX.is_match(action) {
            return Err(TemplateError::UnsupportedAction {
                action: action.to_string(),
                offset: offset + start,
            });
        }
        tokens.push(Token::Variable(action[1..].split('.').collect()));

        let consumed = inner_start + inner_len + CLOSE.len();
        offset += consumed;
        rest = &rest[consumed..];
    }

    if !rest.is_empty() {
        tokens.push(Token::Text(rest));
    }
    Ok(tokens)
}

/// Substitutes every `{{ .name }}` action in `template` with its value from
/// `env`.
///
/// The template is parsed completely before anything is rendered, so a
/// syntax error never yields a partially substituted string.
pub fn resolve_template(template: &str, env: &VariableEnvironment) -> Result<String, TemplateError> {
    // Fast path: no action markers at all
    if !template.contains(OPEN) {
        return Ok(template.to_string());
    }

    let tokens = tokenize(template)?;
    let mut result = String::with_capacity(template.len());
    for token in tokens {
        match token {
            Token::Text(text) => result.push_str(text),
            Token::Variable(path) => {
                if let Some(value) = env.lookup(&path) {
                    result.push_str(&render_value(value));
                }
            }
        }
    }
    Ok(result)
}

/// Top-level variable names referenced by a template, in order of
/// appearance and without duplicates.
pub fn template_references(template: &str) -> Result<Vec<String>, TemplateError> {
    let mut names: Vec<String> = Vec::new();
    for token in tokenize(template)? {
        if let Token::Variable(path) = token {
            if let Some(first) = path.first() {
                if !names.iter().any(|n| n == first) {
                    names.push((*first).to_string());
                }
            }
        }
    }
    Ok(names)
}

/// Text form of an environment value inside a template.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
