//! The variable environment shared by every use case of a run.
//!
//! The environment is seeded from the `vars` section of the config. Every
//! variable a use case binds must already be a key here; bindings overwrite
//! values but never create keys.

use super::error::{BindError, JsonKind};
use serde_json::{Map, Value};

/// Mapping of variable name to arbitrary JSON value.
///
/// Templates read from it, bindings write to it. It is passed by reference
/// through the pipeline so that writes from one use case are visible to the
/// templates of the next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableEnvironment {
    variables: Map<String, Value>,
}

impl VariableEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an environment from a decoded config value.
    ///
    /// `null` is an empty environment. Anything other than an object is
    /// rejected with its kind.
    pub fn from_value(value: Value) -> Result<Self, JsonKind> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Object(variables) => Ok(Self { variables }),
            other => Err(JsonKind::of(&other)),
        }
    }

    /// Declares a variable, creating or replacing it.
    pub fn declare(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Overwrites a declared variable.
    ///
    /// Fails with [`BindError::Undeclared`] when `name` is not already a key.
    pub fn set(&mut self, name: &str, value: Value) -> Result<(), BindError> {
        match self.variables.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(BindError::Undeclared {
                name: name.to_string(),
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Walks nested objects, e.g. `["user", "id"]` for `{{ .user.id }}`.
    ///
    /// Returns `None` as soon as a key is missing or a value on the way is
    /// not an object.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.variables.get(*first)?;
        for key in rest {
            current = current.as_object()?.get(*key)?;
        }
        Some(current)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl From<Map<String, Value>> for VariableEnvironment {
    fn from(variables: Map<String, Value>) -> Self {
        Self { variables }
    }
}
