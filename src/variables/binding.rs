//! Writes values extracted from a response into the environment.
//!
//! Each binding maps an environment variable to a path expression. Paths are
//! always evaluated against the response root, never against the result of
//! another binding.

use super::environment::VariableEnvironment;
use super::error::BindError;
use super::path::{extract, PathExpression};
use serde_json::Value;
use std::collections::BTreeMap;

/// Applies every binding to `response` and stores the results in `env`.
///
/// Bindings run in name order. The first failure stops the remaining ones;
/// values written before it stay in the environment.
pub fn bind(
    response: &Value,
    bindings: &BTreeMap<String, String>,
    env: &mut VariableEnvironment,
) -> Result<(), BindError> {
    for (name, raw_path) in bindings {
        let value = PathExpression::parse(raw_path)
            .and_then(|path| extract(response, &path).cloned())
            .map_err(|source| BindError::Extraction {
                name: name.clone(),
                path: raw_path.clone(),
                source,
            })?;

        log::debug!("binding var '{}' from `{}`", name, raw_path);
        env.set(name, value)?;
    }

    Ok(())
}
