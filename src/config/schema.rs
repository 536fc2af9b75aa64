//! Configuration document schema.
//!
//! ```yaml
//! vars:
//!   url: http://localhost:8080
//!   id: ""
//! requests:
//!   - name: list users
//!     endpoint: "{{ .url }}/users"
//!     vars:
//!       id: data[0].id
//!   - endpoint: "{{ .url }}/users/{{ .id }}"
//! ```

use super::ConfigError;
use crate::models::usecase::UseCase;
use crate::variables::{template_references, VariableEnvironment};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The decoded config document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourierConfig {
    /// Initial environment. Must be a mapping when present.
    #[serde(default)]
    pub vars: Value,

    /// Use cases in execution order.
    #[serde(default)]
    pub requests: Vec<UseCase>,
}

/// A config problem that does not stop loading but is worth a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLint {
    /// A binding writes a variable that `vars` does not declare. The run
    /// fails when that use case binds.
    UndeclaredBinding { request: usize, name: String },

    /// A template reads a variable that is not declared. Bindings can only
    /// write declared variables, so it always renders empty.
    UnknownReference { request: usize, name: String },
}

impl std::fmt::Display for ConfigLint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigLint::UndeclaredBinding { request, name } => write!(
                f,
                "request #{} binds var '{}' which is not declared in vars",
                request + 1,
                name
            ),
            ConfigLint::UnknownReference { request, name } => write!(
                f,
                "request #{} references var '{}' which is never declared, it will be empty",
                request + 1,
                name
            ),
        }
    }
}

impl CourierConfig {
    /// Builds the initial environment from `vars`.
    pub fn environment(&self) -> Result<VariableEnvironment, ConfigError> {
        VariableEnvironment::from_value(self.vars.clone())
            .map_err(|kind| ConfigError::InvalidVars { kind })
    }

    /// Finds bindings to undeclared variables and template references that
    /// can never resolve.
    ///
    /// Templates that do not parse are skipped here; they fail at run time
    /// with the field that holds them.
    pub fn lint(&self) -> Vec<ConfigLint> {
        let declared = self.environment().unwrap_or_default();
        let mut findings = Vec::new();

        for (index, usecase) in self.requests.iter().enumerate() {
            let templates = [&usecase.name, &usecase.endpoint, &usecase.body]
                .into_iter()
                .chain(usecase.headers.values());

            for template in templates {
                let Ok(names) = template_references(template) else {
                    continue;
                };
                for name in names {
                    if declared.contains(&name) {
                        continue;
                    }
                    let lint = ConfigLint::UnknownReference {
                        request: index,
                        name,
                    };
                    if !findings.contains(&lint) {
                        findings.push(lint);
                    }
                }
            }

            for name in usecase.vars.keys() {
                if !declared.contains(name) {
                    findings.push(ConfigLint::UndeclaredBinding {
                        request: index,
                        name: name.clone(),
                    });
                }
            }
        }

        findings
    }
}
