//! Turns a use case definition into a ready-to-send request.
//!
//! Template fields are resolved in a fixed order: name, endpoint, headers,
//! body. The first failure stops materialization. The error carries the
//! partially built use case so its display prefix can still be reported.

use crate::models::usecase::{MaterializedUseCase, UseCase};
use crate::variables::{resolve_template, TemplateError, VariableEnvironment};
use std::collections::BTreeMap;
use std::fmt;

/// Which template field of a use case failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateField {
    Name,
    Endpoint,
    Header,
    Body,
}

impl fmt::Display for TemplateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateField::Name => "name",
            TemplateField::Endpoint => "endpoint",
            TemplateField::Header => "header",
            TemplateField::Body => "body",
        };
        f.write_str(name)
    }
}

/// A template field could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializeError {
    pub field: TemplateField,
    /// The field value as written in the config.
    pub original: String,
    pub source: TemplateError,
    /// Fields resolved before the failure; the rest are still unresolved.
    pub partial: Box<MaterializedUseCase>,
}

impl fmt::Display for MaterializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed replacing value for the {} => `{}`, the variable is invalid: {}",
            self.field, self.original, self.source
        )
    }
}

impl std::error::Error for MaterializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

fn resolve_field(
    field: TemplateField,
    template: &str,
    env: &VariableEnvironment,
    partial: &MaterializedUseCase,
) -> Result<String, MaterializeError> {
    resolve_template(template, env).map_err(|source| MaterializeError {
        field,
        original: template.to_string(),
        source,
        partial: Box::new(partial.clone()),
    })
}

/// Resolves every template field of `definition` against `env`.
pub fn materialize(
    definition: &UseCase,
    env: &VariableEnvironment,
) -> Result<MaterializedUseCase, MaterializeError> {
    let mut usecase = MaterializedUseCase::from_definition(definition);

    usecase.name = resolve_field(TemplateField::Name, &definition.name, env, &usecase)?;
    usecase.endpoint = resolve_field(TemplateField::Endpoint, &definition.endpoint, env, &usecase)?;

    let mut headers = BTreeMap::new();
    for (key, value) in &definition.headers {
        let resolved = resolve_field(TemplateField::Header, value, env, &usecase)?;
        headers.insert(key.clone(), resolved);
    }
    usecase.headers = headers;

    usecase.body = resolve_field(TemplateField::Body, &definition.body, env, &usecase)?;

    Ok(usecase)
}
