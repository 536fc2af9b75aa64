//! Variables module for the request chaining engine.
//!
//! This module holds the shared environment, the `{{ .name }}` template
//! resolver, the path expression extractor and the binder that writes
//! response values back into the environment.

pub mod binding;
pub mod environment;
pub mod error;
pub mod path;
pub mod template;

pub use binding::bind;
pub use environment::VariableEnvironment;
pub use error::{BindError, ExtractionError, JsonKind, TemplateError};
pub use path::{extract, PathExpression, PathSegment};
pub use template::{render_value, resolve_template, template_references};
