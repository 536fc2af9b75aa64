//! Use case runner.
//!
//! - **materialize**: resolves the template fields of a use case
//! - **assertions**: test-mode status and content checks
//! - **pipeline**: runs use cases in order with fail-fast or test semantics
//! - **error**: per-use-case errors tagged with the display prefix

pub mod assertions;
pub mod error;
pub mod materialize;
pub mod pipeline;

pub use assertions::{check_response, expected_substring, AssertionMismatch};
pub use error::{UseCaseError, UseCaseFailure};
pub use materialize::{materialize, MaterializeError, TemplateField};
pub use pipeline::{bind_response, Pipeline, PipelineOptions, Reporter, RunMode, RunSummary};
