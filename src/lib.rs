//! Courier: chained HTTP requests from a YAML file.
//!
//! A config document declares a set of variables and an ordered list of
//! requests ("use cases"). Each use case is sent in turn; values picked out
//! of its JSON response are written back into the variables, where the
//! templates of later use cases can read them.
//!
//! # Architecture
//!
//! - **models**: use case definitions, their resolved form, and responses
//! - **variables**: environment, `{{ .name }}` templates, path extraction, binding
//! - **executor**: pre-send delay and the blocking HTTP transport
//! - **runner**: materialization, test assertions, and the sequential pipeline
//! - **config**: YAML loading and config file discovery
//! - **formatter**: JSON pretty-printing and the terminal reporter
//!
//! # Example
//!
//! ```no_run
//! use courier::config::parse_config;
//! use courier::executor::{ExecutionConfig, ReqwestTransport};
//! use courier::formatter::ConsoleReporter;
//! use courier::runner::{Pipeline, PipelineOptions};
//!
//! let config = parse_config(
//!     r#"
//! vars:
//!   url: http://localhost:8080
//!   id: ""
//! requests:
//!   - endpoint: "{{ .url }}/users"
//!     vars:
//!       id: data[0].id
//!   - endpoint: "{{ .url }}/users/{{ .id }}"
//! "#,
//! )
//! .unwrap();
//!
//! let mut env = config.environment().unwrap();
//! let transport = ReqwestTransport::new(&ExecutionConfig::default()).unwrap();
//! let mut reporter = ConsoleReporter::stdout(true);
//!
//! Pipeline::new(&transport, PipelineOptions::default())
//!     .run(&config.requests, &mut env, &mut reporter)
//!     .ok();
//! ```

pub mod config;
pub mod executor;
pub mod formatter;
pub mod models;
pub mod runner;
pub mod variables;

pub use config::{load_config, locate_config, parse_config, ConfigError, CourierConfig};
pub use executor::{execute, ExecutionConfig, ReqwestTransport, RequestError, Transport};
pub use models::{HttpMethod, MaterializedUseCase, ResponseRecord, UseCase};
pub use runner::{Pipeline, PipelineOptions, Reporter, RunMode, RunSummary, UseCaseFailure};
pub use variables::VariableEnvironment;
