//! Sequential execution of use cases.
//!
//! Each use case goes through materialize, execute and bind, in config
//! order, against one shared environment. Writes made by use case N are
//! visible to the templates of use case N+1.
//!
//! In [`RunMode::Normal`] the first failure ends the run. In
//! [`RunMode::Test`] the response is additionally checked against the
//! declared expectations, and a failing use case is reported without
//! stopping the ones after it. Template errors end the run in both modes.

use super::assertions::check_response;
use super::error::{UseCaseError, UseCaseFailure};
use super::materialize::materialize;
use crate::executor::{execute, Transport};
use crate::formatter::json::format_json_pretty;
use crate::models::usecase::{MaterializedUseCase, UseCase};
use crate::variables::{bind, VariableEnvironment};
use serde_json::Value;
use std::collections::BTreeMap;

/// How a run treats responses and failures. Chosen once for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Print each response, stop at the first failure.
    #[default]
    Normal,
    /// Check expectations, report pass/fail per use case, keep going.
    Test,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineOptions {
    pub mode: RunMode,
    /// Pretty-print response bodies as JSON in normal mode.
    pub pretty_json: bool,
}

/// Counts for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Use cases that got past materialization.
    pub executed: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Receives the outcome of each use case as the run progresses.
pub trait Reporter {
    /// Normal mode: the (possibly reformatted) response body.
    fn output(&mut self, prefix: &str, body: &str);

    /// Test mode: every expectation held.
    fn passed(&mut self, prefix: &str);

    /// Any mode: the use case failed.
    fn failed(&mut self, failure: &UseCaseFailure);
}

/// Runs use cases one at a time over a transport.
pub struct Pipeline<'a> {
    transport: &'a dyn Transport,
    options: PipelineOptions,
}

impl<'a> Pipeline<'a> {
    pub fn new(transport: &'a dyn Transport, options: PipelineOptions) -> Self {
        Self { transport, options }
    }

    /// Runs every use case in order.
    ///
    /// Returns the failure that stopped the run, if one did. In test mode a
    /// run with failed use cases still returns `Ok`; check
    /// [`RunSummary::is_success`].
    pub fn run(
        &self,
        usecases: &[UseCase],
        env: &mut VariableEnvironment,
        reporter: &mut dyn Reporter,
    ) -> Result<RunSummary, UseCaseFailure> {
        let mut summary = RunSummary::default();

        for definition in usecases {
            let usecase = match materialize(definition, env) {
                Ok(usecase) => usecase,
                Err(err) => {
                    let failure = UseCaseFailure {
                        prefix: err.partial.prefix(),
                        error: err.into(),
                    };
                    reporter.failed(&failure);
                    return Err(failure);
                }
            };

            let prefix = usecase.prefix();
            log::info!("running {}", prefix);
            summary.executed += 1;

            let result = match self.options.mode {
                RunMode::Normal => self.run_normal(&usecase, env).map(Some),
                RunMode::Test => self.run_test(&usecase, env).map(|()| None),
            };

            match result {
                Ok(Some(output)) => {
                    summary.passed += 1;
                    reporter.output(&prefix, &output);
                }
                Ok(None) => {
                    summary.passed += 1;
                    reporter.passed(&prefix);
                }
                Err(error) => {
                    summary.failed += 1;
                    let stop = self.options.mode == RunMode::Normal || error.is_fatal();
                    let failure = UseCaseFailure { prefix, error };
                    reporter.failed(&failure);
                    if stop {
                        return Err(failure);
                    }
                }
            }
        }

        Ok(summary)
    }

    fn run_normal(
        &self,
        usecase: &MaterializedUseCase,
        env: &mut VariableEnvironment,
    ) -> Result<String, UseCaseError> {
        let (_, body) = self.exchange(usecase, env)?;
        if self.options.pretty_json {
            return format_json_pretty(&body).map_err(UseCaseError::Format);
        }
        Ok(body)
    }

    fn run_test(
        &self,
        usecase: &MaterializedUseCase,
        env: &mut VariableEnvironment,
    ) -> Result<(), UseCaseError> {
        let (status, body) = self.exchange(usecase, env)?;
        check_response(usecase.want_status, &usecase.want_response, status, &body)?;
        Ok(())
    }

    /// Sends the request and applies its bindings. Returns status and body.
    fn exchange(
        &self,
        usecase: &MaterializedUseCase,
        env: &mut VariableEnvironment,
    ) -> Result<(u16, String), UseCaseError> {
        let response = execute(usecase, self.transport)?;
        let body = response.body_text();
        bind_response(&body, &usecase.vars, env)?;
        Ok((response.status_code, body))
    }
}

/// Decodes `body` and applies `bindings` to it.
///
/// With no bindings the body is never parsed, so non-JSON responses pass
/// through untouched.
pub fn bind_response(
    body: &str,
    bindings: &BTreeMap<String, String>,
    env: &mut VariableEnvironment,
) -> Result<(), UseCaseError> {
    if bindings.is_empty() {
        return Ok(());
    }

    let json: Value = serde_json::from_str(body).map_err(|source| UseCaseError::Decode {
        source,
        body: body.to_string(),
    })?;

    bind(&json, bindings, env).map_err(|source| UseCaseError::Bind {
        source,
        body: body.to_string(),
    })
}
