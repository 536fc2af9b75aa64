//! HTTP request executor.
//!
//! The executor applies the optional pre-send delay and hands the
//! materialized use case to a [`Transport`]. The transport is the only place
//! that touches the network; [`ReqwestTransport`] is the production one and
//! tests substitute their own.

pub mod config;
pub mod error;
pub mod native;

pub use config::ExecutionConfig;
pub use error::RequestError;
pub use native::ReqwestTransport;

use crate::models::response::ResponseRecord;
use crate::models::usecase::MaterializedUseCase;
use std::thread;
use std::time::Duration;

/// Sends one request and returns the complete response.
///
/// Implementations block until the whole body has been read.
pub trait Transport {
    fn send(&self, usecase: &MaterializedUseCase) -> Result<ResponseRecord, RequestError>;
}

/// Executes a materialized use case.
///
/// Sleeps for the configured delay first, then dispatches exactly once.
pub fn execute(
    usecase: &MaterializedUseCase,
    transport: &dyn Transport,
) -> Result<ResponseRecord, RequestError> {
    if usecase.delay > 0 {
        log::debug!("{}: waiting {}s before sending", usecase.prefix(), usecase.delay);
        thread::sleep(Duration::from_secs(usecase.delay));
    }

    log::debug!("{}: sending", usecase.prefix());
    let response = transport.send(usecase)?;
    log::debug!(
        "{}: status {} ({} bytes of {} in {:?})",
        usecase.prefix(),
        response.status_code,
        response.body.len(),
        response.content_type().unwrap_or("unknown type"),
        response.duration
    );
    if !response.is_success() {
        log::info!("{}: server answered {}", usecase.prefix(), response.status_code);
    }

    Ok(response)
}
