//! Data models for use cases and responses.
//!
//! This module contains the core data structures that flow through the
//! pipeline: request definitions, their materialized form, and responses.

pub mod request;
pub mod response;
pub mod usecase;

pub use request::HttpMethod;
pub use response::ResponseRecord;
pub use usecase::{MaterializedUseCase, UseCase};
