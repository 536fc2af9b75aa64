//! Output formatting.
//!
//! - **json**: pretty-printing of JSON response bodies
//! - **console**: colored terminal reporter for pipeline runs

pub mod console;
pub mod json;

pub use console::{paint, Color, ConsoleReporter};
pub use json::format_json_pretty;
