//! Integration tests for courier
//!
//! Shared setup for the pipeline tests in this directory.

pub mod end_to_end_test;
pub mod request_chaining_test;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test logging (run once). Set `RUST_LOG=debug` to see the
/// executor's per-request lines.
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
