//! Common test utilities and helpers for integration tests.
//!
//! This module provides shared functionality across the walk tests:
//! - States directory fixtures
//! - Event assertions
//! - Event collection

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

/// Initialise test logging once per binary.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
