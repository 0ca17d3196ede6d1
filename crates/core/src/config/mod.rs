//! Configuration loading and management.
//!
//! This module loads `akmc-tools.toml`, which describes the external
//! programs the tools delegate to and the output formats per report kind.

pub mod error;
pub mod loader;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, validate_config, CONFIG_FILE_NAME};
