//! # akmc-core
//!
//! Result walking and report assembly for AKMC simulation runs.
//!
//! This crate provides:
//! - Discovery of states and connected processes from the run's tables
//! - Structure conversion delegated to configurable external programs
//! - HTML and slide deck report renderers
//! - The result walker tying discovery, conversion and rendering together
//! - Configuration loading from `akmc-tools.toml`
//!
//! ## Modules
//!
//! - [`layout`]: Paths of tables and structure files in a states directory
//! - [`discovery`]: State and process enumeration
//! - [`command`]: External command expansion and execution
//! - [`convert`]: Converter trait, external and mock implementations
//! - [`report`]: Report renderers
//! - [`walker`]: The result walker and report assembly entry point
//! - [`state`]: Walk lifecycle and progress events
//! - [`config`]: Configuration loading and validation
//! - [`init`]: Default configuration generation
//! - [`templates`]: Embedded pages, scripts and configuration

pub mod command;
pub mod config;
pub mod convert;
pub mod discovery;
pub mod error;
pub mod init;
pub mod layout;
pub mod report;
pub mod state;
pub mod templates;
pub mod walker;

pub use error::{WalkError, WalkResult};
