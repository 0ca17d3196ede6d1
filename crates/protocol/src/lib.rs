//! # akmc-protocol
//!
//! Shared data models for the AKMC result tools.
//!
//! This crate defines the structures exchanged between the walker, the
//! report renderers and the command-line front end:
//! - Artifact roles, render modes and process records
//! - The `akmc-tools.toml` configuration model
//! - Progress events emitted during a walk
//! - Walk status and summary
//!
//! ## Modules
//!
//! - [`artifact_models`]: Artifact roles, records and report kinds
//! - [`config_models`]: Configuration file structures
//! - [`ipc`]: Progress events sent by the walker
//! - [`walk_models`]: Walk status and summary
//!
//! ## Design Principles
//!
//! - Minimal dependencies: only serde and chrono
//! - Independent compilation: no dependencies on other akmc crates

pub mod artifact_models;
pub mod config_models;
pub mod ipc;
pub mod walk_models;

// Re-export all public types for convenience
pub use artifact_models::*;
pub use config_models::*;
pub use ipc::*;
pub use walk_models::*;
