//! Walk state management.
//!
//! This module provides the lifecycle transitions of a walk and the
//! progress events emitted with each of them.

pub mod progress;
