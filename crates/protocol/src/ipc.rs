//! Progress events emitted by the result walker.
//!
//! The walker sends these over a channel while it runs so a front end (the
//! CLI printer, a test harness) can follow the walk without sharing state
//! with it.
//!
//! Uses tagged enum serialization:
//! ```json
//! {
//!   "type": "recordEmitted",
//!   "payload": { "state_id": "0", "process_id": "3", "index": 0 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::artifact_models::RenderMode;

/// Events sent from the walker to whoever is listening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum WalkEvent {
    /// The walk over a states directory has begun.
    WalkStarted { root: PathBuf, mode: RenderMode },

    /// A state was read from the state table together with the number of
    /// processes in it that have a valid product.
    StateDiscovered {
        state_id: String,
        process_count: usize,
    },

    /// The external converter produced the artifacts of a process.
    ProcessConverted {
        state_id: String,
        process_id: String,
        artifacts: Vec<PathBuf>,
    },

    /// A record was appended to the report. `index` is zero-based.
    RecordEmitted {
        state_id: String,
        process_id: String,
        index: usize,
    },

    /// The report was finalized.
    WalkFinished { records: usize, report: PathBuf },

    /// The walk aborted.
    WalkFailed { reason: String },
}
