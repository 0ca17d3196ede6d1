//! Walk state models.
//!
//! A walk moves through a single linear lifecycle:
//! Init -> Walking -> Finalized, or Failed from any point after Init.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::artifact_models::RenderMode;

/// Lifecycle status of a walk.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalkStatus {
    /// Created, nothing read yet.
    Init,

    /// Enumerating states and processes, converting and emitting records.
    Walking,

    /// Every record was emitted and the report document was saved.
    Finalized,

    /// An error aborted the walk. The report may be incomplete.
    Failed,
}

/// Bookkeeping for one walk over a states directory.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WalkSummary {
    /// Root of the states directory (where `state_table` lives).
    pub root: PathBuf,

    pub mode: RenderMode,

    pub status: WalkStatus,

    /// Number of states read from the state table so far.
    pub states: usize,

    /// Number of records appended to the report so far.
    pub records: usize,

    pub started_at: DateTime<Utc>,

    pub finished_at: Option<DateTime<Utc>>,

    /// The finalized report document. Only set once `status` is `Finalized`.
    pub report: Option<PathBuf>,
}
