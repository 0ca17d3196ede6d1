//! Walk lifecycle transitions.
//!
//! Each function updates a [`WalkSummary`] and emits the matching
//! [`WalkEvent`]. A dropped receiver is not an error: the walk carries on
//! without anyone listening.

use akmc_protocol::ipc::WalkEvent;
use akmc_protocol::walk_models::{WalkStatus, WalkSummary};
use akmc_protocol::{Artifact, RenderMode};
use chrono::Utc;
use std::path::PathBuf;
use tokio::sync::mpsc::Sender;

/// Create a new summary with Init status.
pub fn create_summary(root: PathBuf, mode: RenderMode) -> WalkSummary {
    WalkSummary {
        root,
        mode,
        status: WalkStatus::Init,
        states: 0,
        records: 0,
        started_at: Utc::now(),
        finished_at: None,
        report: None,
    }
}

/// Transition to Walking and emit `WalkStarted`.
pub async fn begin_walk(summary: &mut WalkSummary, events_tx: &Sender<WalkEvent>) {
    summary.status = WalkStatus::Walking;
    let _ = events_tx
        .send(WalkEvent::WalkStarted {
            root: summary.root.clone(),
            mode: summary.mode,
        })
        .await;
}

/// Count a state read from the state table and emit `StateDiscovered`.
///
/// # Arguments
///
/// * `summary` - The running walk
/// * `events_tx` - Channel to send the event
/// * `state_id` - The state identifier
/// * `process_count` - Qualifying processes of the state
pub async fn state_discovered(
    summary: &mut WalkSummary,
    events_tx: &Sender<WalkEvent>,
    state_id: &str,
    process_count: usize,
) {
    summary.states += 1;
    let _ = events_tx
        .send(WalkEvent::StateDiscovered {
            state_id: state_id.to_string(),
            process_count,
        })
        .await;
}

pub async fn process_converted(
    events_tx: &Sender<WalkEvent>,
    state_id: &str,
    process_id: &str,
    artifacts: &[Artifact],
) {
    let _ = events_tx
        .send(WalkEvent::ProcessConverted {
            state_id: state_id.to_string(),
            process_id: process_id.to_string(),
            artifacts: artifacts.iter().map(|a| a.path.clone()).collect(),
        })
        .await;
}

/// Count an appended record and emit `RecordEmitted` with its zero-based index.
pub async fn record_emitted(
    summary: &mut WalkSummary,
    events_tx: &Sender<WalkEvent>,
    state_id: &str,
    process_id: &str,
) {
    let index = summary.records;
    summary.records += 1;
    let _ = events_tx
        .send(WalkEvent::RecordEmitted {
            state_id: state_id.to_string(),
            process_id: process_id.to_string(),
            index,
        })
        .await;
}

/// Mark the walk as finalized and emit `WalkFinished`.
///
/// # Arguments
///
/// * `summary` - The walk to complete
/// * `events_tx` - Channel to send the event
/// * `report` - The saved report document
pub async fn finish_walk(
    summary: &mut WalkSummary,
    events_tx: &Sender<WalkEvent>,
    report: PathBuf,
) {
    summary.status = WalkStatus::Finalized;
    summary.finished_at = Some(Utc::now());
    summary.report = Some(report.clone());
    let _ = events_tx
        .send(WalkEvent::WalkFinished {
            records: summary.records,
            report,
        })
        .await;
}

/// Mark the walk as failed and emit `WalkFailed`.
pub async fn fail_walk(summary: &mut WalkSummary, events_tx: &Sender<WalkEvent>, reason: String) {
    summary.status = WalkStatus::Failed;
    summary.finished_at = Some(Utc::now());
    let _ = events_tx.send(WalkEvent::WalkFailed { reason }).await;
}
