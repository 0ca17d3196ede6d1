//! Custom assertion helpers for walk tests.

use akmc_protocol::ipc::WalkEvent;
use tokio::sync::mpsc;

/// Drain every event from a channel whose senders have been dropped.
pub async fn collect_events(mut rx: mpsc::Receiver<WalkEvent>) -> Vec<WalkEvent> {
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    events
}

/// Assert that a walk started first and finished last.
#[allow(dead_code)]
pub fn assert_completed_sequence(events: &[WalkEvent]) {
    if events.is_empty() {
        panic!("Event sequence is empty");
    }

    assert!(
        matches!(events[0], WalkEvent::WalkStarted { .. }),
        "First event should be WalkStarted, got: {:?}",
        events[0]
    );

    let last = events.last().unwrap();
    assert!(
        matches!(last, WalkEvent::WalkFinished { .. }),
        "Last event should be WalkFinished, got: {:?}",
        last
    );
}

/// The failure reason, if the walk failed.
#[allow(dead_code)]
pub fn failure_reason(events: &[WalkEvent]) -> Option<&str> {
    events.iter().find_map(|e| match e {
        WalkEvent::WalkFailed { reason } => Some(reason.as_str()),
        _ => None,
    })
}

/// (state, process) pairs of the emitted records, in emission order.
#[allow(dead_code)]
pub fn record_order(events: &[WalkEvent]) -> Vec<(String, String)> {
    events
        .iter()
        .filter_map(|e| match e {
            WalkEvent::RecordEmitted {
                state_id,
                process_id,
                ..
            } => Some((state_id.clone(), process_id.clone())),
            _ => None,
        })
        .collect()
}
