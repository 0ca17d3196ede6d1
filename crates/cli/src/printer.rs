//! Progress output on stderr.

use akmc_protocol::ipc::WalkEvent;
use akmc_protocol::RenderMode;
use colored::Colorize;
use tokio::sync::mpsc::Receiver;

/// Print events until every sender is dropped.
pub async fn print_events(mut events_rx: Receiver<WalkEvent>) {
    while let Some(event) = events_rx.recv().await {
        print_event(&event);
    }
}

fn print_event(event: &WalkEvent) {
    match event {
        WalkEvent::WalkStarted { root, mode } => {
            let mode = match mode {
                RenderMode::Still => "stills",
                RenderMode::Movie => "movies",
            };
            eprintln!("{} {} ({mode})", "Walking".bold(), root.display());
        }
        WalkEvent::StateDiscovered {
            state_id,
            process_count,
        } => {
            eprintln!(
                "  {} {state_id}: {process_count} connected processes",
                "state".cyan()
            );
        }
        WalkEvent::ProcessConverted {
            state_id,
            process_id,
            artifacts,
        } => {
            log::debug!(
                "Converted state {state_id} process {process_id} into {} files",
                artifacts.len()
            );
        }
        WalkEvent::RecordEmitted {
            state_id,
            process_id,
            index,
        } => {
            eprintln!(
                "    {} #{index} state {state_id} process {process_id}",
                "record".green()
            );
        }
        WalkEvent::WalkFinished { records, report } => {
            eprintln!(
                "{} {records} records written to {}",
                "Done".green().bold(),
                report.display()
            );
        }
        WalkEvent::WalkFailed { reason } => {
            eprintln!("{} {reason}", "Failed".red().bold());
        }
    }
}
