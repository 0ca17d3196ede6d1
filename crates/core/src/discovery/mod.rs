//! State and process discovery.
//!
//! States come from `<root>/state_table`, processes from
//! `<root>/<state>/processtable`. Only processes with a connected product
//! state are reported.

pub mod tables;

use crate::error::{WalkError, WalkResult};
use crate::layout::StatesLayout;
use log::debug;
use std::path::Path;
use std::pin::Pin;
use tokio_stream::Stream;

pub use tables::{parse_process_table, parse_state_table};

/// A qualifying process of a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRef {
    pub state_id: String,
    pub process_id: String,
}

/// An item of the discovery walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// A state and the number of qualifying processes that follow it.
    State { state_id: String, processes: usize },
    Process(ProcessRef),
}

async fn read_table(path: &Path) -> WalkResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| WalkError::from_io(path.to_path_buf(), source))
}

/// List the state identifiers of a states directory, in table order.
///
/// # Errors
///
/// Returns `WalkError::MissingFile` if `state_table` does not exist.
pub async fn list_states(layout: &StatesLayout) -> WalkResult<Vec<String>> {
    let path = layout.state_table();
    let content = read_table(&path).await?;
    let states = parse_state_table(&content);
    debug!("Found {} states in {}", states.len(), path.display());
    Ok(states)
}

/// List the processes of a state that have a valid product, in table order.
///
/// # Errors
///
/// Returns `WalkError::MissingFile` if the state's `processtable` does not
/// exist and `WalkError::MalformedTable` if a row has fewer than four
/// columns.
pub async fn list_processes(layout: &StatesLayout, state_id: &str) -> WalkResult<Vec<String>> {
    let path = layout.process_table(state_id);
    let content = read_table(&path).await?;
    let processes = parse_process_table(&content, &path)?;
    debug!(
        "Found {} connected processes for state {}",
        processes.len(),
        state_id
    );
    Ok(processes)
}

/// Walk all states and their qualifying processes.
///
/// The stream is lazy: a state's process table is read only when the walk
/// reaches that state. Items arrive in state-then-process order. The first
/// error is yielded as the last item.
///
/// # Example
///
/// ```no_run
/// use akmc_core::discovery::{walk, Discovery};
/// use akmc_core::layout::StatesLayout;
/// use tokio_stream::StreamExt;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let layout = StatesLayout::new("states");
/// let mut items = walk(layout);
/// while let Some(item) = items.next().await {
///     if let Discovery::Process(process) = item? {
///         println!("{} / {}", process.state_id, process.process_id);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub fn walk(layout: StatesLayout) -> Pin<Box<dyn Stream<Item = WalkResult<Discovery>> + Send>> {
    let stream = async_stream::try_stream! {
        let states = list_states(&layout).await?;

        for state_id in states {
            let processes = list_processes(&layout, &state_id).await?;

            yield Discovery::State {
                state_id: state_id.clone(),
                processes: processes.len(),
            };

            for process_id in processes {
                yield Discovery::Process(ProcessRef {
                    state_id: state_id.clone(),
                    process_id,
                });
            }
        }
    };

    Box::pin(stream)
}
