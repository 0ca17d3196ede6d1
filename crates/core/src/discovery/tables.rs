//! Parsers for the `state_table` and `processtable` files.
//!
//! Both tables are whitespace-delimited text. Only the columns the walker
//! needs are interpreted: the identifier in column 1 and, for processes,
//! the product state in column 4.

use crate::error::{WalkError, WalkResult};
use std::path::Path;

/// Column count a process row must have.
pub const PROCESS_COLUMNS: usize = 4;

/// Product state value marking a process without a connected product.
pub const UNCONNECTED_PRODUCT: &str = "-1";

/// Parse a state table into its state identifiers, in file order.
///
/// Each non-blank line contributes its first token; the remaining columns
/// (the state energy) are ignored.
pub fn parse_state_table(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// Parse a process table into the identifiers of processes with a valid
/// product, in file order.
///
/// The first physical line is a header and is always skipped. Blank lines
/// are skipped. A row whose fourth column is exactly `-1` is excluded, every
/// other row is included. A row with fewer than four columns is an error.
///
/// `path` is only used to describe errors.
pub fn parse_process_table(content: &str, path: &Path) -> WalkResult<Vec<String>> {
    let mut processes = Vec::new();

    for (index, line) in content.lines().enumerate().skip(1) {
        let columns: Vec<&str> = line.split_whitespace().collect();
        if columns.is_empty() {
            continue;
        }

        if columns.len() < PROCESS_COLUMNS {
            return Err(WalkError::MalformedTable {
                path: path.to_path_buf(),
                line: index + 1,
                expected: PROCESS_COLUMNS,
                found: columns.len(),
            });
        }

        if columns[PROCESS_COLUMNS - 1] != UNCONNECTED_PRODUCT {
            processes.push(columns[0].to_string());
        }
    }

    Ok(processes)
}
