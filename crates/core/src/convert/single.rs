//! Single-structure operations: convert one file, or open it in a viewer.
//!
//! Both take a base file name without extension; the input extension is
//! appended to find the structure.

use crate::command::{CommandLine, Placeholders};
use crate::convert::base::{ConversionError, Converter};
use crate::error::{WalkError, WalkResult};
use akmc_protocol::CommandConfig;
use log::info;
use std::path::{Path, PathBuf};

/// Append an extension to a base name without touching dots already in it.
pub fn with_extension(base: &Path, extension: &str) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

fn require_input(base: &Path, input_extension: &str) -> WalkResult<PathBuf> {
    let input = with_extension(base, input_extension);
    if !input.exists() {
        return Err(WalkError::MissingFile { path: input });
    }
    Ok(input)
}

/// Convert `<base>.<input_extension>` into `<base>.<output_extension>`.
///
/// Returns the path of the written file.
pub async fn convert_single(
    converter: &dyn Converter,
    base: &Path,
    input_extension: &str,
    output_extension: &str,
) -> WalkResult<PathBuf> {
    let input = require_input(base, input_extension)?;
    let output = with_extension(base, output_extension);

    converter
        .convert_file(&input, &output)
        .await
        .map_err(|source| WalkError::Conversion {
            subject: input.display().to_string(),
            source,
        })?;

    info!("Wrote {}", output.display());
    Ok(output)
}

/// Open `<base>.<input_extension>` in the configured viewer and wait for it
/// to close.
pub async fn view_structure(
    viewer: &CommandConfig,
    base: &Path,
    input_extension: &str,
) -> WalkResult<()> {
    let input = require_input(base, input_extension)?;
    let line = CommandLine::from_config(
        viewer,
        &Placeholders::new().set("input", input.display().to_string()),
    );

    line.run_interactive()
        .await
        .map_err(|source| WalkError::Conversion {
            subject: input.display().to_string(),
            source: ConversionError::from(source),
        })
}
