//! Embedded template files.
//!
//! This module uses `rust-embed` to embed the files of the workspace
//! `templates/` directory into the binary at compile time:
//! - `akmc-tools.toml`: commented default configuration written by `init`
//! - `report/*.html`: default report pages
//! - `scripts/reaction_path.py`: helper handed to the external interpolation
//!   library in movie mode
//!
//! During development with the `debug-embed` feature, files are read from the
//! filesystem at runtime, allowing for quick iteration without recompilation.

use rust_embed::RustEmbed;

/// Embedded template files from the `templates/` directory.
///
/// The path is calculated relative to the crate root:
/// - `CARGO_MANIFEST_DIR` = `crates/core`
/// - `../../templates` = workspace root `templates/`
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
pub struct TemplateAssets;

pub const CONFIG_TEMPLATE: &str = "akmc-tools.toml";
pub const TABLE_PAGE: &str = "report/table.html";
pub const JSMOL_PAGE: &str = "report/jsmol.html";
pub const REACTION_PATH_SCRIPT: &str = "scripts/reaction_path.py";

/// Get template file content by path.
///
/// # Arguments
/// * `path` - Relative path from templates root (e.g., "report/table.html")
///
/// # Returns
/// The file content as a String, or None if the file doesn't exist.
///
/// # Example
/// ```
/// use akmc_core::templates::get_template;
///
/// let config = get_template("akmc-tools.toml").expect("akmc-tools.toml should exist");
/// assert!(config.contains("input-extension"));
/// ```
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}
