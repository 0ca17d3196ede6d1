//! Configuration file loader.
//!
//! The configuration is looked up in this order:
//! 1. An explicit path (`--config`), which must exist
//! 2. `akmc-tools.toml` in the given directory (usually the working directory)
//! 3. Built-in defaults

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use akmc_protocol::{CommandConfig, OutputFormats, ToolsConfig};
use log::debug;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "akmc-tools.toml";

/// Load the tools configuration.
///
/// # Arguments
///
/// * `dir` - Directory searched for `akmc-tools.toml` when no explicit path is given
/// * `explicit` - A configuration file requested by the user
///
/// # Returns
///
/// The loaded and validated `ToolsConfig`, or the defaults if no explicit path
/// was given and `dir` holds no configuration file.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The explicit file, or an existing `akmc-tools.toml`, cannot be read
/// - The file is not valid TOML or has fields of the wrong type
/// - A command has an empty program or a format an empty extension
///
/// # Example
///
/// ```rust,no_run
/// use akmc_core::config::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("."), None).await?;
/// println!("Structures use .{}", config.input_extension);
/// # Ok(())
/// # }
/// ```
pub async fn load_config(dir: &Path, explicit: Option<&Path>) -> ConfigResult<ToolsConfig> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if !candidate.exists() {
                debug!("No {CONFIG_FILE_NAME} in {}, using defaults", dir.display());
                return Ok(ToolsConfig::default());
            }
            candidate
        }
    };

    let content = tokio::fs::read_to_string(&config_path)
        .await
        .map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let config: ToolsConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path.clone(),
            source,
        })?;

    validate_config(&config, &config_path)?;
    debug!("Loaded configuration from {}", config_path.display());

    Ok(config)
}

/// Reject configurations that could never run.
///
/// `path` is only used to describe errors.
pub fn validate_config(config: &ToolsConfig, path: &Path) -> ConfigResult<()> {
    let invalid = |reason: String| ConfigError::InvalidConfig {
        path: path.to_path_buf(),
        reason,
    };

    if config.input_extension.trim().is_empty() {
        return Err(invalid("input-extension must not be empty".to_string()));
    }

    let commands: [(&str, &CommandConfig); 3] = [
        ("converter.still", &config.converter.still),
        ("converter.movie", &config.converter.movie),
        ("viewer", &config.viewer),
    ];
    for (name, command) in commands {
        if command.program.trim().is_empty() {
            return Err(invalid(format!("{name}.program must not be empty")));
        }
    }
    if config.deck_writer.program.trim().is_empty() {
        return Err(invalid("deck-writer.program must not be empty".to_string()));
    }

    let formats: [(&str, &OutputFormats); 3] = [
        ("formats.table", &config.formats.table),
        ("formats.jsmol", &config.formats.jsmol),
        ("formats.slides", &config.formats.slides),
    ];
    for (name, format) in formats {
        if format.still.trim().is_empty() || format.movie.trim().is_empty() {
            return Err(invalid(format!("{name} extensions must not be empty")));
        }
    }
    if config.formats.single.trim().is_empty() {
        return Err(invalid("formats.single must not be empty".to_string()));
    }

    Ok(())
}
