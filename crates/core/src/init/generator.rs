//! Default configuration file generation.

use super::error::{InitError, InitResult};
use crate::config::CONFIG_FILE_NAME;
use crate::templates::{get_template, CONFIG_TEMPLATE};
use std::fs;
use std::path::PathBuf;

/// Options for writing the default configuration.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory where `akmc-tools.toml` will be written.
    pub target_dir: PathBuf,

    /// Overwrite an existing `akmc-tools.toml`.
    pub force: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
        }
    }
}

/// Write the commented default `akmc-tools.toml` into the target directory.
///
/// The target directory is created if needed.
///
/// # Returns
/// The path of the written file, or an `InitError` if:
/// - The file already exists (without force flag)
/// - The embedded template is missing
/// - File system operations fail
pub async fn write_default_config(options: InitOptions) -> InitResult<PathBuf> {
    let target_path = options.target_dir.join(CONFIG_FILE_NAME);

    if target_path.exists() && !options.force {
        return Err(InitError::FileExists(target_path));
    }

    let content = get_template(CONFIG_TEMPLATE)
        .ok_or_else(|| InitError::TemplateNotFound(CONFIG_TEMPLATE.to_string()))?;

    fs::create_dir_all(&options.target_dir).map_err(|source| InitError::DirectoryCreate {
        path: options.target_dir.clone(),
        source,
    })?;

    fs::write(&target_path, content).map_err(|source| InitError::FileWrite {
        path: target_path.clone(),
        source,
    })?;

    Ok(target_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use akmc_protocol::ToolsConfig;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let options = InitOptions {
            target_dir: temp_dir.path().to_path_buf(),
            force: false,
        };

        let path = write_default_config(options).await.unwrap();

        assert_eq!(path, temp_dir.path().join("akmc-tools.toml"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[deck-writer]"));

        // The written file loads back to the defaults
        let config = load_config(temp_dir.path(), None).await.unwrap();
        assert_eq!(config, ToolsConfig::default());
    }

    #[tokio::test]
    async fn test_existing_file_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("akmc-tools.toml");
        fs::write(&existing, "input-extension = \"con\"\n").unwrap();

        let options = InitOptions {
            target_dir: temp_dir.path().to_path_buf(),
            force: false,
        };

        let result = write_default_config(options).await;
        assert!(matches!(result, Err(InitError::FileExists(path)) if path == existing));
        assert_eq!(
            fs::read_to_string(&existing).unwrap(),
            "input-extension = \"con\"\n"
        );
    }

    #[tokio::test]
    async fn test_existing_file_with_force() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("akmc-tools.toml");
        fs::write(&existing, "old").unwrap();

        let options = InitOptions {
            target_dir: temp_dir.path().to_path_buf(),
            force: true,
        };

        write_default_config(options).await.unwrap();
        assert!(fs::read_to_string(&existing).unwrap().contains("[converter.still]"));
    }

    #[tokio::test]
    async fn test_creates_target_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("run").join("analysis");

        let options = InitOptions {
            target_dir: nested.clone(),
            force: false,
        };

        let path = write_default_config(options).await.unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }
}
