//! Initialization of a working directory.
//!
//! Writes a commented `akmc-tools.toml` listing every setting with its
//! default value, ready to be edited.
//!
//! # Example
//!
//! ```no_run
//! use akmc_core::init::{write_default_config, InitOptions};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     target_dir: PathBuf::from("."),
//!     force: false,
//! };
//!
//! let path = write_default_config(options).await?;
//! println!("Wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;

pub use error::{InitError, InitResult};
pub use generator::{write_default_config, InitOptions};
