//! Base Converter trait and supporting types.

use crate::command::CommandError;
use crate::convert::job::{ConversionJob, ReactionPath};
use akmc_protocol::Artifact;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Converter not available: {0}")]
    NotAvailable(String),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Converter reported success but did not write {0}")]
    MissingOutput(PathBuf),

    #[error("Conversion rejected: {0}")]
    Rejected(String),
}

/// A structure conversion back end.
///
/// Implementations provide the two primitives; [`Converter::convert`] runs a
/// planned job through them in order.
#[async_trait]
pub trait Converter: Send + Sync {
    async fn check_availability(&self) -> bool;

    /// Convert one structure file into one single-frame output.
    async fn convert_file(&self, input: &Path, output: &Path) -> Result<(), ConversionError>;

    /// Interpolate a reaction path and write it as one multi-frame output.
    async fn interpolate(&self, path: &ReactionPath) -> Result<(), ConversionError>;

    /// Run a job and return the artifacts it produced.
    async fn convert(&self, job: &ConversionJob) -> Result<Vec<Artifact>, ConversionError> {
        match job {
            ConversionJob::Still { conversions } => {
                for conversion in conversions {
                    self.convert_file(&conversion.input, &conversion.output)
                        .await?;
                }
            }
            ConversionJob::Movie(path) => self.interpolate(path).await?,
        }
        Ok(job.outputs())
    }
}
