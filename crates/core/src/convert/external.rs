//! Converter that delegates to external programs.
//!
//! Still conversions run the configured `converter.still` command once per
//! structure. Reaction paths run `converter.movie` once with every frame
//! source as an argument; by default that is the bundled helper script
//! driving the structure library's path interpolation.

use crate::command::{program_available, CommandLine, Placeholders};
use crate::convert::base::{ConversionError, Converter};
use crate::convert::job::ReactionPath;
use crate::templates::{get_template, REACTION_PATH_SCRIPT};
use akmc_protocol::{CommandConfig, ConverterConfig};
use async_trait::async_trait;
use log::debug;
use std::path::Path;

pub struct ExternalConverter {
    still: CommandConfig,
    movie: CommandConfig,
}

impl ExternalConverter {
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            still: config.still.clone(),
            movie: config.movie.clone(),
        }
    }

    fn still_command(&self, input: &Path, output: &Path) -> CommandLine {
        let placeholders = Placeholders::new()
            .set("input", input.display().to_string())
            .set("output", output.display().to_string());
        CommandLine::from_config(&self.still, &placeholders)
    }

    fn movie_command(&self, path: &ReactionPath) -> Result<CommandLine, ConversionError> {
        let mut placeholders = Placeholders::new()
            .set("output", path.output.display().to_string())
            .set("images", path.frames.len().to_string())
            .set_list(
                "frames",
                path.frames
                    .iter()
                    .map(|frame| frame.display().to_string())
                    .collect(),
            );

        if self
            .movie
            .args
            .iter()
            .any(|arg| arg.contains("{reaction-path-script}"))
        {
            let script = get_template(REACTION_PATH_SCRIPT).ok_or_else(|| {
                ConversionError::NotAvailable(format!(
                    "Embedded template not found: {REACTION_PATH_SCRIPT}"
                ))
            })?;
            placeholders = placeholders.set("reaction-path-script", script);
        }

        Ok(CommandLine::from_config(&self.movie, &placeholders))
    }
}

fn ensure_written(output: &Path) -> Result<(), ConversionError> {
    if output.exists() {
        Ok(())
    } else {
        Err(ConversionError::MissingOutput(output.to_path_buf()))
    }
}

#[async_trait]
impl Converter for ExternalConverter {
    async fn check_availability(&self) -> bool {
        program_available(&self.still.program) && program_available(&self.movie.program)
    }

    async fn convert_file(&self, input: &Path, output: &Path) -> Result<(), ConversionError> {
        debug!("Converting {} -> {}", input.display(), output.display());
        self.still_command(input, output).run().await?;
        ensure_written(output)
    }

    async fn interpolate(&self, path: &ReactionPath) -> Result<(), ConversionError> {
        debug!(
            "Interpolating {} frames -> {}",
            path.frames.len(),
            path.output.display()
        );
        self.movie_command(path)?.run().await?;
        ensure_written(&path.output)
    }
}
