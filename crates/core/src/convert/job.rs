//! Conversion jobs.
//!
//! A job is planned from the layout alone, so the names of every output
//! are known before any external program runs.

use crate::layout::StatesLayout;
use akmc_protocol::{Artifact, ArtifactRole, OutputFormats, RenderMode};
use std::path::PathBuf;

/// One single-frame conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StillConversion {
    pub role: ArtifactRole,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// The frames of an interpolated reaction path.
///
/// The path always has [`ReactionPath::IMAGES`] frames: the reactant, then
/// [`ReactionPath::INTERMEDIATES`] copies of the reactant that the external
/// interpolation routine moves along the path, then the product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionPath {
    pub frames: Vec<PathBuf>,
    pub output: PathBuf,
}

impl ReactionPath {
    pub const INTERMEDIATES: usize = 8;
    pub const IMAGES: usize = Self::INTERMEDIATES + 2;

    pub fn new(reactant: PathBuf, product: PathBuf, output: PathBuf) -> Self {
        let mut frames = Vec::with_capacity(Self::IMAGES);
        frames.push(reactant.clone());
        frames.extend(std::iter::repeat(reactant).take(Self::INTERMEDIATES));
        frames.push(product);
        Self { frames, output }
    }

    pub fn reactant(&self) -> &PathBuf {
        &self.frames[0]
    }

    pub fn product(&self) -> &PathBuf {
        &self.frames[self.frames.len() - 1]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionJob {
    /// Reactant, saddle and product converted independently.
    Still { conversions: Vec<StillConversion> },
    /// Reactant and product interpolated into one multi-frame output.
    Movie(ReactionPath),
}

impl ConversionJob {
    /// Plan the conversion of one process.
    ///
    /// Inputs are `<role>_<process>.<input_extension>` under the state's
    /// `procdata/`; outputs sit beside them with the extension chosen by
    /// `formats` for the mode.
    pub fn plan(
        layout: &StatesLayout,
        state_id: &str,
        process_id: &str,
        mode: RenderMode,
        formats: &OutputFormats,
        input_extension: &str,
    ) -> Self {
        let output_extension = formats.extension(mode);

        match mode {
            RenderMode::Still => Self::Still {
                conversions: ArtifactRole::ENDPOINTS
                    .iter()
                    .map(|&role| StillConversion {
                        role,
                        input: layout.artifact(state_id, process_id, role, input_extension),
                        output: layout.artifact(state_id, process_id, role, output_extension),
                    })
                    .collect(),
            },
            RenderMode::Movie => Self::Movie(ReactionPath::new(
                layout.artifact(state_id, process_id, ArtifactRole::Reactant, input_extension),
                layout.artifact(state_id, process_id, ArtifactRole::Product, input_extension),
                layout.artifact(
                    state_id,
                    process_id,
                    ArtifactRole::Reaction,
                    output_extension,
                ),
            )),
        }
    }

    /// The artifacts this job writes, in report order.
    pub fn outputs(&self) -> Vec<Artifact> {
        match self {
            Self::Still { conversions } => conversions
                .iter()
                .map(|c| Artifact::new(c.role, c.output.clone()))
                .collect(),
            Self::Movie(path) => vec![Artifact::new(ArtifactRole::Reaction, path.output.clone())],
        }
    }
}
