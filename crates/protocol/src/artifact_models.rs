//! Artifact and record models.
//!
//! This module defines the structures describing what the walker produces
//! for every qualifying process: the role of each structure file, the
//! rendering mode, and the record handed to a report renderer.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The role a structure file plays in a reaction process.
///
/// The first three roles are the endpoint files written by the simulation
/// under `procdata/`. `Reaction` is the interpolated multi-frame output
/// produced in movie mode.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactRole {
    Reactant,
    Saddle,
    Product,
    Reaction,
}

impl ArtifactRole {
    /// The three endpoint roles, in the order they appear in a report row.
    pub const ENDPOINTS: [ArtifactRole; 3] = [
        ArtifactRole::Reactant,
        ArtifactRole::Saddle,
        ArtifactRole::Product,
    ];

    /// File name prefix used by the simulation for this role.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Reactant => "reactant",
            Self::Saddle => "saddle",
            Self::Product => "product",
            Self::Reaction => "reaction",
        }
    }

    /// File stem for a process, e.g. `saddle_12`.
    pub fn file_stem(&self, process_id: &str) -> String {
        format!("{}_{}", self.prefix(), process_id)
    }

    /// File name for a process with the given extension, e.g. `saddle_12.con`.
    pub fn file_name(&self, process_id: &str, extension: &str) -> String {
        format!("{}.{}", self.file_stem(process_id), extension)
    }
}

/// How a process is rendered.
///
/// - `Still`: three independent single-frame outputs (reactant, saddle, product)
/// - `Movie`: one multi-frame output interpolated from reactant to product
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Still,
    Movie,
}

impl RenderMode {
    /// Map the `--movies` command-line flag to a mode.
    pub fn from_movies_flag(movies: bool) -> Self {
        if movies {
            Self::Movie
        } else {
            Self::Still
        }
    }

    pub fn is_movie(&self) -> bool {
        matches!(self, Self::Movie)
    }
}

/// A single output file produced for a process.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub role: ArtifactRole,
    pub path: PathBuf,
}

impl Artifact {
    pub fn new(role: ArtifactRole, path: PathBuf) -> Self {
        Self { role, path }
    }
}

/// One entry of the report: a process of a state together with its artifacts.
///
/// In still mode `artifacts` holds the three endpoint outputs in
/// [`ArtifactRole::ENDPOINTS`] order. In movie mode it holds exactly one
/// [`ArtifactRole::Reaction`] output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub state_id: String,
    pub process_id: String,
    pub mode: RenderMode,
    pub artifacts: Vec<Artifact>,
}

impl ProcessRecord {
    /// Look up the artifact with the given role, if the record has one.
    pub fn artifact(&self, role: ArtifactRole) -> Option<&Path> {
        self.artifacts
            .iter()
            .find(|artifact| artifact.role == role)
            .map(|artifact| artifact.path.as_path())
    }
}

/// The kind of report document to assemble.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Plain HTML table with `<IMG>` references.
    Table,
    /// HTML table with embedded JSmol viewers.
    Jsmol,
    /// Slide deck with one slide per process.
    Slides,
}

impl ReportKind {
    /// Report file written to the working directory when no output is given.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Table | Self::Jsmol => "index.html",
            Self::Slides => "states.pptx",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Jsmol => "jsmol",
            Self::Slides => "slides",
        }
    }
}
