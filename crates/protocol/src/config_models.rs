//! Configuration models for `akmc-tools.toml`.
//!
//! Every external program the tools delegate to (structure conversion,
//! path interpolation, viewing, slide deck writing) is described by a
//! command template. Arguments may contain `{name}` placeholders that are
//! filled in per invocation.

use crate::artifact_models::{RenderMode, ReportKind};
use serde::{Deserialize, Deserializer, Serialize};

/// Represents the settings from `akmc-tools.toml`.
///
/// All fields are optional in the file; missing ones take their defaults.
/// This holds inside tables too: a `[viewer]` table that only sets `args`
/// keeps the default program, and `[formats.table]` with only `still`
/// keeps the table's default movie format.
///
/// # Example
///
/// ```toml
/// input-extension = "con"
///
/// [converter.still]
/// program = "ase"
/// args = ["convert", "-f", "{input}", "{output}"]
///
/// [formats.slides]
/// still = "png"
/// movie = "gif"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct ToolsConfig {
    /// Extension of the structure files written by the simulation.
    pub input_extension: String,

    /// External structure converter.
    pub converter: ConverterConfig,

    /// External structure viewer used by `view`.
    #[serde(deserialize_with = "viewer_command")]
    pub viewer: CommandConfig,

    /// External program that turns slide markdown into the final deck.
    pub deck_writer: DeckWriterConfig,

    /// Output formats per report kind.
    pub formats: FormatsConfig,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            input_extension: "con".to_string(),
            converter: ConverterConfig::default(),
            viewer: default_viewer(),
            deck_writer: DeckWriterConfig::default(),
            formats: FormatsConfig::default(),
        }
    }
}

/// A program together with its argument template.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandConfig {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

/// A command table as written in the file, before defaults are applied.
#[derive(Deserialize, Default)]
#[serde(default)]
struct PartialCommand {
    program: Option<String>,
    args: Option<Vec<String>>,
}

impl PartialCommand {
    fn or(self, default: CommandConfig) -> CommandConfig {
        CommandConfig {
            program: self.program.unwrap_or(default.program),
            args: self.args.unwrap_or(default.args),
        }
    }
}

fn default_viewer() -> CommandConfig {
    CommandConfig::new("ase", &["gui", "{input}"])
}

fn viewer_command<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CommandConfig, D::Error> {
    Ok(PartialCommand::deserialize(deserializer)?.or(default_viewer()))
}

fn still_command<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CommandConfig, D::Error> {
    Ok(PartialCommand::deserialize(deserializer)?.or(ConverterConfig::default().still))
}

fn movie_command<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CommandConfig, D::Error> {
    Ok(PartialCommand::deserialize(deserializer)?.or(ConverterConfig::default().movie))
}

/// Commands used to convert structures.
///
/// `still` converts one structure file into one single-frame output
/// (placeholders `{input}` and `{output}`). `movie` turns a list of frame
/// sources into one interpolated multi-frame output (placeholders
/// `{output}`, `{frames}`, `{images}` and `{reaction-path-script}`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConverterConfig {
    #[serde(deserialize_with = "still_command")]
    pub still: CommandConfig,
    #[serde(deserialize_with = "movie_command")]
    pub movie: CommandConfig,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            still: CommandConfig::new("ase", &["convert", "-f", "{input}", "{output}"]),
            movie: CommandConfig::new(
                "python3",
                &["-c", "{reaction-path-script}", "{output}", "{frames}"],
            ),
        }
    }
}

/// Command used to write the slide deck.
///
/// `template_args` are appended only when a template was given.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct DeckWriterConfig {
    pub program: String,
    pub args: Vec<String>,
    pub template_args: Vec<String>,
}

impl Default for DeckWriterConfig {
    fn default() -> Self {
        Self {
            program: "pandoc".to_string(),
            args: vec![
                "{source}".to_string(),
                "--from".to_string(),
                "markdown".to_string(),
                "-o".to_string(),
                "{output}".to_string(),
            ],
            template_args: vec!["--reference-doc".to_string(), "{template}".to_string()],
        }
    }
}

/// Output file extensions for the two render modes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputFormats {
    pub still: String,
    pub movie: String,
}

impl OutputFormats {
    pub fn new(still: &str, movie: &str) -> Self {
        Self {
            still: still.to_string(),
            movie: movie.to_string(),
        }
    }

    /// Extension used for outputs of the given mode.
    pub fn extension(&self, mode: RenderMode) -> &str {
        match mode {
            RenderMode::Still => &self.still,
            RenderMode::Movie => &self.movie,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PartialFormats {
    still: Option<String>,
    movie: Option<String>,
}

impl PartialFormats {
    fn or(self, default: OutputFormats) -> OutputFormats {
        OutputFormats {
            still: self.still.unwrap_or(default.still),
            movie: self.movie.unwrap_or(default.movie),
        }
    }
}

fn table_formats<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OutputFormats, D::Error> {
    Ok(PartialFormats::deserialize(deserializer)?.or(FormatsConfig::default().table))
}

fn jsmol_formats<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OutputFormats, D::Error> {
    Ok(PartialFormats::deserialize(deserializer)?.or(FormatsConfig::default().jsmol))
}

fn slides_formats<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OutputFormats, D::Error> {
    Ok(PartialFormats::deserialize(deserializer)?.or(FormatsConfig::default().slides))
}

/// Output formats for every report kind plus the single-file converter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FormatsConfig {
    #[serde(deserialize_with = "table_formats")]
    pub table: OutputFormats,
    #[serde(deserialize_with = "jsmol_formats")]
    pub jsmol: OutputFormats,
    #[serde(deserialize_with = "slides_formats")]
    pub slides: OutputFormats,
    pub single: String,
}

impl Default for FormatsConfig {
    fn default() -> Self {
        Self {
            table: OutputFormats::new("png", "gif"),
            jsmol: OutputFormats::new("xyz", "xyz"),
            slides: OutputFormats::new("png", "gif"),
            single: "xyz".to_string(),
        }
    }
}

impl FormatsConfig {
    pub fn for_report(&self, kind: ReportKind) -> &OutputFormats {
        match kind {
            ReportKind::Table => &self.table,
            ReportKind::Jsmol => &self.jsmol,
            ReportKind::Slides => &self.slides,
        }
    }
}
