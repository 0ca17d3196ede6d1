//! Slide deck reports.
//!
//! Slides are collected in memory and handed to the configured deck writer
//! (pandoc by default) as slide markdown when the deck is finalized. The
//! writer produces the actual presentation file, optionally starting from a
//! reference deck.

use crate::command::{CommandLine, Placeholders};
use crate::error::{WalkError, WalkResult};
use crate::report::base::ReportRenderer;
use akmc_protocol::{DeckWriterConfig, ProcessRecord, RenderMode, ReportKind};
use async_trait::async_trait;
use log::{debug, info};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

const STILL_PICTURE_INCHES: f32 = 3.0;
const MOVIE_PICTURE_INCHES: f32 = 5.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    pub path: PathBuf,
    pub width_in: f32,
    pub height_in: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub title: String,
    pub pictures: Vec<Picture>,
}

impl Slide {
    /// Build the slide of one record: square pictures, one per artifact.
    pub fn from_record(record: &ProcessRecord) -> Self {
        let size = match record.mode {
            RenderMode::Still => STILL_PICTURE_INCHES,
            RenderMode::Movie => MOVIE_PICTURE_INCHES,
        };

        Self {
            title: format!("State: {} Process: {}", record.state_id, record.process_id),
            pictures: record
                .artifacts
                .iter()
                .map(|artifact| Picture {
                    path: artifact.path.clone(),
                    width_in: size,
                    height_in: size,
                })
                .collect(),
        }
    }

    fn write_markdown(&self, out: &mut String) {
        let _ = writeln!(out, "# {}", escape_text(&self.title));
        out.push('\n');
        for picture in &self.pictures {
            let _ = writeln!(
                out,
                "![](<{}>){{width={}in height={}in}}",
                escape_destination(&picture.path.display().to_string()),
                picture.width_in,
                picture.height_in
            );
        }
        out.push('\n');
    }
}

/// Backslash-escape markdown punctuation in inline text.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '`' | '*' | '_' | '{' | '}' | '[' | ']' | '<' | '>' | '(' | ')' | '#' | '!'
                | '|' | '~' | '^' | '$'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escape a link destination that is wrapped in angle brackets.
fn escape_destination(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    for c in path.chars() {
        if matches!(c, '\\' | '<' | '>') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub struct SlideDeck {
    output: PathBuf,
    template: Option<PathBuf>,
    writer: DeckWriterConfig,
    slides: Vec<Slide>,
    finalized: bool,
}

impl SlideDeck {
    /// Start an empty deck.
    ///
    /// # Errors
    ///
    /// Returns `WalkError::DocumentWrite` if `template` does not exist.
    pub fn new(
        output: &Path,
        template: Option<&Path>,
        writer: DeckWriterConfig,
    ) -> WalkResult<Self> {
        if let Some(template) = template {
            if !template.is_file() {
                return Err(WalkError::document(template, "template not found"));
            }
        }

        Ok(Self {
            output: output.to_path_buf(),
            template: template.map(Path::to_path_buf),
            writer,
            slides: Vec::new(),
            finalized: false,
        })
    }

    /// The deck as slide markdown.
    pub fn markdown(&self) -> String {
        let mut out = String::new();
        for slide in &self.slides {
            slide.write_markdown(&mut out);
        }
        out
    }

    fn command(&self, source: &Path) -> CommandLine {
        let mut placeholders = Placeholders::new()
            .set("source", source.display().to_string())
            .set("output", self.output.display().to_string());

        let mut args = self.writer.args.clone();
        if let Some(template) = &self.template {
            placeholders = placeholders.set("template", template.display().to_string());
            args.extend(self.writer.template_args.iter().cloned());
        }

        CommandLine {
            program: self.writer.program.clone(),
            args: placeholders.expand(&args),
        }
    }
}

#[async_trait]
impl ReportRenderer for SlideDeck {
    async fn emit_record(&mut self, record: &ProcessRecord) -> WalkResult<()> {
        if self.finalized {
            return Err(WalkError::document(&self.output, "deck already finalized"));
        }
        self.slides.push(Slide::from_record(record));
        Ok(())
    }

    async fn finalize(&mut self) -> WalkResult<PathBuf> {
        if self.finalized {
            return Err(WalkError::document(&self.output, "deck already finalized"));
        }

        let source = tempfile::Builder::new()
            .prefix("akmc-slides-")
            .suffix(".md")
            .tempfile()
            .map_err(|e| WalkError::document(&self.output, e))?;
        tokio::fs::write(source.path(), self.markdown())
            .await
            .map_err(|e| WalkError::document(&self.output, e))?;

        let command = self.command(source.path());
        debug!(
            "Writing {} slides with {}",
            self.slides.len(),
            command.program
        );
        command
            .run()
            .await
            .map_err(|e| WalkError::document(&self.output, e))?;

        if !self.output.exists() {
            return Err(WalkError::document(
                &self.output,
                format!("{} did not write the deck", command.program),
            ));
        }

        self.finalized = true;
        info!("Saved {}", self.output.display());
        Ok(self.output.clone())
    }

    fn kind(&self) -> ReportKind {
        ReportKind::Slides
    }
}
