//! HTML table reports.
//!
//! A page is split at [`RECORDS_MARKER`]. Everything before the marker is
//! written when the report is created, one `<TR>` row is appended per
//! record, and the rest of the page is written on finalize.

use crate::error::{WalkError, WalkResult};
use crate::report::base::ReportRenderer;
use crate::templates::{get_template, JSMOL_PAGE, TABLE_PAGE};
use akmc_protocol::{ProcessRecord, RenderMode, ReportKind};
use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

/// Line of a page template where the record rows are inserted.
pub const RECORDS_MARKER: &str = "<!-- records -->";

const STILL_APPLET_SIZE: u32 = 200;
const MOVIE_APPLET_SIZE: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlFlavor {
    /// `<IMG>` tags pointing at rendered images.
    Table,
    /// JSmol applets loading structure files.
    Jsmol,
}

impl HtmlFlavor {
    fn default_page(&self) -> &'static str {
        match self {
            Self::Table => TABLE_PAGE,
            Self::Jsmol => JSMOL_PAGE,
        }
    }

    fn kind(&self) -> ReportKind {
        match self {
            Self::Table => ReportKind::Table,
            Self::Jsmol => ReportKind::Jsmol,
        }
    }
}

pub struct HtmlReport {
    flavor: HtmlFlavor,
    output: PathBuf,
    tail: String,
    writer: Option<BufWriter<File>>,
}

impl HtmlReport {
    /// Create the report file and write the head of the page.
    ///
    /// `template` replaces the embedded page of the flavour; it must contain
    /// the records marker.
    pub async fn create(
        flavor: HtmlFlavor,
        output: &Path,
        template: Option<&Path>,
    ) -> WalkResult<Self> {
        let page = match template {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| WalkError::document(path, format!("cannot read template: {e}")))?,
            None => get_template(flavor.default_page()).ok_or_else(|| {
                WalkError::document(
                    output,
                    format!("embedded page not found: {}", flavor.default_page()),
                )
            })?,
        };

        let (head, tail) = split_page(&page).ok_or_else(|| {
            WalkError::document(
                template.unwrap_or(output),
                format!("page has no {RECORDS_MARKER} marker"),
            )
        })?;

        let file = File::create(output)
            .await
            .map_err(|e| WalkError::document(output, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(head.as_bytes())
            .await
            .map_err(|e| WalkError::document(output, e))?;

        debug!("Started {} report {}", flavor.kind().name(), output.display());

        Ok(Self {
            flavor,
            output: output.to_path_buf(),
            tail: tail.to_string(),
            writer: Some(writer),
        })
    }

    fn row(&self, record: &ProcessRecord) -> String {
        let cells: Vec<String> = record
            .artifacts
            .iter()
            .map(|artifact| {
                let path = artifact.path.display().to_string();
                match self.flavor {
                    HtmlFlavor::Table => format!("<IMG SRC=\"{}\">", escape_html(&path)),
                    HtmlFlavor::Jsmol => {
                        let size = match record.mode {
                            RenderMode::Still => STILL_APPLET_SIZE,
                            RenderMode::Movie => MOVIE_APPLET_SIZE,
                        };
                        format!(
                            "<script>jmolApplet({size},\"load {}\",\"0\")</script>",
                            escape_script(&path)
                        )
                    }
                }
            })
            .collect();

        let mut row = format!(
            "<TR><TD>{}</TD><TD>{}</TD>",
            escape_html(&record.state_id),
            escape_html(&record.process_id)
        );
        for cell in cells {
            row.push_str("<TD>");
            row.push_str(&cell);
            row.push_str("</TD>");
        }
        row.push_str("</TR>\n");
        row
    }

    fn writer(&mut self) -> WalkResult<&mut BufWriter<File>> {
        let output = &self.output;
        self.writer
            .as_mut()
            .ok_or_else(|| WalkError::document(output, "report already finalized"))
    }
}

#[async_trait]
impl ReportRenderer for HtmlReport {
    async fn emit_record(&mut self, record: &ProcessRecord) -> WalkResult<()> {
        let row = self.row(record);
        let output = self.output.clone();
        self.writer()?
            .write_all(row.as_bytes())
            .await
            .map_err(|e| WalkError::document(&output, e))
    }

    async fn finalize(&mut self) -> WalkResult<PathBuf> {
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| WalkError::document(&self.output, "report already finalized"))?;

        writer
            .write_all(self.tail.as_bytes())
            .await
            .map_err(|e| WalkError::document(&self.output, e))?;
        writer
            .flush()
            .await
            .map_err(|e| WalkError::document(&self.output, e))?;

        Ok(self.output.clone())
    }

    fn kind(&self) -> ReportKind {
        self.flavor.kind()
    }
}

/// Split a page at the records marker, dropping the marker line.
fn split_page(page: &str) -> Option<(&str, &str)> {
    let start = page.find(RECORDS_MARKER)?;
    let head = &page[..start];
    let rest = &page[start + RECORDS_MARKER.len()..];
    let tail = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .unwrap_or(rest);
    Some((head, tail))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape text placed inside a double-quoted string of an inline script.
fn escape_script(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '<' => escaped.push_str("\\x3C"),
            _ => escaped.push(c),
        }
    }
    escaped
}
