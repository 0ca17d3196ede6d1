//! Base ReportRenderer trait and the renderer factory.

use crate::error::WalkResult;
use crate::report::html::{HtmlFlavor, HtmlReport};
use crate::report::slides::SlideDeck;
use akmc_protocol::{ProcessRecord, ReportKind, ToolsConfig};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// A report document that receives one record per process.
///
/// Records arrive in discovery order and must appear in the document in
/// that order. After `finalize` the renderer must not be used again.
#[async_trait]
pub trait ReportRenderer: Send {
    /// Append one record.
    async fn emit_record(&mut self, record: &ProcessRecord) -> WalkResult<()>;

    /// Complete and save the document, returning its path.
    async fn finalize(&mut self) -> WalkResult<PathBuf>;

    fn kind(&self) -> ReportKind;
}

/// Create the renderer for a report kind.
///
/// # Arguments
///
/// * `kind` - Which document to produce
/// * `output` - Where the finished document is written
/// * `template` - A user page (HTML kinds) or reference deck (slides)
/// * `config` - Supplies the deck writer command for slides
///
/// # Errors
///
/// Returns `WalkError::DocumentWrite` if the template cannot be used or the
/// output cannot be created.
pub async fn create_renderer(
    kind: ReportKind,
    output: &Path,
    template: Option<&Path>,
    config: &ToolsConfig,
) -> WalkResult<Box<dyn ReportRenderer>> {
    match kind {
        ReportKind::Table => {
            let report = HtmlReport::create(HtmlFlavor::Table, output, template).await?;
            Ok(Box::new(report))
        }
        ReportKind::Jsmol => {
            let report = HtmlReport::create(HtmlFlavor::Jsmol, output, template).await?;
            Ok(Box::new(report))
        }
        ReportKind::Slides => {
            let deck = SlideDeck::new(output, template, config.deck_writer.clone())?;
            Ok(Box::new(deck))
        }
    }
}
