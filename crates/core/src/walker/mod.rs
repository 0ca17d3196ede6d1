//! The result walker.
//!
//! The walker drives one pass over a states directory:
//! `INIT -> (state -> process -> CONVERT -> EMIT_RECORD)* -> FINALIZE`.
//! States and processes are visited in table order, one process at a time,
//! so records reach the renderer in discovery order. The first error aborts
//! the walk; there are no retries and nothing is resumed.

use crate::convert::{ConversionError, ConversionJob, Converter};
use crate::discovery::{self, Discovery, ProcessRef};
use crate::error::{WalkError, WalkResult};
use crate::layout::StatesLayout;
use crate::report::{create_renderer, ReportRenderer};
use crate::state::progress::{
    begin_walk, create_summary, fail_walk, finish_walk, process_converted, record_emitted,
    state_discovered,
};
use akmc_protocol::ipc::WalkEvent;
use akmc_protocol::walk_models::WalkSummary;
use akmc_protocol::{OutputFormats, ProcessRecord, RenderMode, ReportKind, ToolsConfig};
use log::{debug, info};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;
use tokio_stream::StreamExt;

/// How each process is converted and referenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    pub mode: RenderMode,
    /// Extension of the structure files written by the simulation.
    pub input_extension: String,
    /// Output extensions for the report being assembled.
    pub formats: OutputFormats,
    /// When false, no converter runs and records reference the expected
    /// output paths as they are.
    pub convert: bool,
}

pub struct ResultWalker {
    layout: StatesLayout,
    converter: Arc<dyn Converter>,
    options: WalkOptions,
}

impl ResultWalker {
    pub fn new(layout: StatesLayout, converter: Arc<dyn Converter>, options: WalkOptions) -> Self {
        Self {
            layout,
            converter,
            options,
        }
    }

    /// Walk the states directory and feed every record to `renderer`.
    ///
    /// On success the renderer is finalized and the summary is `Finalized`.
    /// On failure `WalkFailed` is emitted, the renderer is left unfinalized
    /// and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A table or an endpoint structure file is missing
    /// - A process table row is malformed
    /// - The converter is unavailable or fails
    /// - The report cannot be written
    pub async fn run(
        &self,
        renderer: &mut dyn ReportRenderer,
        events_tx: &Sender<WalkEvent>,
    ) -> WalkResult<WalkSummary> {
        let mut summary = create_summary(self.layout.root().to_path_buf(), self.options.mode);
        begin_walk(&mut summary, events_tx).await;
        info!(
            "Walking {} ({:?} mode, {} report)",
            self.layout.root().display(),
            self.options.mode,
            renderer.kind().name()
        );

        if let Err(e) = self.walk_records(&mut summary, renderer, events_tx).await {
            fail_walk(&mut summary, events_tx, e.to_string()).await;
            return Err(e);
        }

        match renderer.finalize().await {
            Ok(report) => {
                info!("Wrote {} records to {}", summary.records, report.display());
                finish_walk(&mut summary, events_tx, report).await;
                Ok(summary)
            }
            Err(e) => {
                fail_walk(&mut summary, events_tx, e.to_string()).await;
                Err(e)
            }
        }
    }

    async fn walk_records(
        &self,
        summary: &mut WalkSummary,
        renderer: &mut dyn ReportRenderer,
        events_tx: &Sender<WalkEvent>,
    ) -> WalkResult<()> {
        if self.options.convert && !self.converter.check_availability().await {
            return Err(WalkError::Conversion {
                subject: self.layout.root().display().to_string(),
                source: ConversionError::NotAvailable(
                    "configured converter programs were not found".to_string(),
                ),
            });
        }

        let mut items = discovery::walk(self.layout.clone());
        while let Some(item) = items.next().await {
            match item? {
                Discovery::State {
                    state_id,
                    processes,
                } => {
                    debug!("State {state_id}: {processes} connected processes");
                    state_discovered(summary, events_tx, &state_id, processes).await;
                }
                Discovery::Process(process) => {
                    let record = self.convert_process(&process, events_tx).await?;
                    renderer.emit_record(&record).await?;
                    record_emitted(summary, events_tx, &process.state_id, &process.process_id)
                        .await;
                }
            }
        }

        Ok(())
    }

    async fn convert_process(
        &self,
        process: &ProcessRef,
        events_tx: &Sender<WalkEvent>,
    ) -> WalkResult<ProcessRecord> {
        let ProcessRef {
            state_id,
            process_id,
        } = process;

        for input in self
            .layout
            .endpoints(state_id, process_id, &self.options.input_extension)
        {
            if !input.is_file() {
                return Err(WalkError::MissingFile { path: input });
            }
        }

        let job = ConversionJob::plan(
            &self.layout,
            state_id,
            process_id,
            self.options.mode,
            &self.options.formats,
            &self.options.input_extension,
        );

        let artifacts = if self.options.convert {
            let artifacts =
                self.converter
                    .convert(&job)
                    .await
                    .map_err(|source| WalkError::Conversion {
                        subject: format!("state {state_id} process {process_id}"),
                        source,
                    })?;
            process_converted(events_tx, state_id, process_id, &artifacts).await;
            artifacts
        } else {
            job.outputs()
        };

        Ok(ProcessRecord {
            state_id: state_id.clone(),
            process_id: process_id.clone(),
            mode: self.options.mode,
            artifacts,
        })
    }
}

/// Everything needed to assemble one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// The states directory (where `state_table` lives).
    pub root: PathBuf,
    pub mode: RenderMode,
    pub kind: ReportKind,
    /// User page or reference deck to start from.
    pub template: Option<PathBuf>,
    /// Report path; defaults to the kind's file name in the working directory.
    pub output: Option<PathBuf>,
    /// Run the converter for every process.
    pub convert: bool,
}

impl ReportRequest {
    pub fn new(root: impl Into<PathBuf>, kind: ReportKind, mode: RenderMode) -> Self {
        Self {
            root: root.into(),
            mode,
            kind,
            template: None,
            output: None,
            convert: true,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.kind.default_file_name()))
    }
}

/// Build the renderer and walker for a request and run the walk.
///
/// # Example
///
/// ```no_run
/// use akmc_core::convert::ExternalConverter;
/// use akmc_core::walker::{assemble_report, ReportRequest};
/// use akmc_protocol::{RenderMode, ReportKind, ToolsConfig};
/// use std::sync::Arc;
/// use tokio::sync::mpsc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ToolsConfig::default();
/// let converter = Arc::new(ExternalConverter::new(&config.converter));
/// let request = ReportRequest::new("states", ReportKind::Table, RenderMode::Still);
/// let (tx, _rx) = mpsc::channel(100);
///
/// let summary = assemble_report(&request, &config, converter, &tx).await?;
/// println!("{} records", summary.records);
/// # Ok(())
/// # }
/// ```
pub async fn assemble_report(
    request: &ReportRequest,
    config: &ToolsConfig,
    converter: Arc<dyn Converter>,
    events_tx: &Sender<WalkEvent>,
) -> WalkResult<WalkSummary> {
    let output = request.output_path();
    let mut renderer = create_renderer(
        request.kind,
        &output,
        request.template.as_deref(),
        config,
    )
    .await?;

    let walker = ResultWalker::new(
        StatesLayout::new(request.root.clone()),
        converter,
        WalkOptions {
            mode: request.mode,
            input_extension: config.input_extension.clone(),
            formats: config.formats.for_report(request.kind).clone(),
            convert: request.convert,
        },
    );

    walker.run(renderer.as_mut(), events_tx).await
}
