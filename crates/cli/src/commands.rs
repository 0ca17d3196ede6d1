//! Subcommand handlers.

use crate::printer;
use crate::ReportArgs;
use akmc_core::config::load_config;
use akmc_core::convert::{convert_single, view_structure, Converter, ExternalConverter};
use akmc_core::init::{write_default_config, InitOptions};
use akmc_core::walker::{assemble_report, ReportRequest};
use akmc_protocol::{RenderMode, ReportKind, ToolsConfig};
use color_eyre::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;

const EVENT_BUFFER: usize = 100;

/// Load the configuration relative to the working directory.
pub async fn load(explicit: Option<&Path>) -> Result<ToolsConfig> {
    let cwd = std::env::current_dir()?;
    Ok(load_config(&cwd, explicit).await?)
}

pub async fn con2xyz(config: &ToolsConfig, filename: &Path, format: Option<&str>) -> Result<()> {
    let extension = format.unwrap_or(config.formats.single.as_str());
    let converter = ExternalConverter::new(&config.converter);

    let output =
        convert_single(&converter, filename, &config.input_extension, extension).await?;
    eprintln!("{} {}", "Wrote".green(), output.display());
    Ok(())
}

pub async fn view(config: &ToolsConfig, filename: &Path) -> Result<()> {
    view_structure(&config.viewer, filename, &config.input_extension).await?;
    Ok(())
}

pub async fn report(config: &ToolsConfig, kind: ReportKind, args: ReportArgs) -> Result<()> {
    let request = ReportRequest {
        root: args.pathname,
        mode: RenderMode::from_movies_flag(args.movies),
        kind,
        template: args.template,
        output: args.output,
        convert: !args.no_convert,
    };
    let converter: Arc<dyn Converter> = Arc::new(ExternalConverter::new(&config.converter));

    let (events_tx, events_rx) = mpsc::channel(EVENT_BUFFER);
    let printer = tokio::spawn(printer::print_events(events_rx));

    let result = assemble_report(&request, config, converter, &events_tx).await;
    drop(events_tx);
    let _ = printer.await;

    let summary = result?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

pub async fn init(dir: Option<PathBuf>, force: bool) -> Result<()> {
    let target_dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let path = write_default_config(InitOptions { target_dir, force }).await?;
    eprintln!("{} {}", "Created".green(), path.display());
    Ok(())
}
