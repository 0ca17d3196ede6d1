//! `akmc-tools`: convert AKMC structures and assemble result reports.

mod commands;
mod printer;

use akmc_protocol::ReportKind;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "akmc-tools", version)]
#[command(about = "Convert AKMC structures and assemble reports of discovered processes", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./akmc-tools.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one structure file, e.g. `reactant_0` -> `reactant_0.xyz`
    Con2xyz {
        /// Base filename without the input extension
        filename: PathBuf,

        /// Output extension (defaults to formats.single)
        #[arg(long)]
        format: Option<String>,
    },
    /// Open one structure file in the configured viewer
    View {
        /// Base filename without the input extension
        filename: PathBuf,
    },
    /// HTML table of rendered images for every connected process
    Html(ReportArgs),
    /// HTML page with JSmol viewers for every connected process
    Html5(ReportArgs),
    /// Slide deck with one slide per connected process
    Pptx(ReportArgs),
    /// Write a commented default akmc-tools.toml
    Init {
        /// Directory to write into (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Overwrite an existing akmc-tools.toml
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone)]
struct ReportArgs {
    /// The states directory, i.e. where the file "state_table" lives
    pathname: PathBuf,

    /// Generate movies of the reaction processes
    #[arg(long)]
    movies: bool,

    /// Page or reference deck to start from
    #[arg(long, value_name = "PATH")]
    template: Option<PathBuf>,

    /// Report file (defaults to index.html or states.pptx)
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Reference the expected outputs without running the converter
    #[arg(long)]
    no_convert: bool,

    /// Print the walk summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Init writes the configuration file, so it runs without loading one
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Init { dir, force } => commands::init(dir, force).await,
        Commands::Con2xyz { filename, format } => {
            let config = commands::load(config_path).await?;
            commands::con2xyz(&config, &filename, format.as_deref()).await
        }
        Commands::View { filename } => {
            let config = commands::load(config_path).await?;
            commands::view(&config, &filename).await
        }
        Commands::Html(args) => {
            let config = commands::load(config_path).await?;
            commands::report(&config, ReportKind::Table, args).await
        }
        Commands::Html5(args) => {
            let config = commands::load(config_path).await?;
            commands::report(&config, ReportKind::Jsmol, args).await
        }
        Commands::Pptx(args) => {
            let config = commands::load(config_path).await?;
            commands::report(&config, ReportKind::Slides, args).await
        }
    }
}
