//! EDB Inspect - bytecode listings and step snapshots from the command line
//!
//! A thin front end over the inspection engine, for use without a debugger UI.

use clap::{Parser, Subcommand};
use edb_inspect_common::{logging, DisplaySurface, InspectConfig};
use edb_inspect_engine::ValueRenderer;
use eyre::Result;
use std::path::PathBuf;
use tracing::Level;

mod cmd;

/// Command-line interface for EDB Inspect
#[derive(Debug, Parser)]
#[command(name = "edb-inspect", version, about = "EDB Inspect - EVM bytecode and snapshot viewer")]
pub struct Cli {
    /// Configuration file (default: ~/.edb-inspect.toml)
    #[arg(long, global = true, env = "EDB_INSPECT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Escape output for an HTML-capable display, overriding the configured surface
    #[arg(long, global = true)]
    pub html: bool,

    /// Also write logs to a daily rotating file under the system temp directory
    #[arg(long, global = true)]
    pub log_file: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Disassemble bytecode into a listing
    Disasm {
        /// Hex encoded bytecode
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        code: Option<String>,

        /// Read hex encoded bytecode from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Classify and render a single 256-bit word
    Value {
        /// Hex encoded word, at most 32 bytes
        word: String,
    },
    /// Render every panel of a JSON execution snapshot
    Snapshot {
        /// Path to the snapshot JSON file
        path: PathBuf,
    },
    /// Show the effective configuration
    Config {
        /// Write the default configuration file if it does not exist yet
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    if cli.log_file {
        logging::init_logging("edb-inspect", true)?;
    } else {
        logging::init_simple_logging(level)?;
    }

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => InspectConfig::config_path()?,
    };
    let config = match &cli.config {
        Some(path) if path.exists() => InspectConfig::load_from(path)?,
        Some(path) => {
            tracing::warn!("Config file {:?} not found, using defaults", path);
            InspectConfig::default()
        }
        None => InspectConfig::load()?,
    };

    let surface = if cli.html { DisplaySurface::Html } else { config.display.surface };
    let names = config.address_book()?;
    let renderer = ValueRenderer::new(surface).with_names(&names);
    tracing::debug!(%surface, names = names.len(), "Renderer ready");

    let output = match &cli.command {
        Commands::Disasm { code, file } => cmd::disasm(code.as_deref(), file.as_deref())?,
        Commands::Value { word } => cmd::value(word, &renderer)?,
        Commands::Snapshot { path } => cmd::snapshot(path, &renderer)?,
        Commands::Config { init } => cmd::show_config(&config, &config_path, *init)?,
    };

    print!("{output}");
    Ok(())
}
