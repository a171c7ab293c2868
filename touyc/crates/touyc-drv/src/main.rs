//! touyc - touy compiler front end.
//!
//! Tokenizes a source file and prints the token listing.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use touyc_drv::{write_rows, Config, DriverError, OutputFormat, Session};

/// Tokenize a touy source file and print its tokens
#[derive(Parser, Debug)]
#[command(name = "touyc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a touy source file", long_about = None)]
struct Cli {
    /// Source file to tokenize
    input: PathBuf,

    /// Listing format (default: from config, else table)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Keep lexing past errors instead of stopping at the first one
    #[arg(short, long)]
    keep_going: bool,

    /// Enable verbose output
    #[arg(short, long, env = "TOUYC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "TOUYC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "TOUYC_NO_COLOR")]
    no_color: bool,
}

impl Cli {
    /// Applies command-line flags on top of the file configuration.
    fn merge_into(&self, mut config: Config) -> Config {
        if let Some(format) = self.format {
            config.format = format;
        }
        config.keep_going |= self.keep_going;
        config.color &= !self.no_color;
        config
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    let config = cli.merge_into(config);

    init_logging(cli.verbose, !config.color)?;
    tracing::debug!(?config, "using configuration");

    let mut session = Session::new(config);
    let file = session.load_file(&cli.input)?;
    let rows = session.list_tokens(file)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_rows(&rows, session.config().format, &mut out)?;
    out.flush()?;

    if session.error_count() > 0 {
        eprint!("{}", session.render_diagnostics());
    }
    session.finish()?;
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with the token listing.
fn init_logging(verbose: bool, no_color: bool) -> Result<(), DriverError> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
