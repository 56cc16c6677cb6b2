//! kbdlayout - legacy keyboard layout importer
//!
//! Converts keyboard-layout-editor JSON files into normalized layout JSON
//! and inspects the result.

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kbdlayout::cli::{CliError, ExitCode, IconsArgs, ImportArgs, InspectArgs};
use kbdlayout::config::Config;
use kbdlayout::constants::{APP_BINARY_NAME, APP_NAME};

/// kbdlayout - legacy keyboard layout importer
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a legacy layout file into normalized layout JSON
    Import(ImportArgs),
    /// Print a summary of a layout file
    Inspect(InspectArgs),
    /// Show the icon segments of a legend string
    Icons(IconsArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let config = Config::load().unwrap_or_else(|e| {
        debug!("using default configuration: {e:#}");
        Config::default()
    });

    let result: Result<(), CliError> = match &cli.command {
        Command::Import(args) => args.execute(&config),
        Command::Inspect(args) => args.execute(&config),
        Command::Icons(args) => args.execute(),
    };

    match result {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code().into()
        }
    }
}
