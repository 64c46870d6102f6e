//! Folio CLI - site catalog derivation.
//!
//! Provides commands for:
//! - `derive`: Write navigation, sidebar and rewrite rules as JSON
//! - `check`: Validate the registry and summarize each category
//! - `landing`: Print a category's landing path

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, DeriveArgs, LandingArgs};
use output::{Output, Tone};

/// Folio - site catalog derivation.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the catalog and write it as JSON.
    Derive(DeriveArgs),
    /// Validate the registry and print a summary.
    Check(CheckArgs),
    /// Print the landing path of a category.
    Landing(LandingArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Derive(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Landing(args) => args.execute(),
    };

    if let Err(err) = result {
        output.status(Tone::Failure, &format!("Error: {err}"));
        std::process::exit(1);
    }
}
