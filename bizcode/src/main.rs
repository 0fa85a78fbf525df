//! bizcode - business error catalog tool
//!
//! Validates the catalog the same way a service does at startup, and prints
//! or exports its contents for client teams and documentation.

#![forbid(unsafe_code)]

mod commands;

use anyhow::{Context, Result};
use bizcode_common::config::EnvParser;
use bizcode_common::logging::{LogSettings, init_logging};
use bizcode_common::registry;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(name = "bizcode")]
#[command(author, version, about = "Inspect and validate the business error catalog")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate that every business code is unique
    Check,
    /// Show one error by name (e.g. DUPLICATE_KEY) or business code (e.g. 5004)
    Show {
        selector: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the catalog
    List {
        /// Only list errors that are logged verbosely
        #[arg(long)]
        verbose_only: bool,
    },
    /// Write error-codes.json and the response schema into a directory
    Export { output_dir: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut parser = EnvParser::new();
    let mut settings = LogSettings::from_env(&mut parser);
    if cli.verbose {
        settings.level = "debug".to_string();
    }
    init_logging(&settings).context("Failed to initialize logging")?;
    for err in parser.take_errors() {
        warn!("{}", err);
    }

    // A catalog with duplicate codes must never be used.
    let registry = registry::init().context("Business error catalog is invalid")?;

    let output = match cli.command {
        Commands::Check => commands::check(registry),
        Commands::Show { selector, json } => commands::show(registry, &selector, json)?,
        Commands::List { verbose_only } => commands::list(registry, verbose_only),
        Commands::Export { output_dir } => commands::export(&output_dir)?,
    };
    println!("{output}");

    Ok(())
}
