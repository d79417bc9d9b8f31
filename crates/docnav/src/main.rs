//! docnav CLI - navigation generator for Markdown documentation.
//!
//! Walks the documentation directory (default: `docs/`) and prints the
//! navigation tree as an `MkDocs` `nav:` block or as JSON.

mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::GenerateArgs;
use output::Output;

/// docnav - Generate static-site navigation from Markdown directories.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG (errors only when unset).
    // Logs go to stderr: stdout carries only the navigation.
    let filter = if cli.generate.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.generate.execute() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
