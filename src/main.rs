//! Media Librarian CLI
//!
//! A command-line tool that renames and relocates media files using AI
//! suggestions: source file names and candidate target directories are sent
//! to a text-generation workflow, and the returned mapping is applied after
//! interactive confirmation.

use clap::Parser;
use media_librarian::cli::args::Cli;
use media_librarian::core::app::{App, RunOptions};
use media_librarian::models::config;
use media_librarian::services::workflow::{WorkflowClient, WorkflowConfig};
use media_librarian::ui::{ConsolePrompt, ConsoleWriter};
use media_librarian::{logging, Result};
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Initialize logging
    logging::init(cli.verbose, cli.no_color);

    let config = config::load_config();

    // CLI paths override the configured defaults
    let (source_root, target_root) = match resolve_roots(&cli, &config) {
        Ok(roots) => roots,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    tracing::debug!("Source path: {}", source_root.display());
    tracing::debug!("Target path: {}", target_root.display());

    let resolver = WorkflowClient::with_config(WorkflowConfig::from(&config));
    let options = RunOptions {
        source_root,
        target_root,
        dry_run: cli.dry_run,
        assume_yes: cli.yes,
        quiet: cli.quiet,
        format: cli.format,
    };
    let app = App::new(resolver, ConsolePrompt::new(), ConsoleWriter::new(cli.quiet), options);

    std::process::exit(app.run().await);
}

/// Resolve the effective source and target roots.
fn resolve_roots(cli: &Cli, config: &config::Config) -> Result<(PathBuf, PathBuf)> {
    let source = match &cli.source {
        Some(path) => path.clone(),
        None => config.source_path()?,
    };
    let target = match &cli.target {
        Some(path) => path.clone(),
        None => config.target_path()?,
    };
    Ok((source, target))
}
