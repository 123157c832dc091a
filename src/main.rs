//! Lodestar - single-source shortest paths CLI
//!
//! A command-line tool for computing shortest paths in weighted
//! directed graphs, with two built-in demonstration graphs.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, Commands};
use lodestar_core::error::ExitCode as LodestarExitCode;
use lodestar_core::format::OutputFormat;
use lodestar_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = Cli::parse();

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = match &cli.command {
        Commands::Solve { graph, source } => commands::solve::execute(&cli, graph, *source),
        Commands::Path {
            graph,
            source,
            target,
        } => commands::path::execute(&cli, graph, *source, *target),
        Commands::Demo {
            graph,
            source,
            selection,
        } => commands::demo::execute(&cli, *graph, *source, *selection),
    };

    match result {
        Ok(()) => ExitCode::from(LodestarExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}
