//! NeonEcho CLI - Command-line interface for texture generation
//!
//! This binary renders the NeonEcho texture catalog to PNG files, lists the
//! catalog, and verifies files already on disk.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use neonecho_cli::commands;

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            out_root,
            only,
            report,
            verbose,
        } => commands::generate::run(out_root.as_deref(), &only, report.as_deref(), verbose),
        Commands::List { only, json } => commands::list::run(&only, json),
        Commands::Verify { out_root, json } => commands::verify::run(out_root.as_deref(), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(1)
        }
    }
}
