//! kempt CLI
//!
//! The command-line interface for checking and repairing file and folder
//! naming conventions.

mod cli;
mod commands;
mod error;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(clean) => {
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the run was clean: no problems found, or every
/// problem fixed.
async fn run() -> Result<bool> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Check {
            globs,
            project,
            ignore_paths,
            json,
        }) => {
            let problems =
                commands::run_check(project.as_deref(), &ignore_paths, &globs, json).await?;
            Ok(problems == 0)
        }
        Some(Commands::Fix {
            globs,
            project,
            ignore_paths,
            overwrite,
            json,
        }) => {
            let unfixed =
                commands::run_fix(project.as_deref(), &ignore_paths, &globs, overwrite, json)
                    .await?;
            Ok(unfixed == 0)
        }
        Some(Commands::Projects { dir, depth }) => {
            commands::run_projects(&dir, depth).await?;
            Ok(true)
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "kempt", &mut std::io::stdout());
            Ok(true)
        }
        None => {
            // No command provided - show help hint
            println!("{} naming-convention keeper", "kempt".green().bold());
            println!();
            println!("Run {} for available commands.", "kempt --help".cyan());
            Ok(true)
        }
    }
}
