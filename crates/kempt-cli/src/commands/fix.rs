//! Fix command implementation

use colored::Colorize;
use kempt_core::{Problem, fix};
use kempt_fs::{EntryType, path};
use serde::Serialize;

use crate::cli::Overwrite;
use crate::commands::common::Scope;
use crate::error::Result;

/// The outcome of one attempted fix, as it appears in `--json` output.
#[derive(Serialize)]
struct FixReport<'a> {
    path: &'a str,
    #[serde(rename = "type")]
    entry_type: EntryType,
    expected: &'a str,
    renamed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the fix command. Returns the number of problems left unfixed.
pub async fn run_fix(
    project_dir: Option<&str>,
    ignore_paths: &[String],
    globs: &[String],
    overwrite: Overwrite,
    json: bool,
) -> Result<usize> {
    let scope = Scope::resolve(project_dir, ignore_paths, globs).await?;
    let problems = scope.problems().await?;

    let mut reports = Vec::new();
    let mut failed = 0;

    for problem in &problems {
        let allow = allows_overwrite(overwrite, problem);
        let outcome = fix(&scope.project, problem, allow).await;

        if !json {
            print_outcome(problem, &outcome);
        }

        let error = outcome.err().map(|e| e.to_string());
        if error.is_some() {
            failed += 1;
        }
        reports.push(FixReport {
            path: &problem.path,
            entry_type: problem.details.entry_type,
            expected: &problem.details.expected_name,
            renamed: error.is_none(),
            error,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(failed);
    }

    println!();
    if problems.is_empty() {
        println!("{}", "Nothing to fix.".green());
    } else if failed == 0 {
        println!(
            "{}",
            format!("Fixed {} problem(s).", problems.len()).green()
        );
    } else {
        println!(
            "{}",
            format!(
                "Fixed {} problem(s), {} left unfixed.",
                problems.len() - failed,
                failed
            )
            .red()
            .bold()
        );
    }

    Ok(failed)
}

/// Whether the policy permits replacing an existing destination entry.
///
/// `auto` allows it only for case-only renames, which case-insensitive
/// filesystems report as conflicts with the entry being renamed.
fn allows_overwrite(policy: Overwrite, problem: &Problem) -> bool {
    match policy {
        Overwrite::Always => true,
        Overwrite::Never => false,
        Overwrite::Auto => {
            let current = path::file_name(&problem.path);
            current.to_lowercase() == problem.details.expected_name.to_lowercase()
        }
    }
}

fn print_outcome(problem: &Problem, outcome: &kempt_core::Result<()>) {
    match outcome {
        Ok(()) => println!(
            "  {} {} {} {}",
            "renamed".green(),
            problem.path,
            "->".dimmed(),
            problem.details.expected_name.yellow()
        ),
        Err(error) => println!(
            "  {} {}: {}",
            "skipped".red(),
            problem.path,
            error
        ),
    }
}
