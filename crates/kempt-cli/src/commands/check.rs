//! Check command implementation

use colored::Colorize;
use kempt_core::{NameFormat, Problem};
use kempt_fs::EntryType;
use serde::Serialize;

use crate::commands::common::Scope;
use crate::error::Result;

/// One problem as it appears in `--json` output.
#[derive(Serialize)]
pub struct ProblemReport<'a> {
    pub path: &'a str,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub expected: &'a str,
    pub format: &'a NameFormat,
}

impl<'a> From<&'a Problem> for ProblemReport<'a> {
    fn from(problem: &'a Problem) -> Self {
        Self {
            path: &problem.path,
            entry_type: problem.details.entry_type,
            expected: &problem.details.expected_name,
            format: &problem.details.format,
        }
    }
}

/// Run the check command. Returns the number of problems found.
pub async fn run_check(
    project_dir: Option<&str>,
    ignore_paths: &[String],
    globs: &[String],
    json: bool,
) -> Result<usize> {
    let scope = Scope::resolve(project_dir, ignore_paths, globs).await?;
    let problems = scope.problems().await?;

    if json {
        let reports: Vec<ProblemReport> = problems.iter().map(Into::into).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(problems.len());
    }

    for problem in &problems {
        print_problem(problem);
    }

    if problems.is_empty() {
        println!("{}", "No problems found.".green());
    } else {
        println!();
        println!(
            "{}",
            format!("{} problem(s) found.", problems.len()).red().bold()
        );
    }

    Ok(problems.len())
}

pub fn print_problem(problem: &Problem) {
    println!(
        "  {} {} {} {}",
        problem.details.entry_type.as_str().dimmed(),
        problem.path,
        "->".dimmed(),
        problem.details.expected_name.yellow()
    );
}
