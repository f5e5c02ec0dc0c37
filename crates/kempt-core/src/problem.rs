//! Problem detection and safe renaming.

use std::collections::HashSet;

use kempt_fs::{path, EntryType};

use crate::error::{Error, Result};
use crate::format::NameFormat;
use crate::glob::Glob;
use crate::project::Project;
use crate::recase::recase;

/// A path whose name does not follow its convention.
#[derive(Debug, Clone)]
pub struct Problem {
    /// Path relative to the project root.
    pub path: String,
    pub details: ProblemDetails,
}

/// What a [`Problem`] entry's name should have been.
#[derive(Debug, Clone)]
pub struct ProblemDetails {
    /// The type of the entry.
    pub entry_type: EntryType,
    /// The name the entry is expected to have.
    pub expected_name: String,
    /// The format the entry is expected to follow.
    pub format: NameFormat,
}

/// Scan the project for entries whose names break their conventions.
///
/// Every entry matching `glob` is checked against the first convention of
/// its type whose pattern matches. A path surfaces at most once, even when
/// the walk reaches it more than once.
pub async fn check(project: &Project, glob: &Glob) -> Result<Vec<Problem>> {
    let mut seen = HashSet::new();
    let mut problems = Vec::new();

    for (path, entry_type) in project.list(glob, None).await? {
        if !seen.insert(path.clone()) {
            continue;
        }

        if let Some(details) = problem_details(project, &path, entry_type) {
            problems.push(Problem { path, details });
        }
    }

    Ok(problems)
}

/// Check a single path, probing its entry type first.
///
/// Returns `None` when the entry is absent, ignored, has no convention, or
/// already follows it.
pub async fn check_path(project: &Project, path: &str) -> Option<ProblemDetails> {
    let entry_type = project.folder().entry_type(path).await?;
    problem_details(project, path, entry_type)
}

/// Resolve the convention for an entry and compare its name against the
/// name the convention produces.
pub fn problem_details(
    project: &Project,
    path: &str,
    entry_type: EntryType,
) -> Option<ProblemDetails> {
    let convention = project.get_convention(entry_type, path)?;
    let name = path::file_name(path);
    let expected_name = recase(name, &convention.format);

    if name == expected_name {
        None
    } else {
        Some(ProblemDetails {
            entry_type,
            expected_name,
            format: convention.format,
        })
    }
}

/// Rename a problem entry to its expected name.
///
/// Fails with [`Error::DestinationIgnored`] if the corrected path falls
/// under the project's ignore rules, and with [`Error::DestinationExists`]
/// if the destination is occupied and `overwrite` is not set. The
/// `overwrite` escape exists because case-insensitive filesystems report a
/// case-only rename target as already present.
pub async fn fix(project: &Project, problem: &Problem, overwrite: bool) -> Result<()> {
    let new_path = match path::parent_of(&problem.path) {
        Some(dir) => path::join(&dir, &problem.details.expected_name),
        None => problem.details.expected_name.clone(),
    };

    if project.ignores(&new_path) {
        return Err(Error::DestinationIgnored { path: new_path });
    }

    if !overwrite {
        if let Some(kind) = project.folder().entry_type(&new_path).await {
            return Err(Error::DestinationExists {
                name: problem.details.expected_name.clone(),
                kind,
            });
        }
    }

    project.folder().rename(&problem.path, &new_path).await?;
    tracing::debug!(from = %problem.path, to = %new_path, "renamed entry");

    Ok(())
}
