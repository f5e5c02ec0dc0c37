//! Project resolution and glob scoping shared by check and fix.

use std::sync::Arc;

use kempt_core::{Glob, Problem, Project, SearchOptions, check};
use kempt_fs::{DiskFolder, Folder, path};

use crate::error::Result;

/// A resolved project plus the globs a command should scan with.
pub struct Scope {
    pub project: Project,
    pub globs: Vec<Glob>,
}

impl Scope {
    /// Resolve the project and rewrite command-line globs into its terms.
    ///
    /// The project is found by walking upward from `project_dir` (or the
    /// working directory). Globs typed below the project root are
    /// prefixed with the working directory's relative path, so patterns
    /// stay relative to where the user typed them.
    pub async fn resolve(
        project_dir: Option<&str>,
        ignore_paths: &[String],
        globs: &[String],
    ) -> Result<Scope> {
        let cwd = std::env::current_dir()?;
        let start: Arc<dyn Folder> = match project_dir {
            Some(dir) => Arc::new(DiskFolder::resolve(dir)?),
            None => Arc::new(DiskFolder::resolve(&cwd)?),
        };

        let options = SearchOptions {
            ignorefiles: with_extra_ignorefiles(ignore_paths),
            ..SearchOptions::default()
        };
        let root_path = start.path().to_string();
        let project = Project::near(start, options)
            .await?
            .ok_or(kempt_core::Error::NotAProject { path: root_path })?;

        let here = DiskFolder::resolve(&cwd)?;
        let prefix = path::relative_to(here.path(), project.root())
            .unwrap_or("")
            .to_string();

        let globs = if globs.is_empty() {
            vec![Glob::anything()]
        } else {
            globs.iter().map(|g| Glob::within(&prefix, g)).collect()
        };

        Ok(Scope { project, globs })
    }

    /// Run the problem scan over every glob, deduplicating by path.
    pub async fn problems(&self) -> Result<Vec<Problem>> {
        let mut seen = std::collections::HashSet::new();
        let mut merged = Vec::new();

        for glob in &self.globs {
            for problem in check(&self.project, glob).await? {
                if seen.insert(problem.path.clone()) {
                    merged.push(problem);
                }
            }
        }

        Ok(merged)
    }
}

/// The default ignore files plus any `--ignore-path` extras.
fn with_extra_ignorefiles(extra: &[String]) -> Vec<String> {
    let mut files = SearchOptions::default().ignorefiles;
    for path in extra {
        if !files.contains(path) {
            files.push(path.clone());
        }
    }
    files
}
