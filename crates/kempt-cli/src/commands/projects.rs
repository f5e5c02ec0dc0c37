//! Projects command implementation

use std::sync::Arc;

use colored::Colorize;
use kempt_core::{Project, ProjectRegistry};
use kempt_fs::DiskFolder;

use crate::error::Result;

/// Run the projects command: discover and list project roots.
pub async fn run_projects(dir: &str, depth: usize) -> Result<()> {
    let folder = DiskFolder::resolve(dir)?;
    let registry = ProjectRegistry::discover(Arc::new(folder), depth).await?;

    if registry.is_empty() {
        println!("{}", "No projects found.".dimmed());
        println!();
        println!(
            "A project is any folder containing a {} file.",
            ".kempt.toml".cyan()
        );
        return Ok(());
    }

    println!("{}", "Projects".bold());
    println!();

    let mut roots: Vec<&str> = registry.iter().map(Project::root).collect();
    roots.sort_unstable();
    for root in roots {
        println!("  {} {}", "+".green(), root);
    }

    Ok(())
}
