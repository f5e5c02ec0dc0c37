//! A registry of projects with longest-root-wins path resolution.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use kempt_fs::{path, EntryType, Folder};

use crate::config::CONFIG_FILE_NAME;
use crate::error::Result;
use crate::project::{LoadOptions, Project};

/// Dependency caches and dot-folders are never searched for projects.
fn should_search(name: &str) -> bool {
    !matches!(name, "node_modules" | "target") && !name.starts_with('.')
}

/// An ordered set of [`Project`]s, unique by root path and kept sorted by
/// longest root first so [`best_match`](ProjectRegistry::best_match)
/// resolves nested roots to the most specific project.
#[derive(Debug, Default)]
pub struct ProjectRegistry {
    members: Vec<Project>,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Build a registry from loaded projects, dropping duplicate roots.
    pub fn from_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        let mut registry = Self::new();
        for project in projects {
            registry.add(project);
        }
        registry
    }

    /// Discover projects by walking the folder for `.kempt.toml` files.
    ///
    /// Dependency caches (`node_modules`, `target`) and dot-folders are
    /// skipped. The walk continues inside found project roots so nested
    /// projects register too; their interiors are only searched for
    /// configs, never scanned. `max_depth` counts folder levels, the
    /// starting folder being level one.
    pub async fn discover(folder: Arc<dyn Folder>, max_depth: usize) -> Result<Self> {
        let mut registry = Self::new();
        collect_projects(&mut registry, &folder, String::new(), max_depth).await?;
        tracing::info!(
            root = folder.path(),
            projects = registry.len(),
            "discovered projects"
        );
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The registered projects, longest root first.
    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.members.iter()
    }

    /// Include the project unless its root is already registered.
    pub fn add(&mut self, project: Project) {
        if self.find(project.root()).is_none() {
            self.members.push(project);
            self.sort();
        }
    }

    /// Remove the project with the given root path.
    pub fn remove(&mut self, root: &str) {
        let root = path::without_trailing_slash(root);
        self.members
            .retain(|project| path::without_trailing_slash(project.root()) != root);
    }

    /// Find the project rooted exactly at the given path.
    pub fn find(&self, root: &str) -> Option<&Project> {
        let root = path::without_trailing_slash(root);
        self.members
            .iter()
            .find(|project| path::without_trailing_slash(project.root()) == root)
    }

    /// The project whose root is the longest prefix of the path.
    ///
    /// A root matches when it equals the path or is a folder-boundary
    /// prefix of it; members are stored longest root first, so the first
    /// hit is the most specific one.
    pub fn best_match(&self, path: &str) -> Option<&Project> {
        self.members.iter().find(|project| {
            let root = project.root();
            path == root || path.starts_with(&path::with_trailing_slash(root))
        })
    }

    /// Merge another registry in, keeping the first-seen project per root.
    pub fn combine(&mut self, other: ProjectRegistry) {
        for project in other.members {
            self.add(project);
        }
    }

    fn sort(&mut self) {
        self.members
            .sort_by(|a, b| b.root().len().cmp(&a.root().len()));
    }
}

fn collect_projects<'a>(
    registry: &'a mut ProjectRegistry,
    folder: &'a Arc<dyn Folder>,
    dir: String,
    depth: usize,
) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
    Box::pin(async move {
        if depth == 0 {
            return Ok(());
        }

        for (name, entry_type) in folder.list(&dir).await? {
            match entry_type {
                EntryType::Folder if should_search(&name) => {
                    let child = path::join(&dir, &name);
                    collect_projects(registry, folder, child, depth - 1).await?;
                }
                EntryType::File if name == CONFIG_FILE_NAME => {
                    let root = folder.child(&dir);
                    registry.add(Project::load(root, LoadOptions::default()).await?);
                }
                _ => {}
            }
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kempt_test_utils::MemoryFolder;
    use pretty_assertions::assert_eq;

    const EMPTY_CONFIG: &str = "[files]\n";

    fn workspace() -> MemoryFolder {
        let folder = MemoryFolder::new("/ws");
        folder.put_file("app/.kempt.toml", EMPTY_CONFIG);
        folder.put_file("app/plugin/.kempt.toml", EMPTY_CONFIG);
        folder.put_file("lib/.kempt.toml", EMPTY_CONFIG);
        folder.put_file("node_modules/dep/.kempt.toml", EMPTY_CONFIG);
        folder.put_file("target/pkg/.kempt.toml", EMPTY_CONFIG);
        folder.put_file(".cache/tool/.kempt.toml", EMPTY_CONFIG);
        folder
    }

    async fn discover_all(folder: &MemoryFolder) -> ProjectRegistry {
        ProjectRegistry::discover(Arc::new(folder.clone()), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn discover_finds_projects_and_skips_cache_folders() {
        let registry = discover_all(&workspace()).await;

        let mut roots: Vec<&str> = registry.iter().map(Project::root).collect();
        roots.sort_unstable();

        assert_eq!(roots, vec!["/ws/app", "/ws/app/plugin", "/ws/lib"]);
    }

    #[tokio::test]
    async fn discover_honors_the_depth_limit() {
        let folder = workspace();
        folder.put_file(CONFIG_FILE_NAME, EMPTY_CONFIG);

        let shallow = ProjectRegistry::discover(Arc::new(folder.clone()), 1)
            .await
            .unwrap();
        let roots: Vec<&str> = shallow.iter().map(Project::root).collect();
        assert_eq!(roots, vec!["/ws"]);

        let two_deep = ProjectRegistry::discover(Arc::new(folder.clone()), 2)
            .await
            .unwrap();
        assert_eq!(two_deep.len(), 3);
    }

    #[tokio::test]
    async fn discover_propagates_config_errors() {
        let folder = MemoryFolder::new("/ws");
        folder.put_file("app/.kempt.toml", "broken = [");

        let result = ProjectRegistry::discover(Arc::new(folder), usize::MAX).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn best_match_prefers_the_deepest_root() {
        let registry = discover_all(&workspace()).await;

        let owner = registry.best_match("/ws/app/plugin/src/lib.rs").unwrap();
        assert_eq!(owner.root(), "/ws/app/plugin");

        let owner = registry.best_match("/ws/app/src/main.rs").unwrap();
        assert_eq!(owner.root(), "/ws/app");

        assert_eq!(
            registry.best_match("/ws/app").map(Project::root),
            Some("/ws/app")
        );
        assert!(registry.best_match("/ws/application/x").is_none());
        assert!(registry.best_match("/elsewhere").is_none());
    }

    #[tokio::test]
    async fn find_and_remove_normalize_trailing_slashes() {
        let mut registry = discover_all(&workspace()).await;

        assert!(registry.find("/ws/lib/").is_some());

        registry.remove("/ws/lib/");
        assert!(registry.find("/ws/lib").is_none());
        assert_eq!(registry.len(), 2);
    }

    #[tokio::test]
    async fn add_ignores_duplicate_roots() {
        let mut registry = discover_all(&workspace()).await;
        let duplicate = workspace();

        let extra = Project::load(duplicate.child("lib"), LoadOptions::default())
            .await
            .unwrap();

        registry.add(extra);
        assert_eq!(registry.len(), 3);
    }

    #[tokio::test]
    async fn combine_keeps_the_first_seen_project_per_root() {
        let left_folder = MemoryFolder::new("/shared");
        left_folder.put_file(
            ".kempt.toml",
            "[files]\n\"**/*.rs\" = \"snake_case.lc\"\n",
        );
        let right_folder = MemoryFolder::new("/shared");
        right_folder.put_file(".kempt.toml", EMPTY_CONFIG);
        let other_folder = MemoryFolder::new("/other");
        other_folder.put_file(".kempt.toml", EMPTY_CONFIG);

        let mut left = ProjectRegistry::new();
        left.add(
            Project::load(Arc::new(left_folder), LoadOptions::default())
                .await
                .unwrap(),
        );

        let mut right = ProjectRegistry::new();
        right.add(
            Project::load(Arc::new(right_folder), LoadOptions::default())
                .await
                .unwrap(),
        );
        right.add(
            Project::load(Arc::new(other_folder), LoadOptions::default())
                .await
                .unwrap(),
        );

        left.combine(right);

        assert_eq!(left.len(), 2);
        let kept = left.find("/shared").unwrap();
        assert!(
            kept.get_convention(EntryType::File, "src/Main.rs").is_some(),
            "combine must keep the first-seen project for a root"
        );
    }
}
