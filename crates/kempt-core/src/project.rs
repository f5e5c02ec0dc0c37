//! Project loading, settings state, and tree scanning.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, PoisonError, RwLock};

use kempt_fs::{path, EntryType, Folder, FolderEntry};

use crate::config::{Convention, ProjectConfig, CONFIG_FILE_NAME};
use crate::error::{Error, Result};
use crate::glob::Glob;
use crate::ignore::{Ignorefile, ProjectIgnore};

/// Version-control metadata is never scanned, whatever the config says.
const ALWAYS_IGNORE: &[&str] = &["**/.git"];

/// Options for [`Project::load`].
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Paths to ignore files such as `.gitignore` or `.npmignore`,
    /// relative to the project root. Entries matching their patterns are
    /// never checked and never offered fixes.
    pub ignorefiles: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            ignorefiles: vec![String::from(".gitignore")],
        }
    }
}

/// Options for [`Project::near`].
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// See [`LoadOptions::ignorefiles`].
    pub ignorefiles: Vec<String>,
    /// How many folders to probe walking upward, the starting folder
    /// included.
    pub levels: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            ignorefiles: LoadOptions::default().ignorefiles,
            levels: 5,
        }
    }
}

/// One consistent view of a project's compiled settings.
///
/// Never mutated in place: [`Project::reload`] builds a fresh state off to
/// the side and swaps it in whole, so a scan that is underway keeps the
/// settings it started with.
#[derive(Debug)]
struct ProjectState {
    file_conventions: Vec<Convention>,
    folder_conventions: Vec<Convention>,
    ignore: ProjectIgnore,
}

impl ProjectState {
    fn conventions(&self, entry_type: EntryType) -> &[Convention] {
        match entry_type {
            EntryType::File => &self.file_conventions,
            EntryType::Folder => &self.folder_conventions,
        }
    }

    fn get_convention(&self, entry_type: EntryType, path: &str) -> Option<&Convention> {
        if self.ignore.ignores(path) {
            return None;
        }
        self.conventions(entry_type)
            .iter()
            .find(|convention| convention.glob.matches(path))
    }
}

/// A folder governed by a `.kempt.toml`, with scanning and convention
/// lookup over everything beneath it.
pub struct Project {
    folder: Arc<dyn Folder>,
    ignorefiles: Vec<String>,
    state: RwLock<Arc<ProjectState>>,
}

impl Project {
    /// Load a project from a folder containing a `.kempt.toml`.
    ///
    /// Fails with [`Error::NotAProject`] if the config file is absent, and
    /// with [`Error::Config`] if it cannot be parsed.
    pub async fn load(folder: Arc<dyn Folder>, options: LoadOptions) -> Result<Self> {
        if folder.entry_type(CONFIG_FILE_NAME).await != Some(EntryType::File) {
            return Err(Error::NotAProject {
                path: folder.path().to_string(),
            });
        }

        let state = build_state(&folder, &options.ignorefiles).await?;
        tracing::info!(root = folder.path(), "loaded project");

        Ok(Self {
            folder,
            ignorefiles: options.ignorefiles,
            state: RwLock::new(Arc::new(state)),
        })
    }

    /// Locate the nearest project by probing the folder and its parents
    /// for a `.kempt.toml`, up to `options.levels` folders in total.
    pub async fn near(folder: Arc<dyn Folder>, options: SearchOptions) -> Result<Option<Self>> {
        let mut current = folder;

        for _ in 0..options.levels {
            if current.entry_type(CONFIG_FILE_NAME).await == Some(EntryType::File) {
                let load = LoadOptions {
                    ignorefiles: options.ignorefiles.clone(),
                };
                return Ok(Some(Self::load(current, load).await?));
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Ok(None)
    }

    /// The root folder this project governs.
    pub fn folder(&self) -> &Arc<dyn Folder> {
        &self.folder
    }

    /// The root path of this project.
    pub fn root(&self) -> &str {
        self.folder.path()
    }

    /// Re-read the config file and every ignore file, then swap the new
    /// settings in as one atomic replacement.
    pub async fn reload(&self) -> Result<()> {
        let state = build_state(&self.folder, &self.ignorefiles).await?;
        *self.write_state() = Arc::new(state);
        tracing::info!(root = self.folder.path(), "reloaded project");
        Ok(())
    }

    /// Whether the path is ignored within the project.
    pub fn ignores(&self, path: &str) -> bool {
        self.state().ignore.ignores(path)
    }

    /// The naming convention for the given entry type and path, or `None`
    /// if the path is ignored or no convention's glob matches it.
    pub fn get_convention(&self, entry_type: EntryType, path: &str) -> Option<Convention> {
        self.state().get_convention(entry_type, path).cloned()
    }

    /// List entries matching `glob`, walking depth-first from the root.
    ///
    /// Ignored paths are pruned before descent, and a child folder that
    /// carries its own `.kempt.toml` belongs to another project: it is
    /// neither emitted nor entered. Passing a `filter` restricts which
    /// entry types are emitted without affecting the walk itself.
    pub async fn list(
        &self,
        glob: &Glob,
        filter: Option<EntryType>,
    ) -> Result<Vec<FolderEntry>> {
        let state = self.state();
        self.collect(&state, String::new(), glob, filter).await
    }

    fn state(&self) -> Arc<ProjectState> {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, Arc<ProjectState>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn collect<'a>(
        &'a self,
        state: &'a ProjectState,
        dir: String,
        glob: &'a Glob,
        filter: Option<EntryType>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<FolderEntry>>> + Send + 'a>> {
        Box::pin(async move {
            let include_files = filter != Some(EntryType::Folder);
            let include_folders = filter != Some(EntryType::File);
            let mut collected = Vec::new();

            for (name, entry_type) in self.folder.list(&dir).await? {
                let path = path::join(&dir, &name);

                if state.ignore.ignores(&path) {
                    continue;
                }

                match entry_type {
                    EntryType::File => {
                        if include_files && glob.matches(&path) {
                            collected.push((path, EntryType::File));
                        }
                    }
                    EntryType::Folder => {
                        let config = path::join(&path, CONFIG_FILE_NAME);
                        if self.folder.entry_type(&config).await == Some(EntryType::File) {
                            tracing::debug!(path = %path, "skipping nested project");
                            continue;
                        }

                        if include_folders && glob.matches(&path) {
                            collected.push((path.clone(), EntryType::Folder));
                        }

                        collected.extend(self.collect(state, path, glob, filter).await?);
                    }
                }
            }

            Ok(collected)
        })
    }
}

impl std::fmt::Debug for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Project")
            .field("root", &self.root())
            .field("ignorefiles", &self.ignorefiles)
            .finish_non_exhaustive()
    }
}

async fn build_state(folder: &Arc<dyn Folder>, ignorefiles: &[String]) -> Result<ProjectState> {
    let content = folder.read_file(CONFIG_FILE_NAME).await?;
    let settings = ProjectConfig::parse(CONFIG_FILE_NAME, &content)?.into_settings()?;

    let mut patterns: Vec<String> = ALWAYS_IGNORE.iter().map(|p| p.to_string()).collect();
    patterns.extend(settings.ignore);

    let mut ignore = ProjectIgnore::new();
    ignore.use_patterns(patterns);

    for path in ignorefiles {
        ignore.use_ignorefile(Ignorefile::load(Arc::clone(folder), path).await);
    }

    Ok(ProjectState {
        file_conventions: settings.file_conventions,
        folder_conventions: settings.folder_conventions,
        ignore,
    })
}
