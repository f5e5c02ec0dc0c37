//! Ignore sources: explicit patterns and reloadable ignore files.

use std::sync::Arc;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use tracing::warn;

use kempt_fs::{path, Folder};

use crate::glob::Glob;

/// How an ignore source interprets its patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreSemantics {
    /// Standard gitignore precedence: later patterns can re-include paths
    /// excluded by earlier ones.
    Gitignore,
    /// Plain glob matching where negated patterns act as required
    /// allow-filters rather than re-inclusion rules.
    Glob,
}

impl IgnoreSemantics {
    /// The default semantics for an ignore file, chosen by its filename.
    pub fn for_filename(name: &str) -> Self {
        match name {
            ".gitignore" | ".eslintignore" | ".prettierignore" | ".kemptignore" => {
                Self::Gitignore
            }
            _ => Self::Glob,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gitignore => "gitignore",
            Self::Glob => "glob",
        }
    }
}

/// A compiled pattern set under one of the two semantics.
enum PatternMatcher {
    Gitignore(Gitignore),
    Globs { negated: Vec<Glob>, plain: Vec<Glob> },
}

impl PatternMatcher {
    fn compile(semantics: IgnoreSemantics, patterns: &[String]) -> Self {
        match semantics {
            IgnoreSemantics::Gitignore => Self::Gitignore(gitignore_matcher(patterns)),
            IgnoreSemantics::Glob => {
                let globs = patterns.iter().map(|p| Glob::new(p));
                let (negated, plain) = globs.partition(Glob::negated);
                Self::Globs { negated, plain }
            }
        }
    }

    fn ignores(&self, path: &str) -> bool {
        match self {
            Self::Gitignore(matcher) => matcher
                .matched_path_or_any_parents(path, false)
                .is_ignore(),
            Self::Globs { negated, plain } => {
                // A body match on any negated pattern vetoes ignoring;
                // plain patterns then decide.
                if negated.iter().any(|g| g.matches(path)) {
                    return false;
                }
                plain.iter().any(|g| g.matches(path))
            }
        }
    }
}

fn gitignore_matcher(patterns: &[String]) -> Gitignore {
    let mut builder = GitignoreBuilder::new("");
    let _ = builder.case_insensitive(true);
    for pattern in patterns {
        let _ = builder.add_line(None, pattern);
    }
    builder.build().unwrap_or_else(|_| Gitignore::empty())
}

fn parse_patterns(data: &str) -> Vec<String> {
    data.lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}

async fn read_patterns(folder: &dyn Folder, path: &str) -> Vec<String> {
    match folder.read_file(path).await {
        Ok(data) => parse_patterns(&data),
        Err(error) => {
            warn!(path, %error, "ignore file unreadable, using empty pattern set");
            Vec::new()
        }
    }
}

/// An ignore file such as `.gitignore` or `.npmignore`, loaded from a
/// folder and reloadable in place.
pub struct Ignorefile {
    path: String,
    semantics: IgnoreSemantics,
    folder: Arc<dyn Folder>,
    patterns: Vec<String>,
    matcher: PatternMatcher,
}

impl Ignorefile {
    /// Load an ignore file, picking semantics from its filename.
    ///
    /// A missing or unreadable file is an empty pattern set, not an error.
    pub async fn load(folder: Arc<dyn Folder>, path: &str) -> Self {
        let semantics = IgnoreSemantics::for_filename(path::file_name(path));
        Self::load_with(folder, path, semantics).await
    }

    /// Load an ignore file with explicitly chosen semantics.
    pub async fn load_with(
        folder: Arc<dyn Folder>,
        path: &str,
        semantics: IgnoreSemantics,
    ) -> Self {
        let patterns = read_patterns(folder.as_ref(), path).await;
        let matcher = PatternMatcher::compile(semantics, &patterns);

        Self {
            path: path.to_string(),
            semantics,
            folder,
            patterns,
            matcher,
        }
    }

    /// The path this file was loaded from, relative to its folder.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn semantics(&self) -> IgnoreSemantics {
        self.semantics
    }

    /// The raw patterns currently in effect.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether the path is ignored by this file.
    pub fn ignores(&self, path: &str) -> bool {
        self.matcher.ignores(path)
    }

    /// Re-read the backing file and swap in the freshly compiled matcher.
    pub async fn reload(&mut self) {
        self.patterns = read_patterns(self.folder.as_ref(), &self.path).await;
        self.matcher = PatternMatcher::compile(self.semantics, &self.patterns);
    }
}

impl std::fmt::Debug for Ignorefile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ignorefile")
            .field("path", &self.path)
            .field("semantics", &self.semantics)
            .field("patterns", &self.patterns)
            .finish()
    }
}

/// The combined ignore state of a project: direct settings patterns plus
/// any number of ignore files, deduplicated by path.
#[derive(Default)]
pub struct ProjectIgnore {
    patterns: Vec<String>,
    settings: Option<PatternMatcher>,
    files: Vec<Ignorefile>,
}

impl ProjectIgnore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the direct exclusion patterns (gitignore semantics).
    pub fn use_patterns(&mut self, patterns: Vec<String>) {
        self.settings = Some(PatternMatcher::compile(
            IgnoreSemantics::Gitignore,
            &patterns,
        ));
        self.patterns = patterns;
    }

    /// Add an ignore file unless one with the same path is present.
    pub fn use_ignorefile(&mut self, file: Ignorefile) {
        if self.files.iter().any(|f| f.path() == file.path()) {
            return;
        }
        self.files.push(file);
    }

    /// The direct patterns currently in effect, excluding file-backed ones.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// The ignore files currently in use.
    pub fn ignorefiles(&self) -> &[Ignorefile] {
        &self.files
    }

    /// Whether any source ignores the path.
    pub fn ignores(&self, path: &str) -> bool {
        self.settings
            .as_ref()
            .is_some_and(|matcher| matcher.ignores(path))
            || self.files.iter().any(|file| file.ignores(path))
    }

    /// Reload every file-backed source.
    pub async fn reload(&mut self) {
        for file in &mut self.files {
            file.reload().await;
        }
    }
}

impl std::fmt::Debug for ProjectIgnore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectIgnore")
            .field("patterns", &self.patterns)
            .field("files", &self.files)
            .finish()
    }
}
