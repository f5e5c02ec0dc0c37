//! [`TestTree`], a tempdir-backed tree builder for disk tests.
//!
//! Wraps a [`TempDir`] with seeding and assertion helpers so tests that
//! need the real filesystem stay terse.

use std::fs;
use std::path::Path;

use kempt_fs::DiskFolder;
use tempfile::TempDir;

/// A temporary directory with helper methods for test setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use kempt_test_utils::TestTree;
///
/// let tree = TestTree::new();
/// tree.write(".kempt.toml", "[files]\n\"**/*.rs\" = \"snake_case.lc\"\n");
/// tree.write("src/Main.rs", "");
/// tree.assert_exists("src/Main.rs");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestTree::new: failed to create tempdir"),
        }
    }

    /// The root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A [`DiskFolder`] rooted at this tree.
    pub fn folder(&self) -> DiskFolder {
        DiskFolder::resolve(self.root()).expect("TestTree::folder: root should resolve")
    }

    /// Write a file at `path` (relative to the root), creating parents.
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Create a directory at `path` (relative to the root), with parents.
    pub fn mkdir(&self, path: &str) {
        fs::create_dir_all(self.root().join(path)).unwrap();
    }

    /// Remove the file at `path` (relative to the root).
    pub fn remove(&self, path: &str) {
        fs::remove_file(self.root().join(path)).unwrap();
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected entry to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected entry NOT to exist: {}",
            full_path.display()
        );
    }
}
