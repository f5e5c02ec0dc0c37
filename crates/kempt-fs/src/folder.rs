//! The folder capability trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::entry::{EntryType, FolderEntry};
use crate::error::{Error, Result};
use crate::path;

/// A folder a naming engine can scan and mutate.
///
/// Implementations wrap a backing store (the real filesystem, an in-memory
/// volume) behind one narrow seam. All paths passed in are forward-slash
/// strings relative to this folder's root; the empty string is the root
/// itself.
#[async_trait]
pub trait Folder: Send + Sync {
    /// The normalized root path of this folder.
    fn path(&self) -> &str;

    /// A handle on a sub-folder. Pure path construction: the sub-folder
    /// need not exist yet.
    fn child(&self, path: &str) -> Arc<dyn Folder>;

    /// A handle on the parent folder, or `None` at the top of the store.
    fn parent(&self) -> Option<Arc<dyn Folder>>;

    /// Resolve a relative path against this folder's root.
    fn absolute(&self, path: &str) -> String {
        path::join(self.path(), path)
    }

    /// Express an absolute path relative to this folder's root.
    ///
    /// Fails with [`Error::NotWithin`] if the path is not under the root.
    fn relative(&self, path: &str) -> Result<String> {
        path::relative_to(path, self.path())
            .map(str::to_string)
            .ok_or_else(|| Error::NotWithin {
                path: path.to_string(),
                root: self.path().to_string(),
            })
    }

    /// List the immediate children of a sub-path, in the backing store's
    /// own order.
    async fn list(&self, path: &str) -> Result<Vec<FolderEntry>>;

    /// Probe the kind of entry at a path.
    ///
    /// Absent or unreadable entries yield `None`; probing never fails.
    async fn entry_type(&self, path: &str) -> Option<EntryType>;

    /// Read a text file. Fails if the entry is absent or not a file.
    async fn read_file(&self, path: &str) -> Result<String>;

    /// Rename an entry. Both paths are relative to this folder's root.
    async fn rename(&self, from: &str, to: &str) -> Result<()>;
}
