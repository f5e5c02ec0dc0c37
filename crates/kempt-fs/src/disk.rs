//! Real-filesystem folder implementation on tokio.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::entry::{EntryType, FolderEntry};
use crate::error::{Error, Result};
use crate::folder::Folder;
use crate::path;

/// A folder backed by the real filesystem.
///
/// The root is held as a normalized forward-slash string; conversion to
/// the platform-native form happens inside each operation.
#[derive(Debug, Clone)]
pub struct DiskFolder {
    root: String,
}

impl DiskFolder {
    /// Open a folder at an existing directory.
    ///
    /// Canonicalizes the path (without UNC artifacts on Windows) and fails
    /// with [`Error::NotAFolder`] when it does not name a directory.
    pub fn resolve(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let canonical = dunce::canonicalize(path)
            .map_err(|e| Error::io(path.to_string_lossy(), e))?;
        if !canonical.is_dir() {
            return Err(Error::NotAFolder {
                path: canonical.to_string_lossy().into_owned(),
            });
        }
        Ok(Self {
            root: path::normalize(&canonical.to_string_lossy()),
        })
    }

    fn from_root(root: String) -> Self {
        Self { root }
    }
}

#[async_trait]
impl Folder for DiskFolder {
    fn path(&self) -> &str {
        &self.root
    }

    fn child(&self, path: &str) -> Arc<dyn Folder> {
        Arc::new(Self::from_root(path::join(&self.root, path)))
    }

    fn parent(&self) -> Option<Arc<dyn Folder>> {
        path::parent_of(&self.root)
            .map(|root| Arc::new(Self::from_root(root)) as Arc<dyn Folder>)
    }

    async fn list(&self, path: &str) -> Result<Vec<FolderEntry>> {
        let absolute = self.absolute(path);
        let native = path::to_native(&absolute);
        let mut reader = tokio::fs::read_dir(&native)
            .await
            .map_err(|e| Error::io(&absolute, e))?;

        let mut entries = Vec::new();
        while let Some(entry) = reader
            .next_entry()
            .await
            .map_err(|e| Error::io(&absolute, e))?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| Error::io(&absolute, e))?;
            let kind = if file_type.is_dir() {
                Some(EntryType::Folder)
            } else if file_type.is_file() {
                Some(EntryType::File)
            } else {
                // Symlinks are classified by their target; broken links
                // and special files are skipped.
                match tokio::fs::metadata(entry.path()).await {
                    Ok(meta) if meta.is_dir() => Some(EntryType::Folder),
                    Ok(meta) if meta.is_file() => Some(EntryType::File),
                    _ => None,
                }
            };
            if let Some(kind) = kind {
                entries.push((name, kind));
            }
        }
        Ok(entries)
    }

    async fn entry_type(&self, path: &str) -> Option<EntryType> {
        let native = path::to_native(&self.absolute(path));
        match tokio::fs::metadata(&native).await {
            Ok(meta) if meta.is_dir() => Some(EntryType::Folder),
            Ok(meta) if meta.is_file() => Some(EntryType::File),
            _ => None,
        }
    }

    async fn read_file(&self, path: &str) -> Result<String> {
        let absolute = self.absolute(path);
        tokio::fs::read_to_string(path::to_native(&absolute))
            .await
            .map_err(|e| Error::io(&absolute, e))
    }

    async fn rename(&self, from: &str, to: &str) -> Result<()> {
        let from_abs = self.absolute(from);
        let to_abs = self.absolute(to);
        debug!(from = %from_abs, to = %to_abs, "renaming entry");
        tokio::fs::rename(path::to_native(&from_abs), path::to_native(&to_abs))
            .await
            .map_err(|e| Error::io(&from_abs, e))
    }
}
