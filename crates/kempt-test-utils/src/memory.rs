//! [`MemoryFolder`], an in-memory [`Folder`] implementation.
//!
//! Backed by a map from absolute path to either file contents or a folder
//! marker, shared between every handle derived through [`Folder::child`]
//! and [`Folder::parent`]. Mutations made directly on the volume are
//! visible through all handles, which lets a test edit a config file and
//! then exercise a reload without touching the disk.

use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use kempt_fs::{path, EntryType, Error, Folder, FolderEntry, Result};

/// Absolute path -> file contents, or `None` for a folder marker.
type Volume = BTreeMap<String, Option<String>>;

/// A [`Folder`] backed by a shared in-memory volume.
///
/// # Example
///
/// ```
/// use kempt_test_utils::MemoryFolder;
///
/// let folder = MemoryFolder::new("/repo");
/// folder.put_file("src/main.rs", "fn main() {}");
/// folder.put_folder("src/old API");
/// ```
#[derive(Clone)]
pub struct MemoryFolder {
    root: String,
    volume: Arc<Mutex<Volume>>,
}

impl MemoryFolder {
    /// Create an empty folder rooted at `root`.
    pub fn new(root: &str) -> Self {
        let root = path::without_trailing_slash(root).to_string();
        let mut volume = Volume::new();
        volume.insert(root.clone(), None);

        Self {
            root,
            volume: Arc::new(Mutex::new(volume)),
        }
    }

    /// Write a file at a path relative to this folder, creating any
    /// missing parent folders.
    pub fn put_file(&self, path: &str, content: &str) {
        let absolute = self.absolute(path);
        let mut volume = self.lock();
        self.insert_parents(&mut volume, &absolute);
        volume.insert(absolute, Some(content.to_string()));
    }

    /// Create a folder at a path relative to this folder, creating any
    /// missing parents.
    pub fn put_folder(&self, path: &str) {
        let absolute = self.absolute(path);
        let mut volume = self.lock();
        self.insert_parents(&mut volume, &absolute);
        volume.insert(absolute, None);
    }

    /// Remove an entry and everything beneath it.
    pub fn remove(&self, path: &str) {
        let absolute = self.absolute(path);
        let prefix = path::with_trailing_slash(&absolute);
        let mut volume = self.lock();
        volume.remove(&absolute);
        volume.retain(|key, _| !key.starts_with(&prefix));
    }

    /// Every absolute path in the volume, sorted.
    pub fn all_paths(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    fn handle(&self, root: String) -> Arc<dyn Folder> {
        Arc::new(Self {
            root,
            volume: Arc::clone(&self.volume),
        })
    }

    fn insert_parents(&self, volume: &mut Volume, absolute: &str) {
        let mut current = absolute.to_string();
        while let Some(parent) = path::parent_of(&current) {
            if parent.len() < self.root.len() {
                break;
            }
            volume.entry(parent.clone()).or_insert(None);
            current = parent;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Volume> {
        self.volume.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Folder for MemoryFolder {
    fn path(&self) -> &str {
        &self.root
    }

    fn child(&self, path: &str) -> Arc<dyn Folder> {
        self.handle(self.absolute(path))
    }

    fn parent(&self) -> Option<Arc<dyn Folder>> {
        let parent = path::parent_of(&self.root)?;
        Some(self.handle(parent))
    }

    async fn list(&self, path: &str) -> Result<Vec<FolderEntry>> {
        let root = self.absolute(path);
        let volume = self.lock();

        match volume.get(&root) {
            Some(Some(_)) => return Err(Error::NotAFolder { path: root }),
            Some(None) => {}
            None => {
                return Err(Error::io(&root, io::Error::from(io::ErrorKind::NotFound)));
            }
        }

        let prefix = path::with_trailing_slash(&root);
        let mut entries: Vec<FolderEntry> = Vec::new();

        for (key, data) in volume.range(prefix.clone()..) {
            if !key.starts_with(&prefix) {
                break;
            }

            let rest = &key[prefix.len()..];
            let name = rest.split('/').next().unwrap_or(rest);

            // Direct keys sort before their descendants, so the first
            // sighting of a name decides its type.
            if entries.iter().any(|(seen, _)| seen == name) {
                continue;
            }

            let entry_type = if rest == name {
                match data {
                    Some(_) => EntryType::File,
                    None => EntryType::Folder,
                }
            } else {
                EntryType::Folder
            };

            entries.push((name.to_string(), entry_type));
        }

        Ok(entries)
    }

    async fn entry_type(&self, path: &str) -> Option<EntryType> {
        let absolute = self.absolute(path);
        let volume = self.lock();

        match volume.get(&absolute) {
            Some(Some(_)) => Some(EntryType::File),
            Some(None) => Some(EntryType::Folder),
            None => {
                let prefix = path::with_trailing_slash(&absolute);
                volume
                    .range(prefix.clone()..)
                    .next()
                    .filter(|(key, _)| key.starts_with(&prefix))
                    .map(|_| EntryType::Folder)
            }
        }
    }

    async fn read_file(&self, path: &str) -> Result<String> {
        let absolute = self.absolute(path);

        match self.lock().get(&absolute) {
            Some(Some(content)) => Ok(content.clone()),
            Some(None) => Err(Error::io(
                &absolute,
                io::Error::new(io::ErrorKind::InvalidInput, "entry is a folder"),
            )),
            None => Err(Error::io(
                &absolute,
                io::Error::from(io::ErrorKind::NotFound),
            )),
        }
    }

    async fn rename(&self, from: &str, to: &str) -> Result<()> {
        let old = self.absolute(from);
        let new = self.absolute(to);
        let mut volume = self.lock();

        let Some(data) = volume.remove(&old) else {
            return Err(Error::io(&old, io::Error::from(io::ErrorKind::NotFound)));
        };

        let old_prefix = path::with_trailing_slash(&old);
        let new_prefix = path::with_trailing_slash(&new);
        let moved: Vec<(String, Option<String>)> = volume
            .range(old_prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&old_prefix))
            .map(|(key, value)| {
                (
                    format!("{new_prefix}{}", &key[old_prefix.len()..]),
                    value.clone(),
                )
            })
            .collect();

        volume.retain(|key, _| !key.starts_with(&old_prefix));
        volume.insert(new, data);
        volume.extend(moved);

        Ok(())
    }
}
