//! Directory entry kinds.

use serde::{Deserialize, Serialize};

/// The kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Folder,
}

impl EntryType {
    /// Get the lowercase label used in messages and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named directory entry, as yielded by [`Folder::list`](crate::Folder::list).
pub type FolderEntry = (String, EntryType);
