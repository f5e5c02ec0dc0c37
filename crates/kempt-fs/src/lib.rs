//! Filesystem abstraction for kempt
//!
//! Every path in this workspace is a forward-slash string; conversion to
//! the platform-native form happens only at I/O boundaries. The [`Folder`]
//! trait is the single seam between the naming engine and a backing store,
//! with [`DiskFolder`] as the real-filesystem implementation.

pub mod disk;
pub mod entry;
pub mod error;
pub mod folder;
pub mod path;

pub use disk::DiskFolder;
pub use entry::{EntryType, FolderEntry};
pub use error::{Error, Result};
pub use folder::Folder;
