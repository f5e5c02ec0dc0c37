//! Error types for kempt-core

use kempt_fs::EntryType;

/// Result type for kempt-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kempt-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file could not be parsed
    #[error("Failed to parse '{path}': {message}")]
    Config { path: String, message: String },

    /// A format string names a casing that does not exist
    #[error("Unknown casing '{token}' in '{pattern}'")]
    UnknownCasing { token: String, pattern: String },

    /// An extension casing appears before the final fragment
    #[error("The extension casing must be the last fragment of '{pattern}'")]
    MisplacedExtension { token: String, pattern: String },

    /// No project configuration at or above the given path
    #[error("No project found at '{path}'")]
    NotAProject { path: String },

    /// A rename target falls under the project's ignore rules
    #[error("The new path '{path}' is ignored by the project")]
    DestinationIgnored { path: String },

    /// A rename target is already occupied
    #[error("A {kind} with the new name '{name}' exists")]
    DestinationExists { name: String, kind: EntryType },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from kempt-fs
    #[error(transparent)]
    Fs(#[from] kempt_fs::Error),
}
