//! Error types for kempt-fs

/// Result type for kempt-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kempt-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not a folder")]
    NotAFolder { path: String },

    #[error("'{path}' is not within '{root}'")]
    NotWithin { path: String, root: String },
}

impl Error {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
