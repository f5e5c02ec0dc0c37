//! Error types for kempt-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from kempt-core
    #[error(transparent)]
    Core(#[from] kempt_core::Error),

    /// Error from kempt-fs
    #[error(transparent)]
    Fs(#[from] kempt_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON report serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
