//! Error types for signature-file operations.

use std::path::PathBuf;

/// Errors that can occur while annotating a signature file.
#[derive(Debug, thiserror::Error)]
pub enum PyfError {
    /// Signature file not found.
    #[error("signature file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// I/O error reading or rewriting the signature file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for signature-file operations.
pub type Result<T> = std::result::Result<T, PyfError>;
