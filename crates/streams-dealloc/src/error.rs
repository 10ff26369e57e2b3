//! Error types for deallocation codegen.

use std::path::PathBuf;

/// Errors that can occur while building or loading a resource catalog.
#[derive(Debug, thiserror::Error)]
pub enum DeallocError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading a catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file not found.
    #[error("catalog file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// An array name is cataloged more than once.
    #[error("duplicate catalog entry '{name}': listed under {first}, repeated under {second}")]
    DuplicateEntry {
        /// The repeated array name.
        name: String,
        /// Category of the first occurrence.
        first: &'static str,
        /// Category of the repeated occurrence.
        second: &'static str,
    },
}

/// Result type for deallocation codegen operations.
pub type Result<T> = std::result::Result<T, DeallocError>;
