//! Error types for config assembly.

use std::io;

use thiserror::Error;

/// Errors that abort an Ignition build.
///
/// Every variant is fatal: the builder never returns partial output.
#[derive(Debug, Error)]
pub enum Error {
    /// Listing a directory in the byte store failed (including "does not exist").
    #[error("failed to read directory {path}")]
    DirectoryRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Reading a file's bytes from the byte store failed.
    #[error("failed to read file {path}")]
    FileRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The assembled document could not be encoded as JSON.
    #[error("failed to serialize ignition config")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn directory_read(path: impl Into<String>, source: io::Error) -> Self {
        Error::DirectoryRead {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn file_read(path: impl Into<String>, source: io::Error) -> Self {
        Error::FileRead {
            path: path.into(),
            source,
        }
    }
}

/// Result type for config assembly.
pub type Result<T> = std::result::Result<T, Error>;
