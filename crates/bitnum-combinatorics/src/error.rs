//! Errors raised while writing tables.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when writing tables to disk.
#[derive(Debug, Error)]
pub enum TableError {
    /// The output directory could not be created.
    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A table file could not be created or written.
    #[error("failed to write table to {}", .path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
