//! Error types for the library API.

use std::process::ExitStatus;
use thiserror::Error;

/// Errors related to the bookmark store (file access, validation, lookup).
#[derive(Error, Debug)]
pub enum StoreError {
    /// An error occurred while resolving the store location.
    #[error("Failed to initialize store: {0}")]
    Init(String),

    /// A bookmark title must be a non-empty display string.
    #[error("Bookmark title cannot be empty")]
    EmptyTitle,

    /// The given URL could not be parsed.
    #[error("Invalid URL '{0}'")]
    InvalidUrl(String),

    /// A bookmark with the same title already exists.
    #[error("Bookmark with title '{0}' already exists")]
    DuplicateTitle(String),

    /// A bookmark with the same normalized URL already exists.
    #[error("Bookmark with URL '{0}' already exists")]
    DuplicateUrl(String),

    /// No bookmark matched the query by title, URL, or alias.
    #[error("Bookmark '{0}' not found")]
    NotFound(String),

    /// An underlying file I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize the bookmark file.
    #[error("JSON parsing error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors raised while handing a bookmark off to the OS.
#[derive(Error, Debug)]
pub enum OpenError {
    /// No opener executable was found for the current platform.
    #[error("No suitable open command found for platform '{0}'")]
    NoOpener(String),

    /// The opener subprocess could not be spawned.
    #[error("Failed to run '{command}': {source}")]
    Launch {
        command: String,
        source: std::io::Error,
    },

    /// The opener ran but reported failure.
    #[error("'{command}' exited with {status}")]
    Failed { command: String, status: ExitStatus },
}
