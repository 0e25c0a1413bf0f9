use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gosources operations
#[derive(Error, Debug)]
pub enum GosourcesError {
    /// Root path is missing or not a directory
    #[error("'{}' is not a valid directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// A matching file could not be read as UTF-8 text
    #[error("Error reading file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The finished document could not be written
    #[error("Error writing output file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Generated document does not have the expected layout
    #[error("Malformed document at position {position}: {message}")]
    MalformedDocument { position: usize, message: String },

    /// Regex compilation error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// `WalkDir` error when traversing directories
    #[error("Directory traversal error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GosourcesError>;
