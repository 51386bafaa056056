// error.rs
use std::{io, path::PathBuf};
use thiserror::Error;

/// Error types for a long-path scan
///
/// Every failure the CLI can report maps to one variant here. Variants that
/// concern a specific path carry it so the printed message names it.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The candidate path could not be turned into an absolute path
    #[error("cannot resolve path '{input}': {reason}")]
    PathResolution { input: String, reason: String },

    /// The target does not exist
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    /// The target exists but is not a directory
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The target could not be inspected
    #[error("cannot access {}: {source}", .path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Walkdir traversal error that halted the scan
    #[error("{0}")]
    Traversal(#[from] walkdir::Error),

    /// A visitor asked for the walk to stop
    #[error("scan aborted at {}", .0.display())]
    Aborted(PathBuf),

    /// The platform gate refused to run
    #[error("this utility is made for running on Microsoft Windows Platform (pass --any-platform to scan anyway)")]
    UnsupportedPlatform,

    /// I/O error while writing output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ScanError {
    /// Process exit code for this error kind
    pub fn exit_code(&self) -> u8 {
        match self {
            ScanError::Io(_) => 1,
            ScanError::PathResolution { .. } => 2,
            ScanError::NotFound(_) => 3,
            ScanError::NotADirectory(_) => 4,
            ScanError::Inaccessible { .. } => 5,
            ScanError::Traversal(_) => 6,
            ScanError::Aborted(_) => 7,
            ScanError::UnsupportedPlatform => 8,
        }
    }
}
