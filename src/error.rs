//! Error types for rendering and exporting package structures.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a run.
///
/// Failures while listing a subtree are not errors; they are reported as
/// [`SkippedDir`](crate::tree::SkippedDir) values and the walk continues.
#[derive(Debug, Error)]
pub enum Error {
    /// The file filter could not be compiled (e.g. it exceeds the regex size limit).
    #[error("invalid --filter pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The export file could not be opened for writing.
    #[error("cannot create export file {}: {source}", path.display())]
    ExportCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to an already opened export file failed.
    #[error("error writing export file {}: {source}", path.display())]
    ExportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing console output failed.
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
