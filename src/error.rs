//! Error types shared by both scanners.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. Anything reported through this type ends the run without a
/// report; per-line problems are logged and skipped instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading failed part way through the scan.
    #[error("read error in {} at line {line}: {source}", .path.display())]
    Read {
        /// Path being scanned.
        path: PathBuf,
        /// 1-based number of the line that could not be read.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, line: usize, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            line,
            source,
        }
    }
}
