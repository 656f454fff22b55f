//! Error types for schedsim.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for schedsim operations.
pub type Result<T> = std::result::Result<T, SchedError>;

/// Errors that can occur while loading or simulating a workload.
#[derive(Error, Debug)]
pub enum SchedError {
    /// Input file could not be opened. Fatal for the whole run.
    #[error("invalid input path `{}`: {source}", .path.display())]
    InvalidPath {
        /// Path as passed on the command line.
        path: PathBuf,
        /// Underlying open failure.
        source: io::Error,
    },

    /// A line failed to parse into a valid process record.
    ///
    /// The whole input is rejected: downstream algorithms assume a
    /// consistent, complete list.
    #[error("malformed process record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number within the input file.
        line: usize,
        /// What failed to parse.
        reason: String,
    },

    /// The input contained no process records.
    #[error("workload contains no processes")]
    EmptyWorkload,

    /// Round-robin quantum was zero.
    #[error("round-robin quantum must be at least 1")]
    InvalidQuantum,

    /// I/O error while reading records or rendering a report.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
