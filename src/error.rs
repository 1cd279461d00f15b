use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while scanning a single file
#[derive(Debug, Error)]
pub enum ScanError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line matched a marker but has no comment delimiter (strict mode only).
    #[error("{}:{line}: `{marker}` has no `{delimiter}` comment delimiter", path.display())]
    Format {
        path: PathBuf,
        /// 0-indexed line number.
        line: usize,
        marker: String,
        delimiter: String,
    },
}
