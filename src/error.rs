use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file does not exist.
    #[error("input file '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// The input is not a valid JSON array of idiom records.
    #[error("invalid idiom list in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The output file could not be created, written, or persisted.
    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The character index could not be rendered as JSON.
    #[error("failed to serialize character index: {0}")]
    Serialization(serde_json::Error),

    /// Any other I/O failure while reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
