use std::io;
use thiserror::Error;

/// Errors produced while loading a topic file.
///
/// `RowOverflow` is the one partial-success case: rows read before the
/// offending line are kept and the topic is still finalized as initialized,
/// so the error reports the abort without discarding the data.
#[derive(Debug, Error)]
pub enum TopicLoadError {
    #[error("Failed to open '{path}'. \nError: {source}")]
    OpenFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while reading '{path}'. \nError: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Error reading the header from '{path}'")]
    MissingHeader { path: String },
    #[error("Line #{row} of '{path}' has more fields than the header. Stopped reading the topic")]
    RowOverflow { path: String, row: usize },
}
