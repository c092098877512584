use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data: {details} (at line ~{line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    /// The counts line disagrees with the block that follows it.
    #[error("counts line (line {line}) declares {declared} {what}s but {parsed} were parsed")]
    Topology {
        what: &'static str,
        declared: usize,
        parsed: usize,
        line: usize,
    },

    #[error("bond order {value} at line {line} is not supported; kekulize aromatic bonds first")]
    UnsupportedBondOrder { value: i32, line: usize },

    #[error("failed to serialize drawing: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }
}
