use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DatasetError>;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("invalid separator pattern: {0}")]
    Separator(#[from] regex::Error),
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    LloydError(#[from] lloyd::Error),
}

/// Why a single input line was skipped
#[derive(Error, Debug, Clone)]
pub enum LineError {
    #[error("line has no fields")]
    Empty,
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("field {index} ({field:?}) is not a number")]
    NotANumber { index: usize, field: String },
    /// The parsed values were refused by the record set
    #[error(transparent)]
    Record(lloyd::Error),
}

impl From<lloyd::Error> for LineError {
    fn from(err: lloyd::Error) -> Self {
        match err {
            lloyd::Error::DimensionMismatch { expected, found } => {
                LineError::FieldCount { expected, found }
            }
            err => LineError::Record(err),
        }
    }
}
