//! Error types in Lloyd
//!

use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("record has {found} values but the dataset has {expected} features")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
}
