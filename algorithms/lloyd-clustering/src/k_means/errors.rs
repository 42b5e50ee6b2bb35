use std::fmt::Debug;
use thiserror::Error;

/// An error when fitting with an invalid hyperparameter
#[derive(Error, Debug)]
pub enum KMeansParamsError {
    #[error("n_clusters cannot be 0")]
    NClusters,
    #[error("max_n_iterations cannot be 0")]
    MaxIterations,
    #[error("expected {expected} precomputed centroids, got {found}")]
    PrecomputedCount { expected: usize, found: usize },
}

/// An error when modeling a KMeans algorithm
///
/// `M` is the model handed back when the loop gives up, usually [`KMeans`](crate::KMeans).
#[derive(Error, Debug)]
pub enum KMeansError<M: Debug> {
    /// When any of the hyperparameters are set the wrong value
    #[error("Invalid hyperparameter: {0}")]
    InvalidParams(#[from] KMeansParamsError),
    /// When the centroids are still moving after `max_n_iterations` iterations. Carries the
    /// state of the last iteration.
    #[error("Fitting failed: centroids still moving after max_n_iterations iterations")]
    NotConverged(M),
    #[error(transparent)]
    LloydError(#[from] lloyd::error::Error),
}
