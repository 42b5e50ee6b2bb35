//! `lloyd-clustering` implements Lloyd's k-means algorithm on top of the `lloyd` core types.
//!
//! ## The big picture
//!
//! The crate takes a deduplicated set of [`Records`](lloyd::Records), seeds `n_clusters`
//! centroids from it and alternates the assignment and update steps until no centroid moves.
//! The result is a [`KMeans`] model holding the final centroids and the final partition.
//!
//! ## Current state
//!
//! * [K-Means](KMeans) with random (with replacement) or precomputed initialisation
//! * any metric implementing [`Distance`](lloyd::distance::Distance), Euclidean by default
//! * progress reporting through [`KMeansObserver`], logged with `tracing` unless told otherwise
//!
//! Implementation choices, algorithmic details and a tutorial can be found on [`KMeans`].
#[allow(clippy::new_ret_no_self)]
mod k_means;

pub use k_means::*;
