//! Provide traits for different classes of algorithms
//!

use crate::dataset::{Float, Records};
use std::error::Error;

/// Fittable algorithms
///
/// A fittable algorithm takes a set of records and creates a concept of some kind about it. For
/// k-means the concept is a set of centroids together with the partition of the records they
/// induce.
///
/// The error type is generic so that an algorithm can report its own failure modes while still
/// accepting the errors of the core types through `From<crate::error::Error>`.
pub trait Fit<F: Float, E: Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, records: &Records<F>) -> Result<Self::Object, E>;
}
