//! Datasets
//!
//! This module implements the record, the deduplicating record set used as the working set of
//! the clustering engine, and the cluster type the engine hands back to its callers.
use ndarray::{Array1, ScalarOperand};

use num_traits::{FromPrimitive, NumAssignOps, NumCast};
use rand::distributions::uniform::SampleUniform;

use std::collections::HashSet;
use std::fmt;
use std::iter::Sum;
use std::ops::AddAssign;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

mod impl_cluster;
mod impl_record;
mod impl_records;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used as the values of every
/// record, centroid and distance.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + FromStr
    + Sum
    + NumAssignOps
    + for<'a> AddAssign<&'a Self>
    + SampleUniform
    + ScalarOperand
    + approx::AbsDiffEq
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// Record
///
/// One numeric vector together with the position of the line it was parsed from. Records
/// synthesized by the engine (centroids) carry no position.
///
/// Two records are equal when their values have identical bit patterns, element by element. The
/// position plays no part in equality or hashing, so two input lines with the same values are
/// the same record.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug)]
pub struct Record<F> {
    values: Array1<F>,
    original_index: Option<usize>,
}

/// Records
///
/// The working set of a clustering run. Records are kept in insertion order, share a single
/// dimensionality fixed by the first record, and are unique by value: inserting a record equal to
/// one already present keeps the earlier record.
#[derive(Clone, Debug)]
pub struct Records<F> {
    records: Vec<Record<F>>,
    seen: HashSet<Record<F>>,
    n_features: Option<usize>,
}

/// Cluster
///
/// The records nearest to one centroid. Only membership is meaningful, use
/// [`Cluster::sorted_by_original_index`] to recover input order.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, Default)]
pub struct Cluster<F> {
    members: Vec<Record<F>>,
}
