//! Distance metrics between records
//!

use crate::dataset::Float;
use crate::error::{Error, Result};
use ndarray::{ArrayView1, Zip};
use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

// Should satisfy triangle inequality (no squared Euclidean)
pub trait Distance<F: Float>: Clone + Send + Sync + Debug {
    // Panics if a and b are not of equal dimension
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F;

    // Fast distance metric that keeps the order of the distance function
    fn rdistance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        self.distance(a, b)
    }
}

/// Minkowski distance of order `h`
///
/// The `h`-th root of the sum over every coordinate of the absolute difference raised to the
/// `h`-th power. Order 1 is the Manhattan distance, order 2 the Euclidean distance.
///
/// Panics if `a` and `b` are not of equal dimension.
pub fn minkowski_distance<F: Float>(a: ArrayView1<F>, b: ArrayView1<F>, h: F) -> F {
    Zip::from(&a)
        .and(&b)
        .fold(F::zero(), |acc, &a, &b| acc + (a - b).abs().powf(h))
        .powf(F::one() / h)
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinkowskiDist<F>(F);

impl<F: Float> MinkowskiDist<F> {
    /// Orders below 1 do not define a metric and are rejected
    pub fn new(order: F) -> Result<Self> {
        if !order.is_finite() || order < F::one() {
            return Err(Error::Parameters(format!(
                "Minkowski order must be a finite number >= 1, got {}",
                order
            )));
        }
        Ok(MinkowskiDist(order))
    }

    pub fn order(&self) -> F {
        self.0
    }
}

impl<F: Float> Distance<F> for MinkowskiDist<F> {
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        minkowski_distance(a, b, self.0)
    }
}

/// Euclidean distance, the Minkowski distance of order 2
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct L2Dist;

impl<F: Float> Distance<F> for L2Dist {
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        self.rdistance(a, b).sqrt()
    }

    fn rdistance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        Zip::from(&a).and(&b).fold(F::zero(), |acc, &a, &b| {
            let diff = a - b;
            acc + diff * diff
        })
    }
}
