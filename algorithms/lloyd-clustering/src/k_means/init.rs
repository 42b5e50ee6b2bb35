use crate::k_means::errors::{KMeansError, KMeansParamsError};
use lloyd::{Error, Float, Record, Records};
use rand::Rng;
use std::fmt::Debug;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
/// Specifies centroid initialization algorithm for KMeans.
pub enum KMeansInit<F: Float> {
    /// Each centroid copies the values of a record drawn uniformly at random from the dataset.
    /// Draws are independent, so the same record can seed more than one centroid.
    Random,
    /// Use a precomputed set of centroids, one per cluster, each with the dimensionality of the
    /// dataset.
    Precomputed(Vec<Record<F>>),
}

impl<F: Float> Default for KMeansInit<F> {
    fn default() -> Self {
        KMeansInit::Random
    }
}

impl<F: Float> KMeansInit<F> {
    /// Runs the chosen initialization routine. `records` must not be empty.
    pub(crate) fn run<R: Rng, M: Debug>(
        &self,
        n_clusters: usize,
        records: &Records<F>,
        rng: &mut R,
    ) -> Result<Vec<Record<F>>, KMeansError<M>> {
        match self {
            Self::Random => Ok(random_init(n_clusters, records, rng)),
            Self::Precomputed(centroids) => {
                if centroids.len() != n_clusters {
                    return Err(KMeansParamsError::PrecomputedCount {
                        expected: n_clusters,
                        found: centroids.len(),
                    }
                    .into());
                }
                let expected = records.n_features().unwrap_or(0);
                if let Some(centroid) = centroids.iter().find(|c| c.n_features() != expected) {
                    return Err(Error::DimensionMismatch {
                        expected,
                        found: centroid.n_features(),
                    }
                    .into());
                }
                Ok(centroids
                    .iter()
                    .map(|c| Record::centroid(c.values().to_owned()))
                    .collect())
            }
        }
    }
}

/// Samples `n_clusters` records with replacement and copies their values into fresh centroids
fn random_init<F: Float>(
    n_clusters: usize,
    records: &Records<F>,
    rng: &mut impl Rng,
) -> Vec<Record<F>> {
    let n_samples = records.len();
    (0..n_clusters)
        .map(|_| {
            let source = &records.as_slice()[rng.gen_range(0..n_samples)];
            Record::centroid(source.values().to_owned())
        })
        .collect()
}
