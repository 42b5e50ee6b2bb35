use crate::k_means::errors::KMeansError;
use crate::k_means::observer::{IterationReport, KMeansObserver, TracingObserver};
use crate::k_means::{KMeansParams, KMeansValidParams};
use lloyd::distance::{Distance, L2Dist};
use lloyd::traits::Fit;
use lloyd::{Cluster, Float, ParamGuard, Record, Records};
use ndarray::{Array1, ArrayView1};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use tracing::{info, warn};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug)]
/// K-means clustering partitions a set of records into `n_clusters` clusters,
/// where each record belongs to the cluster with the nearest mean.
///
/// The mean of the records within a cluster is called *centroid*.
///
/// Given the set of centroids, you can assign a record to a cluster
/// choosing the nearest centroid.
///
/// We implement the _standard algorithm_ (also known as Lloyd's Algorithm).
/// More details on the algorithm can be found
/// [here](https://en.wikipedia.org/wiki/K-means_clustering).
///
/// ## The algorithm
///
/// K-means is an iterative algorithm: it progressively refines the choice of centroids.
///
/// There are three steps:
/// - initialisation step: every centroid copies a record drawn uniformly at random from the
///                        dataset. Draws are independent, two centroids may start on the same
///                        record;
/// - assignment step: assign each record to the nearest centroid. On a tie the centroid with
///                    the lowest index wins;
/// - update step: recompute every centroid as the mean of its cluster. The centroid of an
///                empty cluster is moved to the origin.
///
/// The initialisation step is a one-off, done at the very beginning.
/// Assignment and update are repeated until an update leaves every centroid bit-for-bit where
/// it was. Lloyd's algorithm has no formal bound on the number of rounds this takes, so we give
/// up with [`KMeansError::NotConverged`] after `max_n_iterations` rounds.
///
/// ## Working set
///
/// The algorithm runs on [`Records`], which holds one record per distinct vector. Input lines
/// with identical values are clustered once, as the record that was inserted first.
///
/// ## Tutorial
///
/// ```
/// use lloyd::traits::Fit;
/// use lloyd::Records;
/// use lloyd_clustering::KMeans;
/// use ndarray::array;
///
/// let records = Records::from_rows(&array![[0., 0.], [0., 1.], [10., 10.], [10., 11.]]);
///
/// // `n_clusters` is the only mandatory parameter.
/// let model = KMeans::params(2).fit(&records).expect("KMeans fitted");
///
/// assert_eq!(model.clusters().len(), 2);
/// assert_eq!(model.clusters().iter().map(|c| c.len()).sum::<usize>(), 4);
///
/// // Assign a new observation to its nearest centroid
/// let cluster = model.predict(array![9., 9.].view()).unwrap();
/// assert!(model.clusters()[cluster]
///     .iter()
///     .any(|r| r.values() == array![10., 10.].view()));
/// ```
pub struct KMeans<F: Float, D: Distance<F>> {
    centroids: Vec<Record<F>>,
    clusters: Vec<Cluster<F>>,
    n_iterations: u64,
    inertia: F,
    dist_fn: D,
}

impl<F: Float> KMeans<F, L2Dist> {
    pub fn params(n_clusters: usize) -> KMeansParams<F, Xoshiro256Plus, L2Dist> {
        KMeansParams::new(n_clusters, Xoshiro256Plus::seed_from_u64(42), L2Dist)
    }

    pub fn params_with_rng<R: Rng>(n_clusters: usize, rng: R) -> KMeansParams<F, R, L2Dist> {
        KMeansParams::new(n_clusters, rng, L2Dist)
    }
}

impl<F: Float, D: Distance<F>> KMeans<F, D> {
    pub fn params_with<R: Rng>(n_clusters: usize, rng: R, dist_fn: D) -> KMeansParams<F, R, D> {
        KMeansParams::new(n_clusters, rng, dist_fn)
    }

    /// Return the final centroids, one per cluster. Empty when the dataset was empty.
    pub fn centroids(&self) -> &[Record<F>] {
        &self.centroids
    }

    /// Return the final partition, `n_clusters` clusters in centroid order
    pub fn clusters(&self) -> &[Cluster<F>] {
        &self.clusters
    }

    pub fn into_clusters(self) -> Vec<Cluster<F>> {
        self.clusters
    }

    /// Number of assignment/update rounds run, including the final one that moved nothing
    pub fn n_iterations(&self) -> u64 {
        self.n_iterations
    }

    /// Return the sum of distances between each record and the centroid of its cluster
    pub fn inertia(&self) -> F {
        self.inertia
    }

    /// Return the index of the centroid closest to `observation`, or `None` if the model was
    /// fitted on an empty dataset.
    ///
    /// Panics if `observation` does not have the dimensionality of the centroids.
    pub fn predict(&self, observation: ArrayView1<F>) -> Option<usize> {
        if self.centroids.is_empty() {
            None
        } else {
            Some(closest_centroid(&self.dist_fn, &self.centroids, observation).0)
        }
    }

    /// Run the assignment step for `records` against the final centroids.
    ///
    /// Applied to the records the model was fitted on, this reproduces the partition stored in
    /// [`clusters`](KMeans::clusters).
    pub fn partition(&self, records: &Records<F>) -> Partition {
        if self.centroids.is_empty() {
            Partition::empty(self.clusters.len())
        } else {
            assign_clusters(&self.dist_fn, records, &self.centroids)
        }
    }
}

impl<F: Float, R: Rng + Clone, D: Distance<F>> KMeansValidParams<F, R, D> {
    /// Runs the convergence loop on `records`, reporting progress to `observer`.
    ///
    /// An empty dataset is not an error: the result has `n_clusters` empty clusters and no
    /// centroids.
    pub fn fit_observed<O: KMeansObserver<F>>(
        &self,
        records: &Records<F>,
        observer: &mut O,
    ) -> Result<KMeans<F, D>, KMeansError<KMeans<F, D>>> {
        let n_clusters = self.n_clusters();
        if records.is_empty() {
            info!("no classification needed, dataset is empty");
            return Ok(KMeans {
                centroids: Vec::new(),
                clusters: vec![Cluster::new(); n_clusters],
                n_iterations: 0,
                inertia: F::zero(),
                dist_fn: self.dist_fn().clone(),
            });
        }
        let n_features = records.n_features().unwrap_or(0);

        let mut rng = self.rng().clone();
        let mut centroids = self
            .init_method()
            .run::<_, KMeans<F, D>>(n_clusters, records, &mut rng)?;
        observer.centroids_initialized(&centroids);

        let mut n_iter = 0;
        loop {
            n_iter += 1;
            let partition = assign_clusters(self.dist_fn(), records, &centroids);
            let new_centroids = compute_centroids(n_features, records, &partition);
            let moved = advance_centroids(&mut centroids, new_centroids);

            let report = IterationReport::new(n_iter, &centroids, &partition, records);
            if !moved {
                observer.converged(&report);
                return Ok(self.model(centroids, &partition, records, n_iter));
            }
            observer.centroids_moved(&report);

            if n_iter == self.max_n_iterations() {
                warn!(
                    max_n_iterations = self.max_n_iterations(),
                    "centroids did not settle"
                );
                return Err(KMeansError::NotConverged(
                    self.model(centroids, &partition, records, n_iter),
                ));
            }
        }
    }

    fn model(
        &self,
        centroids: Vec<Record<F>>,
        partition: &Partition,
        records: &Records<F>,
        n_iterations: u64,
    ) -> KMeans<F, D> {
        let clusters = partition.clusters(records);
        let inertia = compute_inertia(self.dist_fn(), &centroids, &clusters);
        KMeans {
            centroids,
            clusters,
            n_iterations,
            inertia,
            dist_fn: self.dist_fn().clone(),
        }
    }
}

impl<F: Float, R: Rng + Clone, D: Distance<F>> KMeansParams<F, R, D> {
    /// Checks the hyperparameters, then runs [`KMeansValidParams::fit_observed`]
    pub fn fit_observed<O: KMeansObserver<F>>(
        &self,
        records: &Records<F>,
        observer: &mut O,
    ) -> Result<KMeans<F, D>, KMeansError<KMeans<F, D>>> {
        self.check_ref()?.fit_observed(records, observer)
    }
}

impl<F: Float, R: Rng + Clone, D: Distance<F>> Fit<F, KMeansError<KMeans<F, D>>>
    for KMeansValidParams<F, R, D>
{
    type Object = KMeans<F, D>;

    /// Given a set of `records`, `fit` identifies `n_clusters` centroids based on their
    /// distribution, logging progress through `tracing`.
    ///
    /// An instance of `KMeans` is returned.
    ///
    fn fit(&self, records: &Records<F>) -> Result<Self::Object, KMeansError<KMeans<F, D>>> {
        self.fit_observed(records, &mut TracingObserver)
    }
}

/// A grouping of records by centroid: group `i` holds the positions, in the [`Records`] it was
/// computed from, of the records nearest to centroid `i`.
///
/// Positions inside a group are ascending, so two partitions of the same records are equal
/// exactly when they place every record in the same cluster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    groups: Vec<Vec<usize>>,
}

impl Partition {
    fn empty(n_groups: usize) -> Self {
        Partition {
            groups: vec![Vec::new(); n_groups],
        }
    }

    pub fn n_groups(&self) -> usize {
        self.groups.len()
    }

    /// Positions of the records in group `index`
    ///
    /// Panics if `index >= n_groups()`.
    pub fn group(&self, index: usize) -> &[usize] {
        &self.groups[index]
    }

    pub fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }

    /// Number of records in each group
    pub fn sizes(&self) -> Vec<usize> {
        self.groups.iter().map(Vec::len).collect()
    }

    /// Materialize every group as a [`Cluster`] of the records it refers to
    pub fn clusters<F: Float>(&self, records: &Records<F>) -> Vec<Cluster<F>> {
        let records = records.as_slice();
        self.groups
            .iter()
            .map(|group| group.iter().map(|&i| records[i].clone()).collect())
            .collect()
    }
}

/// The assignment step.
///
/// Places every record in the group of its nearest centroid and returns one group per centroid,
/// empty groups included. Ties go to the centroid with the lowest index.
///
/// Panics if `centroids` is empty.
pub fn assign_clusters<F: Float, D: Distance<F>>(
    dist_fn: &D,
    records: &Records<F>,
    centroids: &[Record<F>],
) -> Partition {
    let mut partition = Partition::empty(centroids.len());
    for (index, record) in records.iter().enumerate() {
        let (closest, _) = closest_centroid(dist_fn, centroids, record.values());
        partition.groups[closest].push(index);
    }
    partition
}

/// Given a list of centroids and an observation, return the index of the closest centroid
/// together with its distance.
pub(crate) fn closest_centroid<F: Float, D: Distance<F>>(
    dist_fn: &D,
    centroids: &[Record<F>],
    observation: ArrayView1<F>,
) -> (usize, F) {
    let (mut closest_index, mut minimum_distance) =
        (0, dist_fn.distance(centroids[0].values(), observation));

    for (centroid_index, centroid) in centroids.iter().enumerate().skip(1) {
        let distance = dist_fn.distance(centroid.values(), observation);
        if distance < minimum_distance {
            closest_index = centroid_index;
            minimum_distance = distance;
        }
    }
    (closest_index, minimum_distance)
}

/// The centroid aggregator.
///
/// Returns the component-wise mean of `members` as a new centroid of length `n_features`. The
/// mean of no records is the zero vector.
pub fn compute_centroid<'a, F: Float + 'a>(
    n_features: usize,
    members: impl IntoIterator<Item = &'a Record<F>>,
) -> Record<F> {
    let mut centroid = Array1::zeros(n_features);
    let mut count = 0usize;
    for member in members {
        centroid += &member.values();
        count += 1;
    }
    if count > 0 {
        centroid *= F::one() / F::cast(count);
    }
    Record::centroid(centroid)
}

/// `compute_centroids` returns one centroid per group of `partition`, in group order.
fn compute_centroids<F: Float>(
    n_features: usize,
    records: &Records<F>,
    partition: &Partition,
) -> Vec<Record<F>> {
    let records = records.as_slice();
    partition
        .groups()
        .iter()
        .map(|group| compute_centroid(n_features, group.iter().map(|&i| &records[i])))
        .collect()
}

/// Replaces every centroid whose value changed. Returns `true` if any did.
fn advance_centroids<F: Float>(centroids: &mut [Record<F>], new_centroids: Vec<Record<F>>) -> bool {
    let mut moved = false;
    for (centroid, new_centroid) in centroids.iter_mut().zip(new_centroids) {
        if *centroid != new_centroid {
            *centroid = new_centroid;
            moved = true;
        }
    }
    moved
}

fn compute_inertia<F: Float, D: Distance<F>>(
    dist_fn: &D,
    centroids: &[Record<F>],
    clusters: &[Cluster<F>],
) -> F {
    centroids
        .iter()
        .zip(clusters)
        .flat_map(|(centroid, cluster)| {
            cluster
                .iter()
                .map(move |record| dist_fn.distance(centroid.values(), record.values()))
        })
        .sum()
}
