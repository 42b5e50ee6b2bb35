use super::algorithm::Partition;
use lloyd::{Float, Record, Records};
use tracing::{debug, info};

/// A snapshot of the convergence loop, handed to a [`KMeansObserver`].
#[derive(Clone, Copy, Debug)]
pub struct IterationReport<'a, F: Float> {
    iteration: u64,
    centroids: &'a [Record<F>],
    partition: &'a Partition,
    records: &'a Records<F>,
}

impl<'a, F: Float> IterationReport<'a, F> {
    pub(crate) fn new(
        iteration: u64,
        centroids: &'a [Record<F>],
        partition: &'a Partition,
        records: &'a Records<F>,
    ) -> Self {
        IterationReport {
            iteration,
            centroids,
            partition,
            records,
        }
    }

    /// Number of assignment/update rounds completed so far, starting at 1
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Centroids after this iteration's update step
    pub fn centroids(&self) -> &'a [Record<F>] {
        self.centroids
    }

    /// Grouping produced by this iteration's assignment step
    pub fn partition(&self) -> &'a Partition {
        self.partition
    }

    /// Number of records in each cluster
    pub fn cluster_sizes(&self) -> Vec<usize> {
        self.partition.sizes()
    }

    /// Original indices of the members of cluster `cluster`, ascending
    pub fn member_indices(&self, cluster: usize) -> Vec<usize> {
        let mut indices: Vec<_> = self
            .partition
            .group(cluster)
            .iter()
            .filter_map(|&i| self.records.get(i).and_then(Record::original_index))
            .collect();
        indices.sort_unstable();
        indices
    }
}

/// Receives progress events from the convergence loop.
///
/// Every method has an empty default, implement the ones you care about. Any
/// `FnMut(&IterationReport<F>)` closure is an observer that listens to
/// [`centroids_moved`](KMeansObserver::centroids_moved).
pub trait KMeansObserver<F: Float> {
    /// Called once the initial centroids have been drawn
    fn centroids_initialized(&mut self, _centroids: &[Record<F>]) {}

    /// Called after every iteration that moved at least one centroid
    fn centroids_moved(&mut self, _report: &IterationReport<'_, F>) {}

    /// Called once, after the iteration that left every centroid in place
    fn converged(&mut self, _report: &IterationReport<'_, F>) {}
}

impl<F: Float, T: FnMut(&IterationReport<'_, F>)> KMeansObserver<F> for T {
    fn centroids_moved(&mut self, report: &IterationReport<'_, F>) {
        self(report)
    }
}

/// Discards every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl<F: Float> KMeansObserver<F> for NoopObserver {}

/// Reports progress through `tracing`: cluster sizes and member indices at debug level after every
/// move, a summary at info level on convergence.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl<F: Float> KMeansObserver<F> for TracingObserver {
    fn centroids_initialized(&mut self, centroids: &[Record<F>]) {
        debug!(n_centroids = centroids.len(), "initialized centroids");
    }

    fn centroids_moved(&mut self, report: &IterationReport<'_, F>) {
        for cluster in 0..report.partition().n_groups() {
            let members = report.member_indices(cluster);
            debug!(
                iteration = report.iteration(),
                cluster,
                size = members.len(),
                ?members,
                "centroid adjusted"
            );
        }
    }

    fn converged(&mut self, report: &IterationReport<'_, F>) {
        info!(
            iterations = report.iteration(),
            sizes = ?report.cluster_sizes(),
            "centroids converged"
        );
    }
}
