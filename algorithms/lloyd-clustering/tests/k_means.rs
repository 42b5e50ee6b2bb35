use approx::assert_abs_diff_eq;
use lloyd::distance::MinkowskiDist;
use lloyd::traits::Fit;
use lloyd::{Record, Records};
use lloyd_clustering::{
    IterationReport, KMeans, KMeansError, KMeansInit, KMeansObserver, NoopObserver,
};
use lloyd_datasets::generate::blobs;
use ndarray::{array, Array1};
use ndarray_rand::rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use std::collections::HashSet;

fn seeded_blobs(seed: u64) -> Records<f64> {
    let mut rng = Xoshiro256Plus::seed_from_u64(seed);
    blobs(50, &array![[0., 0.], [20., 20.], [-20., 20.]], &mut rng)
}

fn precomputed(rows: &[[f64; 2]]) -> KMeansInit<f64> {
    KMeansInit::Precomputed(
        rows.iter()
            .map(|row| Record::centroid(Array1::from(row.to_vec())))
            .collect(),
    )
}

#[test]
fn clusters_partition_the_records() {
    let records = seeded_blobs(1);
    let model = KMeans::params_with_rng(3, Xoshiro256Plus::seed_from_u64(1))
        .fit(&records)
        .unwrap();

    assert_eq!(model.clusters().len(), 3);
    let total: usize = model.clusters().iter().map(|c| c.len()).sum();
    assert_eq!(total, records.len());

    let mut seen = HashSet::new();
    for cluster in model.clusters() {
        for record in cluster {
            assert!(records.contains(record));
            assert!(seen.insert(record.original_index()), "record in two clusters");
        }
    }
}

#[test]
fn final_partition_is_a_fixed_point() {
    let records = seeded_blobs(2);
    let model = KMeans::params_with_rng(3, Xoshiro256Plus::seed_from_u64(2))
        .fit(&records)
        .unwrap();

    let clusters = model.partition(&records).clusters(&records);
    assert_eq!(clusters, model.clusters());

    for (index, cluster) in model.clusters().iter().enumerate() {
        for record in cluster {
            assert_eq!(model.predict(record.values()), Some(index));
        }
    }
}

#[test]
fn well_seeded_blobs_are_recovered() {
    let records = seeded_blobs(3);
    let model = KMeans::params(3)
        .init_method(precomputed(&[[1., 1.], [19., 19.], [-19., 19.]]))
        .fit_observed(&records, &mut NoopObserver)
        .unwrap();

    let expected = [array![0., 0.], array![20., 20.], array![-20., 20.]];
    for (centroid, expected) in model.centroids().iter().zip(expected.iter()) {
        assert_abs_diff_eq!(centroid.values(), expected.view(), epsilon = 1.0);
    }
    for (index, cluster) in model.clusters().iter().enumerate() {
        let mut members = cluster.original_indices();
        members.sort_unstable();
        let first = index * 50;
        assert_eq!(members, (first..first + 50).collect::<Vec<_>>());
    }
}

#[derive(Default)]
struct Counter {
    initialized: usize,
    moved: Vec<u64>,
    converged: Option<u64>,
}

impl KMeansObserver<f64> for Counter {
    fn centroids_initialized(&mut self, centroids: &[Record<f64>]) {
        assert_eq!(centroids.len(), 3);
        self.initialized += 1;
    }

    fn centroids_moved(&mut self, report: &IterationReport<'_, f64>) {
        assert_eq!(report.cluster_sizes().iter().sum::<usize>(), 150);
        self.moved.push(report.iteration());
    }

    fn converged(&mut self, report: &IterationReport<'_, f64>) {
        self.converged = Some(report.iteration());
    }
}

#[test]
fn observer_sees_every_iteration() {
    let records = seeded_blobs(4);
    let mut counter = Counter::default();
    let model = KMeans::params_with_rng(3, Xoshiro256Plus::seed_from_u64(4))
        .fit_observed(&records, &mut counter)
        .unwrap();

    assert_eq!(counter.initialized, 1);
    let expected: Vec<u64> = (1..model.n_iterations()).collect();
    assert_eq!(counter.moved, expected);
    assert_eq!(counter.converged, Some(model.n_iterations()));
}

#[test]
fn manhattan_metric_clusters_too() {
    let records = Records::from_rows(&array![[0., 0.], [0., 1.], [9., 9.], [10., 9.]]);
    let manhattan = MinkowskiDist::new(1.0).unwrap();
    let model = KMeans::params_with(2, Xoshiro256Plus::seed_from_u64(5), manhattan)
        .init_method(precomputed(&[[0., 0.], [10., 10.]]))
        .fit(&records)
        .unwrap();

    assert_eq!(model.clusters()[0].original_indices(), vec![0, 1]);
    assert_eq!(model.clusters()[1].original_indices(), vec![2, 3]);
    // every record lies 0.5 away from its centroid
    assert_abs_diff_eq!(model.inertia(), 2.0);
}

#[test]
fn more_clusters_than_records_leaves_some_empty() {
    let records = Records::from_rows(&array![[1., 1.], [2., 2.]]);
    let model = KMeans::params_with_rng(5, Xoshiro256Plus::seed_from_u64(6))
        .fit(&records)
        .unwrap();

    assert_eq!(model.clusters().len(), 5);
    let total: usize = model.clusters().iter().map(|c| c.len()).sum();
    assert_eq!(total, 2);
}

#[test]
fn precomputed_centroids_must_match_dimensionality() {
    let records = Records::from_rows(&array![[1., 1.], [2., 2.]]);
    let init = KMeansInit::Precomputed(vec![
        Record::centroid(array![1.]),
        Record::centroid(array![2.]),
    ]);
    let res = KMeans::params(2).init_method(init).fit(&records);
    assert!(matches!(res, Err(KMeansError::LloydError(_))));
}
