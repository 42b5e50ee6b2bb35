use lloyd::traits::Fit;
use lloyd_clustering::KMeans;
use lloyd_datasets::generate::blobs;
use lloyd_datasets::ClusterWriter;
use ndarray::{array, Axis};
use ndarray_rand::rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

// A routine K-means task: build a synthetic dataset, fit the algorithm on it
// and write every cluster to its own file.
fn main() {
    // Our random number generator, seeded for reproducibility
    let mut rng = Xoshiro256Plus::seed_from_u64(42);

    // For each our expected centroids, generate `n` data points around it (a "blob")
    let expected_centroids = array![[10., 10.], [1., 12.], [20., 30.], [-20., 30.],];
    let n = 10000;
    let records = blobs(n, &expected_centroids, &mut rng);

    // Configure our training algorithm
    let n_clusters = expected_centroids.len_of(Axis(0));
    let model = KMeans::params_with_rng(n_clusters, rng)
        .max_n_iterations(200)
        .fit(&records)
        .expect("KMeans fitted");

    for (centroid, cluster) in model.centroids().iter().zip(model.clusters()) {
        println!("{} records around {}", cluster.len(), centroid.values());
    }

    // One file per cluster, `class1.data` to `class4.data`, in the working directory
    let paths = ClusterWriter::default()
        .write_clusters(".", model.clusters())
        .expect("Failed to write clusters");
    println!("wrote {} files", paths.len());
}
