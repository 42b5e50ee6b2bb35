//! Utility functions for randomly generating datasets

use lloyd::Records;
use ndarray::{s, Array, Array2, ArrayBase, Data, Ix1, Ix2};
use ndarray_rand::{
    rand::Rng,
    rand_distr::{Distribution, StandardNormal},
    RandomExt,
};

/// Special case of `blobs_with_distribution` with a standard normal distribution.
pub fn blobs(
    blob_size: usize,
    blob_centroids: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    rng: &mut impl Rng,
) -> Records<f64> {
    blobs_with_distribution(blob_size, blob_centroids, StandardNormal, rng)
}

/// Given an input matrix `blob_centroids`, with shape `(n_blobs, n_features)`,
/// generate `blob_size` data points (a "blob") around each of the blob centroids.
///
/// Points are numbered blob after blob, so the row position is the original index of each
/// record. Points that happen to coincide are kept once.
///
/// `blobs` can be used to quickly assemble a synthetic dataset to test or
/// benchmark k-means on a best-case scenario input.
pub fn blobs_with_distribution(
    blob_size: usize,
    blob_centroids: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    distribution: impl Distribution<f64> + Clone,
    rng: &mut impl Rng,
) -> Records<f64> {
    let (n_centroids, n_features) = blob_centroids.dim();
    let mut blobs: Array2<f64> = Array2::zeros((n_centroids * blob_size, n_features));

    for (blob_index, blob_centroid) in blob_centroids.rows().into_iter().enumerate() {
        let blob = make_blob(blob_size, &blob_centroid, distribution.clone(), rng);

        let indexes = s![blob_index * blob_size..(blob_index + 1) * blob_size, ..];
        blobs.slice_mut(indexes).assign(&blob);
    }
    Records::from_rows(&blobs)
}

fn make_blob(
    blob_size: usize,
    blob_centroid: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    distribution: impl Distribution<f64>,
    rng: &mut impl Rng,
) -> Array2<f64> {
    let shape = (blob_size, blob_centroid.len());
    let origin_blob: Array2<f64> = Array::random_using(shape, distribution, rng);
    origin_blob + blob_centroid
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Axis};
    use ndarray_rand::rand_distr::Uniform;
    use rand_xoshiro::rand_core::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn blobs_surround_their_centroids() {
        let mut rng = Xoshiro256Plus::seed_from_u64(7);
        let centroids = array![[0., 0.], [100., 100.]];
        let records = blobs_with_distribution(50, &centroids, Uniform::new(-1., 1.), &mut rng);

        assert_eq!(records.len(), 100);
        assert_eq!(records.n_features(), Some(2));

        let data = records.to_array().unwrap();
        let first = data.slice(s![..50, ..]).mean_axis(Axis(0)).unwrap();
        let second = data.slice(s![50.., ..]).mean_axis(Axis(0)).unwrap();
        assert_abs_diff_eq!(first, array![0., 0.], epsilon = 0.5);
        assert_abs_diff_eq!(second, array![100., 100.], epsilon = 0.5);
    }

    #[test]
    fn row_position_is_the_original_index() {
        let mut rng = Xoshiro256Plus::seed_from_u64(3);
        let records = blobs(4, &array![[1., 2., 3.]], &mut rng);
        let indices: Vec<_> = records.iter().filter_map(|r| r.original_index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}
