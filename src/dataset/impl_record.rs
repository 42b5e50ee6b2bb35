use super::{Float, Record};
use ndarray::{Array1, ArrayView1};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<F: Float> Record<F> {
    /// Create a record parsed from the input at position `original_index`
    pub fn new(values: Array1<F>, original_index: usize) -> Self {
        Record {
            values,
            original_index: Some(original_index),
        }
    }

    /// Create a synthesized record, e.g. a centroid, without an input position
    pub fn centroid(values: Array1<F>) -> Self {
        Record {
            values,
            original_index: None,
        }
    }

    /// A synthesized record of `n_features` zeros
    pub fn zeros(n_features: usize) -> Self {
        Record::centroid(Array1::zeros(n_features))
    }

    pub fn values(&self) -> ArrayView1<'_, F> {
        self.values.view()
    }

    pub fn into_values(self) -> Array1<F> {
        self.values
    }

    /// Position of the line this record was parsed from, `None` for synthesized records
    pub fn original_index(&self) -> Option<usize> {
        self.original_index
    }

    pub fn n_features(&self) -> usize {
        self.values.len()
    }

    /// Orders records by ascending input position. Synthesized records come first.
    ///
    /// This is deliberately not an `Ord` implementation: equality compares values, ordering
    /// compares positions.
    pub fn cmp_by_original_index(&self, other: &Self) -> Ordering {
        self.original_index.cmp(&other.original_index)
    }
}

impl<F: Float> PartialEq for Record<F> {
    fn eq(&self, other: &Self) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| a.integer_decode() == b.integer_decode())
    }
}

impl<F: Float> Eq for Record<F> {}

impl<F: Float> Hash for Record<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.len().hash(state);
        for value in self.values.iter() {
            value.integer_decode().hash(state);
        }
    }
}

impl<F: Float> From<Array1<F>> for Record<F> {
    fn from(values: Array1<F>) -> Self {
        Record::centroid(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_original_index() {
        let a = Record::new(array![1.0, 2.0], 0);
        let b = Record::new(array![1.0, 2.0], 7);
        let c = Record::centroid(array![1.0, 2.0]);
        assert_eq!(a, b);
        assert_eq!(a, c);

        let set: HashSet<_> = vec![a, b, c].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn equality_is_exact() {
        let a = Record::centroid(array![0.1 + 0.2]);
        let b = Record::centroid(array![0.3]);
        assert_ne!(a, b);

        // signed zeros are different values
        assert_ne!(Record::centroid(array![0.0]), Record::centroid(array![-0.0]));
        // and a NaN matches itself
        assert_eq!(
            Record::centroid(array![f64::NAN]),
            Record::centroid(array![f64::NAN])
        );
    }

    #[test]
    fn different_lengths_are_not_equal() {
        assert_ne!(
            Record::centroid(array![1.0f32]),
            Record::centroid(array![1.0f32, 0.0])
        );
    }

    #[test]
    fn orders_by_original_index() {
        let mut records = vec![
            Record::new(array![3.0], 2),
            Record::new(array![1.0], 0),
            Record::centroid(array![9.0]),
            Record::new(array![2.0], 1),
        ];
        records.sort_by(Record::cmp_by_original_index);
        let order: Vec<_> = records.iter().map(Record::original_index).collect();
        assert_eq!(order, vec![None, Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn zeros_is_synthesized() {
        let zero = Record::<f64>::zeros(3);
        assert_eq!(zero.n_features(), 3);
        assert_eq!(zero.original_index(), None);
        assert!(zero.values().iter().all(|&v| v == 0.0));
    }
}
