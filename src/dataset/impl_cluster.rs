use super::{Cluster, Float, Record};
use std::collections::HashSet;
use std::iter::FromIterator;

impl<F: Float> Cluster<F> {
    pub fn new() -> Self {
        Cluster {
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record<F>> {
        self.members.iter()
    }

    pub fn contains(&self, record: &Record<F>) -> bool {
        self.members.contains(record)
    }

    /// Members in ascending order of their original index
    pub fn sorted_by_original_index(&self) -> Vec<&Record<F>> {
        let mut sorted: Vec<_> = self.members.iter().collect();
        sorted.sort_by(|a, b| a.cmp_by_original_index(b));
        sorted
    }

    /// Original indices of the members, ascending
    pub fn original_indices(&self) -> Vec<usize> {
        let mut indices: Vec<_> = self.members.iter().filter_map(Record::original_index).collect();
        indices.sort_unstable();
        indices
    }
}

/// Clusters compare as sets: membership matters, order does not.
impl<F: Float> PartialEq for Cluster<F> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let members: HashSet<_> = self.members.iter().collect();
        other.members.iter().all(|record| members.contains(record))
    }
}

impl<F: Float> FromIterator<Record<F>> for Cluster<F> {
    fn from_iter<I: IntoIterator<Item = Record<F>>>(iter: I) -> Self {
        Cluster {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a, F: Float> IntoIterator for &'a Cluster<F> {
    type Item = &'a Record<F>;
    type IntoIter = std::slice::Iter<'a, Record<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl<F: Float> IntoIterator for Cluster<F> {
    type Item = Record<F>;
    type IntoIter = std::vec::IntoIter<Record<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn cluster() -> Cluster<f64> {
        vec![
            Record::new(array![5., 5.], 4),
            Record::new(array![1., 1.], 0),
            Record::new(array![3., 3.], 2),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn sorts_members_by_original_index() {
        let cluster = cluster();
        let values: Vec<_> = cluster
            .sorted_by_original_index()
            .into_iter()
            .map(|r| r.values()[0])
            .collect();
        assert_eq!(values, vec![1., 3., 5.]);
        assert_eq!(cluster.original_indices(), vec![0, 2, 4]);
    }

    #[test]
    fn equality_ignores_member_order() {
        let reversed: Cluster<f64> = cluster().into_iter().rev().collect();
        assert_eq!(cluster(), reversed);
        assert_ne!(cluster(), Cluster::new());
    }
}
