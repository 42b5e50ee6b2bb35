use super::{Float, Record, Records};
use crate::error::{Error, Result};
use ndarray::{Array2, ArrayBase, Data, Ix2};
use std::collections::HashSet;

impl<F: Float> Records<F> {
    pub fn new() -> Self {
        Records {
            records: Vec::new(),
            seen: HashSet::new(),
            n_features: None,
        }
    }

    /// Build a record set from the rows of a matrix with shape `(n_records, n_features)`.
    ///
    /// The row index becomes the original index of each record. Rows repeating an earlier
    /// row are dropped.
    pub fn from_rows(rows: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Self {
        let mut records = Records::new();
        records.n_features = Some(rows.ncols());
        for (index, row) in rows.rows().into_iter().enumerate() {
            let record = Record::new(row.to_owned(), index);
            if records.seen.insert(record.clone()) {
                records.records.push(record);
            }
        }
        records
    }

    /// Insert a record into the set.
    ///
    /// Returns `Ok(true)` if the record was added and `Ok(false)` if a record with the same
    /// values is already present, in which case the earlier record is kept. The first record
    /// fixes the dimensionality of the set, records of any other length are rejected.
    pub fn insert(&mut self, record: Record<F>) -> Result<bool> {
        match self.n_features {
            Some(expected) if expected != record.n_features() => {
                return Err(Error::DimensionMismatch {
                    expected,
                    found: record.n_features(),
                })
            }
            Some(_) => {}
            None => self.n_features = Some(record.n_features()),
        }

        if self.seen.contains(&record) {
            return Ok(false);
        }
        self.seen.insert(record.clone());
        self.records.push(record);
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Dimensionality shared by every record, `None` until the first record was inserted
    pub fn n_features(&self) -> Option<usize> {
        self.n_features
    }

    pub fn get(&self, index: usize) -> Option<&Record<F>> {
        self.records.get(index)
    }

    pub fn contains(&self, record: &Record<F>) -> bool {
        self.seen.contains(record)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record<F>> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record<F>] {
        &self.records
    }

    /// Copy the values into a matrix with shape `(n_records, n_features)`, rows in insertion order
    pub fn to_array(&self) -> Result<Array2<F>> {
        let n_features = self.n_features.unwrap_or(0);
        let values = self
            .records
            .iter()
            .flat_map(|record| record.values().to_vec())
            .collect();
        Ok(Array2::from_shape_vec((self.len(), n_features), values)?)
    }
}

impl<F: Float> Default for Records<F> {
    fn default() -> Self {
        Records::new()
    }
}

impl<'a, F: Float> IntoIterator for &'a Records<F> {
    type Item = &'a Record<F>;
    type IntoIter = std::slice::Iter<'a, Record<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256Plus;
    use std::collections::HashMap;

    #[test]
    fn first_record_fixes_dimensionality() {
        let mut records = Records::new();
        assert_eq!(records.n_features(), None);
        assert!(records.insert(Record::new(array![1.0, 2.0], 0)).unwrap());
        assert_eq!(records.n_features(), Some(2));

        let res = records.insert(Record::new(array![1.0, 2.0, 3.0], 1));
        assert!(matches!(
            res,
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 3
            })
        ));
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn duplicate_values_collapse_to_the_first_record() {
        let mut records = Records::new();
        assert!(records.insert(Record::new(array![1.0, 2.0], 0)).unwrap());
        assert!(records.insert(Record::new(array![3.0, 4.0], 1)).unwrap());
        assert!(!records.insert(Record::new(array![1.0, 2.0], 2)).unwrap());

        assert_eq!(records.len(), 2);
        let indices: Vec<_> = records.iter().map(|r| r.original_index()).collect();
        assert_eq!(indices, vec![Some(0), Some(1)]);
    }

    #[test]
    fn from_rows_uses_row_index_and_deduplicates() {
        let rows = array![[0., 0.], [1., 1.], [0., 0.], [2., 2.]];
        let records = Records::from_rows(&rows);
        assert_eq!(records.len(), 3);
        assert_eq!(records.n_features(), Some(2));
        assert_eq!(records.get(2).unwrap().original_index(), Some(3));
        assert_eq!(
            records.to_array().unwrap(),
            array![[0., 0.], [1., 1.], [2., 2.]]
        );
    }

    #[test]
    fn empty_set_converts_to_empty_matrix() {
        let records = Records::<f32>::new();
        assert!(records.is_empty());
        assert_eq!(records.to_array().unwrap().dim(), (0, 0));
    }

    #[test]
    fn from_rows_keeps_first_occurrence_of_random_duplicates() {
        let mut rng = Xoshiro256Plus::seed_from_u64(7);
        // few distinct values, so most rows repeat an earlier one
        let rows = Array2::from_shape_fn((200, 2), |_| rng.gen_range(0..4) as f64);
        let records = Records::from_rows(&rows);

        let mut first_seen = HashMap::new();
        for (index, row) in rows.rows().into_iter().enumerate() {
            let key: Vec<u64> = row.iter().map(|v| v.to_bits()).collect();
            first_seen.entry(key).or_insert(index);
        }

        assert_eq!(records.len(), first_seen.len());
        for record in &records {
            let key: Vec<u64> = record.values().iter().map(|v| v.to_bits()).collect();
            assert_eq!(record.original_index(), first_seen.get(&key).copied());
        }
    }
}
