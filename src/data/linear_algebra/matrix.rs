//! # Matrix implementations
//!
//! A sparse matrix that can grow in both dimensions, and the compressed sparse column format it
//! exports to.
use std::iter::{once, repeat_n};
use std::slice::Iter;

use itertools::Itertools;

use crate::data::linear_algebra::{SparseTuple, SparseTupleVec};
use crate::data::linear_algebra::traits::Element;
use crate::error::InconsistencyError;

/// Uses two indices as underlying data structures: a row-major `Vec<Vec<(usize, F)>>` as well as a
/// column-major `Vec<Vec<(usize, F)>>`. Indices start at `0`.
///
/// Both indices are kept sorted by their minor index and never contain explicit zeros. Rows and
/// columns can only be appended, so an index that was handed out once stays valid.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseMatrix<F> {
    rows: Vec<SparseTupleVec<F>>,
    columns: Vec<SparseTupleVec<F>>,
}

impl<F: Element> SparseMatrix<F> {
    /// Create a matrix of zeros of dimension `nr_rows` x `nr_columns`.
    ///
    /// Either dimension may be zero, the matrix can be grown afterwards.
    #[must_use]
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            rows: repeat_n(Vec::new(), nr_rows).collect(),
            columns: repeat_n(Vec::new(), nr_columns).collect(),
        }
    }

    /// Create a matrix from a compressed sparse row triple.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows of the matrix.
    /// * `nr_columns`: Number of columns of the matrix.
    /// * `values`: Nonzero values, grouped by row.
    /// * `column_indices`: Column of each value in `values`.
    /// * `row_starts`: Offsets into `values` at which each row starts, followed by `values.len()`.
    ///
    /// Explicit zeros are dropped. When a column appears twice within a row, the last value wins.
    ///
    /// # Errors
    ///
    /// If the lengths of the triple don't agree with each other or with the dimensions, if the row
    /// offsets decrease, or if a column index is out of range.
    pub fn from_csr(
        nr_rows: usize,
        nr_columns: usize,
        values: &[F],
        column_indices: &[usize],
        row_starts: &[usize],
    ) -> Result<Self, InconsistencyError> {
        if values.len() != column_indices.len() {
            return Err(InconsistencyError::new(format!(
                "{} values but {} column indices", values.len(), column_indices.len(),
            )));
        }
        if row_starts.len() != nr_rows + 1 {
            return Err(InconsistencyError::new(format!(
                "Expected {} row offsets for {} rows, got {}", nr_rows + 1, nr_rows, row_starts.len(),
            )));
        }
        if row_starts.first() != Some(&0) || row_starts.last() != Some(&values.len()) {
            return Err(InconsistencyError::new(format!(
                "Row offsets should start at 0 and end at {}", values.len(),
            )));
        }
        if !row_starts.iter().tuple_windows().all(|(start, end)| start <= end) {
            return Err(InconsistencyError::new("Row offsets are not non-decreasing"));
        }

        let mut matrix = Self::new(nr_rows, nr_columns);
        for (i, (&start, &end)) in row_starts.iter().tuple_windows().enumerate() {
            for (&j, &value) in column_indices[start..end].iter().zip(&values[start..end]) {
                if j >= nr_columns {
                    return Err(InconsistencyError::new(format!(
                        "Column index {} in row {} is out of range for {} columns", j, i, nr_columns,
                    )));
                }
                matrix.set_value(i, j, value);
            }
        }

        Ok(matrix)
    }

    /// Get the value at coordinate (`i`, `j`), zero if no value is stored.
    #[must_use]
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        match self.rows[i].binary_search_by_key(&j, |&(column, _)| column) {
            Ok(index) => self.rows[i][index].1,
            Err(_) => F::zero(),
        }
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    ///
    /// Overwrites any value that was there. Setting a zero removes the entry.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        if value.is_zero() {
            Self::remove_value_helper(&mut self.rows, i, j);
            Self::remove_value_helper(&mut self.columns, j, i);
        } else {
            Self::set_value_helper(&mut self.rows, i, j, value);
            Self::set_value_helper(&mut self.columns, j, i, value);
        }
    }

    /// Helper method for setting a value in one of the data structures of the `SparseMatrix`.
    fn set_value_helper(major_vector: &mut [SparseTupleVec<F>], major: usize, minor: usize, value: F) {
        let minor_vector = &mut major_vector[major];
        match minor_vector.binary_search_by_key(&minor, |&(index, _)| index) {
            Ok(index) => minor_vector[index].1 = value,
            Err(index) => minor_vector.insert(index, (minor, value)),
        }
    }

    fn remove_value_helper(major_vector: &mut [SparseTupleVec<F>], major: usize, minor: usize) {
        let minor_vector = &mut major_vector[major];
        if let Ok(index) = minor_vector.binary_search_by_key(&minor, |&(index, _)| index) {
            minor_vector.remove(index);
        }
    }

    /// Append an empty row.
    ///
    /// # Return value
    ///
    /// The index of the new row.
    pub fn push_row(&mut self) -> usize {
        self.rows.push(Vec::new());
        self.rows.len() - 1
    }

    /// Append an empty column.
    ///
    /// # Return value
    ///
    /// The index of the new column.
    pub fn push_column(&mut self) -> usize {
        self.columns.push(Vec::new());
        self.columns.len() - 1
    }

    /// Append a copy of row `i`.
    ///
    /// # Return value
    ///
    /// The index of the new row.
    pub fn copy_row(&mut self, i: usize) -> usize {
        debug_assert!(i < self.nr_rows());

        let new_row = self.rows.len();
        let values = self.rows[i].clone();
        // The new row has the largest index, so pushing keeps the columns sorted.
        for &(j, value) in &values {
            self.columns[j].push((new_row, value));
        }
        self.rows.push(values);

        new_row
    }

    /// Get all (`column`, `value`) tuples of row `i`.
    pub fn row(&self, i: usize) -> Iter<'_, SparseTuple<F>> {
        debug_assert!(i < self.nr_rows());

        self.rows[i].iter()
    }

    /// Get all (`row`, `value`) tuples of column `j`.
    pub fn column(&self, j: usize) -> Iter<'_, SparseTuple<F>> {
        debug_assert!(j < self.nr_columns());

        self.columns[j].iter()
    }

    /// Get the number of rows in this matrix.
    #[must_use]
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns in this matrix.
    #[must_use]
    pub fn nr_columns(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of nonzero values in this matrix.
    #[must_use]
    pub fn nr_nonzeros(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Export in compressed sparse column format.
    ///
    /// Values are grouped by column and sorted by row index within a column.
    #[must_use]
    pub fn to_csc(&self) -> CompressedColumns<F> {
        let column_starts = once(0)
            .chain(self.columns.iter().scan(0, |total, column| {
                *total += column.len();
                Some(*total)
            }))
            .collect();
        let (row_indices, values) = self.columns.iter().flatten().copied().unzip();

        CompressedColumns { values, row_indices, column_starts }
    }

    /// Export as a row-major dense matrix.
    #[must_use]
    pub fn to_dense(&self) -> Vec<Vec<F>> {
        self.rows.iter()
            .map(|row| {
                let mut dense = repeat_n(F::zero(), self.nr_columns()).collect::<Vec<_>>();
                for &(j, value) in row {
                    dense[j] = value;
                }
                dense
            })
            .collect()
    }
}

/// A matrix in compressed sparse column format.
///
/// The values of column `j` are `values[column_starts[j]..column_starts[j + 1]]`, their rows are
/// found at the same positions in `row_indices`.
#[derive(Clone, Debug, PartialEq)]
pub struct CompressedColumns<F> {
    /// Nonzero values, grouped by column.
    pub values: Vec<F>,
    /// Row index of each value, increasing within a column.
    pub row_indices: Vec<usize>,
    /// Offset of the first value of each column, followed by the total number of values.
    pub column_starts: Vec<usize>,
}

impl<F> CompressedColumns<F> {
    /// Number of columns represented.
    #[must_use]
    pub fn nr_columns(&self) -> usize {
        self.column_starts.len() - 1
    }

    /// Number of stored values.
    #[must_use]
    pub fn nr_nonzeros(&self) -> usize {
        self.values.len()
    }

    /// Iterate over the (`row`, `value`) pairs of column `j`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = (usize, &F)> {
        debug_assert!(j < self.nr_columns());

        let range = self.column_starts[j]..self.column_starts[j + 1];
        self.row_indices[range.clone()].iter().copied().zip(&self.values[range])
    }
}
