//! Dynamic-programming matrices
//!
//! [`DpMatrix`] is the numeric table used by the algorithms: a dense,
//! row-major grid of `(|source| + 1) × (|target| + 1)` integers indexed by
//! position. Symbol labels only matter for display, so they live in the
//! separate [`LabeledMatrix`] wrapper.

use std::fmt;

use crate::sequence::SymbolSequence;

/// Dense row-major DP table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<i64>,
}

impl DpMatrix {
    /// Create a zero-filled matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Number of rows (`|source| + 1`)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`|target| + 1`)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Value at `(i, j)`
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is outside the matrix.
    pub fn get(&self, i: usize, j: usize) -> i64 {
        assert!(i < self.rows && j < self.cols, "cell ({}, {}) out of bounds", i, j);
        self.cells[i * self.cols + j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: i64) {
        self.cells[i * self.cols + j] = value;
    }

    /// Bottom-right cell, the value of the full problem
    pub fn last(&self) -> i64 {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Borrow row `i`
    pub fn row(&self, i: usize) -> &[i64] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate over all rows, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i64]> {
        self.cells.chunks(self.cols)
    }
}

/// A DP matrix paired with the symbol labels of its rows and columns
///
/// Row and column 0 are labeled with the `#` sentinel.
///
/// # Example
///
/// ```
/// use medalign::alignment::{build_cost_matrix, EditCosts, LabeledMatrix};
/// use medalign::SymbolSequence;
///
/// let source = SymbolSequence::new("ab");
/// let target = SymbolSequence::new("b");
/// let matrix = build_cost_matrix(source.as_slice(), target.as_slice(), &EditCosts::default());
/// let labeled = LabeledMatrix::new(matrix, &source, &target);
///
/// assert_eq!(labeled.to_string(), "   #  b\n#  0  1\na  1  2\nb  2  1\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledMatrix {
    matrix: DpMatrix,
    row_labels: Vec<char>,
    col_labels: Vec<char>,
}

impl LabeledMatrix {
    /// Attach labels taken from the sequences the matrix was built from
    pub fn new(matrix: DpMatrix, source: &SymbolSequence, target: &SymbolSequence) -> Self {
        Self {
            matrix,
            row_labels: source.labels(),
            col_labels: target.labels(),
        }
    }

    /// The underlying numeric matrix
    pub fn matrix(&self) -> &DpMatrix {
        &self.matrix
    }

    /// Row labels, sentinel first
    pub fn row_labels(&self) -> &[char] {
        &self.row_labels
    }

    /// Column labels, sentinel first
    pub fn col_labels(&self) -> &[char] {
        &self.col_labels
    }

    /// Value at the cell addressed by position
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.matrix.get(i, j)
    }
}

impl fmt::Display for LabeledMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Column width fits the widest value or label in that column
        let widths: Vec<usize> = (0..self.matrix.cols())
            .map(|j| {
                self.matrix
                    .iter_rows()
                    .map(|row| row[j].to_string().len())
                    .max()
                    .unwrap_or(0)
                    .max(1)
            })
            .collect();

        write!(f, " ")?;
        for (label, width) in self.col_labels.iter().zip(&widths) {
            write!(f, "  {:>width$}", label, width = width)?;
        }
        writeln!(f)?;

        for (label, row) in self.row_labels.iter().zip(self.matrix.iter_rows()) {
            write!(f, "{}", label)?;
            for (value, width) in row.iter().zip(&widths) {
                write!(f, "  {:>width$}", value, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_shape() {
        let m = DpMatrix::zeros(3, 4);
        assert_eq!(m.shape(), (3, 4));
        assert!(m.iter_rows().all(|row| row.iter().all(|&v| v == 0)));
        assert_eq!(m.iter_rows().count(), 3);
    }

    #[test]
    fn test_set_get_row_major() {
        let mut m = DpMatrix::zeros(2, 3);
        m.set(1, 2, 7);
        m.set(0, 1, -2);
        assert_eq!(m.get(1, 2), 7);
        assert_eq!(m.row(0), &[0, -2, 0]);
        assert_eq!(m.last(), 7);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds() {
        DpMatrix::zeros(2, 2).get(2, 0);
    }

    #[test]
    fn test_single_cell_matrix() {
        let m = DpMatrix::zeros(1, 1);
        assert_eq!(m.last(), 0);
    }

    #[test]
    fn test_labeled_display_widths() {
        let mut m = DpMatrix::zeros(2, 2);
        m.set(1, 1, -10);
        m.set(0, 1, 1);
        m.set(1, 0, 1);
        let labeled = LabeledMatrix::new(m, &SymbolSequence::new("x"), &SymbolSequence::new("y"));
        assert_eq!(labeled.to_string(), "   #    y\n#  0    1\nx  1  -10\n");
        assert_eq!(labeled.row_labels(), &['#', 'x']);
        assert_eq!(labeled.col_labels(), &['#', 'y']);
    }
}
