//! Minimum edit distance
//!
//! # Algorithm
//!
//! Classic Wagner-Fischer dynamic programming over weighted edits:
//!
//! ```text
//! M(i,0) = i
//! M(0,j) = j
//! M(i,j) = min(
//!     M(i-1, j) + delete,
//!     M(i, j-1) + insert,
//!     M(i-1, j-1) + (0 if source[i] == target[j] else substitute),
//! )
//! ```
//!
//! The boundary row and column count positions, not weighted costs; with
//! non-unit insert/delete costs the boundary still reads `0, 1, 2, ...`.
//!
//! O(m×n) time and space. The full table is kept because callers display it.
//!
//! # Example
//!
//! ```
//! use medalign::alignment::{edit_distance, EditCosts};
//!
//! let source: Vec<char> = "GAMBOL".chars().collect();
//! let target: Vec<char> = "GUMBO".chars().collect();
//!
//! assert_eq!(edit_distance(&source, &target, &EditCosts::default()), 3);
//! ```

use tracing::debug;

use crate::alignment::{DpMatrix, EditCosts};

/// Build the full edit-distance matrix between `source` and `target`
///
/// Rows follow `source`, columns follow `target`; the bottom-right cell
/// is the edit distance. Either sequence may be empty.
///
/// `costs` is used as given. Negative costs are only rejected by
/// [`EditCosts::validate`] (run by [`MedConfig::validate`](crate::MedConfig::validate)),
/// and give a meaningless minimum here. Cells saturate at the `i64` range.
///
/// # Example
///
/// ```
/// use medalign::alignment::{build_cost_matrix, EditCosts};
///
/// let target: Vec<char> = "abc".chars().collect();
/// let matrix = build_cost_matrix(&[], &target, &EditCosts::default());
///
/// assert_eq!(matrix.shape(), (1, 4));
/// assert_eq!(matrix.row(0), &[0, 1, 2, 3]);
/// ```
pub fn build_cost_matrix(source: &[char], target: &[char], costs: &EditCosts) -> DpMatrix {
    let m = source.len();
    let n = target.len();
    let mut matrix = DpMatrix::zeros(m + 1, n + 1);

    for i in 0..=m {
        matrix.set(i, 0, i as i64);
    }
    for j in 0..=n {
        matrix.set(0, j, j as i64);
    }

    for i in 1..=m {
        for j in 1..=n {
            let deletion = matrix.get(i - 1, j).saturating_add(costs.delete);
            let insertion = matrix.get(i, j - 1).saturating_add(costs.insert);
            let substitution = matrix
                .get(i - 1, j - 1)
                .saturating_add(costs.diagonal(source[i - 1], target[j - 1]));

            matrix.set(i, j, deletion.min(insertion).min(substitution));
        }
    }

    debug!(
        rows = m + 1,
        cols = n + 1,
        distance = matrix.last(),
        "built edit-distance matrix"
    );

    matrix
}

/// Minimum edit distance from `source` to `target`
///
/// Convenience wrapper returning only the bottom-right cell of
/// [`build_cost_matrix`].
pub fn edit_distance(source: &[char], target: &[char], costs: &EditCosts) -> i64 {
    build_cost_matrix(source, target, costs).last()
}
