//! Needleman-Wunsch global sequence alignment
//!
//! # Algorithm
//!
//! Needleman-Wunsch finds the optimal **global** alignment between two
//! sequences: every symbol of both inputs is aligned, either against a
//! symbol of the other sequence or against the gap filler. Unlike local
//! alignment (Smith-Waterman) there is no zero floor and traceback always
//! runs from the bottom-right cell back to the origin.
//!
//! ```text
//! S(i,0) = i × gap
//! S(0,j) = j × gap
//! S(i,j) = max(
//!     S(i-1, j-1) + score(source[i], target[j]),  // Match/mismatch
//!     S(i-1, j) + gap,                             // Deletion
//!     S(i, j-1) + gap,                             // Insertion
//! )
//! ```
//!
//! # Tie-break policy
//!
//! Several paths can reach the same optimum. Traceback resolves ties in a
//! fixed order: **diagonal, then up (deletion), then left (insertion)**.
//! Output for a given input and scheme is therefore reproducible exactly;
//! changing this order changes which optimal alignment is returned.
//!
//! # Example
//!
//! ```
//! use medalign::alignment::{needleman_wunsch, ScoringScheme};
//!
//! let source: Vec<char> = "GATTACA".chars().collect();
//! let target: Vec<char> = "GCATGCU".chars().collect();
//!
//! let alignment = needleman_wunsch(&source, &target, &ScoringScheme::default(), '-');
//! assert_eq!(alignment.score, 0);
//! assert_eq!(alignment.pair.source_degapped(), "GATTACA");
//! assert_eq!(alignment.pair.target_degapped(), "GCATGCU");
//! ```

use std::fmt;

use tracing::debug;

use crate::alignment::{compress_cigar, format_cigar, CigarOp, DpMatrix, ScoringScheme};
use crate::error::{MedError, Result};

/// One optimal global alignment as two equal-length rows
///
/// Removing the gap filler from either row gives back the original
/// sequence exactly. No column holds the gap filler in both rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    source: Vec<char>,
    target: Vec<char>,
    gap_filler: char,
}

impl AlignedPair {
    /// Build an aligned pair from explicit rows
    ///
    /// Fails if the rows differ in length or a column is gap in both rows.
    ///
    /// ```
    /// use medalign::alignment::AlignedPair;
    ///
    /// let pair = AlignedPair::new("ab-".chars().collect(), "a-c".chars().collect(), '-').unwrap();
    /// assert_eq!(pair.len(), 3);
    /// assert!(AlignedPair::new(vec!['-'], vec!['-'], '-').is_err());
    /// ```
    pub fn new(source: Vec<char>, target: Vec<char>, gap_filler: char) -> Result<Self> {
        if source.len() != target.len() {
            return Err(MedError::MalformedAlignment(format!(
                "rows differ in length: {} vs {}",
                source.len(),
                target.len()
            )));
        }
        if let Some(k) = source
            .iter()
            .zip(&target)
            .position(|(&s, &t)| s == gap_filler && t == gap_filler)
        {
            return Err(MedError::MalformedAlignment(format!(
                "column {} is a gap in both rows",
                k
            )));
        }
        Ok(Self {
            source,
            target,
            gap_filler,
        })
    }

    /// Number of alignment columns
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Check if the alignment has no columns (both inputs empty)
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Aligned source row, gap fillers included
    pub fn source(&self) -> &[char] {
        &self.source
    }

    /// Aligned target row, gap fillers included
    pub fn target(&self) -> &[char] {
        &self.target
    }

    /// Symbol marking a gap in either row
    pub fn gap_filler(&self) -> char {
        self.gap_filler
    }

    /// Iterate over `(source, target)` columns, left to right
    pub fn columns(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.source.iter().copied().zip(self.target.iter().copied())
    }

    /// Aligned source row with gap fillers removed
    pub fn source_degapped(&self) -> String {
        degap(&self.source, self.gap_filler)
    }

    /// Aligned target row with gap fillers removed
    pub fn target_degapped(&self) -> String {
        degap(&self.target, self.gap_filler)
    }

    /// Score of this alignment under `scoring`, summed column by column
    ///
    /// For an alignment produced by [`needleman_wunsch`] this equals the
    /// bottom-right cell of the score matrix.
    pub fn score(&self, scoring: &ScoringScheme) -> i64 {
        self.columns()
            .map(|(s, t)| {
                if s == self.gap_filler || t == self.gap_filler {
                    scoring.gap
                } else {
                    scoring.score(s, t)
                }
            })
            .sum()
    }

    /// Fraction of columns holding equal symbols (0.0 for an empty alignment)
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let matches = self.columns().filter(|(s, t)| s == t).count();
        matches as f64 / self.len() as f64
    }

    /// Run-length compressed CIGAR describing the columns
    pub fn cigar(&self) -> Vec<CigarOp> {
        let ops = self
            .columns()
            .map(|(s, t)| CigarOp::for_column(s, t, self.gap_filler))
            .collect();
        compress_cigar(ops)
    }

    /// Format the CIGAR for display
    pub fn cigar_string(&self) -> String {
        format_cigar(&self.cigar())
    }
}

impl fmt::Display for AlignedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source: String = self.source.iter().collect();
        let target: String = self.target.iter().collect();
        writeln!(f, "{}", source)?;
        write!(f, "{}", target)
    }
}

/// Global alignment result: optimal score plus one aligned pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Bottom-right cell of the score matrix
    pub score: i64,
    /// The alignment chosen by the tie-break policy
    pub pair: AlignedPair,
}

/// Traceback move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Diagonal, // Match/mismatch (from S[i-1][j-1])
    Up,       // Deletion (from S[i-1][j])
    Left,     // Insertion (from S[i][j-1])
}

/// Build the Needleman-Wunsch score matrix
///
/// Weights are used as given; cells saturate at the `i64` range rather than
/// overflowing. Run [`MedConfig::validate`](crate::MedConfig::validate) first
/// to reject weights too large for the inputs.
///
/// # Example
///
/// ```
/// use medalign::alignment::{build_score_matrix, ScoringScheme};
///
/// let target: Vec<char> = "abc".chars().collect();
/// let matrix = build_score_matrix(&[], &target, &ScoringScheme::default());
/// assert_eq!(matrix.row(0), &[0, -1, -2, -3]);
/// ```
pub fn build_score_matrix(source: &[char], target: &[char], scoring: &ScoringScheme) -> DpMatrix {
    let m = source.len();
    let n = target.len();
    let mut matrix = DpMatrix::zeros(m + 1, n + 1);

    for i in 0..=m {
        matrix.set(i, 0, (i as i64).saturating_mul(scoring.gap));
    }
    for j in 0..=n {
        matrix.set(0, j, (j as i64).saturating_mul(scoring.gap));
    }

    for i in 1..=m {
        for j in 1..=n {
            let deletion = matrix.get(i - 1, j).saturating_add(scoring.gap);
            let insertion = matrix.get(i, j - 1).saturating_add(scoring.gap);
            let diagonal = matrix
                .get(i - 1, j - 1)
                .saturating_add(scoring.score(source[i - 1], target[j - 1]));

            matrix.set(i, j, deletion.max(insertion).max(diagonal));
        }
    }

    debug!(
        rows = m + 1,
        cols = n + 1,
        score = matrix.last(),
        "built score matrix"
    );

    matrix
}

/// Walk a score matrix back from `(m, n)` to `(0, 0)`, producing one alignment
///
/// `matrix` must have been built by [`build_score_matrix`] from the same
/// sequences and scheme. Ties are broken diagonal, then up, then left.
///
/// # Errors
///
/// [`MedError::MatrixShape`] if the matrix is not `(|source|+1) × (|target|+1)`.
pub fn traceback(
    matrix: &DpMatrix,
    source: &[char],
    target: &[char],
    scoring: &ScoringScheme,
    gap_filler: char,
) -> Result<AlignedPair> {
    let expected = (source.len() + 1, target.len() + 1);
    if matrix.shape() != expected {
        return Err(MedError::MatrixShape {
            expected,
            actual: matrix.shape(),
        });
    }
    Ok(traceback_path(matrix, source, target, scoring, gap_filler))
}

fn traceback_path(
    matrix: &DpMatrix,
    source: &[char],
    target: &[char],
    scoring: &ScoringScheme,
    gap_filler: char,
) -> AlignedPair {
    let mut source_aligned = Vec::with_capacity(source.len() + target.len());
    let mut target_aligned = Vec::with_capacity(source.len() + target.len());
    let mut i = source.len();
    let mut j = target.len();

    while i > 0 || j > 0 {
        let current = matrix.get(i, j);
        let direction = if i > 0
            && j > 0
            && current
                == matrix
                    .get(i - 1, j - 1)
                    .saturating_add(scoring.score(source[i - 1], target[j - 1]))
        {
            Direction::Diagonal
        } else if i > 0 && (j == 0 || current == matrix.get(i - 1, j).saturating_add(scoring.gap))
        {
            Direction::Up
        } else {
            Direction::Left
        };

        match direction {
            Direction::Diagonal => {
                source_aligned.push(source[i - 1]);
                target_aligned.push(target[j - 1]);
                i -= 1;
                j -= 1;
            }
            Direction::Up => {
                source_aligned.push(source[i - 1]);
                target_aligned.push(gap_filler);
                i -= 1;
            }
            Direction::Left => {
                source_aligned.push(gap_filler);
                target_aligned.push(target[j - 1]);
                j -= 1;
            }
        }
    }

    // Traceback runs right to left
    source_aligned.reverse();
    target_aligned.reverse();

    debug!(columns = source_aligned.len(), "traceback complete");

    AlignedPair {
        source: source_aligned,
        target: target_aligned,
        gap_filler,
    }
}

/// Needleman-Wunsch global alignment: score matrix followed by traceback
pub fn needleman_wunsch(
    source: &[char],
    target: &[char],
    scoring: &ScoringScheme,
    gap_filler: char,
) -> Alignment {
    let matrix = build_score_matrix(source, target, scoring);
    let pair = traceback_path(&matrix, source, target, scoring, gap_filler);
    Alignment {
        score: matrix.last(),
        pair,
    }
}

pub(crate) fn degap(row: &[char], gap_filler: char) -> String {
    row.iter().filter(|&&c| c != gap_filler).collect()
}
