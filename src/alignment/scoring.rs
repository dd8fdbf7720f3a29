//! Cost and scoring schemes for edit distance and global alignment

use crate::error::{MedError, Result};

/// Per-unit costs for the edit-distance matrix
///
/// All costs must be non-negative; the edit distance minimizes their sum.
///
/// The costs apply to interior cells only. The matrix boundary counts
/// positions (`M[i][0] = i`, `M[0][j] = j`), so against an empty sequence
/// the distance is the other sequence's length whatever `insert` and
/// `delete` are: `""` to `"abc"` with `insert = 5` is 3, not 15.
///
/// # Example
///
/// ```
/// use medalign::alignment::EditCosts;
///
/// // Default costs (insert=1, delete=1, substitute=2)
/// let costs = EditCosts::default();
/// assert_eq!(costs.substitute, 2);
///
/// // Plain Levenshtein
/// let unit = EditCosts::new(1, 1, 1);
/// assert!(unit.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditCosts {
    /// Cost of inserting one target symbol
    pub insert: i64,
    /// Cost of deleting one source symbol
    pub delete: i64,
    /// Cost of replacing one symbol with a different one
    pub substitute: i64,
}

impl Default for EditCosts {
    /// Default costs
    ///
    /// - Insert: 1
    /// - Delete: 1
    /// - Substitute: 2
    fn default() -> Self {
        Self {
            insert: 1,
            delete: 1,
            substitute: 2,
        }
    }
}

impl EditCosts {
    /// Create a new cost table
    pub fn new(insert: i64, delete: i64, substitute: i64) -> Self {
        Self {
            insert,
            delete,
            substitute,
        }
    }

    /// Cost of aligning `a` against `b` on the diagonal
    pub fn diagonal(&self, a: char, b: char) -> i64 {
        if a == b {
            0
        } else {
            self.substitute
        }
    }

    /// Reject negative costs
    pub fn validate(&self) -> Result<()> {
        for (option, value) in [
            ("insert", self.insert),
            ("delete", self.delete),
            ("substitute", self.substitute),
        ] {
            if value < 0 {
                return Err(MedError::invalid_config(
                    option,
                    format!("cost must be non-negative, got {}", value),
                ));
            }
        }
        Ok(())
    }

    pub(crate) fn max_magnitude(&self) -> i64 {
        self.insert.max(self.delete).max(self.substitute)
    }
}

/// Match/mismatch/gap weights for Needleman-Wunsch scoring
///
/// Linear gap model only: every gap column costs `gap`.
///
/// # Example
///
/// ```
/// use medalign::alignment::ScoringScheme;
///
/// let scoring = ScoringScheme::default();
/// assert_eq!(scoring.score('A', 'A'), 1);  // Match
/// assert_eq!(scoring.score('A', 'C'), -1); // Mismatch
/// assert_eq!(scoring.gap, -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringScheme {
    /// Score for equal aligned symbols
    pub match_score: i64,
    /// Score for unequal aligned symbols
    pub mismatch_score: i64,
    /// Score for a column against the gap filler (usually negative)
    pub gap: i64,
}

impl Default for ScoringScheme {
    /// Default weights
    ///
    /// - Match: +1
    /// - Mismatch: -1
    /// - Gap: -1
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch_score: -1,
            gap: -1,
        }
    }
}

impl ScoringScheme {
    /// Create a new scoring scheme
    pub fn new(match_score: i64, mismatch_score: i64, gap: i64) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap,
        }
    }

    /// Score for aligning two symbols against each other
    pub fn score(&self, a: char, b: char) -> i64 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    /// Check for weightings that are legal but produce odd alignments
    ///
    /// A match that does not beat a mismatch, or a gap that is rewarded,
    /// still yields a well-defined optimum, so these are only warnings.
    pub fn is_degenerate(&self) -> bool {
        self.match_score <= self.mismatch_score || self.gap > 0
    }

    pub(crate) fn max_magnitude(&self) -> i64 {
        self.match_score
            .unsigned_abs()
            .max(self.mismatch_score.unsigned_abs())
            .max(self.gap.unsigned_abs())
            .min(i64::MAX as u64) as i64
    }
}
