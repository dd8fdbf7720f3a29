//! CIGAR (Compact Idiosyncratic Gapped Alignment Report) operations
//!
//! A compact run-length summary of an aligned pair, read from the point of
//! view of editing the source into the target. Uses the extended `=`/`X`
//! codes so matches and mismatches stay distinguishable.

/// CIGAR operation types
///
/// - Equal: columns with the same symbol in both rows
/// - Mismatch: columns with different symbols (a substitution)
/// - Insertion: target symbols with a gap in the source row
/// - Deletion: source symbols with a gap in the target row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CigarOp {
    /// =: Sequence match (length)
    Equal(usize),
    /// X: Sequence mismatch (length)
    Mismatch(usize),
    /// I: Insertion into the source (length)
    Insertion(usize),
    /// D: Deletion from the source (length)
    Deletion(usize),
}

impl CigarOp {
    /// Classify a single alignment column as a length-1 operation
    ///
    /// ```
    /// use medalign::alignment::CigarOp;
    ///
    /// assert_eq!(CigarOp::for_column('a', 'a', '-'), CigarOp::Equal(1));
    /// assert_eq!(CigarOp::for_column('-', 'a', '-'), CigarOp::Insertion(1));
    /// assert_eq!(CigarOp::for_column('a', '-', '-'), CigarOp::Deletion(1));
    /// assert_eq!(CigarOp::for_column('a', 'b', '-'), CigarOp::Mismatch(1));
    /// ```
    pub fn for_column(source: char, target: char, gap_filler: char) -> Self {
        if source == target {
            CigarOp::Equal(1)
        } else if source == gap_filler {
            CigarOp::Insertion(1)
        } else if target == gap_filler {
            CigarOp::Deletion(1)
        } else {
            CigarOp::Mismatch(1)
        }
    }

    /// Get the length of this operation
    pub fn len(&self) -> usize {
        match self {
            CigarOp::Equal(n) | CigarOp::Mismatch(n) | CigarOp::Insertion(n) | CigarOp::Deletion(n) => {
                *n
            }
        }
    }

    /// Check if this operation has zero length (should not happen in valid CIGAR)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the operation code as a character
    pub fn code(&self) -> char {
        match self {
            CigarOp::Equal(_) => '=',
            CigarOp::Mismatch(_) => 'X',
            CigarOp::Insertion(_) => 'I',
            CigarOp::Deletion(_) => 'D',
        }
    }

    fn with_len(self, n: usize) -> Self {
        match self {
            CigarOp::Equal(_) => CigarOp::Equal(n),
            CigarOp::Mismatch(_) => CigarOp::Mismatch(n),
            CigarOp::Insertion(_) => CigarOp::Insertion(n),
            CigarOp::Deletion(_) => CigarOp::Deletion(n),
        }
    }
}

impl std::fmt::Display for CigarOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.len(), self.code())
    }
}

/// Compress consecutive CIGAR operations of the same type
///
/// Converts a vector like `[=, =, =, I, I, D]` into `[3=, 2I, 1D]`
///
/// # Example
///
/// ```
/// use medalign::alignment::{CigarOp, compress_cigar};
///
/// let cigar = vec![
///     CigarOp::Equal(1),
///     CigarOp::Equal(1),
///     CigarOp::Equal(1),
///     CigarOp::Insertion(1),
///     CigarOp::Insertion(1),
/// ];
///
/// let compressed = compress_cigar(cigar);
/// assert_eq!(compressed, vec![CigarOp::Equal(3), CigarOp::Insertion(2)]);
/// ```
pub fn compress_cigar(cigar: Vec<CigarOp>) -> Vec<CigarOp> {
    let mut compressed: Vec<CigarOp> = Vec::with_capacity(cigar.len());

    for op in cigar {
        match compressed.last_mut() {
            Some(last) if std::mem::discriminant(last) == std::mem::discriminant(&op) => {
                *last = last.with_len(last.len() + op.len());
            }
            _ => compressed.push(op),
        }
    }

    compressed
}

/// Format CIGAR string for display
///
/// # Example
///
/// ```
/// use medalign::alignment::{CigarOp, format_cigar};
///
/// let cigar = vec![CigarOp::Equal(4), CigarOp::Insertion(2), CigarOp::Mismatch(3)];
/// assert_eq!(format_cigar(&cigar), "4=2I3X");
/// ```
pub fn format_cigar(cigar: &[CigarOp]) -> String {
    cigar.iter().map(|op| op.to_string()).collect()
}
