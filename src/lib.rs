//! # medalign
//!
//! Minimum edit distance and Needleman-Wunsch global alignment, with a
//! step-by-step trace of how the source is edited into the target.
//!
//! ## Pipeline
//!
//! ```text
//! source, target ──► cost matrix ──────────────────────────► distance
//!               └──► score matrix ──► traceback ──► narrate ──► steps
//! ```
//!
//! Every stage is a pure function in [`alignment`]; [`compute`] runs them all
//! after validating the configuration.
//!
//! ## Quick start
//!
//! ```
//! use medalign::{compute, EditOp, MedConfig};
//!
//! let result = compute("GAMBOL", "GUMBO", &MedConfig::default())?;
//!
//! assert_eq!(result.distance, 3);
//! assert_eq!(result.alignment.pair.source_degapped(), "GAMBOL");
//! assert_eq!(result.transformation.final_state(), "GUMBO");
//! assert_eq!(result.transformation.count(EditOp::Delete), 1);
//! # Ok::<(), medalign::MedError>(())
//! ```
//!
//! ## Printing the full report
//!
//! ```
//! use medalign::{compute, MedConfig, Report};
//!
//! let result = compute("kitten", "sitting", &MedConfig::default())?;
//! println!("{}", Report::new(&result));
//! # Ok::<(), medalign::MedError>(())
//! ```

pub mod alignment;
pub mod config;
pub mod error;
pub mod report;
pub mod sequence;

pub use alignment::{
    AlignedPair, Alignment, DpMatrix, EditCosts, EditOp, EditStep, LabeledMatrix, ScoringScheme,
    Transformation,
};
pub use config::MedConfig;
pub use error::{MedError, Result};
pub use report::Report;
pub use sequence::SymbolSequence;

use tracing::debug_span;

/// Everything computed for one source/target pair
#[derive(Debug, Clone, PartialEq)]
pub struct MedResult {
    /// Source as supplied by the caller
    pub source_text: String,
    /// Target as supplied by the caller
    pub target_text: String,
    /// Normalized source symbols
    pub source: SymbolSequence,
    /// Normalized target symbols
    pub target: SymbolSequence,
    /// Minimum edit distance (bottom-right of `cost_matrix`)
    pub distance: i64,
    /// Edit-distance matrix with symbol labels
    pub cost_matrix: LabeledMatrix,
    /// Needleman-Wunsch matrix with symbol labels
    pub score_matrix: LabeledMatrix,
    /// Optimal global alignment chosen by the tie-break policy
    pub alignment: Alignment,
    /// Column-by-column edit trace of `alignment`
    pub transformation: Transformation,
}

/// Run the whole pipeline on two strings
///
/// Whitespace in either input is normalized to `_` before processing. Unless
/// `config` names a gap filler, one absent from both inputs is chosen.
///
/// # Errors
///
/// [`MedError::InvalidConfig`] if `config` is rejected by
/// [`MedConfig::validate`]; nothing is computed in that case.
pub fn compute(source: &str, target: &str, config: &MedConfig) -> Result<MedResult> {
    let span = debug_span!("compute", source_len = source.len(), target_len = target.len());
    let _enter = span.enter();

    let source_seq = SymbolSequence::new(source);
    let target_seq = SymbolSequence::new(target);
    config.validate(&source_seq, &target_seq)?;
    let gap_filler = config.resolve_gap_filler(&source_seq, &target_seq)?;

    let cost = alignment::build_cost_matrix(
        source_seq.as_slice(),
        target_seq.as_slice(),
        &config.costs,
    );
    let score = alignment::build_score_matrix(
        source_seq.as_slice(),
        target_seq.as_slice(),
        &config.scoring,
    );
    let pair = alignment::traceback(
        &score,
        source_seq.as_slice(),
        target_seq.as_slice(),
        &config.scoring,
        gap_filler,
    )?;
    let transformation = alignment::narrate(&pair);

    Ok(MedResult {
        source_text: source.to_string(),
        target_text: target.to_string(),
        distance: cost.last(),
        alignment: Alignment {
            score: score.last(),
            pair,
        },
        cost_matrix: LabeledMatrix::new(cost, &source_seq, &target_seq),
        score_matrix: LabeledMatrix::new(score, &source_seq, &target_seq),
        source: source_seq,
        target: target_seq,
        transformation,
    })
}

impl std::fmt::Display for MedResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Report::new(self))
    }
}
