//! Edit distance, global alignment and transformation traces
//!
//! Four stages, each a pure function over immutable values:
//!
//! - **Cost matrix** ([`build_cost_matrix`]): weighted edit-distance table
//!   under insert/delete/substitute costs. Independent of the other stages;
//!   only its bottom-right cell (the distance) is reported.
//! - **Score matrix** ([`build_score_matrix`]): Needleman-Wunsch table under
//!   match/mismatch/gap weights.
//! - **Traceback** ([`traceback`]): walks the score matrix from the final cell
//!   to the origin and emits one optimal [`AlignedPair`], breaking ties
//!   diagonal, then up, then left.
//! - **Narration** ([`narrate`]): replays the aligned pair column by column as
//!   a sequence of [`EditStep`]s from source to target.
//!
//! # Examples
//!
//! ## Edit distance
//! ```
//! use medalign::alignment::{edit_distance, EditCosts};
//!
//! let source: Vec<char> = "intention".chars().collect();
//! let target: Vec<char> = "execution".chars().collect();
//!
//! assert_eq!(edit_distance(&source, &target, &EditCosts::default()), 8);
//! ```
//!
//! ## Alignment and narration
//! ```
//! use medalign::alignment::{narrate, needleman_wunsch, ScoringScheme};
//!
//! let source: Vec<char> = "kitten".chars().collect();
//! let target: Vec<char> = "sitting".chars().collect();
//!
//! let alignment = needleman_wunsch(&source, &target, &ScoringScheme::default(), '-');
//! let transformation = narrate(&alignment.pair);
//!
//! assert_eq!(transformation.steps.len(), alignment.pair.len());
//! assert_eq!(transformation.final_state(), "sitting");
//! ```

pub mod cigar;
pub mod edit_distance;
pub mod matrix;
pub mod narrator;
pub mod needleman_wunsch;
pub mod scoring;

// Re-export public API
pub use cigar::{compress_cigar, format_cigar, CigarOp};
pub use edit_distance::{build_cost_matrix, edit_distance};
pub use matrix::{DpMatrix, LabeledMatrix};
pub use narrator::{narrate, EditOp, EditStep, Transformation};
pub use needleman_wunsch::{
    build_score_matrix, needleman_wunsch, traceback, AlignedPair, Alignment,
};
pub use scoring::{EditCosts, ScoringScheme};
