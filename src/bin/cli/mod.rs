//! CLI command modules for medalign
//!
//! - `distance`: weighted edit distance, optionally with the labeled matrix
//! - `align`: global alignment, CIGAR and transformation steps
//! - `report`: everything at once, in the classic report layout
//! - `options`: argument parsing and interactive input shared by all commands

pub mod align;
pub mod distance;
pub mod options;
pub mod report;
