//! Printable report for a complete run

use std::fmt;

use crate::MedResult;

/// Text report: labeled distance matrix, distance sentence, alignment and steps
///
/// # Example
///
/// ```
/// use medalign::{compute, MedConfig, Report};
///
/// let result = compute("ab", "b", &MedConfig::default()).unwrap();
/// let text = Report::new(&result).to_string();
///
/// assert!(text.starts_with("Minimum Edit Distance:\n"));
/// assert!(text.contains("from 'ab' to 'b' is 1 according to Levenshtein's metric."));
/// ```
pub struct Report<'a> {
    result: &'a MedResult,
}

impl<'a> Report<'a> {
    /// Wrap a result for rendering
    pub fn new(result: &'a MedResult) -> Self {
        Self { result }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        writeln!(f, "Minimum Edit Distance:")?;
        writeln!(f, "{}", r.cost_matrix)?;
        writeln!(
            f,
            "Minimum Edit Distance from '{}' to '{}' is {} according to Levenshtein's metric.",
            r.source_text, r.target_text, r.distance
        )?;
        write!(f, "{}", r.transformation)
    }
}
