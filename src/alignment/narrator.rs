//! Step-by-step transformation of the source into the target
//!
//! Walks an [`AlignedPair`] column by column. Each step overwrites one
//! column of a working copy of the aligned source with the aligned target
//! symbol, so after the last step the working copy reads as the target.
//!
//! Column classification, from the point of view of editing the source:
//!
//! | source row  | target row  | operation    |
//! |-------------|-------------|--------------|
//! | `x`         | `x`         | none         |
//! | gap filler  | `y`         | insert       |
//! | `x`         | gap filler  | delete       |
//! | `x`         | `y`         | substitute   |

use std::fmt;

use tracing::debug;

use crate::alignment::needleman_wunsch::degap;
use crate::alignment::AlignedPair;

/// Kind of edit applied by one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    /// Symbols already agree; nothing changes
    None,
    /// A target symbol is inserted into the source
    Insert,
    /// A source symbol is deleted
    Delete,
    /// A source symbol is replaced by a different target symbol
    Substitute,
}

impl EditOp {
    /// Classify one alignment column
    pub fn classify(source: char, target: char, gap_filler: char) -> Self {
        if source == target {
            EditOp::None
        } else if source == gap_filler {
            EditOp::Insert
        } else if target == gap_filler {
            EditOp::Delete
        } else {
            EditOp::Substitute
        }
    }

    /// Report tag: `(ins)`, `(del)`, `(sub)`, or empty for no-op
    pub fn tag(&self) -> &'static str {
        match self {
            EditOp::None => "",
            EditOp::Insert => "(ins)",
            EditOp::Delete => "(del)",
            EditOp::Substitute => "(sub)",
        }
    }

    /// Check whether this operation changes the sequence
    pub fn is_edit(&self) -> bool {
        !matches!(self, EditOp::None)
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditOp::None => "none",
            EditOp::Insert => "insert",
            EditOp::Delete => "delete",
            EditOp::Substitute => "substitute",
        };
        f.write_str(name)
    }
}

/// One column's worth of the transformation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditStep {
    /// 1-based step number ("Step 0" is the untouched source)
    pub step: usize,
    /// 0-based alignment column this step applies
    pub position: usize,
    /// Classification of the column
    pub op: EditOp,
    /// Aligned source symbol at this column
    pub source_symbol: char,
    /// Aligned target symbol at this column
    pub target_symbol: char,
    /// Sequence before this step (gap fillers removed)
    pub before: String,
    /// Sequence after this step (gap fillers removed)
    pub after: String,
}

/// Full narration of an alignment: the starting sequence plus every step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    /// Aligned source row as text
    pub origin: String,
    /// Aligned target row as text
    pub target: String,
    /// "Step 0": the source with gap fillers removed
    pub initial: String,
    /// One step per alignment column, left to right
    pub steps: Vec<EditStep>,
}

impl Transformation {
    /// State after the last step; the target with gap fillers removed
    pub fn final_state(&self) -> &str {
        self.steps
            .last()
            .map(|s| s.after.as_str())
            .unwrap_or(&self.initial)
    }

    /// Number of steps tagged with `op`
    pub fn count(&self, op: EditOp) -> usize {
        self.steps.iter().filter(|s| s.op == op).count()
    }

    /// Number of steps that change the sequence
    pub fn edit_count(&self) -> usize {
        self.steps.iter().filter(|s| s.op.is_edit()).count()
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "ALIGNMENT:")?;
        writeln!(f, "Origin:   {:<10}", self.origin)?;
        writeln!(f, "Target:  {:<10}", self.target)?;
        writeln!(f)?;
        writeln!(f, "{:<10} {:<15}", "Step 0:", self.initial)?;
        for step in &self.steps {
            let label = format!("Step {}:", step.step);
            writeln!(
                f,
                "{:<10} {:<15} >>> {:>15} {:>15}",
                label,
                step.before,
                step.after,
                step.op.tag()
            )?;
        }
        Ok(())
    }
}

/// Turn an aligned pair into an ordered list of edit steps
///
/// # Example
///
/// ```
/// use medalign::alignment::{narrate, needleman_wunsch, EditOp, ScoringScheme};
///
/// let source: Vec<char> = "GAMBOL".chars().collect();
/// let target: Vec<char> = "GUMBO".chars().collect();
/// let alignment = needleman_wunsch(&source, &target, &ScoringScheme::default(), '-');
///
/// let transformation = narrate(&alignment.pair);
/// assert_eq!(transformation.initial, "GAMBOL");
/// assert_eq!(transformation.final_state(), "GUMBO");
/// assert_eq!(transformation.count(EditOp::Substitute), 1);
/// assert_eq!(transformation.count(EditOp::Delete), 1);
/// ```
pub fn narrate(pair: &AlignedPair) -> Transformation {
    let gap_filler = pair.gap_filler();

    let mut working = pair.source().to_vec();
    let mut steps = Vec::with_capacity(pair.len());

    for (position, (source_symbol, target_symbol)) in pair.columns().enumerate() {
        let before = degap(&working, gap_filler);
        let op = EditOp::classify(source_symbol, target_symbol, gap_filler);
        working[position] = target_symbol;
        steps.push(EditStep {
            step: position + 1,
            position,
            op,
            source_symbol,
            target_symbol,
            before,
            after: degap(&working, gap_filler),
        });
    }

    debug!(steps = steps.len(), "narrated transformation");

    Transformation {
        origin: pair.source().iter().collect(),
        target: pair.target().iter().collect(),
        initial: pair.source_degapped(),
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(source: &str, target: &str) -> AlignedPair {
        AlignedPair::new(source.chars().collect(), target.chars().collect(), '-').unwrap()
    }

    #[test]
    fn test_classify() {
        assert_eq!(EditOp::classify('a', 'a', '-'), EditOp::None);
        assert_eq!(EditOp::classify('-', 'a', '-'), EditOp::Insert);
        assert_eq!(EditOp::classify('a', '-', '-'), EditOp::Delete);
        assert_eq!(EditOp::classify('a', 'b', '-'), EditOp::Substitute);
    }

    #[test]
    fn test_tags() {
        assert_eq!(EditOp::None.tag(), "");
        assert_eq!(EditOp::Insert.tag(), "(ins)");
        assert_eq!(EditOp::Delete.tag(), "(del)");
        assert_eq!(EditOp::Substitute.tag(), "(sub)");
        assert_eq!(EditOp::Substitute.to_string(), "substitute");
    }

    #[test]
    fn test_kitten_sitting_steps() {
        let t = narrate(&pair("kitten-", "sitting"));

        assert_eq!(t.initial, "kitten");
        assert_eq!(t.steps.len(), 7);

        let states: Vec<(&str, &str, EditOp)> = t
            .steps
            .iter()
            .map(|s| (s.before.as_str(), s.after.as_str(), s.op))
            .collect();
        assert_eq!(
            states,
            vec![
                ("kitten", "sitten", EditOp::Substitute),
                ("sitten", "sitten", EditOp::None),
                ("sitten", "sitten", EditOp::None),
                ("sitten", "sitten", EditOp::None),
                ("sitten", "sittin", EditOp::Substitute),
                ("sittin", "sittin", EditOp::None),
                ("sittin", "sitting", EditOp::Insert),
            ]
        );
        assert_eq!(t.final_state(), "sitting");
        assert_eq!(t.edit_count(), 3);
    }

    #[test]
    fn test_deletion_step() {
        let t = narrate(&pair("GAMBOL", "GUMBO-"));
        let last = t.steps.last().unwrap();
        assert_eq!(last.op, EditOp::Delete);
        assert_eq!(last.before, "GUMBOL");
        assert_eq!(last.after, "GUMBO");
        assert_eq!(last.position, 5);
        assert_eq!(last.step, 6);
    }

    #[test]
    fn test_empty_pair() {
        let t = narrate(&pair("", ""));
        assert!(t.steps.is_empty());
        assert_eq!(t.final_state(), "");
    }

    #[test]
    fn test_render_layout() {
        let t = narrate(&pair("--", "ab"));
        let expected = concat!(
            "\n",
            "ALIGNMENT:\n",
            "Origin:   --        \n",
            "Target:  ab        \n",
            "\n",
            "Step 0:                   \n",
            "Step 1:                    >>>               a           (ins)\n",
            "Step 2:    a               >>>              ab           (ins)\n",
        );
        assert_eq!(t.to_string(), expected);
    }
}
