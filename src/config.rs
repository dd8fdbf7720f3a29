//! Configuration for a full edit-distance and alignment run

use tracing::{debug, warn};

use crate::alignment::{EditCosts, ScoringScheme};
use crate::error::{MedError, Result};
use crate::sequence::SymbolSequence;

/// Preferred gap filler
pub const DEFAULT_GAP_FILLER: char = '-';

/// Gap fillers tried in order when the caller does not choose one
pub const GAP_FILLER_CANDIDATES: &[char] = &['-', '*', '.', '~', '+', '=', '|', '^'];

/// All options for one computation
///
/// | Option       | Default |
/// |--------------|---------|
/// | `insert`     | 1       |
/// | `delete`     | 1       |
/// | `substitute` | 2       |
/// | `match`      | 1       |
/// | `mismatch`   | -1      |
/// | `gap`        | -1      |
/// | `gap_filler` | first of [`GAP_FILLER_CANDIDATES`] absent from both inputs |
///
/// # Example
///
/// ```
/// use medalign::MedConfig;
///
/// let config = MedConfig::default()
///     .with_substitute(1)
///     .with_gap_filler('*');
///
/// assert_eq!(config.costs.substitute, 1);
/// assert_eq!(config.gap_filler, Some('*'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedConfig {
    /// Edit-distance costs
    pub costs: EditCosts,
    /// Needleman-Wunsch weights
    pub scoring: ScoringScheme,
    /// Symbol marking a gap in the alignment; `None` picks one per input
    pub gap_filler: Option<char>,
}

impl Default for MedConfig {
    fn default() -> Self {
        Self {
            costs: EditCosts::default(),
            scoring: ScoringScheme::default(),
            gap_filler: None,
        }
    }
}

impl MedConfig {
    /// Set the insertion cost
    #[must_use]
    pub fn with_insert(mut self, cost: i64) -> Self {
        self.costs.insert = cost;
        self
    }

    /// Set the deletion cost
    #[must_use]
    pub fn with_delete(mut self, cost: i64) -> Self {
        self.costs.delete = cost;
        self
    }

    /// Set the substitution cost
    #[must_use]
    pub fn with_substitute(mut self, cost: i64) -> Self {
        self.costs.substitute = cost;
        self
    }

    /// Set the match reward
    #[must_use]
    pub fn with_match(mut self, score: i64) -> Self {
        self.scoring.match_score = score;
        self
    }

    /// Set the mismatch penalty
    #[must_use]
    pub fn with_mismatch(mut self, score: i64) -> Self {
        self.scoring.mismatch_score = score;
        self
    }

    /// Set the gap penalty
    #[must_use]
    pub fn with_gap(mut self, score: i64) -> Self {
        self.scoring.gap = score;
        self
    }

    /// Set the gap filler symbol
    #[must_use]
    pub fn with_gap_filler(mut self, gap_filler: char) -> Self {
        self.gap_filler = Some(gap_filler);
        self
    }

    /// Check the configuration against the sequences it will be used on
    ///
    /// Runs before any matrix is built. Rejects:
    /// - negative edit costs
    /// - an explicit gap filler that is whitespace or occurs in either sequence
    /// - weights large enough to overflow the matrix cells for these lengths
    ///
    /// Degenerate but well-defined scoring (match not above mismatch, or a
    /// rewarded gap) is accepted with a warning.
    pub fn validate(&self, source: &SymbolSequence, target: &SymbolSequence) -> Result<()> {
        self.costs.validate()?;
        self.resolve_gap_filler(source, target)?;

        // Any cell, plus one more step, stays within (m + n + 1) * |weight| + (m + n)
        let path_len = (source.len() + target.len()) as i64;
        let fits = |magnitude: i64| {
            (path_len + 1)
                .checked_mul(magnitude)
                .and_then(|bound| bound.checked_add(path_len))
                .is_some()
        };
        if !fits(self.costs.max_magnitude()) {
            return Err(MedError::invalid_config(
                "costs",
                "edit costs overflow for inputs of this length",
            ));
        }
        if !fits(self.scoring.max_magnitude()) {
            return Err(MedError::invalid_config(
                "scoring",
                "scoring weights overflow for inputs of this length",
            ));
        }

        if self.scoring.is_degenerate() {
            warn!(
                match_score = self.scoring.match_score,
                mismatch_score = self.scoring.mismatch_score,
                gap = self.scoring.gap,
                "degenerate scoring scheme"
            );
        }

        Ok(())
    }

    /// Gap filler to use for these sequences
    ///
    /// An explicit filler is returned as-is if usable. Otherwise the first
    /// entry of [`GAP_FILLER_CANDIDATES`] absent from both sequences is
    /// chosen, falling back to any other non-whitespace symbol.
    ///
    /// ```
    /// use medalign::{MedConfig, SymbolSequence};
    ///
    /// let source = SymbolSequence::new("well-known");
    /// let target = SymbolSequence::new("unknown");
    /// let gap = MedConfig::default().resolve_gap_filler(&source, &target)?;
    /// assert_eq!(gap, '*');
    /// # Ok::<(), medalign::MedError>(())
    /// ```
    pub fn resolve_gap_filler(
        &self,
        source: &SymbolSequence,
        target: &SymbolSequence,
    ) -> Result<char> {
        let free = |c: char| !source.contains(c) && !target.contains(c);

        if let Some(gap_filler) = self.gap_filler {
            if gap_filler.is_whitespace() {
                return Err(MedError::invalid_config(
                    "gap_filler",
                    "gap filler must not be whitespace",
                ));
            }
            if !free(gap_filler) {
                return Err(MedError::invalid_config(
                    "gap_filler",
                    format!("'{}' occurs in the input sequences", gap_filler),
                ));
            }
            return Ok(gap_filler);
        }

        let chosen = GAP_FILLER_CANDIDATES
            .iter()
            .copied()
            .chain('\0'..=char::MAX)
            .find(|&c| !c.is_whitespace() && !c.is_control() && free(c))
            .ok_or_else(|| {
                MedError::invalid_config("gap_filler", "no symbol left to mark gaps")
            })?;
        if chosen != DEFAULT_GAP_FILLER {
            debug!(gap_filler = %chosen, "default gap filler occurs in input, substituting");
        }
        Ok(chosen)
    }
}

/// Parse an integer option value
///
/// ```
/// use medalign::config::parse_weight;
///
/// assert_eq!(parse_weight("gap", "-2").unwrap(), -2);
/// assert!(parse_weight("gap", "1.5").is_err());
/// ```
pub fn parse_weight(option: &'static str, value: &str) -> Result<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        MedError::invalid_config(option, format!("expected an integer, got '{}'", value))
    })
}

/// Parse a gap filler option value: exactly one symbol
pub fn parse_gap_filler(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(MedError::invalid_config(
            "gap_filler",
            format!("expected a single symbol, got '{}'", value),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seqs(a: &str, b: &str) -> (SymbolSequence, SymbolSequence) {
        (SymbolSequence::new(a), SymbolSequence::new(b))
    }

    #[test]
    fn test_defaults() {
        let config = MedConfig::default();
        assert_eq!(config.costs, EditCosts::new(1, 1, 2));
        assert_eq!(config.scoring, ScoringScheme::new(1, -1, -1));
        assert_eq!(config.gap_filler, None);
    }

    #[test]
    fn test_builder() {
        let config = MedConfig::default()
            .with_insert(2)
            .with_delete(3)
            .with_substitute(4)
            .with_match(5)
            .with_mismatch(-6)
            .with_gap(-7)
            .with_gap_filler('.');
        assert_eq!(config.costs, EditCosts::new(2, 3, 4));
        assert_eq!(config.scoring, ScoringScheme::new(5, -6, -7));
        assert_eq!(config.gap_filler, Some('.'));
    }

    #[test]
    fn test_validate_ok() {
        let (s, t) = seqs("kitten", "sitting");
        assert!(MedConfig::default().validate(&s, &t).is_ok());
    }

    #[test]
    fn test_validate_negative_cost() {
        let (s, t) = seqs("a", "b");
        let err = MedConfig::default().with_insert(-1).validate(&s, &t).unwrap_err();
        assert!(matches!(err, MedError::InvalidConfig { option: "insert", .. }));
    }

    #[test]
    fn test_validate_explicit_gap_filler_in_input() {
        let (s, t) = seqs("well-known", "unknown");
        let err = MedConfig::default()
            .with_gap_filler('-')
            .validate(&s, &t)
            .unwrap_err();
        assert!(matches!(err, MedError::InvalidConfig { option: "gap_filler", .. }));
    }

    #[test]
    fn test_default_gap_filler_avoids_input() {
        let (s, t) = seqs("well-known", "unknown");
        let config = MedConfig::default();
        assert!(config.validate(&s, &t).is_ok());
        assert_eq!(config.resolve_gap_filler(&s, &t).unwrap(), '*');

        let (s, t) = seqs("a-b*c", "d.e");
        assert_eq!(config.resolve_gap_filler(&s, &t).unwrap(), '~');

        let (s, t) = seqs("kitten", "sitting");
        assert_eq!(config.resolve_gap_filler(&s, &t).unwrap(), DEFAULT_GAP_FILLER);
    }

    #[test]
    fn test_default_gap_filler_past_candidates() {
        let every: String = GAP_FILLER_CANDIDATES.iter().collect();
        let (s, t) = seqs(&every, "!");
        let gap = MedConfig::default().resolve_gap_filler(&s, &t).unwrap();
        assert!(!GAP_FILLER_CANDIDATES.contains(&gap));
        assert!(!s.contains(gap) && !t.contains(gap));
        assert!(!gap.is_whitespace());
    }

    #[test]
    fn test_validate_gap_filler_collides_with_placeholder() {
        // Spaces become '_', so '_' is no longer free to mark gaps
        let (s, t) = seqs("ice cream", "icecream");
        let err = MedConfig::default().with_gap_filler('_').validate(&s, &t).unwrap_err();
        assert!(matches!(err, MedError::InvalidConfig { option: "gap_filler", .. }));
    }

    #[test]
    fn test_validate_whitespace_gap_filler() {
        let (s, t) = seqs("a", "b");
        assert!(MedConfig::default().with_gap_filler(' ').validate(&s, &t).is_err());
    }

    #[test]
    fn test_validate_overflowing_weights() {
        let (s, t) = seqs("ab", "cd");
        let err = MedConfig::default()
            .with_gap(i64::MIN)
            .validate(&s, &t)
            .unwrap_err();
        assert!(matches!(err, MedError::InvalidConfig { option: "scoring", .. }));

        let err = MedConfig::default()
            .with_substitute(i64::MAX)
            .validate(&s, &t)
            .unwrap_err();
        assert!(matches!(err, MedError::InvalidConfig { option: "costs", .. }));
    }

    #[test]
    fn test_degenerate_scoring_accepted() {
        let (s, t) = seqs("a", "b");
        assert!(MedConfig::default().with_gap(3).validate(&s, &t).is_ok());
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("match", " 4 ").unwrap(), 4);
        assert!(parse_weight("match", "four").is_err());
        assert!(parse_weight("match", "").is_err());
    }

    #[test]
    fn test_parse_gap_filler() {
        assert_eq!(parse_gap_filler("*").unwrap(), '*');
        assert_eq!(parse_gap_filler("·").unwrap(), '·');
        assert!(parse_gap_filler("").is_err());
        assert!(parse_gap_filler("--").is_err());
    }
}
