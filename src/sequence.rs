//! Symbol sequences fed to the alignment core
//!
//! Each `char` of the input is one opaque symbol. Whitespace is not
//! stripped: it is replaced by [`WHITESPACE_PLACEHOLDER`] so that every
//! input position keeps its column in the matrices and the alignment.

use std::fmt;

/// Symbol substituted for any whitespace character
pub const WHITESPACE_PLACEHOLDER: char = '_';

/// Label of row/column 0 (the empty prefix) when a matrix is displayed
pub const SENTINEL_LABEL: char = '#';

/// An immutable, normalized sequence of symbols
///
/// # Example
///
/// ```
/// use medalign::SymbolSequence;
///
/// let seq = SymbolSequence::new("ice cream");
/// assert_eq!(seq.len(), 9);
/// assert_eq!(seq.to_string(), "ice_cream");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SymbolSequence {
    symbols: Vec<char>,
}

impl SymbolSequence {
    /// Build a sequence from text, normalizing whitespace
    pub fn new(text: &str) -> Self {
        let symbols = text
            .chars()
            .map(|c| if c.is_whitespace() { WHITESPACE_PLACEHOLDER } else { c })
            .collect();
        Self { symbols }
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the sequence has no symbols
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Borrow the symbols as a slice
    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }

    /// Check whether `symbol` occurs anywhere in the sequence
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Matrix labels: the sentinel for the empty prefix, then one label per symbol
    ///
    /// ```
    /// use medalign::SymbolSequence;
    ///
    /// let labels = SymbolSequence::new("ab").labels();
    /// assert_eq!(labels, vec!['#', 'a', 'b']);
    /// ```
    pub fn labels(&self) -> Vec<char> {
        std::iter::once(SENTINEL_LABEL)
            .chain(self.symbols.iter().copied())
            .collect()
    }
}

impl From<&str> for SymbolSequence {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl AsRef<[char]> for SymbolSequence {
    fn as_ref(&self) -> &[char] {
        &self.symbols
    }
}

impl fmt::Display for SymbolSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}
