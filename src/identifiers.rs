use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::fmt;

/// Returns true for the characters that name a variable in a formula.
pub const fn is_identifier(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// The distinct identifiers of a formula in canonical (ascending) order.
///
/// The position of an identifier in this set is its column in the truth table
/// and the significance of its bit when enumerating assignments: index 0 is the
/// slowest-changing column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierSet {
    symbols: Vec<char>,
    positions: FxHashMap<char, usize>,
}

impl IdentifierSet {
    /// Scans `formula` and collects every identifier in order of first occurrence,
    /// then sorts the result by character code.
    ///
    /// Characters that are not identifiers are skipped; they are validated when the
    /// formula is converted to postfix.
    pub fn collect(formula: &str) -> Self {
        let discovered: Vec<char> = formula
            .chars()
            .filter(|&c| is_identifier(c))
            .unique()
            .collect();

        log::debug!("identifiers in order of occurrence: {discovered:?}");

        Self::from_symbols(discovered)
    }

    /// Builds the set from arbitrary symbols, dropping duplicates and sorting.
    pub fn from_symbols<I: IntoIterator<Item = char>>(symbols: I) -> Self {
        let symbols: Vec<char> = symbols.into_iter().unique().sorted_unstable().collect();
        let positions = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();

        Self { symbols, positions }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Canonical column of `symbol`, if it occurs in the formula.
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.positions.get(&symbol).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }
}

impl fmt::Display for IdentifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbols.iter().join(" "))
    }
}
