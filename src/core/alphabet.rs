//! Input alphabet of an automaton.

use crate::automaton::DfaError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered set of distinct input symbols.
///
/// Each symbol owns the column at its position. Lookup from symbol to
/// column is hashed; since symbols are unique this matches a first-match
/// linear scan.
///
/// # Example
///
/// ```rust
/// use dfakit::core::Alphabet;
///
/// let alphabet = Alphabet::new("ab".chars()).unwrap();
/// assert_eq!(alphabet.index_of('b'), Some(1));
/// assert_eq!(alphabet.index_of('c'), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<char>", into = "Vec<char>")]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet, rejecting an empty or repeated symbol list.
    pub fn new<I>(symbols: I) -> Result<Self, DfaError>
    where
        I: IntoIterator<Item = char>,
    {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(DfaError::EmptyAlphabet);
        }

        let mut index = HashMap::with_capacity(symbols.len());
        for (position, &symbol) in symbols.iter().enumerate() {
            if index.insert(symbol, position).is_some() {
                return Err(DfaError::DuplicateSymbol { symbol });
            }
        }

        Ok(Self { symbols, index })
    }

    /// Column of `symbol`, or `None` if it is not part of the alphabet.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Symbol at column `index`.
    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false` for a constructed alphabet.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}

impl TryFrom<Vec<char>> for Alphabet {
    type Error = DfaError;

    fn try_from(symbols: Vec<char>) -> Result<Self, Self::Error> {
        Alphabet::new(symbols)
    }
}

impl From<Alphabet> for Vec<char> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_position() {
        let alphabet = Alphabet::new("xyz".chars()).unwrap();
        assert_eq!(alphabet.index_of('x'), Some(0));
        assert_eq!(alphabet.index_of('y'), Some(1));
        assert_eq!(alphabet.index_of('z'), Some(2));
        assert_eq!(alphabet.symbol(2), Some('z'));
        assert_eq!(alphabet.symbol(3), None);
    }

    #[test]
    fn unknown_symbol_is_not_found() {
        let alphabet = Alphabet::new("01".chars()).unwrap();
        assert_eq!(alphabet.index_of('2'), None);
        assert!(!alphabet.contains('2'));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Alphabet::new("".chars()), Err(DfaError::EmptyAlphabet));
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            Alphabet::new("aba".chars()),
            Err(DfaError::DuplicateSymbol { symbol: 'a' })
        );
    }

    #[test]
    fn serializes_as_symbol_list() {
        let alphabet = Alphabet::new("ab".chars()).unwrap();
        let json = serde_json::to_string(&alphabet).unwrap();
        assert_eq!(json, r#"["a","b"]"#);

        let deserialized: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(alphabet, deserialized);
    }

    #[test]
    fn deserialization_validates() {
        let result: Result<Alphabet, _> = serde_json::from_str(r#"["a","a"]"#);
        assert!(result.is_err());
    }
}
