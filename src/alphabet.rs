use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::Error;

/// Symbols used when no alphabet is supplied: lower case, upper case, digits.
pub const DEFAULT_SYMBOLS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

static DEFAULT: Lazy<Alphabet> = Lazy::new(|| Alphabet {
    symbols: DEFAULT_SYMBOLS.chars().collect(),
});

/// An immutable, non-empty, ordered set of symbols to draw from.
///
/// Symbols are unicode scalar values, so a multi-byte character is always a
/// single symbol. Duplicates are kept and make that symbol proportionally more
/// likely to be picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn from_default() -> Self {
        DEFAULT.clone()
    }

    pub fn from_symbols(symbols: impl Into<Vec<char>>) -> Result<Self, Error> {
        let symbols = symbols.into();
        if symbols.is_empty() {
            return Err(Error::InvalidAlphabet);
        }
        Ok(Self { symbols })
    }

    pub fn from_string(text: &str) -> Result<Self, Error> {
        Self::from_symbols(text.chars().collect::<Vec<_>>())
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false` for a constructed alphabet.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Widest symbol in UTF-8 bytes, used to size output buffers.
    pub(crate) fn max_symbol_width(&self) -> usize {
        self.symbols.iter().map(|c| c.len_utf8()).max().unwrap_or(1)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::from_default()
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

/// `None` stands for an absent alphabet and is rejected like an empty one.
impl TryFrom<Option<&str>> for Alphabet {
    type Error = Error;

    fn try_from(text: Option<&str>) -> Result<Self, Self::Error> {
        match text {
            Some(text) => Self::from_string(text),
            None => Err(Error::InvalidAlphabet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn default_has_62_symbols_in_fixed_order() {
        let alphabet = Alphabet::from_default();
        assert_eq!(alphabet.len(), 62);
        assert_eq!(alphabet.symbols()[0], 'a');
        assert_eq!(alphabet.symbols()[26], 'A');
        assert_eq!(alphabet.symbols()[52], '0');
        assert_eq!(alphabet.symbols()[61], '9');
        assert_eq!(alphabet, Alphabet::default());
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert_eq!(Alphabet::from_string(""), Err(Error::InvalidAlphabet));
        assert_eq!(Alphabet::from_symbols(Vec::<char>::new()), Err(Error::InvalidAlphabet));
        assert_eq!("".parse::<Alphabet>(), Err(Error::InvalidAlphabet));
    }

    #[test]
    fn absent_input_is_rejected() {
        assert_eq!(Alphabet::try_from(None::<&str>), Err(Error::InvalidAlphabet));
        let alphabet = Alphabet::try_from(Some("xy")).unwrap();
        assert_eq!(alphabet.symbols().to_vec(), vec!['x', 'y']);
    }

    #[test]
    fn duplicates_are_kept() {
        let alphabet = Alphabet::from_string("aab").unwrap();
        assert_eq!(alphabet.symbols().to_vec(), vec!['a', 'a', 'b']);
    }

    #[test]
    fn multi_byte_symbols_are_not_split() {
        let alphabet = Alphabet::from_string("é😀𝄞a").unwrap();
        assert_eq!(alphabet.len(), 4);
        assert!(alphabet.contains('😀'));
        assert!(alphabet.contains('𝄞'));
        assert_eq!(alphabet.max_symbol_width(), 4);
    }

    #[test]
    fn control_characters_are_allowed() {
        let alphabet = Alphabet::from_symbols(['\u{0}', '\u{7}', '\u{7f}', '\n']).unwrap();
        assert_eq!(alphabet.len(), 4);
    }
}
