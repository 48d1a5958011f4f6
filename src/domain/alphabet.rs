// ============================================================
// Layer 3 — Symbol Alphabet
// ============================================================
// The fixed, ordered set of characters the model can read or
// emit, plus one reserved end-of-sequence (EOS) position.
//
// Index layout for the default alphabet:
//
//   0..=25   a-z
//   26..=51  A-Z
//   52..=57  ' ' . , ; ' -
//   58       <EOS>   (not a character — just an index)
//
// The EOS marker is always the LAST index, so the alphabet
// size seen by the model is `symbols.len() + 1`.
//
// Reference: Rust Book §8 (Strings), §5 (Structs)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Letters of both cases plus a small punctuation set.
pub const DEFAULT_SYMBOLS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ .,;'-";

/// An ordered set of unique emittable characters.
/// Stored as a plain list; loading goes through `Alphabet::new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<char>", into = "Vec<char>")]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from the characters of `symbols`, in order.
    /// Fails on duplicates or an empty set.
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            bail!("Alphabet must contain at least one symbol");
        }
        for (i, c) in symbols.iter().enumerate() {
            if symbols[..i].contains(c) {
                bail!("Alphabet contains duplicate symbol {c:?}");
            }
        }
        Ok(Self { symbols })
    }

    /// Number of model outputs: every symbol plus the EOS marker.
    pub fn size(&self) -> usize {
        self.symbols.len() + 1
    }

    /// Index reserved for end-of-sequence.
    pub fn eos_index(&self) -> usize {
        self.symbols.len()
    }

    pub fn index_of(&self, c: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == c)
    }

    /// The character at `index`, or None for the EOS index
    /// and anything out of range.
    pub fn symbol_at(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }
}

impl TryFrom<Vec<char>> for Alphabet {
    type Error = anyhow::Error;

    fn try_from(symbols: Vec<char>) -> Result<Self> {
        Self::new(&symbols.into_iter().collect::<String>())
    }
}

impl From<Alphabet> for Vec<char> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.chars().collect(),
        }
    }
}
