// ============================================================
// Layer 4 — Example Encoder
// ============================================================
// Turns a (category, name) pair into the three numeric pieces
// the recurrent cell is trained on.
//
// For category "Irish" (index 1 of 3) and the name "Kea":
//
//   category vector:  [0, 1, 0]
//
//   input matrix:     K → one-hot(K)        (row 0)
//                     e → one-hot(e)        (row 1)
//                     a → one-hot(a)        (row 2)
//
//   target sequence:  [idx(e), idx(a), EOS]
//
// At every position the model sees the TRUE current symbol
// (teacher forcing) and is asked to predict the next one. The
// last target is always EOS, so a one-letter name trains a
// single "stop here" prediction.
//
// Plain Vec<f32>/Vec<usize> are produced here; the batcher
// turns them into Burn tensors.
//
// Reference: Rust Book §8 (Vectors)

use anyhow::{bail, Context, Result};

use crate::domain::vocabulary::Vocabulary;

/// One fully encoded training example.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedExample {
    /// One-hot, length C
    pub category: Vec<f32>,
    /// L rows, each one-hot of length A
    pub inputs: Vec<Vec<f32>>,
    /// L indices into the alphabet, last one is EOS
    pub targets: Vec<usize>,
}

impl EncodedExample {
    /// Sequence length L
    pub fn len(&self) -> usize {
        self.targets.len()
    }
}

pub struct Encoder<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> Encoder<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// One-hot vector of length C for a known category.
    pub fn category_vector(&self, category: &str) -> Result<Vec<f32>> {
        let index = self
            .vocabulary
            .categories
            .index_of(category)
            .with_context(|| format!("Unknown category '{category}'"))?;
        Ok(one_hot(index, self.vocabulary.n_categories()))
    }

    /// One-hot vector of length A for a single symbol.
    pub fn symbol_vector(&self, symbol: char) -> Result<Vec<f32>> {
        let index = self.symbol_index(symbol)?;
        Ok(one_hot(index, self.vocabulary.alphabet_size()))
    }

    /// L one-hot rows over the alphabet. The EOS column is never set.
    pub fn input_matrix(&self, line: &str) -> Result<Vec<Vec<f32>>> {
        if line.is_empty() {
            bail!("Cannot encode an empty line");
        }
        line.chars().map(|c| self.symbol_vector(c)).collect()
    }

    /// Indices of characters 2..=L, then EOS.
    pub fn target_sequence(&self, line: &str) -> Result<Vec<usize>> {
        if line.is_empty() {
            bail!("Cannot encode an empty line");
        }
        let mut targets = line
            .chars()
            .skip(1)
            .map(|c| self.symbol_index(c))
            .collect::<Result<Vec<_>>>()?;
        targets.push(self.vocabulary.alphabet.eos_index());
        Ok(targets)
    }

    pub fn encode(&self, category: &str, line: &str) -> Result<EncodedExample> {
        Ok(EncodedExample {
            category: self.category_vector(category)?,
            inputs:   self.input_matrix(line)?,
            targets:  self.target_sequence(line)?,
        })
    }

    fn symbol_index(&self, symbol: char) -> Result<usize> {
        self.vocabulary
            .alphabet
            .index_of(symbol)
            .with_context(|| format!("Symbol {symbol:?} is not in the alphabet"))
    }
}

fn one_hot(index: usize, len: usize) -> Vec<f32> {
    let mut v = vec![0.0; len];
    v[index] = 1.0;
    v
}
