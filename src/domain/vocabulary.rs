// ============================================================
// Layer 3 — Vocabulary
// ============================================================
// Bundles the two index mappings a trained model depends on:
//
//   Alphabet     — symbol   ↔ input/output column
//   CategorySet  — category ↔ category-vector column
//
// The model dimensions follow directly from it:
//   C = categories.len()
//   A = alphabet.size()   (symbols + EOS)
//
// Serialised to vocabulary.json next to the weights so the
// sampler uses exactly the mapping the trainer used.

use serde::{Deserialize, Serialize};

use crate::domain::{alphabet::Alphabet, category::CategorySet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub alphabet:   Alphabet,
    pub categories: CategorySet,
}

impl Vocabulary {
    pub fn new(alphabet: Alphabet, categories: CategorySet) -> Self {
        Self { alphabet, categories }
    }

    /// Number of categories (C)
    pub fn n_categories(&self) -> usize {
        self.categories.len()
    }

    /// Number of model outputs including EOS (A)
    pub fn alphabet_size(&self) -> usize {
        self.alphabet.size()
    }
}
