// ============================================================
// Layer 3 — Name Corpus
// ============================================================
// Maps each category to the ordered list of names that belong
// to it. Built once at load time and never mutated.
//
// Invariants checked on construction:
//   - every category has at least one name
//   - every name is non-empty
//   - every character of every name is in the alphabet
//
// Category order is the order of the `groups` argument, which
// becomes the CategorySet order and therefore the model's
// category-vector layout.

use anyhow::{bail, Result};

use crate::domain::{
    alphabet::Alphabet,
    category::CategorySet,
    vocabulary::Vocabulary,
};

#[derive(Debug, Clone)]
pub struct Corpus {
    vocabulary: Vocabulary,
    /// lines[i] holds the names of category i
    lines: Vec<Vec<String>>,
}

impl Corpus {
    pub fn new(alphabet: Alphabet, groups: Vec<(String, Vec<String>)>) -> Result<Self> {
        let mut names = Vec::with_capacity(groups.len());
        let mut lines = Vec::with_capacity(groups.len());

        for (category, group) in groups {
            if group.is_empty() {
                bail!("Category '{category}' has no names");
            }
            for line in &group {
                if line.is_empty() {
                    bail!("Category '{category}' contains an empty name");
                }
                if let Some(c) = line.chars().find(|&c| !alphabet.contains(c)) {
                    bail!("Name '{line}' in category '{category}' uses symbol {c:?} outside the alphabet");
                }
            }
            names.push(category);
            lines.push(group);
        }

        let categories = CategorySet::new(names)?;
        Ok(Self {
            vocabulary: Vocabulary::new(alphabet, categories),
            lines,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn categories(&self) -> &CategorySet {
        &self.vocabulary.categories
    }

    /// Names of the category at `index`; empty for an unknown index.
    pub fn lines_of(&self, index: usize) -> &[String] {
        self.lines.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_lines(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }
}
