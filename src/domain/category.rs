// ============================================================
// Layer 3 — Category Set
// ============================================================
// The ordered list of conditioning labels (e.g. languages).
//
// The position of a category in this list IS its meaning to a
// trained model: the one-hot category vector puts the 1 at
// this index. Re-ordering the list after training silently
// swaps what the weights think each category is, so a
// CategorySet is built once and then persisted alongside the
// model (see infra::vocab_store).

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// Fails if `names` is empty or contains duplicates.
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            bail!("At least one category is required");
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                bail!("Duplicate category '{name}'");
            }
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl TryFrom<Vec<String>> for CategorySet {
    type Error = anyhow::Error;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Self::new(names)
    }
}

impl From<CategorySet> for Vec<String> {
    fn from(set: CategorySet) -> Self {
        set.names
    }
}
