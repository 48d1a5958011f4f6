// ============================================================
// Layer 6 — Vocabulary Store
// ============================================================
// Persists the symbol alphabet and the ORDERED category list
// the model was trained with.
//
// The trainer writes vocabulary.json once the weights are
// saved; the sampler reads it back instead of re-scanning the
// data directory. A data directory that gained, lost or
// renamed a file after training would otherwise shift category
// indices under the trained weights.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::vocabulary::Vocabulary;

const VOCAB_FILE: &str = "vocabulary.json";

pub struct VocabStore {
    dir: PathBuf,
}

impl VocabStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn save(&self, vocabulary: &Vocabulary) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;
        let path = self.dir.join(VOCAB_FILE);

        fs::write(&path, serde_json::to_string_pretty(vocabulary)?)
            .with_context(|| format!("Cannot write vocabulary to '{}'", path.display()))?;

        tracing::debug!(
            "Saved vocabulary ({} symbols, {} categories) to '{}'",
            vocabulary.alphabet_size(),
            vocabulary.n_categories(),
            path.display()
        );
        Ok(())
    }

    pub fn load(&self) -> Result<Vocabulary> {
        let path = self.dir.join(VOCAB_FILE);
        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read vocabulary from '{}'. Have you run 'train' first?",
                path.display()
            )
        })?;
        serde_json::from_str(&json)
            .with_context(|| format!("Malformed vocabulary '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{alphabet::Alphabet, category::CategorySet};

    #[test]
    fn test_category_order_is_preserved() {
        let dir = std::env::temp_dir()
            .join(format!("char_rnn_gen_vocab_{}", std::process::id()));
        let store = VocabStore::new(&dir);
        let vocab = Vocabulary::new(
            Alphabet::new("abc").unwrap(),
            CategorySet::new(vec!["Zulu".into(), "Afrikaans".into()]).unwrap(),
        );

        store.save(&vocab).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, vocab);
        assert_eq!(loaded.categories.index_of("Zulu"), Some(0));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_hand_edited_duplicates_are_rejected() {
        let dir = std::env::temp_dir()
            .join(format!("char_rnn_gen_vocab_dup_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(VOCAB_FILE),
            r#"{ "alphabet": ["a","b"], "categories": ["Zulu","Zulu"] }"#,
        )
        .unwrap();

        let err = VocabStore::new(&dir).load().unwrap_err();
        assert!(format!("{err:#}").contains("Duplicate category"), "{err:#}");
        fs::remove_dir_all(&dir).ok();
    }
}
