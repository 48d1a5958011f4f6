// ============================================================
// Layer 4 — Name File Loader
// ============================================================
// Loads one plain-text file per category from a directory:
//
//   data/names/
//     Arabic.txt      ← category "Arabic", one name per line
//     Chinese.txt
//     ...
//
// The category name is the file stem. Files are processed in
// sorted file-name order so that the category index order is
// the same on every machine and every run — read_dir() makes
// no ordering promise of its own.
//
// Every line goes through the Preprocessor; lines that end up
// empty are dropped, and a file with no surviving names is
// skipped with a warning.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use anyhow::{bail, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::preprocessor::Preprocessor;
use crate::domain::{alphabet::Alphabet, corpus::Corpus, traits::CorpusSource};

/// File extension of a category file
const NAME_FILE_EXT: &str = "txt";

/// Loads all `.txt` name files from a given directory.
/// Implements the CorpusSource trait from Layer 3.
pub struct NameFileLoader {
    dir: PathBuf,
}

impl NameFileLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Sorted list of category files in the directory.
    fn category_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir.display()))?
        {
            let path = entry?.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(NAME_FILE_EXT) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl CorpusSource for NameFileLoader {
    fn load_corpus(&self, alphabet: &Alphabet) -> Result<Corpus> {
        if !self.dir.is_dir() {
            bail!(
                "Data directory '{}' does not exist. Expected one .{} file per category.",
                self.dir.display(),
                NAME_FILE_EXT
            );
        }

        let preprocessor = Preprocessor::new(alphabet);
        let mut groups   = Vec::new();

        for path in self.category_files()? {
            let (category, names) = load_single_file(&path, &preprocessor)?;
            if names.is_empty() {
                tracing::warn!("Skipping '{}': no usable names", path.display());
                continue;
            }
            tracing::debug!("Loaded category '{}' ({} names)", category, names.len());
            groups.push((category, names));
        }

        if groups.is_empty() {
            bail!("No usable .{} files found in '{}'", NAME_FILE_EXT, self.dir.display());
        }

        let corpus = Corpus::new(alphabet.clone(), groups)?;
        tracing::info!(
            "Loaded {} categories, {} names",
            corpus.categories().len(),
            corpus.total_lines()
        );
        Ok(corpus)
    }
}

/// Read one category file, returning (category, cleaned names).
fn load_single_file(path: &Path, preprocessor: &Preprocessor<'_>) -> Result<(String, Vec<String>)> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let category = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Invalid file name '{}'", path.display()))?
        .to_string();

    let mut dropped = 0usize;
    let names: Vec<String> = text
        .lines()
        .filter_map(|line| {
            let name = preprocessor.clean(line);
            if name.is_empty() {
                if !line.trim().is_empty() {
                    dropped += 1;
                }
                None
            } else {
                Some(name)
            }
        })
        .collect();

    if dropped > 0 {
        tracing::debug!("'{}': dropped {} lines with no alphabet symbols", category, dropped);
    }

    Ok((category, names))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("char_rnn_gen_loader_{}_{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_loads_sorted_categories() {
        let dir = scratch_dir("sorted");
        fs::write(dir.join("Spanish.txt"), "Abad\nAbarca\n").unwrap();
        fs::write(dir.join("Dutch.txt"), "Aalsburg\n\n  Aalst \n").unwrap();
        fs::write(dir.join("README.md"), "not a category").unwrap();

        let corpus = NameFileLoader::new(&dir)
            .load_corpus(&Alphabet::default())
            .unwrap();

        assert_eq!(corpus.categories().names(), &["Dutch".to_string(), "Spanish".to_string()]);
        assert_eq!(corpus.lines_of(0), &["Aalsburg".to_string(), "Aalst".to_string()]);
        assert_eq!(corpus.total_lines(), 4);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_skips_files_without_usable_names() {
        let dir = scratch_dir("skip");
        fs::write(dir.join("Greek.txt"), "Ααρων\n").unwrap();
        fs::write(dir.join("Irish.txt"), "Kelly\n").unwrap();

        let corpus = NameFileLoader::new(&dir)
            .load_corpus(&Alphabet::default())
            .unwrap();

        assert_eq!(corpus.categories().len(), 1);
        assert_eq!(corpus.categories().index_of("Irish"), Some(0));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let loader = NameFileLoader::new("/definitely/not/a/real/dir");
        assert!(loader.load_corpus(&Alphabet::default()).is_err());
    }
}
