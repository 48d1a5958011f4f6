// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to the corpus loader through
// this trait, so a different source (an in-memory list, a
// bundled archive) can be dropped in without touching the
// training workflow.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::{alphabet::Alphabet, corpus::Corpus};

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can produce a name corpus.
///
/// Implementations:
///   - NameFileLoader → one .txt file per category in a directory
pub trait CorpusSource {
    /// Load every category and its names, normalised to `alphabet`.
    /// The returned corpus fixes the category order for the whole run.
    fn load_corpus(&self, alphabet: &Alphabet) -> Result<Corpus>;
}
