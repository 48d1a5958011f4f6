// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Validate the config
//   Step 2: Load + clean the name files     (Layer 4 - data)
//   Step 3: Run the training loop           (Layer 5 - ml)
//   Step 4: Persist the vocabulary          (Layer 6 - infra)
//   Step 5: Persist the config              (Layer 6 - infra)
//
// The vocabulary is fixed in Step 2 but only written once the
// new weights are on disk. A run that stops early therefore
// leaves the previous run's weights, vocabulary and config
// together in the checkpoint directory.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Burn Book §5 (Training)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::data::loader::NameFileLoader;
use crate::domain::{alphabet::Alphabet, traits::CorpusSource};
use crate::infra::{checkpoint::CheckpointManager, vocab_store::VocabStore};
use crate::ml::trainer::run_training;

// ─── Training Configuration ──────────────────────────────────────────────────
// All hyperparameters for a training run.
// Serialisable so it can be saved to disk and reloaded for sampling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub data_dir:       String,
    pub checkpoint_dir: String,
    pub steps:          usize,
    pub lr:             f64,
    pub hidden_size:    usize,
    pub dropout:        f64,
    pub print_every:    usize,
    pub plot_every:     usize,
    pub seed:           u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_dir:       "data/names".to_string(),
            checkpoint_dir: "checkpoints".to_string(),
            steps:          100_000,
            lr:             0.0005,
            hidden_size:    128,
            dropout:        0.1,
            print_every:    5_000,
            plot_every:     500,
            seed:           42,
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            bail!("steps must be greater than 0");
        }
        if self.hidden_size == 0 {
            bail!("hidden_size must be greater than 0");
        }
        if !(self.lr > 0.0 && self.lr.is_finite()) {
            bail!("lr must be a positive number, got {}", self.lr);
        }
        if !(0.0..1.0).contains(&self.dropout) {
            bail!("dropout must be in [0, 1), got {}", self.dropout);
        }
        if self.print_every == 0 || self.plot_every == 0 {
            bail!("print_every and plot_every must be greater than 0");
        }
        Ok(())
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Train on the name files in `config.data_dir`.
    pub fn execute(&self) -> Result<()> {
        let loader = NameFileLoader::new(&self.config.data_dir);
        self.execute_with(&loader)
    }

    /// Train on any corpus source.
    pub fn execute_with(&self, source: &impl CorpusSource) -> Result<()> {
        let cfg = &self.config;

        // ── Step 1: Validate ──────────────────────────────────────────────────
        cfg.validate()?;

        // ── Step 2: Load the corpus ───────────────────────────────────────────
        // The category order is fixed here for the rest of the run.
        let corpus = source.load_corpus(&Alphabet::default())?;
        tracing::info!(
            "Categories: {}",
            corpus.categories().names().join(", ")
        );

        // ── Step 3: Run training loop (Layer 5) ───────────────────────────────
        let ckpt_manager = CheckpointManager::new(&cfg.checkpoint_dir);
        run_training(cfg, &corpus, &ckpt_manager)?;

        // ── Step 4: Save the vocabulary ───────────────────────────────────────
        VocabStore::new(&cfg.checkpoint_dir).save(corpus.vocabulary())?;

        // ── Step 5: Save config for sampling ──────────────────────────────────
        ckpt_manager.save_config(cfg)
    }
}
