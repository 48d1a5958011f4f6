// ============================================================
// Layer 6 — Checkpoint Manager
// ============================================================
// Saves and restores model weights using Burn's CompactRecorder.
//
// What gets saved per training run:
//   1. Model weights (model.mpk.gz)  — all learned parameters
//   2. train_config.json             — hyperparameters, incl. H
//
// Why save the config separately?
//   The sampler must rebuild a ConditionalRnn with exactly the
//   same shape before loading the weights into it. C and A come
//   from vocabulary.json (see vocab_store.rs), H and dropout
//   come from here.
//
// File layout:
//   checkpoints/
//     model.mpk.gz        ← weights after the last step
//     train_config.json   ← TrainConfig
//     vocabulary.json     ← alphabet + ordered categories
//     loss_history.csv    ← checkpoint losses (metrics.rs)
//
// Reference: Burn Book §5 (Records and Checkpointing)

use anyhow::{bail, Context, Result};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};
use std::{fs, path::PathBuf};

use crate::application::train_use_case::TrainConfig;
use crate::ml::model::ConditionalRnn;

/// Base name of the weights file — the recorder adds `.mpk.gz`
const MODEL_FILE: &str = "model";
const CONFIG_FILE: &str = "train_config.json";

/// Manages saving and loading of model checkpoints.
pub struct CheckpointManager {
    dir: PathBuf,
}

impl CheckpointManager {
    /// Create a new CheckpointManager rooted at `dir`.
    /// The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Save the trained weights.
    pub fn save_model<B: Backend>(&self, model: &ConditionalRnn<B>) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;
        let path = self.dir.join(MODEL_FILE);

        CompactRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| format!("Failed to save model to '{}'", path.display()))?;

        tracing::info!("Saved model weights to '{}'", path.display());
        Ok(())
    }

    /// Load saved weights into a freshly initialised model of the
    /// same shape. Fails if the stored layers have any other shape,
    /// e.g. weights left over from a run with more categories.
    pub fn load_model<B: Backend>(
        &self,
        model:  ConditionalRnn<B>,
        device: &B::Device,
    ) -> Result<ConditionalRnn<B>> {
        let path     = self.dir.join(MODEL_FILE);
        let expected = layer_shapes(&model);

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!("Cannot load model '{}'. Have you trained the model first?", path.display())
            })?;

        let model = model.load_record(record);
        let found = layer_shapes(&model);
        if found != expected {
            bail!(
                "Weights in '{}' have layer shapes {:?}, expected {:?}. \
                 The vocabulary or config no longer matches the model; retrain first.",
                path.display(),
                found,
                expected
            );
        }

        tracing::info!("Loaded model weights from '{}'", path.display());
        Ok(model)
    }

    /// Save the training configuration to JSON.
    pub fn save_config(&self, cfg: &TrainConfig) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;
        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved training config to '{}'", path.display());
        Ok(())
    }

    /// Load the training configuration from JSON.
    pub fn load_config(&self) -> Result<TrainConfig> {
        let path = self.dir.join(CONFIG_FILE);

        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read config from '{}'. \
                 Make sure you have run 'train' before 'sample'.",
                path.display()
            )
        })?;

        serde_json::from_str(&json)
            .with_context(|| format!("Malformed config '{}'", path.display()))
    }
}

/// Weight shapes of i2h, i2o and o2o, in that order.
fn layer_shapes<B: Backend>(model: &ConditionalRnn<B>) -> [[usize; 2]; 3] {
    [
        model.i2h.weight.val().dims(),
        model.i2o.weight.val().dims(),
        model.o2o.weight.val().dims(),
    ]
}
