// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Online, one-name-at-a-time training with Adam.
//
// Per step:
//   1. draw a random (category, name) pair      (with replacement)
//   2. encode it and move it to the device
//   3. unroll the cell over the name from a zero hidden state,
//      summing the NLL of every next-symbol target
//   4. backward pass on the summed loss, one Adam update
//   5. report summed loss / name length
//
// The model is passed BY VALUE through every update:
//   model = optim.step(lr, model, grads)
// so the loop is the only owner of the parameters at any time.
//
// There is no epoch, no validation split and no early stop —
// training runs for exactly `steps` updates.
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use anyhow::{Context, Result};
use burn::{
    optim::{AdamConfig, GradientsParams, Optimizer},
    tensor::{backend::AutodiffBackend, ElementConversion},
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::application::train_use_case::TrainConfig;
use crate::data::{
    batcher::{ExampleBatch, ExampleBatcher},
    dataset::random_pair,
    encoder::Encoder,
};
use crate::domain::corpus::Corpus;
use crate::infra::{
    checkpoint::CheckpointManager,
    metrics::{format_elapsed, CheckpointLoss, LossWindow, MetricsLogger},
};
use crate::ml::{
    model::{ConditionalRnn, ConditionalRnnConfig},
    TrainBackend,
};

/// Everything a finished run produces.
pub struct TrainingOutcome<B: AutodiffBackend> {
    pub model:             ConditionalRnn<B>,
    /// Mean per-symbol loss of every step, in order
    pub step_losses:       Vec<f64>,
    /// Mean of `step_losses` over each `plot_every` window
    pub checkpoint_losses: Vec<CheckpointLoss>,
}

pub fn run_training(
    cfg:          &TrainConfig,
    corpus:       &Corpus,
    ckpt_manager: &CheckpointManager,
) -> Result<()> {
    let device = burn::backend::ndarray::NdArrayDevice::default();
    tracing::info!("Using NdArray device: {:?}", device);

    // ── Build model ───────────────────────────────────────────────────────────
    let vocab     = corpus.vocabulary();
    let model_cfg = ConditionalRnnConfig::new(
        vocab.n_categories(), vocab.alphabet_size(), cfg.hidden_size,
    )
    .with_dropout(cfg.dropout);
    let model: ConditionalRnn<TrainBackend> = model_cfg.init(&device);
    tracing::info!(
        "Model ready: C={}, A={}, H={}",
        vocab.n_categories(), vocab.alphabet_size(), cfg.hidden_size
    );

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let outcome = train_loop(cfg, corpus, model, &device, &mut rng)?;

    ckpt_manager.save_model(&outcome.model)?;

    let metrics = MetricsLogger::new(&cfg.checkpoint_dir)?;
    for checkpoint in &outcome.checkpoint_losses {
        metrics.log(checkpoint)?;
    }
    tracing::info!(
        "Wrote {} loss checkpoints to '{}'",
        outcome.checkpoint_losses.len(),
        metrics.csv_path().display()
    );
    Ok(())
}

pub fn train_loop<B: AutodiffBackend, R: Rng>(
    cfg:       &TrainConfig,
    corpus:    &Corpus,
    mut model: ConditionalRnn<B>,
    device:    &B::Device,
    rng:       &mut R,
) -> Result<TrainingOutcome<B>> {
    cfg.validate()?;

    // ── Adam optimiser ────────────────────────────────────────────────────────
    // m = β1*m + (1-β1)*g        (mean)
    // v = β2*v + (1-β2)*g²       (variance)
    // θ = θ - lr * m / (√v + ε)  (update)
    let mut optim = AdamConfig::new().with_epsilon(1e-8).init();

    let encoder = Encoder::new(corpus.vocabulary());
    let batcher = ExampleBatcher::<B>::new(device.clone());

    let mut print_window      = LossWindow::new(cfg.print_every);
    let mut plot_window       = LossWindow::new(cfg.plot_every);
    let mut step_losses       = Vec::with_capacity(cfg.steps);
    let mut checkpoint_losses = Vec::new();
    let start                 = Instant::now();

    for step in 1..=cfg.steps {
        let pair = random_pair(corpus, rng).context("Corpus has no names to train on")?;
        let example = encoder
            .encode(pair.category, pair.line)
            .with_context(|| format!("Cannot encode '{}' ({})", pair.line, pair.category))?;
        let batch = batcher.batch(&example);

        let (next, loss) = train_step(model, &mut optim, &batch, cfg.lr);
        model = next;
        step_losses.push(loss);

        if let Some(avg) = print_window.push(loss) {
            println!(
                "{} ({} {}%) {:.4}",
                format_elapsed(start.elapsed()),
                step,
                step * 100 / cfg.steps,
                avg,
            );
        }

        if let Some(avg) = plot_window.push(loss) {
            tracing::debug!("Checkpoint at step {}: avg_loss={:.4}", step, avg);
            checkpoint_losses.push(CheckpointLoss::new(checkpoint_losses.len() + 1, step, avg));
        }
    }

    tracing::info!("Training complete after {} steps in {}", cfg.steps, format_elapsed(start.elapsed()));
    Ok(TrainingOutcome { model, step_losses, checkpoint_losses })
}

/// One full forward/backward/update pass over a single example.
/// Returns the updated model and the mean per-symbol loss.
pub fn train_step<B, O>(
    model: ConditionalRnn<B>,
    optim: &mut O,
    batch: &ExampleBatch<B>,
    lr:    f64,
) -> (ConditionalRnn<B>, f64)
where
    B: AutodiffBackend,
    O: Optimizer<ConditionalRnn<B>, B>,
{
    let loss            = model.sequence_loss(batch);
    let loss_sum: f64   = loss.clone().into_scalar().elem::<f64>();

    // Backward pass + Adam update
    let grads = loss.backward();
    let grads = GradientsParams::from_grads(grads, &model);
    let model = optim.step(lr, model, grads);

    (model, loss_sum / batch.len() as f64)
}
