// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `train`  — trains the model on a directory of name files
//   2. `sample` — loads a checkpoint and prints generated names
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, SampleArgs, TrainArgs};

use crate::application::{
    sample_use_case::{SampleConfig, SampleUseCase},
    train_use_case::TrainUseCase,
};

#[derive(Parser, Debug)]
#[command(
    name = "char-rnn-gen",
    version,
    about = "Train a category-conditioned character RNN on name lists, then generate new names."
)]
pub struct Cli {
    /// The subcommand to run (train or sample)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args)  => run_train(args),
            Commands::Sample(args) => run_sample(args),
        }
    }
}

fn run_train(args: TrainArgs) -> Result<()> {
    tracing::info!("Starting training on name files in: {}", args.data_dir);

    let use_case = TrainUseCase::new(args.into());
    use_case.execute()?;

    println!("Training complete. Checkpoint saved.");
    Ok(())
}

fn run_sample(args: SampleArgs) -> Result<()> {
    let cfg: SampleConfig = args.into();

    let use_case = SampleUseCase::new(&cfg.checkpoint_dir, cfg.max_length)?;
    let names    = use_case.generate(&cfg.category, &cfg.start_letters, cfg.strategy, cfg.seed)?;

    for name in names {
        println!("{name}");
    }
    Ok(())
}
