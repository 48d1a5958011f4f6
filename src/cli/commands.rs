// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `train` and `sample`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::application::{sample_use_case::SampleConfig, train_use_case::TrainConfig};
use crate::ml::sampler::DecodeStrategy;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the name generator on one .txt file per category
    Train(TrainArgs),

    /// Generate names for a category from a trained checkpoint
    Sample(SampleArgs),
}

/// All arguments for the `train` command.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Directory with one <Category>.txt file per category,
    /// one name per line
    #[arg(long, default_value = "data/names")]
    pub data_dir: String,

    /// Directory to save weights, vocabulary and loss history
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,

    /// Number of single-name updates to run
    #[arg(long, default_value_t = 100_000)]
    pub steps: usize,

    /// Adam learning rate
    #[arg(long, default_value_t = 0.0005)]
    pub lr: f64,

    /// Size of the recurrent hidden state
    #[arg(long, default_value_t = 128)]
    pub hidden_size: usize,

    /// Dropout probability on the output layer during training
    #[arg(long, default_value_t = 0.1)]
    pub dropout: f64,

    /// Print a progress line every N steps
    #[arg(long, default_value_t = 5_000)]
    pub print_every: usize,

    /// Record an averaged loss-curve point every N steps
    #[arg(long, default_value_t = 500)]
    pub plot_every: usize,

    /// Seed for the random (category, name) draw
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// The application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            data_dir:       a.data_dir,
            checkpoint_dir: a.checkpoint_dir,
            steps:          a.steps,
            lr:             a.lr,
            hidden_size:    a.hidden_size,
            dropout:        a.dropout,
            print_every:    a.print_every,
            plot_every:     a.plot_every,
            seed:           a.seed,
        }
    }
}

/// How to pick each next letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliStrategy {
    /// Always the most likely letter
    Greedy,
    /// Draw from the predicted distribution
    Sample,
}

impl From<CliStrategy> for DecodeStrategy {
    fn from(s: CliStrategy) -> Self {
        match s {
            CliStrategy::Greedy => DecodeStrategy::Greedy,
            CliStrategy::Sample => DecodeStrategy::Sample,
        }
    }
}

/// All arguments for the `sample` command
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Category to generate names for (e.g. Russian)
    #[arg(long)]
    pub category: String,

    /// One name is generated per letter
    #[arg(long, default_value = "ABC")]
    pub start_letters: String,

    #[arg(long, value_enum, default_value_t = CliStrategy::Greedy)]
    pub strategy: CliStrategy,

    /// Maximum name length, start letter included
    #[arg(long, default_value_t = 20)]
    pub max_length: usize,

    /// Seed for --strategy sample
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Directory where `train` saved its checkpoint
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,
}

impl From<SampleArgs> for SampleConfig {
    fn from(a: SampleArgs) -> Self {
        SampleConfig {
            checkpoint_dir: a.checkpoint_dir,
            category:       a.category,
            start_letters:  a.start_letters,
            strategy:       a.strategy.into(),
            max_length:     a.max_length,
            seed:           a.seed,
        }
    }
}
