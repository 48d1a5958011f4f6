// ============================================================
// Layer 6 — Loss Metrics
// ============================================================
// Two pieces:
//
//   LossWindow     — running accumulator over a fixed number of
//                    steps; yields the arithmetic mean each time
//                    the window fills, then starts over.
//                    The trainer keeps one for the printed
//                    progress line and one for the loss curve.
//
//   MetricsLogger  — writes the loss-curve points to
//                    checkpoints/loss_history.csv for plotting.
//
// Example CSV output:
//   checkpoint,step,avg_loss
//   1,500,3.412057
//   2,1000,3.081933
//   ...
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
    time::Duration,
};

const CSV_FILE: &str = "loss_history.csv";

/// Mean loss over one plotting window.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointLoss {
    /// 1-based checkpoint number
    pub checkpoint: usize,
    /// Training step at which the window closed
    pub step: usize,
    /// Arithmetic mean of the per-step losses in the window
    pub avg_loss: f64,
}

impl CheckpointLoss {
    pub fn new(checkpoint: usize, step: usize, avg_loss: f64) -> Self {
        Self { checkpoint, step, avg_loss }
    }
}

/// Fixed-size running mean.
#[derive(Debug, Clone)]
pub struct LossWindow {
    size:  usize,
    sum:   f64,
    count: usize,
}

impl LossWindow {
    /// A size of zero is treated as one.
    pub fn new(size: usize) -> Self {
        Self { size: size.max(1), sum: 0.0, count: 0 }
    }

    /// Add one loss; returns the window mean when the window is full.
    pub fn push(&mut self, loss: f64) -> Option<f64> {
        self.sum   += loss;
        self.count += 1;
        if self.count < self.size {
            return None;
        }
        let mean   = self.sum / self.count as f64;
        self.sum   = 0.0;
        self.count = 0;
        Some(mean)
    }
}

/// Format an elapsed time as "Xm Ys".
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}m {}s", secs / 60, secs % 60)
}

/// Logs checkpoint losses to a CSV file.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create a new MetricsLogger. Any previous history in the
    /// directory is replaced, since each run starts a new curve.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create '{}'", dir.display()))?;

        let csv_path = dir.join(CSV_FILE);
        let mut f = fs::File::create(&csv_path)
            .with_context(|| format!("Cannot create '{}'", csv_path.display()))?;
        writeln!(f, "checkpoint,step,avg_loss")?;
        tracing::debug!("Created metrics CSV: '{}'", csv_path.display());

        Ok(Self { csv_path })
    }

    /// Append one checkpoint as a new row.
    pub fn log(&self, m: &CheckpointLoss) -> Result<()> {
        let mut f = OpenOptions::new().append(true).open(&self.csv_path)?;
        writeln!(f, "{},{},{:.6}", m.checkpoint, m.step, m.avg_loss)?;
        Ok(())
    }

    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}
