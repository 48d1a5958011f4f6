// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles the concerns that outlive a single process:
//
//   checkpoint.rs  — Saving and loading model weights
//                    (Burn CompactRecorder) and the TrainConfig
//                    (JSON) needed to rebuild the model shape.
//
//   vocab_store.rs — Vocabulary persistence
//                    Writes the alphabet and the ordered category
//                    list next to the weights so sampling uses
//                    exactly the index mapping training used.
//
//   metrics.rs     — Training loss tracking
//                    Windowed loss averages for progress lines
//                    and a CSV loss curve for later plotting.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)
//            Burn Book §5 (Checkpointing)

/// Model checkpoint saving and loading
pub mod checkpoint;

/// Alphabet + category list saving and loading
pub mod vocab_store;

/// Loss windows and CSV logger
pub mod metrics;
