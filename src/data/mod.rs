// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from raw name files to the
// tensors of a single training example.
//
// The pipeline flows in this order:
//
//   <data_dir>/*.txt
//       │
//       ▼
//   NameFileLoader    → reads files, one category per file
//       │
//       ▼
//   Preprocessor      → trims, filters to the alphabet
//       │
//       ▼
//   Corpus            → immutable category → names map (Layer 3)
//       │
//       ▼
//   random_pair       → uniform category, then uniform name
//       │
//       ▼
//   Encoder           → one-hot category / inputs, shifted targets
//       │
//       ▼
//   ExampleBatcher    → Burn tensors on the training device
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Loads one .txt name file per category
pub mod loader;

/// Cleans raw lines down to alphabet symbols
pub mod preprocessor;

/// Random (category, name) draw with replacement
pub mod dataset;

/// (category, name) → one-hot vectors and target indices
pub mod encoder;

/// Encoded example → Burn tensors
pub mod batcher;
