// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits that define what the system
// talks about: symbols, categories and the name corpus.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - NO ML-specific code
//
// The index orderings defined here (symbol → index,
// category → index) are baked into trained weights, so every
// type in this layer is immutable once constructed.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The fixed symbol alphabet plus the end-of-sequence index
pub mod alphabet;

// The ordered set of conditioning labels
pub mod category;

// Alphabet + categories, persisted next to the model
pub mod vocabulary;

// Category → names mapping used for training
pub mod corpus;

// Core abstractions (traits) that other layers implement
pub mod traits;
