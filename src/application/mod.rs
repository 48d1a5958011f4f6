// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// user-facing goal (training, or generating names).
//
// Rules for this layer:
//   - No model math here (that's Layer 5)
//   - No argument parsing or printing (that's Layer 1)
//   - No direct file formats (that's Layers 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The training workflow
pub mod train_use_case;

// The name generation workflow
pub mod sample_use_case;
