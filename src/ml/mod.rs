// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn model, loss and optimiser code.
// The data layer only builds tensors; nothing else touches
// burn::nn or burn::optim.
//
// What's in this layer:
//
//   model.rs   — The conditional character RNN cell
//                • i2h / i2o projections of [category|symbol|hidden]
//                • o2o projection of [output|hidden]
//                • Dropout (training only)
//                • Log-softmax over the alphabet
//                • Teacher-forced summed NLL over one name
//
//   trainer.rs — The training loop
//                Random (category, name) draw, unroll, backward
//                pass, one Adam step per name, loss telemetry
//
//   sampler.rs — The decoding loop
//                Greedy or stochastic next-symbol choice until
//                EOS or the length cap
//
// Backends: training runs on Autodiff<NdArray>, sampling on
// the plain NdArray backend where dropout is a no-op.
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)

/// Conditional character RNN architecture
pub mod model;

/// Training loop with per-step loss reporting
pub mod trainer;

/// Greedy / stochastic name generation
pub mod sampler;

/// Backend used for training (gradients enabled)
pub type TrainBackend = burn::backend::Autodiff<burn::backend::NdArray>;

/// Backend used for sampling
pub type InferBackend = burn::backend::NdArray;
