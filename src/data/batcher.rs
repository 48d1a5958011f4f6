// ============================================================
// Layer 4 — Example Batcher
// ============================================================
// Converts an EncodedExample (plain Vecs) into Burn tensors
// on the target device.
//
// Training uses a batch size of exactly one name, so a "batch"
// here is a single example laid out for step-by-step unrolling:
//
//   category: [1, C]   — fed unchanged at every step
//   inputs:   [L, A]   — row t is the symbol at position t
//   targets:  Vec<usize> of length L (used for indexing the
//             log-probabilities, never moved to the device)
//
// The same batcher builds the [1, C] / [1, A] inputs the
// sampler needs for one decoding step.
//
// Reference: Burn Book §4 (Batcher)

use burn::prelude::*;

use crate::data::encoder::EncodedExample;

/// One example ready for the recurrent unroll.
#[derive(Debug, Clone)]
pub struct ExampleBatch<B: Backend> {
    /// One-hot category — shape: [1, C]
    pub category: Tensor<B, 2>,

    /// One-hot input symbols — shape: [L, A]
    pub inputs: Tensor<B, 2>,

    /// Next-symbol targets — length L
    pub targets: Vec<usize>,
}

impl<B: Backend> ExampleBatch<B> {
    /// Sequence length L
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Row `step` of the input matrix — shape: [1, A]
    pub fn input_at(&self, step: usize) -> Tensor<B, 2> {
        let [_, alphabet_size] = self.inputs.dims();
        self.inputs.clone().slice([step..step + 1, 0..alphabet_size])
    }
}

/// Holds the device so tensors are created in the right place.
#[derive(Clone, Debug)]
pub struct ExampleBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> ExampleBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }

    pub fn batch(&self, example: &EncodedExample) -> ExampleBatch<B> {
        let seq_len       = example.inputs.len();
        let alphabet_size = example.inputs.first().map_or(0, Vec::len);

        // Flatten [L][A] row-major, then reshape on the device
        let input_flat: Vec<f32> = example.inputs.iter().flatten().copied().collect();

        ExampleBatch {
            category: self.row(&example.category),
            inputs:   Tensor::<B, 1>::from_floats(input_flat.as_slice(), &self.device)
                .reshape([seq_len, alphabet_size]),
            targets:  example.targets.clone(),
        }
    }

    /// A single vector as a [1, N] tensor.
    pub fn row(&self, values: &[f32]) -> Tensor<B, 2> {
        Tensor::<B, 1>::from_floats(values, &self.device).reshape([1, values.len()])
    }
}
