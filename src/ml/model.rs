use burn::{
    nn::{Dropout, DropoutConfig, Linear, LinearConfig},
    prelude::*,
    tensor::activation::log_softmax,
};

use crate::data::batcher::ExampleBatch;

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct ConditionalRnnConfig {
    pub n_categories:  usize,
    pub alphabet_size: usize,
    pub hidden_size:   usize,
    #[config(default = 0.1)]
    pub dropout:       f64,
}

impl ConditionalRnnConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> ConditionalRnn<B> {
        let combined = self.n_categories + self.alphabet_size + self.hidden_size;
        ConditionalRnn {
            i2h:         LinearConfig::new(combined, self.hidden_size).init(device),
            i2o:         LinearConfig::new(combined, self.alphabet_size).init(device),
            o2o:         LinearConfig::new(self.alphabet_size + self.hidden_size, self.alphabet_size)
                .init(device),
            dropout:     DropoutConfig::new(self.dropout).init(),
            hidden_size: self.hidden_size,
        }
    }
}

/// Category-conditioned character RNN cell.
///
/// One step maps (category [1, C], symbol [1, A], hidden [1, H])
/// to (log-probabilities [1, A], next hidden [1, H]).
#[derive(Module, Debug)]
pub struct ConditionalRnn<B: Backend> {
    /// [C+A+H] → H
    pub i2h:         Linear<B>,
    /// [C+A+H] → A
    pub i2o:         Linear<B>,
    /// [A+H] → A, recombines the raw output with the new hidden state
    pub o2o:         Linear<B>,
    /// Only active on an autodiff backend, i.e. while training
    pub dropout:     Dropout,
    pub hidden_size: usize,
}

impl<B: Backend> ConditionalRnn<B> {
    pub fn forward(
        &self,
        category: Tensor<B, 2>,
        input:    Tensor<B, 2>,
        hidden:   Tensor<B, 2>,
    ) -> (Tensor<B, 2>, Tensor<B, 2>) {
        let combined = Tensor::cat(vec![category, input, hidden], 1);
        let hidden   = self.i2h.forward(combined.clone());
        let output   = self.i2o.forward(combined);

        let output = self.o2o.forward(Tensor::cat(vec![output, hidden.clone()], 1));
        let output = self.dropout.forward(output);
        (log_softmax(output, 1), hidden)
    }

    pub fn init_hidden(&self, device: &B::Device) -> Tensor<B, 2> {
        Tensor::zeros([1, self.hidden_size], device)
    }

    /// Teacher-forced unroll over one example, returning the summed
    /// negative log-likelihood of every target — shape: [1]
    pub fn sequence_loss(&self, batch: &ExampleBatch<B>) -> Tensor<B, 1> {
        let device     = batch.inputs.device();
        let mut hidden = self.init_hidden(&device);
        let mut loss   = Tensor::<B, 1>::zeros([1], &device);

        for (step, &target) in batch.targets.iter().enumerate() {
            let (output, next) = self.forward(batch.category.clone(), batch.input_at(step), hidden);
            hidden = next;
            loss   = loss + nll(output, target);
        }
        loss
    }
}

/// -log p(target) for a [1, A] row of log-probabilities.
fn nll<B: Backend>(log_probs: Tensor<B, 2>, target: usize) -> Tensor<B, 1> {
    log_probs.slice([0..1, target..target + 1]).reshape([1]).neg()
}
