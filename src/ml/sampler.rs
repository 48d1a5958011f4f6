// ============================================================
// Layer 5 — Sampler
// ============================================================
// Generates a name for a category, starting from a seed letter.
//
//   hidden ← 0, buffer ← seed
//   loop while buffer is shorter than max_length:
//       log_probs, hidden ← cell(category, last symbol, hidden)
//       next ← argmax(log_probs)          (Greedy)
//            | draw from exp(log_probs)   (Sample)
//       if next is EOS → stop
//       buffer.push(next)
//
// The length cap counts the seed letter, so the output never
// has more than `max_length` characters whatever the weights
// are — an untrained model that never emits EOS still stops.
//
// Sampling runs on the plain (non-autodiff) backend, where
// dropout is the identity, so Greedy decoding is deterministic
// for fixed weights.

use anyhow::{anyhow, bail, Result};
use burn::prelude::*;
use rand::{
    distributions::{Distribution, WeightedIndex},
    Rng,
};

use crate::data::{batcher::ExampleBatcher, encoder::Encoder};
use crate::domain::vocabulary::Vocabulary;
use crate::ml::model::ConditionalRnn;

/// How the next symbol is chosen from the output distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeStrategy {
    /// Highest-probability symbol
    #[default]
    Greedy,
    /// Draw from the categorical distribution
    Sample,
}

impl DecodeStrategy {
    fn pick<R: Rng>(self, log_probs: &[f32], rng: &mut R) -> Result<usize> {
        match self {
            Self::Greedy => argmax(log_probs),
            Self::Sample => {
                let probs: Vec<f32> = log_probs.iter().map(|lp| lp.exp()).collect();
                Ok(WeightedIndex::new(&probs)?.sample(rng))
            }
        }
    }
}

fn argmax(values: &[f32]) -> Result<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f32)>, (i, &v)| match best {
            Some((_, b)) if b >= v || v.is_nan() => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
        .ok_or_else(|| anyhow!("Cannot pick from an empty distribution"))
}

pub struct Sampler<B: Backend> {
    model:      ConditionalRnn<B>,
    vocabulary: Vocabulary,
    batcher:    ExampleBatcher<B>,
    max_length: usize,
}

impl<B: Backend> Sampler<B> {
    pub fn new(
        model:      ConditionalRnn<B>,
        vocabulary: Vocabulary,
        device:     B::Device,
        max_length: usize,
    ) -> Result<Self> {
        if max_length == 0 {
            bail!("max_length must be at least 1");
        }
        Ok(Self {
            model,
            vocabulary,
            batcher: ExampleBatcher::new(device),
            max_length,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Generate one name for `category` starting with `start`.
    /// The returned string never contains the EOS marker.
    pub fn sample<R: Rng>(
        &self,
        category: &str,
        start:    char,
        strategy: DecodeStrategy,
        rng:      &mut R,
    ) -> Result<String> {
        let encoder  = Encoder::new(&self.vocabulary);
        let category = self.batcher.row(&encoder.category_vector(category)?);
        let alphabet = &self.vocabulary.alphabet;

        let mut input  = self.batcher.row(&encoder.symbol_vector(start)?);
        let mut hidden = self.model.init_hidden(&self.batcher.device);
        let mut output = String::from(start);
        let mut length = 1usize;

        while length < self.max_length {
            let (log_probs, next) = self.model.forward(category.clone(), input, hidden);
            hidden = next;

            let log_probs: Vec<f32> = log_probs
                .into_data()
                .to_vec()
                .map_err(|e| anyhow!("Cannot read model output: {e:?}"))?;

            // EOS is the only index without a symbol
            let Some(symbol) = alphabet.symbol_at(strategy.pick(&log_probs, rng)?) else {
                break;
            };
            output.push(symbol);
            length += 1;
            input = self.batcher.row(&encoder.symbol_vector(symbol)?);
        }

        tracing::debug!("Sampled '{}' ({:?})", output, strategy);
        Ok(output)
    }

    /// One generated name per character of `start_letters`.
    pub fn sample_many<R: Rng>(
        &self,
        category:      &str,
        start_letters: &str,
        strategy:      DecodeStrategy,
        rng:           &mut R,
    ) -> Result<Vec<String>> {
        start_letters
            .chars()
            .map(|start| self.sample(category, start, strategy, rng))
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{alphabet::Alphabet, category::CategorySet};
    use crate::ml::{model::ConditionalRnnConfig, InferBackend};
    use burn::module::Param;
    use rand::{rngs::StdRng, SeedableRng};

    fn sampler(max_length: usize) -> Sampler<InferBackend> {
        let categories = CategorySet::new(vec!["Italian".into(), "Russian".into()]).unwrap();
        let vocabulary = Vocabulary::new(Alphabet::default(), categories);
        let device     = Default::default();
        let model: ConditionalRnn<InferBackend> =
            ConditionalRnnConfig::new(2, vocabulary.alphabet_size(), 32).init(&device);
        Sampler::new(model, vocabulary, device, max_length).unwrap()
    }

    #[test]
    fn test_greedy_is_deterministic() {
        let s       = sampler(20);
        let mut rng = StdRng::seed_from_u64(0);
        let first   = s.sample("Russian", 'R', DecodeStrategy::Greedy, &mut rng).unwrap();
        for _ in 0..5 {
            let again = s.sample("Russian", 'R', DecodeStrategy::Greedy, &mut rng).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_stochastic_sampling_repeats_with_same_seed() {
        let s = sampler(20);
        let a = s.sample("Italian", 'M', DecodeStrategy::Sample, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = s.sample("Italian", 'M', DecodeStrategy::Sample, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_respects_length_cap_for_every_seed() {
        let s       = sampler(6);
        let mut rng = StdRng::seed_from_u64(2);
        for category in ["Italian", "Russian"] {
            for strategy in [DecodeStrategy::Greedy, DecodeStrategy::Sample] {
                for name in s.sample_many(category, "abcXYZ'-", strategy, &mut rng).unwrap() {
                    assert!(name.chars().count() <= 6, "'{name}' exceeds the cap");
                    assert!(name.chars().all(|c| s.vocabulary().alphabet.contains(c)));
                }
            }
        }
    }

    #[test]
    fn test_cap_stops_a_model_that_never_emits_eos() {
        let categories = CategorySet::new(vec!["Italian".into()]).unwrap();
        let vocabulary = Vocabulary::new(Alphabet::default(), categories);
        let alphabet   = vocabulary.alphabet_size();
        let hidden     = 8;
        let device     = Default::default();

        // Zero o2o weights leave the bias as the whole output: 'a' always
        // wins and EOS is never chosen
        let mut model: ConditionalRnn<InferBackend> =
            ConditionalRnnConfig::new(1, alphabet, hidden).init(&device);
        let mut bias = vec![0.0f32; alphabet];
        bias[vocabulary.alphabet.index_of('a').unwrap()] = 10.0;
        bias[vocabulary.alphabet.eos_index()]            = -10.0;
        model.o2o.weight = Param::from_tensor(Tensor::zeros([alphabet + hidden, alphabet], &device));
        model.o2o.bias   = Some(Param::from_tensor(Tensor::from_floats(bias.as_slice(), &device)));

        let mut rng = StdRng::seed_from_u64(0);
        for max_length in [1, 2, 7, 20] {
            let s    = Sampler::new(model.clone(), vocabulary.clone(), Default::default(), max_length)
                .unwrap();
            let name = s.sample("Italian", 'M', DecodeStrategy::Greedy, &mut rng).unwrap();
            assert_eq!(name.chars().count(), max_length);
            assert_eq!(name, format!("M{}", "a".repeat(max_length - 1)));
        }
    }

    #[test]
    fn test_length_one_returns_seed() {
        let s       = sampler(1);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(s.sample("Italian", 'Q', DecodeStrategy::Greedy, &mut rng).unwrap(), "Q");
    }

    #[test]
    fn test_one_name_per_seed_letter() {
        let s       = sampler(10);
        let mut rng = StdRng::seed_from_u64(4);
        let names   = s.sample_many("Russian", "RUS", DecodeStrategy::Greedy, &mut rng).unwrap();
        assert_eq!(names.len(), 3);
        assert!(names[0].starts_with('R'));
        assert!(names[1].starts_with('U'));
        assert!(names[2].starts_with('S'));
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let s       = sampler(10);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(s.sample("Klingon", 'K', DecodeStrategy::Greedy, &mut rng).is_err());
        assert!(s.sample("Italian", '7', DecodeStrategy::Greedy, &mut rng).is_err());
        assert!(Sampler::<InferBackend>::new(
            ConditionalRnnConfig::new(1, 3, 4).init(&Default::default()),
            s.vocabulary().clone(),
            Default::default(),
            0,
        )
        .is_err());
    }

    #[test]
    fn test_argmax_picks_largest() {
        assert_eq!(argmax(&[-3.0, -0.1, -2.0]).unwrap(), 1);
        assert_eq!(argmax(&[-1.0, -1.0]).unwrap(), 0);
        assert!(argmax(&[]).is_err());
    }
}
