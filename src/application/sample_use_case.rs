// ============================================================
// Layer 2 — SampleUseCase
// ============================================================
// Rebuilds a trained model from the checkpoint directory and
// generates names with it:
//
//   1. Read train_config.json  → hidden size, dropout
//   2. Read vocabulary.json    → alphabet + category order
//   3. Build an empty ConditionalRnn of that exact shape
//   4. Load model.mpk.gz into it
//   5. Decode one name per seed letter
//
// The data directory is never touched here: categories come
// from the persisted vocabulary only.

use anyhow::{bail, Result};
use rand::{rngs::StdRng, SeedableRng};

use crate::infra::{checkpoint::CheckpointManager, vocab_store::VocabStore};
use crate::ml::{
    model::{ConditionalRnn, ConditionalRnnConfig},
    sampler::{DecodeStrategy, Sampler},
    InferBackend,
};

/// Options for one `sample` invocation.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub checkpoint_dir: String,
    pub category:       String,
    pub start_letters:  String,
    pub strategy:       DecodeStrategy,
    pub max_length:     usize,
    pub seed:           u64,
}

pub struct SampleUseCase {
    sampler: Sampler<InferBackend>,
}

impl SampleUseCase {
    pub fn new(checkpoint_dir: &str, max_length: usize) -> Result<Self> {
        let device = burn::backend::ndarray::NdArrayDevice::default();
        let ckpt   = CheckpointManager::new(checkpoint_dir);
        let cfg    = ckpt.load_config()?;
        let vocab  = VocabStore::new(checkpoint_dir).load()?;

        let model: ConditionalRnn<InferBackend> = ConditionalRnnConfig::new(
            vocab.n_categories(), vocab.alphabet_size(), cfg.hidden_size,
        )
        .with_dropout(cfg.dropout)
        .init(&device);
        let model = ckpt.load_model(model, &device)?;

        Ok(Self { sampler: Sampler::new(model, vocab, device, max_length)? })
    }

    /// Category names the model was trained on, in index order.
    pub fn categories(&self) -> &[String] {
        self.sampler.vocabulary().categories.names()
    }

    pub fn generate(
        &self,
        category:      &str,
        start_letters: &str,
        strategy:      DecodeStrategy,
        seed:          u64,
    ) -> Result<Vec<String>> {
        if start_letters.is_empty() {
            bail!("At least one start letter is required");
        }
        if self.sampler.vocabulary().categories.index_of(category).is_none() {
            bail!(
                "Unknown category '{}'. Known categories: {}",
                category,
                self.categories().join(", ")
            );
        }
        let mut rng = StdRng::seed_from_u64(seed);
        self.sampler.sample_many(category, start_letters, strategy, &mut rng)
    }
}

// ─── End-to-end Tests ─────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::train_use_case::{TrainConfig, TrainUseCase};
    use crate::domain::{
        alphabet::Alphabet, category::CategorySet, corpus::Corpus, traits::CorpusSource,
        vocabulary::Vocabulary,
    };
    use crate::infra::vocab_store::VocabStore;
    use std::fs;

    struct InMemorySource(Vec<(String, Vec<String>)>);

    impl CorpusSource for InMemorySource {
        fn load_corpus(&self, alphabet: &Alphabet) -> Result<Corpus> {
            Corpus::new(alphabet.clone(), self.0.clone())
        }
    }

    fn source() -> InMemorySource {
        InMemorySource(vec![
            ("Alpha".into(), vec!["Abe".into(), "Ada".into(), "Ali".into()]),
            ("Beta".into(), vec!["Bob".into(), "Ben".into(), "Bud".into()]),
        ])
    }

    #[test]
    fn test_train_then_sample_from_checkpoint() {
        let dir = std::env::temp_dir()
            .join(format!("char_rnn_gen_e2e_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let checkpoint_dir = dir.to_string_lossy().into_owned();

        let cfg = TrainConfig {
            checkpoint_dir: checkpoint_dir.clone(),
            steps:          30,
            hidden_size:    16,
            print_every:    10,
            plot_every:     10,
            ..TrainConfig::default()
        };
        TrainUseCase::new(cfg).execute_with(&source()).unwrap();

        let csv = fs::read_to_string(dir.join("loss_history.csv")).unwrap();
        assert_eq!(csv.lines().count(), 4);

        let use_case = SampleUseCase::new(&checkpoint_dir, 8).unwrap();
        assert_eq!(use_case.categories(), &["Alpha".to_string(), "Beta".to_string()]);

        let names = use_case.generate("Beta", "BA", DecodeStrategy::Greedy, 1).unwrap();
        assert_eq!(names.len(), 2);
        assert!(names[0].starts_with('B') && names[1].starts_with('A'));
        assert!(names.iter().all(|n| n.chars().count() <= 8));

        let again = use_case.generate("Beta", "BA", DecodeStrategy::Greedy, 99).unwrap();
        assert_eq!(names, again);

        assert!(use_case.generate("Gamma", "G", DecodeStrategy::Greedy, 1).is_err());
        assert!(use_case.generate("Beta", "", DecodeStrategy::Greedy, 1).is_err());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_vocabulary_that_no_longer_fits_the_weights_is_an_error() {
        let dir = std::env::temp_dir()
            .join(format!("char_rnn_gen_mismatch_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let checkpoint_dir = dir.to_string_lossy().into_owned();

        let cfg = TrainConfig {
            checkpoint_dir: checkpoint_dir.clone(),
            steps:          2,
            hidden_size:    8,
            print_every:    2,
            plot_every:     2,
            ..TrainConfig::default()
        };
        TrainUseCase::new(cfg).execute_with(&source()).unwrap();

        // A later run with a third category that never got as far as
        // saving its weights
        let categories = CategorySet::new(vec!["A".into(), "B".into(), "C".into()]).unwrap();
        VocabStore::new(&dir)
            .save(&Vocabulary::new(Alphabet::default(), categories))
            .unwrap();

        let err = SampleUseCase::new(&checkpoint_dir, 10).err().expect("shape mismatch");
        assert!(err.to_string().contains("layer shapes"), "{err}");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_sampling_without_training_fails() {
        let dir = std::env::temp_dir()
            .join(format!("char_rnn_gen_untrained_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        assert!(SampleUseCase::new(&dir.to_string_lossy(), 20).is_err());
    }
}
