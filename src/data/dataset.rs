// ============================================================
// Layer 4 — Training Pair Draw
// ============================================================
// Picks the next (category, name) pair for the trainer.
//
// Two-level uniform draw, with replacement:
//   1. a category, uniformly among all categories
//   2. a name, uniformly among that category's names
//
// Small categories are therefore over-represented relative to
// their share of names, and there is no epoch: any pair can
// repeat before others are ever seen.

use rand::{seq::SliceRandom, Rng};

use crate::domain::corpus::Corpus;

/// A borrowed (category, name) pair from the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingPair<'a> {
    pub category: &'a str,
    pub line:     &'a str,
}

/// Draw one training pair. A Corpus always has at least one
/// category and every category at least one name, so this
/// only returns None for an inconsistent corpus.
pub fn random_pair<'a, R: Rng>(corpus: &'a Corpus, rng: &mut R) -> Option<TrainingPair<'a>> {
    let categories = corpus.categories();
    let index      = rng.gen_range(0..categories.len());
    let category   = categories.name_at(index)?;
    let line       = corpus.lines_of(index).choose(rng)?;
    Some(TrainingPair { category, line })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alphabet::Alphabet;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_pairs_come_from_their_category() {
        let corpus = Corpus::new(
            Alphabet::default(),
            vec![
                ("Left".into(), vec!["Abc".into(), "Abd".into()]),
                ("Right".into(), vec!["Xyz".into()]),
            ],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let mut seen_left  = false;
        let mut seen_right = false;
        for _ in 0..200 {
            let pair = random_pair(&corpus, &mut rng).unwrap();
            match pair.category {
                "Left" => {
                    seen_left = true;
                    assert!(pair.line.starts_with("Ab"));
                }
                "Right" => {
                    seen_right = true;
                    assert_eq!(pair.line, "Xyz");
                }
                other => panic!("unexpected category {other}"),
            }
        }
        assert!(seen_left && seen_right);
    }
}
