//! Random line sampling for the per-corpus log preview.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use poetry_corpus_shared::{CorpusError, Result};

/// Build the sampler RNG: seeded when `seed` is set, OS entropy otherwise.
pub fn sampler_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw `size` lines uniformly at random without replacement.
///
/// The result is unordered. Fails with [`CorpusError::InsufficientData`]
/// when `lines` holds fewer than `size` entries; the sample is never
/// truncated.
pub fn sample_lines<'a, R: Rng + ?Sized>(
    corpus: &str,
    lines: &'a [String],
    size: usize,
    rng: &mut R,
) -> Result<Vec<&'a str>> {
    if lines.len() < size {
        return Err(CorpusError::InsufficientData {
            corpus: corpus.to_string(),
            available: lines.len(),
            required: size,
        });
    }

    Ok(lines
        .choose_multiple(rng, size)
        .map(String::as_str)
        .collect())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn numbered(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("第{i}句")).collect()
    }

    #[test]
    fn sample_is_distinct_subset() {
        let lines = numbered(25);
        let mut rng = sampler_rng(Some(7));
        let sample = sample_lines("ci", &lines, 10, &mut rng).expect("sample");

        assert_eq!(sample.len(), 10);
        let unique: HashSet<&str> = sample.iter().copied().collect();
        assert_eq!(unique.len(), 10);
        assert!(sample.iter().all(|s| lines.iter().any(|l| l == s)));
    }

    #[test]
    fn exact_population_returns_everything() {
        let lines = numbered(10);
        let mut rng = sampler_rng(Some(1));
        let mut sample = sample_lines("ci", &lines, 10, &mut rng).expect("sample");
        sample.sort_unstable();

        let mut expected: Vec<&str> = lines.iter().map(String::as_str).collect();
        expected.sort_unstable();
        assert_eq!(sample, expected);
    }

    #[test]
    fn too_few_lines_is_rejected() {
        let lines = numbered(9);
        let mut rng = sampler_rng(Some(1));
        let err = sample_lines("shi-tang", &lines, 10, &mut rng).unwrap_err();
        match err {
            CorpusError::InsufficientData {
                corpus,
                available,
                required,
            } => {
                assert_eq!(corpus, "shi-tang");
                assert_eq!(available, 9);
                assert_eq!(required, 10);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_population_is_rejected() {
        let mut rng = sampler_rng(Some(1));
        assert!(sample_lines("ci", &[], 10, &mut rng).is_err());
    }

    #[test]
    fn same_seed_same_sample() {
        let lines = numbered(100);
        let a = sample_lines("ci", &lines, 10, &mut sampler_rng(Some(42))).expect("sample");
        let b = sample_lines("ci", &lines, 10, &mut sampler_rng(Some(42))).expect("sample");
        assert_eq!(a, b);
    }
}
