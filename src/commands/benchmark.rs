//! Benchmark command
//!
//! Solves many random same-length pairs in parallel against one shared
//! dictionary.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::search::{Ladder, LadderError, LadderSolver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    /// Word length to draw pairs from; defaults to the most common length
    pub length: Option<usize>,
    /// Seed for reproducible pairs
    pub seed: Option<u64>,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            length: None,
            seed: None,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub found: usize,
    pub not_found: usize,
    pub total_steps: usize,
    pub average_steps: f64,
    pub min_steps: usize,
    pub max_steps: usize,
    pub distribution: HashMap<usize, usize>,
    pub longest: Option<Vec<String>>,
    pub duration: Duration,
    pub searches_per_second: f64,
}

/// Draw random pairs of distinct words sharing one length
///
/// Returns no pairs if fewer than two words have the chosen length.
#[must_use]
pub fn pick_pairs(dictionary: &Dictionary, config: &BenchmarkConfig) -> Vec<(String, String)> {
    let Some(length) = config.length.or_else(|| {
        dictionary
            .lengths()
            .into_iter()
            .max_by_key(|&(len, count)| (count, std::cmp::Reverse(len)))
            .map(|(len, _)| len)
    }) else {
        return Vec::new();
    };

    let pool: Vec<&Word> = dictionary.of_length(length).collect();
    if pool.len() < 2 {
        tracing::warn!(length, words = pool.len(), "not enough words to pair");
        return Vec::new();
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    (0..config.count)
        .filter_map(|_| {
            let mut picked = pool.choose_multiple(&mut rng, 2);
            match (picked.next(), picked.next()) {
                (Some(a), Some(b)) => Some((a.text().to_string(), b.text().to_string())),
                _ => None,
            }
        })
        .collect()
}

/// Solve every pair in parallel and summarise the ladders found
pub fn run_benchmark(
    dictionary: &Dictionary,
    pairs: &[(String, String)],
    show_progress: bool,
) -> BenchmarkResult {
    let solver = LadderSolver::new(dictionary);

    let pb = if show_progress {
        let pb = ProgressBar::new(pairs.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let outcomes: Vec<Result<Ladder, LadderError>> = pairs
        .par_iter()
        .map(|(a, b)| {
            let outcome = solver.try_transform(a, b);
            pb.inc(1);
            outcome
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let ladders: Vec<&Ladder> = outcomes.iter().filter_map(|o| o.as_ref().ok()).collect();
    let found = ladders.len();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for ladder in &ladders {
        *distribution.entry(ladder.steps()).or_insert(0) += 1;
    }

    let total_steps: usize = ladders.iter().map(|l| l.steps()).sum();
    let longest = ladders
        .iter()
        .max_by_key(|l| l.steps())
        .map(|l| l.words().to_vec());

    BenchmarkResult {
        total_pairs: pairs.len(),
        found,
        not_found: pairs.len() - found,
        total_steps,
        average_steps: if found > 0 {
            total_steps as f64 / found as f64
        } else {
            0.0
        },
        min_steps: ladders.iter().map(|l| l.steps()).min().unwrap_or(0),
        max_steps: ladders.iter().map(|l| l.steps()).max().unwrap_or(0),
        distribution,
        longest,
        duration,
        searches_per_second: pairs.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_one_character_off;

    fn seeded(count: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            length: None,
            seed: Some(7),
        }
    }

    #[test]
    fn pick_pairs_defaults_to_most_common_length() {
        let dictionary = Dictionary::embedded();
        let pairs = pick_pairs(dictionary, &seeded(20));

        assert_eq!(pairs.len(), 20);
        for (a, b) in &pairs {
            assert_eq!(a.chars().count(), 5);
            assert_eq!(b.chars().count(), 5);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn pick_pairs_is_reproducible() {
        let dictionary = Dictionary::embedded();
        assert_eq!(
            pick_pairs(dictionary, &seeded(10)),
            pick_pairs(dictionary, &seeded(10))
        );
    }

    #[test]
    fn pick_pairs_needs_two_words() {
        let dictionary = Dictionary::parse("cat COLD");
        let config = BenchmarkConfig {
            length: Some(3),
            ..seeded(5)
        };
        assert!(pick_pairs(&dictionary, &config).is_empty());
        assert!(pick_pairs(&Dictionary::parse(""), &seeded(5)).is_empty());
    }

    #[test]
    fn benchmark_runs() {
        let dictionary = Dictionary::embedded();
        let pairs = pick_pairs(dictionary, &seeded(25));
        let result = run_benchmark(dictionary, &pairs, false);

        assert_eq!(result.total_pairs, 25);
        assert_eq!(result.found + result.not_found, 25);
        assert!(result.min_steps <= result.max_steps);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dictionary = Dictionary::embedded();
        let pairs = vec![
            ("SMART".to_string(), "START".to_string()),
            ("SMART".to_string(), "STARK".to_string()),
            ("SMART".to_string(), "BRAIN".to_string()),
            ("COLD".to_string(), "WARM".to_string()),
            ("CAT".to_string(), "COLD".to_string()),
        ];
        let result = run_benchmark(dictionary, &pairs, false);

        assert_eq!(result.found, 4);
        assert_eq!(result.not_found, 1);
        assert_eq!(result.min_steps, 1);
        assert_eq!(result.max_steps, 6);
        assert_eq!(result.total_steps, 1 + 2 + 6 + 4);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.found);

        let longest = result.longest.unwrap();
        assert_eq!(longest.first().map(String::as_str), Some("SMART"));
        assert_eq!(longest.last().map(String::as_str), Some("BRAIN"));
        assert!(longest.windows(2).all(|w| is_one_character_off(&w[0], &w[1])));
    }

    #[test]
    fn benchmark_empty_pairs() {
        let result = run_benchmark(Dictionary::embedded(), &[], false);

        assert_eq!(result.total_pairs, 0);
        assert_eq!(result.found, 0);
        assert_eq!(result.min_steps, 0);
        assert!(result.longest.is_none());
    }
}
