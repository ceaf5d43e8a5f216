//! Benchmark command
//!
//! Scores many random secret/guess pairs and audits every result against the
//! scoring invariants.

use crate::core::{Code, CodeError, Score};
use crate::game::GameConfig;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Pairs scored per progress update
const CHUNK_SIZE: usize = 10_000;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub config: GameConfig,
    pub total_pairs: usize,
    /// Pairs where the guess equalled the secret
    pub solved: usize,
    /// Pairs whose score broke an invariant; always zero for a correct scorer
    pub violations: usize,
    pub distribution: FxHashMap<Score, usize>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

impl BenchmarkResult {
    /// Score buckets ordered by exact, then partial count
    #[must_use]
    pub fn sorted_distribution(&self) -> Vec<(Score, usize)> {
        let mut buckets: Vec<(Score, usize)> =
            self.distribution.iter().map(|(&s, &n)| (s, n)).collect();
        buckets.sort_by_key(|(score, _)| (score.exact(), score.partial()));
        buckets
    }
}

#[derive(Default)]
struct Tally {
    solved: usize,
    violations: usize,
    distribution: FxHashMap<Score, usize>,
}

impl Tally {
    fn merge(mut self, other: Self) -> Self {
        self.solved += other.solved;
        self.violations += other.violations;
        for (score, count) in other.distribution {
            *self.distribution.entry(score).or_insert(0) += count;
        }
        self
    }
}

/// Run the benchmark on `count` random pairs drawn from `seed`
///
/// Pairs are generated sequentially one chunk at a time, so a given seed
/// always yields the same distribution and memory stays bounded by the chunk
/// size; scoring within a chunk runs in parallel.
///
/// # Errors
///
/// Returns an error if the configuration does not describe a valid code shape.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_benchmark(config: &GameConfig, count: usize, seed: u64) -> Result<BenchmarkResult, String> {
    config.validate().map_err(|e| e.to_string())?;

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tally = Tally::default();
    let mut remaining = count;

    while remaining > 0 {
        let chunk_len = remaining.min(CHUNK_SIZE);
        let chunk = random_pairs(config, chunk_len, &mut rng).map_err(|e| e.to_string())?;

        let chunk_tally = chunk
            .par_iter()
            .map(|(secret, guess)| audit_pair(secret, guess))
            .reduce(Tally::default, Tally::merge);
        tally = tally.merge(chunk_tally);
        remaining -= chunk_len;

        pb.inc(chunk_len as u64);
        pb.set_message(format!("{} violations", tally.violations));
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    Ok(BenchmarkResult {
        config: *config,
        total_pairs: count,
        solved: tally.solved,
        violations: tally.violations,
        distribution: tally.distribution,
        duration,
        pairs_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Draw `n` secret/guess pairs in order from `rng`
fn random_pairs(config: &GameConfig, n: usize, rng: &mut StdRng) -> Result<Vec<(Code, Code)>, CodeError> {
    (0..n)
        .map(|_| {
            let secret = Code::random(config.length, config.range, rng)?;
            let guess = Code::random(config.length, config.range, rng)?;
            Ok((secret, guess))
        })
        .collect()
}

/// Score one pair and check it against the invariants
fn audit_pair(secret: &Code, guess: &Code) -> Tally {
    let mut tally = Tally::default();
    let length = secret.length();

    let (Ok(forward), Ok(backward), Ok(own)) = (
        Score::calculate(secret, guess),
        Score::calculate(guess, secret),
        Score::calculate(secret, secret),
    ) else {
        tally.violations += 1;
        return tally;
    };

    let bounded = forward.exact() + forward.partial() <= length;
    let symmetric = forward == backward;
    let self_perfect = own == Score::perfect(length);
    let solved_consistent = forward.is_solved(length) == (secret == guess);

    if !(bounded && symmetric && self_perfect && solved_consistent) {
        tally.violations += 1;
    }
    if forward.is_solved(length) {
        tally.solved += 1;
    }
    tally.distribution.insert(forward, 1);
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_runs() {
        let config = GameConfig::new(4, 6, None);
        let result = run_benchmark(&config, 2_000, 1).unwrap();

        assert_eq!(result.total_pairs, 2_000);
        assert_eq!(result.violations, 0);
        assert!(result.pairs_per_second > 0.0);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let config = GameConfig::new(5, 3, None);
        let result = run_benchmark(&config, 25_000, 2).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_pairs);

        for score in result.distribution.keys() {
            assert!(score.exact() + score.partial() <= 5);
        }
    }

    #[test]
    fn benchmark_is_deterministic_for_seed() {
        let config = GameConfig::new(4, 6, None);
        let a = run_benchmark(&config, 3_000, 42).unwrap();
        let b = run_benchmark(&config, 3_000, 42).unwrap();

        assert_eq!(a.sorted_distribution(), b.sorted_distribution());
        assert_eq!(a.solved, b.solved);
    }

    #[test]
    fn benchmark_range_one_always_solves() {
        let config = GameConfig::new(3, 1, None);
        let result = run_benchmark(&config, 100, 0).unwrap();

        assert_eq!(result.solved, 100);
        assert_eq!(result.sorted_distribution(), vec![(Score::perfect(3), 100)]);
    }

    #[test]
    fn benchmark_spans_partial_last_chunk() {
        let config = GameConfig::new(4, 6, None);
        let count = CHUNK_SIZE * 2 + 17;
        let result = run_benchmark(&config, count, 5).unwrap();

        assert_eq!(result.total_pairs, count);
        assert_eq!(result.distribution.values().sum::<usize>(), count);
        assert_eq!(result.violations, 0);
    }

    #[test]
    fn chunked_pairs_follow_one_sequence() {
        let config = GameConfig::new(3, 5, None);
        let mut whole_rng = StdRng::seed_from_u64(11);
        let whole = random_pairs(&config, 10, &mut whole_rng).unwrap();

        let mut split_rng = StdRng::seed_from_u64(11);
        let mut split = random_pairs(&config, 4, &mut split_rng).unwrap();
        split.extend(random_pairs(&config, 6, &mut split_rng).unwrap());

        assert_eq!(whole, split);
    }

    #[test]
    fn benchmark_empty_run() {
        let config = GameConfig::default();
        let result = run_benchmark(&config, 0, 0).unwrap();

        assert_eq!(result.total_pairs, 0);
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn benchmark_rejects_invalid_config() {
        assert!(run_benchmark(&GameConfig::new(4, 0, None), 10, 0).is_err());
    }

    #[test]
    fn sorted_distribution_orders_buckets() {
        let config = GameConfig::new(4, 4, None);
        let result = run_benchmark(&config, 5_000, 9).unwrap();
        let buckets = result.sorted_distribution();

        for pair in buckets.windows(2) {
            let (a, b) = (pair[0].0, pair[1].0);
            assert!((a.exact(), a.partial()) < (b.exact(), b.partial()));
        }
    }
}
