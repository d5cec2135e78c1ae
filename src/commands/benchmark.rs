//! Benchmark command
//!
//! Generates many boards and measures how often placement succeeds.

use crate::core::Board;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_boards: usize,
    pub words_per_board: usize,
    /// Boards on which every target word was placed
    pub complete_boards: usize,
    pub average_placed: f64,
    /// Words that were skipped at least once, most skipped first
    pub skip_counts: Vec<(String, usize)>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Generate `count` boards for `words` and collect placement statistics
///
/// Board `i` is seeded with `seed + i`, so a run is reproducible.
pub fn run_benchmark(words: &[String], count: usize, seed: u64) -> BenchmarkResult {
    let start = Instant::now();

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let skipped: Vec<Vec<String>> = (0..count as u64)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i));
            let board = Board::generate(words, &mut rng);
            pb.inc(1);
            board.skipped().to_vec()
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let complete_boards = skipped.iter().filter(|s| s.is_empty()).count();

    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    for word in skipped.iter().flatten() {
        *counts.entry(word.clone()).or_insert(0) += 1;
    }
    let total_skips: usize = counts.values().sum();

    let mut skip_counts: Vec<(String, usize)> = counts.into_iter().collect();
    skip_counts.sort_by(|(wa, ca), (wb, cb)| cb.cmp(ca).then_with(|| wa.cmp(wb)));

    let average_placed = if count > 0 {
        (count * words.len() - total_skips) as f64 / count as f64
    } else {
        0.0
    };

    BenchmarkResult {
        total_boards: count,
        words_per_board: words.len(),
        complete_boards,
        average_placed,
        skip_counts,
        duration,
        boards_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DEFAULT_WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn benchmark_runs() {
        let words = words_from_slice(DEFAULT_WORDS);
        let result = run_benchmark(&words, 20, 0);

        assert_eq!(result.total_boards, 20);
        assert_eq!(result.words_per_board, words.len());
        assert!(result.complete_boards <= 20);
        assert!(result.average_placed <= words.len() as f64);
    }

    #[test]
    fn benchmark_skip_counts_consistent() {
        let words = words_from_slice(DEFAULT_WORDS);
        let result = run_benchmark(&words, 30, 7);

        let total_skips: usize = result.skip_counts.iter().map(|(_, n)| n).sum();
        let placed = result.average_placed * result.total_boards as f64;
        assert_eq!(
            placed.round() as usize + total_skips,
            result.total_boards * words.len()
        );

        for pair in result.skip_counts.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn benchmark_is_reproducible() {
        let words = words_from_slice(DEFAULT_WORDS);
        let a = run_benchmark(&words, 10, 99);
        let b = run_benchmark(&words, 10, 99);
        assert_eq!(a.complete_boards, b.complete_boards);
        assert_eq!(a.skip_counts, b.skip_counts);
    }

    #[test]
    fn benchmark_unplaceable_word() {
        let words = vec!["CODE".to_string(), "ABCDEFGHIJK".to_string()];
        let result = run_benchmark(&words, 5, 1);

        assert_eq!(result.complete_boards, 0);
        assert_eq!(result.skip_counts[0], ("ABCDEFGHIJK".to_string(), 5));
    }

    #[test]
    fn benchmark_zero_boards() {
        let words = words_from_slice(DEFAULT_WORDS);
        let result = run_benchmark(&words, 0, 0);

        assert_eq!(result.total_boards, 0);
        assert_eq!(result.complete_boards, 0);
        assert!(result.skip_counts.is_empty());
    }
}
