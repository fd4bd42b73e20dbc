//! Benchmark command
//!
//! Times joker queries generated from the dictionary itself.

use crate::core::{Letter, lowercase, tokenize};
use crate::matching::{JOKER, MatchEngine};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, index};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchConfig {
    /// Number of queries to run
    pub count: usize,
    /// Letters replaced by jokers in each query
    pub jokers: usize,
    /// Seed for reproducible query selection
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchConfig {
    #[must_use]
    pub const fn new(count: usize, jokers: usize) -> Self {
        Self {
            count,
            jokers,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub total_matches: usize,
    pub average_matches: f64,
    pub min_matches: usize,
    pub max_matches: usize,
    /// Queries by match count
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Build `config.count` queries from random entries with `config.jokers`
/// letters hidden, and time them against `engine`
///
/// Entries with fewer whole characters than the joker count are never
/// picked. Every generated query matches at least the entry it came from.
pub fn run_benchmark(
    engine: &MatchEngine,
    dictionary: &[String],
    config: &BenchConfig,
) -> BenchmarkResult {
    let queries = generate_queries(engine, dictionary, config);
    info!(
        "Running {} benchmark queries with {} jokers",
        queries.len(),
        config.jokers
    );

    let pb = if config.show_progress {
        ProgressBar::new(queries.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let mut total_matches = 0;
    let mut min_matches = usize::MAX;
    let mut max_matches = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    let start = Instant::now();
    for (idx, query) in queries.iter().enumerate() {
        let matches = engine.search(query).len();

        total_matches += matches;
        min_matches = min_matches.min(matches);
        max_matches = max_matches.max(matches);
        *distribution.entry(matches).or_insert(0) += 1;

        if idx % 10 == 0 {
            pb.set_message(format!("Avg: {:.2}", total_matches as f64 / (idx + 1) as f64));
        }
        pb.inc(1);
    }
    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let total_queries = queries.len();
    BenchmarkResult {
        total_queries,
        total_matches,
        average_matches: if total_queries == 0 {
            0.0
        } else {
            total_matches as f64 / total_queries as f64
        },
        min_matches: if total_queries == 0 { 0 } else { min_matches },
        max_matches,
        distribution,
        duration,
        queries_per_second: total_queries as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

fn generate_queries(engine: &MatchEngine, dictionary: &[String], config: &BenchConfig) -> Vec<String> {
    let alphabet = engine.alphabet();
    let lowered: Vec<String> = dictionary
        .iter()
        .map(|entry| lowercase(entry, alphabet))
        .collect();
    let candidates: Vec<Vec<Letter<'_>>> = lowered
        .iter()
        .map(|lower| tokenize(lower, alphabet))
        .filter(|letters| !letters.is_empty() && joker_slots(letters).len() >= config.jokers)
        .collect();

    let mut rng = config
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    let mut joker_buf = [0u8; 4];
    let joker: &str = JOKER.encode_utf8(&mut joker_buf);

    (0..config.count)
        .map_while(|_| {
            let letters = candidates.choose(&mut rng)?;
            let slots = joker_slots(letters);
            let hidden: Vec<usize> = index::sample(&mut rng, slots.len(), config.jokers)
                .into_iter()
                .map(|i| slots[i])
                .collect();

            let mut bytes = Vec::new();
            for (position, letter) in letters.iter().enumerate() {
                if hidden.contains(&position) {
                    bytes.extend_from_slice(joker.as_bytes());
                } else {
                    bytes.extend_from_slice(letter.as_bytes());
                }
            }
            // Jokers replace whole characters only, so the bytes stay UTF-8
            String::from_utf8(bytes).ok()
        })
        .collect()
}

/// Positions of letters that are whole characters
///
/// A byte split off a multi-byte character outside the alphabet cannot be
/// hidden on its own without breaking the query text.
fn joker_slots(letters: &[Letter<'_>]) -> Vec<usize> {
    letters
        .iter()
        .enumerate()
        .filter(|(_, letter)| letter.as_str().is_some())
        .map(|(position, _)| position)
        .collect()
}
