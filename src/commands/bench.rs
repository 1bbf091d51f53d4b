//! Benchmark: run the solver against many dictionary words

use crate::core::Word;
use crate::solver::{SolveReport, simulate};
use crate::wordlist::Wordset;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Words needing at least this many guesses count as hard
const HARD_ROUNDS: usize = 5;

/// Aggregate statistics from a benchmark run
#[derive(Debug)]
pub struct BenchReport {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub distribution: HashMap<usize, usize>,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub hardest: Vec<(Word, usize)>,
    pub total_time: Duration,
}

/// Solve every dictionary word (or a random sample of `limit`) and gather
/// statistics
///
/// # Panics
/// Panics if the progress bar template fails to parse, which cannot happen
/// for the built-in template.
#[must_use]
pub fn run_bench(wordset: &Wordset, limit: Option<usize>) -> BenchReport {
    let targets: Vec<&Word> = match limit {
        Some(n) if n < wordset.len() => wordset.random_words(n),
        _ => wordset.words().iter().collect(),
    };

    println!("Benchmarking the solver on {} words...", targets.len());

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut reports = Vec::with_capacity(targets.len());

    for (idx, &secret) in targets.iter().enumerate() {
        reports.push(simulate(wordset, secret));

        if idx % 10 == 0 {
            let rounds: usize = reports.iter().map(SolveReport::rounds).sum();
            pb.set_message(format!("Avg: {:.2}", rounds as f64 / reports.len() as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    summarize(&reports, start.elapsed())
}

/// Reduce per-word solve reports to aggregate statistics
#[must_use]
pub fn summarize(reports: &[SolveReport], total_time: Duration) -> BenchReport {
    let solved: Vec<&SolveReport> = reports.iter().filter(|r| r.solved).collect();
    let total_rounds: usize = solved.iter().map(|r| r.rounds()).sum();
    let average_rounds = if solved.is_empty() {
        0.0
    } else {
        total_rounds as f64 / solved.len() as f64
    };

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for report in &solved {
        *distribution.entry(report.rounds()).or_insert(0) += 1;
    }

    let mut hardest: Vec<(Word, usize)> = solved
        .iter()
        .filter(|r| r.rounds() >= HARD_ROUNDS)
        .map(|r| (r.secret.clone(), r.rounds()))
        .collect();
    hardest.sort_by_key(|&(_, rounds)| std::cmp::Reverse(rounds));
    hardest.truncate(10);

    BenchReport {
        total_words: reports.len(),
        solved: solved.len(),
        failed: reports.len() - solved.len(),
        distribution,
        average_rounds,
        min_rounds: solved.iter().map(|r| r.rounds()).min().unwrap_or(0),
        max_rounds: solved.iter().map(|r| r.rounds()).max().unwrap_or(0),
        hardest,
        total_time,
    }
}
