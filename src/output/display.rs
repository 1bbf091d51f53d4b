//! Display functions for command results

use super::formatters::colored_guess;
use crate::commands::BenchReport;
use crate::core::{Verdict, Word};
use crate::solver::SolveReport;
use colored::Colorize;

/// Print the record of a simulated solve
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!();
    println!(
        "Solving: {}",
        report.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "{:>3}. {} {}",
            i + 1,
            colored_guess(&step.guess, &step.verdict),
            step.verdict.to_emoji()
        );
        if verbose {
            println!(
                "     candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if report.solved {
        println!(
            "{}",
            format!("Solved in {} guesses", report.rounds())
                .green()
                .bold()
        );
    } else {
        println!("{}", "No dictionary word matches".red().bold());
    }
}

/// Print the celebration banner with the emoji guess history
pub fn print_win_banner(history: &[(Word, Verdict)]) {
    let rounds = history.len();
    println!();
    println!(
        "{}",
        format!(
            "🎉 Solved in {rounds} {}!",
            if rounds == 1 { "guess" } else { "guesses" }
        )
        .bright_green()
        .bold()
    );
    for (i, (word, verdict)) in history.iter().enumerate() {
        println!(
            "  {}. {} {}",
            i + 1,
            word.text().to_uppercase().bright_white().bold(),
            verdict.to_emoji()
        );
    }
    println!();
}

/// Print benchmark statistics with the guess distribution histogram
pub fn print_bench_report(report: &BenchReport) {
    println!();
    println!("{}", "═".repeat(50));
    println!(" Benchmark Results ");
    println!("{}", "═".repeat(50));

    println!("\n{}", "Overall".bright_cyan().bold());
    println!("  Words tested:    {}", report.total_words);
    if report.failed > 0 {
        println!("  Failed to solve: {}", report.failed.to_string().red());
    }
    println!(
        "  Average guesses: {}",
        format!("{:.3}", report.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!("  Best case:       {}", report.min_rounds.to_string().green());
    println!("  Worst case:      {}", report.max_rounds.to_string().yellow());
    println!("  Time taken:      {:.2}s", report.total_time.as_secs_f64());

    if report.solved > 0 {
        println!("\n{}", "Distribution".bright_cyan().bold());
        let max_count = report.distribution.values().copied().max().unwrap_or(1);
        for rounds in report.min_rounds..=report.max_rounds {
            let count = report.distribution.get(&rounds).copied().unwrap_or(0);
            let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            let percentage = count as f64 / report.solved as f64 * 100.0;
            println!("  {rounds:>3}: {bar} {count:5} ({percentage:5.1}%)");
        }
    }

    if !report.hardest.is_empty() {
        println!("\n{}", "Hardest words".yellow().bold());
        for (word, rounds) in &report.hardest {
            println!(
                "  {} ({rounds} guesses)",
                word.text().to_uppercase().yellow()
            );
        }
    }
}
