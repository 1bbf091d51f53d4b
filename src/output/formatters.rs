//! Formatting utilities for terminal output

use crate::core::{Mark, Verdict, Word};
use colored::Colorize;

/// Format a guess as colored tiles, one letter per tile
///
/// EXACT letters sit on green, PRESENT on yellow, ABSENT on gray.
#[must_use]
pub fn colored_guess(guess: &Word, verdict: &Verdict) -> String {
    guess
        .chars()
        .iter()
        .zip(verdict.marks())
        .map(|(&letter, &mark)| {
            let tile = format!(" {} ", letter.to_uppercase());
            match mark {
                Mark::Exact => tile.bold().white().on_green(),
                Mark::Present => tile.bold().white().on_yellow(),
                Mark::Absent => tile.bold().white().on_bright_black(),
            }
            .to_string()
        })
        .collect()
}

/// Format a candidate list as one hint line, truncated at `limit`
#[must_use]
pub fn format_hints(words: &[&Word], limit: usize) -> String {
    let shown: Vec<&str> = words.iter().take(limit).map(|w| w.text()).collect();
    let line = shown.join(", ");
    if words.len() > limit {
        format!("{line} ({} more)", words.len() - limit)
    } else {
        line
    }
}
