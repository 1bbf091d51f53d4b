//! Watch the solver work out a secret word

use crate::output::print_solve_report;
use crate::solver::simulate;
use crate::wordlist::Wordset;
use anyhow::{Context, Result};

/// Solve the given secret, or a random one, printing every round
///
/// # Errors
/// Returns an error if the named secret is not a dictionary word, or if the
/// dictionary is empty.
pub fn run_solve(wordset: &Wordset, secret: Option<&str>, verbose: bool) -> Result<()> {
    let secret = match secret {
        Some(text) => wordset
            .get(text)
            .with_context(|| format!("'{text}' is not in the dictionary"))?,
        None => wordset.random_word().context("the dictionary is empty")?,
    };

    let report = simulate(wordset, secret);
    print_solve_report(&report, verbose);
    Ok(())
}
