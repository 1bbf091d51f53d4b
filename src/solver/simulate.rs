//! Self-play: running the solver against a known secret

use super::Solver;
use crate::core::{Verdict, Word};
use crate::wordlist::Wordset;

/// One round of a simulated solve
#[derive(Debug, Clone)]
pub struct SolveStep {
    pub guess: Word,
    pub verdict: Verdict,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Full record of a simulated solve
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub secret: Word,
    pub steps: Vec<SolveStep>,
    pub solved: bool,
}

impl SolveReport {
    /// Number of guesses taken
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.steps.len()
    }
}

/// Play the solver against a known secret, recording every round
///
/// Every proposed guess is scored and fed straight back, so each round
/// eliminates at least the guess itself and the loop always terminates. A
/// dictionary secret is always found; a secret outside the dictionary ends
/// unsolved once the candidates run out.
///
/// # Panics
/// Panics if `secret` is not of the wordset's length. Callers resolve the
/// secret through the wordset first.
#[must_use]
pub fn simulate(wordset: &Wordset, secret: &Word) -> SolveReport {
    let mut solver = Solver::new(wordset);
    let mut steps = Vec::new();
    let mut solved = false;

    while let Ok(guess) = solver.propose_guess() {
        let guess = guess.clone();
        let candidates_before = solver.count();
        let verdict =
            Verdict::compute(&guess, secret).expect("secret matches the wordset length");
        let won = verdict.is_win();
        let candidates_after = solver.record(&guess, &verdict).unwrap_or(0);
        steps.push(SolveStep {
            guess,
            verdict,
            candidates_before,
            candidates_after,
        });
        if won {
            solved = true;
            break;
        }
    }

    SolveReport {
        secret: secret.clone(),
        steps,
        solved,
    }
}
