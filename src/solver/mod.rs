//! Candidate-filtering solver
//!
//! The solver narrows a dictionary to the words consistent with every
//! (guess, verdict) pair recorded so far. A candidate survives a round iff
//! it would have produced the observed verdict had it been the secret, so
//! the candidate list can only shrink and the true secret is never
//! eliminated by honest feedback.

mod simulate;

pub use simulate::{SolveReport, SolveStep, simulate};

use crate::core::{Verdict, Word};
use crate::wordlist::Wordset;
use std::fmt;

/// Error type for solver operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// Every candidate has been eliminated: the recorded feedback is
    /// contradictory, or the secret is not in the dictionary
    Exhausted,
    /// Guess and verdict differ in letter count
    LengthMismatch { guess: usize, verdict: usize },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => {
                write!(f, "No candidates remain; the feedback rules out every word")
            }
            Self::LengthMismatch { guess, verdict } => write!(
                f,
                "Length mismatch: guess has {guess} letters, verdict has {verdict}"
            ),
        }
    }
}

impl std::error::Error for SolverError {}

/// Stateful candidate filter over a borrowed dictionary
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    wordset: &'a Wordset,
    candidates: Vec<&'a Word>,
    history: Vec<(Word, Verdict)>,
}

impl<'a> Solver<'a> {
    /// Create a solver with every dictionary word still viable
    #[must_use]
    pub fn new(wordset: &'a Wordset) -> Self {
        Self {
            wordset,
            candidates: wordset.words().iter().collect(),
            history: Vec::new(),
        }
    }

    /// Propose the next guess: the first viable candidate in alphabetical
    /// order, so equal histories always yield equal proposals
    ///
    /// # Errors
    /// Returns `SolverError::Exhausted` when no candidates remain.
    pub fn propose_guess(&self) -> Result<&'a Word, SolverError> {
        self.candidates
            .first()
            .copied()
            .ok_or(SolverError::Exhausted)
    }

    /// Record feedback for a guess, eliminating every candidate that could
    /// not have produced it
    ///
    /// The guess does not have to come from the dictionary, or from
    /// [`propose_guess`](Self::propose_guess); any scored word narrows the
    /// field. Returns the number of candidates still viable.
    ///
    /// # Errors
    /// - `SolverError::LengthMismatch` if the verdict does not cover the
    ///   guess letter for letter. Nothing is recorded.
    /// - `SolverError::Exhausted` if the feedback eliminates every remaining
    ///   candidate. The pair stays in the history so the contradiction can
    ///   be reported.
    pub fn record(&mut self, guess: &Word, verdict: &Verdict) -> Result<usize, SolverError> {
        if guess.len() != verdict.len() {
            return Err(SolverError::LengthMismatch {
                guess: guess.len(),
                verdict: verdict.len(),
            });
        }

        self.history.push((guess.clone(), verdict.clone()));
        self.candidates
            .retain(|candidate| verdict.matches(guess, candidate));

        if self.candidates.is_empty() {
            return Err(SolverError::Exhausted);
        }
        Ok(self.candidates.len())
    }

    /// Forget all feedback and restore the full dictionary
    pub fn reset(&mut self) {
        self.candidates = self.wordset.words().iter().collect();
        self.history.clear();
    }

    /// Number of still-viable candidates
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.candidates.len()
    }

    /// The still-viable candidates, alphabetically sorted
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    /// Every (guess, verdict) pair recorded so far
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Word, Verdict)] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::words_from_slice;

    fn pool() -> Wordset {
        Wordset::new(
            5,
            words_from_slice(&[
                "agent", "alloy", "badge", "basic", "cache", "chain", "claws", "crimp", "crumb",
                "dance", "eager", "facts", "jokes", "knife", "knoll", "lemon", "linux", "motto",
                "nudes", "opera", "picks", "psalm", "shops", "sugar", "token", "track", "whack",
                "wince",
            ]),
        )
    }

    #[test]
    fn converges_on_every_secret() {
        let set = pool();
        for secret in set.words() {
            let mut solver = Solver::new(&set);
            let mut rounds = 0;
            loop {
                rounds += 1;
                assert!(rounds <= set.len(), "no convergence for {secret}");
                let guess = solver.propose_guess().unwrap().clone();
                let verdict = Verdict::compute(&guess, secret).unwrap();
                if verdict.is_win() {
                    break;
                }
                solver.record(&guess, &verdict).unwrap();
            }
        }
    }

    #[test]
    fn candidate_counts_never_grow() {
        let set = pool();
        let secret = set.get("wince").unwrap().clone();
        let mut solver = Solver::new(&set);
        let mut previous = solver.count();
        for guess_text in ["nudes", "lemon", "agent", "knife"] {
            let guess = Word::new(guess_text).unwrap();
            let verdict = Verdict::compute(&guess, &secret).unwrap();
            let remaining = solver.record(&guess, &verdict).unwrap();
            assert!(remaining <= previous, "grew after {guess_text}");
            previous = remaining;
        }
        assert!(solver.candidates().iter().any(|w| w.text() == "wince"));
        assert_eq!(solver.history().len(), 4);
    }

    #[test]
    fn proposals_are_deterministic_and_alphabetical() {
        let set = pool();
        assert_eq!(Solver::new(&set).propose_guess().unwrap().text(), "agent");
        assert_eq!(Solver::new(&set).propose_guess().unwrap().text(), "agent");
    }

    #[test]
    fn winning_feedback_narrows_to_the_secret() {
        let set = pool();
        let mut solver = Solver::new(&set);
        let guess = Word::new("crimp").unwrap();
        let remaining = solver.record(&guess, &Verdict::all_exact(5)).unwrap();
        assert_eq!(remaining, 1);
        assert_eq!(solver.propose_guess().unwrap().text(), "crimp");
    }

    #[test]
    fn accepts_guesses_outside_the_dictionary() {
        let set = pool();
        let mut solver = Solver::new(&set);
        let guess = Word::new("phone").unwrap();
        let secret = set.get("wince").unwrap().clone();
        let verdict = Verdict::compute(&guess, &secret).unwrap();
        solver.record(&guess, &verdict).unwrap();
        assert!(solver.candidates().iter().any(|w| w.text() == "wince"));
    }

    #[test]
    fn contradictory_feedback_reports_exhaustion() {
        let set = pool();
        let mut solver = Solver::new(&set);

        // All-exact feedback for a word outside the pool leaves nothing
        let guess = Word::new("zzzzz").unwrap();
        let result = solver.record(&guess, &Verdict::all_exact(5));
        assert_eq!(result, Err(SolverError::Exhausted));
        assert_eq!(solver.count(), 0);

        // The contradictory pair stays on record
        assert_eq!(solver.history().len(), 1);
        assert_eq!(solver.propose_guess(), Err(SolverError::Exhausted));
    }

    #[test]
    fn mismatched_feedback_is_rejected_without_recording() {
        let set = pool();
        let mut solver = Solver::new(&set);
        let before = solver.count();
        let guess = Word::new("crane").unwrap();
        let verdict = Verdict::from_symbols("+__").unwrap();

        assert_eq!(
            solver.record(&guess, &verdict),
            Err(SolverError::LengthMismatch {
                guess: 5,
                verdict: 3
            })
        );
        assert_eq!(solver.count(), before);
        assert!(solver.history().is_empty());
    }

    #[test]
    fn reset_restores_the_full_dictionary() {
        let set = pool();
        let mut solver = Solver::new(&set);
        let guess = Word::new("token").unwrap();
        let secret = set.get("wince").unwrap().clone();
        let verdict = Verdict::compute(&guess, &secret).unwrap();
        solver.record(&guess, &verdict).unwrap();
        assert!(solver.count() < set.len());

        solver.reset();
        assert_eq!(solver.count(), set.len());
        assert!(solver.history().is_empty());
        assert_eq!(solver.propose_guess().unwrap().text(), "agent");
    }

    #[test]
    fn error_messages_name_the_lengths() {
        let message = SolverError::LengthMismatch {
            guess: 5,
            verdict: 3,
        }
        .to_string();
        assert!(message.contains('5') && message.contains('3'));
        assert!(SolverError::Exhausted.to_string().contains("No candidates"));
    }
}
