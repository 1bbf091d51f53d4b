//! Game sessions: a secret word and the guesses scored against it

use crate::core::{Verdict, Word};
use crate::wordlist::Wordset;
use std::fmt;

/// Error type for starting a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The wordset holds no words to pick a secret from
    EmptyWordset,
    /// The requested secret is not a dictionary word
    UnknownSecret(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordset => write!(f, "Cannot start a game: the wordset is empty"),
            Self::UnknownSecret(word) => {
                write!(f, "Secret word '{word}' is not in the dictionary")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Outcome of submitting one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess was scored against the secret
    Scored { verdict: Verdict, won: bool },
    /// The guess is not a dictionary word; nothing was recorded
    UnknownWord,
    /// The secret was already found; nothing was recorded
    AlreadyWon,
}

/// One game against a secret drawn from a borrowed dictionary
#[derive(Debug, Clone)]
pub struct Game<'a> {
    wordset: &'a Wordset,
    secret: &'a Word,
    history: Vec<(Word, Verdict)>,
    won: bool,
}

impl<'a> Game<'a> {
    /// Start a game with a uniformly random secret
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordset` if there is no word to pick.
    pub fn new(wordset: &'a Wordset) -> Result<Self, GameError> {
        let secret = wordset.random_word().ok_or(GameError::EmptyWordset)?;
        Ok(Self {
            wordset,
            secret,
            history: Vec::new(),
            won: false,
        })
    }

    /// Start a game with a chosen secret, which must be a dictionary word
    ///
    /// # Errors
    /// Returns `GameError::UnknownSecret` if the word is not in the
    /// dictionary.
    pub fn with_secret(wordset: &'a Wordset, secret: &str) -> Result<Self, GameError> {
        let secret = wordset
            .get(secret)
            .ok_or_else(|| GameError::UnknownSecret(secret.to_string()))?;
        Ok(Self {
            wordset,
            secret,
            history: Vec::new(),
            won: false,
        })
    }

    /// Score one guess against the secret
    ///
    /// Guesses outside the dictionary, including wrong-length guesses, are
    /// reported as [`GuessOutcome::UnknownWord`] without touching the
    /// history. Guesses after a win are reported as
    /// [`GuessOutcome::AlreadyWon`].
    ///
    /// # Panics
    /// Never panics for dictionary guesses: the wordset holds words of a
    /// single length, so scoring cannot hit a length mismatch.
    pub fn submit_guess(&mut self, guess: &Word) -> GuessOutcome {
        if self.won {
            return GuessOutcome::AlreadyWon;
        }
        if !self.wordset.contains(guess) {
            return GuessOutcome::UnknownWord;
        }

        let verdict =
            Verdict::compute(guess, self.secret).expect("dictionary words share one length");
        let won = verdict.is_win();
        self.history.push((guess.clone(), verdict.clone()));
        self.won = won;
        GuessOutcome::Scored { verdict, won }
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &'a Word {
        self.secret
    }

    /// Whether the secret has been guessed
    #[inline]
    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    /// Every scored (guess, verdict) pair, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Word, Verdict)] {
        &self.history
    }

    /// Number of scored guesses
    #[inline]
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Solver;
    use crate::wordlist::words_from_slice;

    fn english_pool() -> Wordset {
        Wordset::new(
            5,
            words_from_slice(&[
                "agent", "badge", "basic", "chain", "facts", "jokes", "knife", "knoll", "lemon",
                "linux", "nudes", "opera", "picks", "shops", "sugar", "track", "whack", "wince",
            ]),
        )
    }

    fn polish_pool() -> Wordset {
        Wordset::new(
            5,
            words_from_slice(&[
                "banda", "basta", "bitwa", "krowa", "minus", "narty", "nisko", "opera", "stary",
                "zegar", "żabka",
            ]),
        )
    }

    fn play(game: &mut Game<'_>, guess: &str) -> GuessOutcome {
        game.submit_guess(&Word::new(guess).unwrap())
    }

    fn scored(outcome: GuessOutcome) -> Verdict {
        match outcome {
            GuessOutcome::Scored { verdict, .. } => verdict,
            other => panic!("expected a scored guess, got {other:?}"),
        }
    }

    // Feed the game's own verdicts back into a solver until it wins
    fn solver_plays(set: &Wordset, game: &mut Game<'_>) -> usize {
        let mut solver = Solver::new(set);
        let mut rounds = 0;
        loop {
            rounds += 1;
            assert!(rounds <= set.len(), "no convergence for {}", game.secret());
            assert!(solver.count() > 0);

            let guess = solver.propose_guess().unwrap().clone();
            let GuessOutcome::Scored { verdict, won } = game.submit_guess(&guess) else {
                panic!("'{guess}' was not scored");
            };
            if won {
                return rounds;
            }
            solver.record(&guess, &verdict).unwrap();
        }
    }

    #[test]
    fn full_game_transcript() {
        let set = english_pool();
        let mut game = Game::with_secret(&set, "wince").unwrap();

        for (guess, expected) in [
            ("nudes", "?__?_"),
            ("lemon", "_?__?"),
            ("agent", "__??_"),
            ("knife", "_??_+"),
        ] {
            let verdict = scored(play(&mut game, guess));
            assert_eq!(verdict.to_string(), expected, "guess {guess}");
            assert!(!game.won());
        }

        let outcome = play(&mut game, "wince");
        assert_eq!(
            outcome,
            GuessOutcome::Scored {
                verdict: Verdict::all_exact(5),
                won: true
            }
        );
        assert!(game.won());
        assert_eq!(game.rounds(), 5);
    }

    #[test]
    fn another_transcript() {
        let set = english_pool();
        let mut game = Game::with_secret(&set, "whack").unwrap();

        assert_eq!(scored(play(&mut game, "opera")).to_string(), "____?");
        assert_eq!(scored(play(&mut game, "facts")).to_string(), "_??__");
        assert_eq!(scored(play(&mut game, "chain")).to_string(), "?++__");
        assert!(scored(play(&mut game, "whack")).is_win());
        assert_eq!(game.rounds(), 4);
    }

    #[test]
    fn more_game_transcripts() {
        let set = english_pool();

        // knoll holds two l's; lemon's single l earns one PRESENT
        let mut game = Game::with_secret(&set, "knoll").unwrap();
        assert_eq!(scored(play(&mut game, "basic")).to_string(), "_____");
        assert_eq!(scored(play(&mut game, "lemon")).to_string(), "?__??");
        assert!(scored(play(&mut game, "knoll")).is_win());
        assert_eq!(game.rounds(), 3);

        let mut game = Game::with_secret(&set, "sugar").unwrap();
        assert_eq!(scored(play(&mut game, "opera")).to_string(), "___??");
        assert!(scored(play(&mut game, "sugar")).is_win());
        assert_eq!(game.rounds(), 2);
    }

    #[test]
    fn polish_game_transcript() {
        let set = polish_pool();
        let mut game = Game::with_secret(&set, "basta").unwrap();

        assert_eq!(scored(play(&mut game, "opera")).to_string(), "____+");
        assert_eq!(scored(play(&mut game, "żabka")).to_string(), "_+?_+");
        assert_eq!(scored(play(&mut game, "banda")).to_string(), "++__+");
        assert!(scored(play(&mut game, "basta")).is_win());

        let mut game = Game::with_secret(&set, "stary").unwrap();
        assert_eq!(scored(play(&mut game, "krowa")).to_string(), "_?__?");
        assert_eq!(scored(play(&mut game, "zegar")).to_string(), "___??");
        assert_eq!(scored(play(&mut game, "narty")).to_string(), "_???+");
        assert!(scored(play(&mut game, "stary")).is_win());

        let mut game = Game::with_secret(&set, "minus").unwrap();
        assert_eq!(scored(play(&mut game, "bitwa")).to_string(), "_+___");
        assert_eq!(scored(play(&mut game, "nisko")).to_string(), "?+?__");
        assert!(scored(play(&mut game, "minus")).is_win());
    }

    #[test]
    fn solver_wins_every_game_on_verdict_feedback_alone() {
        let set = english_pool();
        for secret in set.words() {
            let mut game = Game::with_secret(&set, secret.text()).unwrap();
            let rounds = solver_plays(&set, &mut game);

            assert!(game.won(), "failed on {secret}");
            assert_eq!(rounds, game.rounds());
            let (last_guess, last_verdict) = game.history().last().unwrap();
            assert_eq!(last_guess, secret);
            assert!(last_verdict.is_win());
        }
    }

    #[test]
    fn solver_wins_random_games_whatever_the_pool() {
        let short = Wordset::new(3, words_from_slice(&["cat", "cot", "dog", "fig", "sun", "van"]));
        let long = Wordset::new(
            7,
            words_from_slice(&["almonds", "cabbage", "halibut", "lattice", "oatcake"]),
        );

        for set in [english_pool(), polish_pool(), short, long] {
            let mut game = Game::new(&set).unwrap();
            solver_plays(&set, &mut game);

            assert!(game.won());
            assert_eq!(&game.history().last().unwrap().0, game.secret());
        }
    }

    #[test]
    fn unknown_words_are_not_scored() {
        let set = english_pool();
        let mut game = Game::with_secret(&set, "wince").unwrap();

        assert_eq!(play(&mut game, "zzzzz"), GuessOutcome::UnknownWord);
        assert_eq!(play(&mut game, "ox"), GuessOutcome::UnknownWord);
        assert_eq!(game.rounds(), 0);
        assert!(!game.won());
    }

    #[test]
    fn guesses_after_winning_are_ignored() {
        let set = english_pool();
        let mut game = Game::with_secret(&set, "wince").unwrap();
        assert!(scored(play(&mut game, "wince")).is_win());

        assert_eq!(play(&mut game, "agent"), GuessOutcome::AlreadyWon);
        assert_eq!(game.rounds(), 1);
        assert!(game.won());
    }

    #[test]
    fn random_secret_comes_from_the_pool() {
        let set = english_pool();
        for _ in 0..20 {
            let game = Game::new(&set).unwrap();
            assert!(set.contains(game.secret()));
            assert!(!game.won());
        }
    }

    #[test]
    fn empty_pool_cannot_start_a_game() {
        let set = Wordset::new(5, Vec::new());
        assert_eq!(Game::new(&set).unwrap_err(), GameError::EmptyWordset);
    }

    #[test]
    fn chosen_secret_must_be_a_dictionary_word() {
        let set = english_pool();
        assert_eq!(
            Game::with_secret(&set, "crane").unwrap_err(),
            GameError::UnknownSecret("crane".to_string())
        );

        // Case is normalized the same way guesses are
        let game = Game::with_secret(&set, "WINCE").unwrap();
        assert_eq!(game.secret().text(), "wince");
    }
}
