//! Verdict computation and representation
//!
//! A verdict is the per-letter feedback for a guess scored against a secret
//! word, one mark per position:
//! - `_` ABSENT  (letter not among the secret's unmatched letters)
//! - `?` PRESENT (letter in the secret, wrong position)
//! - `+` EXACT   (letter in the correct position)
//!
//! Duplicate letters follow Wordle's rules: exact matches claim their letter
//! first, then each misplaced letter consumes one occurrence from the pool of
//! unmatched secret letters. A letter guessed more often than the secret
//! holds it is marked PRESENT once per remaining occurrence and ABSENT after
//! the pool runs dry.

use super::Word;
use std::fmt;

/// Per-letter outcome of scoring a guess against a secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter does not appear among the secret's unmatched letters
    Absent,
    /// Letter appears in the secret but at a different position
    Present,
    /// Letter matches the secret at this position
    Exact,
}

impl Mark {
    /// The single-character display form: `_`, `?` or `+`
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => '_',
            Self::Present => '?',
            Self::Exact => '+',
        }
    }

    /// The emoji display form: `⬛`, `🟨` or `🟩`
    #[inline]
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬛',
            Self::Present => '🟨',
            Self::Exact => '🟩',
        }
    }

    /// Parse a mark from either display form
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '_' | '⬛' => Some(Self::Absent),
            '?' | '🟨' => Some(Self::Present),
            '+' | '🟩' => Some(Self::Exact),
            _ => None,
        }
    }
}

/// Error type for verdict computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictError {
    /// Guess and secret word differ in letter count
    LengthMismatch { guess: usize, secret: usize },
}

impl fmt::Display for VerdictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, secret } => write!(
                f,
                "Length mismatch: guess has {guess} letters, secret has {secret}"
            ),
        }
    }
}

impl std::error::Error for VerdictError {}

/// Feedback for one guess, one mark per letter position
///
/// Always the same length as the guess/secret pair it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Verdict(Vec<Mark>);

impl Verdict {
    /// Create a verdict from a mark sequence
    #[inline]
    #[must_use]
    pub fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// The winning verdict for a word of `len` letters (all EXACT)
    #[must_use]
    pub fn all_exact(len: usize) -> Self {
        Self(vec![Mark::Exact; len])
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact positions and remove those letters from the
    ///    pool of unmatched secret letters.
    /// 2. Second pass, left to right: mark a position PRESENT if its letter
    ///    still has an occurrence in the pool, consuming one per mark.
    ///
    /// # Errors
    /// Returns `VerdictError::LengthMismatch` if guess and secret differ in
    /// letter count. A verdict is only defined for equal-length pairs.
    ///
    /// # Examples
    /// ```
    /// use wordlet::core::{Verdict, Word};
    ///
    /// let guess = Word::new("eager").unwrap();
    /// let secret = Word::new("dance").unwrap();
    /// let verdict = Verdict::compute(&guess, &secret).unwrap();
    ///
    /// // Only one E in DANCE, so the guess's first E is PRESENT
    /// // and its second E is ABSENT
    /// assert_eq!(verdict.to_string(), "?+___");
    /// ```
    pub fn compute(guess: &Word, secret: &Word) -> Result<Self, VerdictError> {
        if guess.len() != secret.len() {
            return Err(VerdictError::LengthMismatch {
                guess: guess.len(),
                secret: secret.len(),
            });
        }

        let mut marks = vec![Mark::Absent; guess.len()];
        let mut unmatched = secret.char_counts();

        // First pass: exact matches, removed from the unmatched pool
        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                marks[i] = Mark::Exact;

                if let Some(count) = unmatched.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, consuming one pooled occurrence each
        for (i, &g) in guess.chars().iter().enumerate() {
            if marks[i] == Mark::Exact {
                continue;
            }
            if let Some(count) = unmatched.get_mut(&g)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Ok(Self(marks))
    }

    /// Check whether `candidate` is consistent with this verdict for `guess`
    ///
    /// A candidate stays viable iff it would have produced this exact verdict
    /// had it been the secret. A candidate of the wrong length never matches.
    #[must_use]
    pub fn matches(&self, guess: &Word, candidate: &Word) -> bool {
        Self::compute(guess, candidate).is_ok_and(|v| v == *self)
    }

    /// Check if this is a winning verdict (all EXACT)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Exact)
    }

    /// Get the marks, one per letter position
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of letter positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the verdict covers no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a verdict from a string like `"+??__"` or `"🟩🟨🟨⬛⬛"`
    ///
    /// Accepts `_`/`⬛` for ABSENT, `?`/`🟨` for PRESENT and `+`/`🟩` for
    /// EXACT. Returns `None` for an empty string or any other character.
    ///
    /// # Examples
    /// ```
    /// use wordlet::core::Verdict;
    ///
    /// let v1 = Verdict::from_symbols("+?_??").unwrap();
    /// let v2 = Verdict::from_symbols("🟩🟨⬛🟨🟨").unwrap();
    /// assert_eq!(v1, v2);
    /// ```
    #[must_use]
    pub fn from_symbols(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }

        s.chars()
            .map(Mark::from_symbol)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Render the verdict as emoji squares
    ///
    /// # Examples
    /// ```
    /// use wordlet::core::Verdict;
    ///
    /// let v = Verdict::from_symbols("+__+_").unwrap();
    /// assert_eq!(v.to_emoji(), "🟩⬛⬛🟩⬛");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|&m| m.emoji()).collect()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbols(s).ok_or_else(|| format!("Invalid verdict string: {s}"))
    }
}
