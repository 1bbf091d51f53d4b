//! Fixed-length word pools

use crate::core::Word;
use rand::prelude::IndexedRandom;

/// An immutable pool of same-length words drawn from one dictionary
///
/// Words are held sorted and deduplicated, so membership checks are binary
/// searches and iteration order is alphabetical.
#[derive(Debug, Clone)]
pub struct Wordset {
    length: usize,
    words: Vec<Word>,
}

impl Wordset {
    /// Build a wordset from candidate words, keeping only those of `length`
    /// letters
    #[must_use]
    pub fn new(length: usize, words: Vec<Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().filter(|w| w.len() == length).collect();
        words.sort();
        words.dedup();
        Self { length, words }
    }

    /// Check whether `word` belongs to the pool
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// Look up a word by its text, normalizing case like [`Word::new`]
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.words.binary_search(&word).ok().map(|i| &self.words[i])
    }

    /// All words, alphabetically sorted
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The letter count shared by every word in the pool
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    /// Number of words in the pool
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the pool holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a uniformly random word, or `None` if the pool is empty
    #[must_use]
    pub fn random_word(&self) -> Option<&Word> {
        self.words.choose(&mut rand::rng())
    }

    /// Pick up to `n` distinct random words
    #[must_use]
    pub fn random_words(&self, n: usize) -> Vec<&Word> {
        self.words.choose_multiple(&mut rand::rng(), n).collect()
    }
}
