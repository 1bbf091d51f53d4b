//! Language presets and their alphabets

use crate::core::Word;
use rustc_hash::FxHashSet;

/// A dictionary language: the identifier naming its system word list file
/// and the alphabet its words are drawn from
///
/// The alphabet filter is what keeps possessives (`don't`) and foreign
/// loanwords (`naïve`) out of an English pool even though their letters are
/// alphabetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    id: String,
    alphabet: FxHashSet<char>,
}

impl Language {
    const AMERICAN_ENGLISH: &'static str = "abcdefghijklmnopqrstuvwxyz";
    const POLISH: &'static str = "aąbcćdeęfghijklłmnńoópqrsśtuvwxyzżź";

    /// Identifiers with a built-in alphabet
    pub const KNOWN_IDS: [&'static str; 2] = ["american-english", "polish"];

    /// Create a language from an identifier and the string of letters its
    /// words may use
    #[must_use]
    pub fn new(id: impl Into<String>, alphabet: &str) -> Self {
        Self {
            id: id.into(),
            alphabet: alphabet.chars().collect(),
        }
    }

    /// The `american-english` preset
    #[must_use]
    pub fn american_english() -> Self {
        Self::new("american-english", Self::AMERICAN_ENGLISH)
    }

    /// The `polish` preset, including every Polish diacritic
    #[must_use]
    pub fn polish() -> Self {
        Self::new("polish", Self::POLISH)
    }

    /// Look up a preset by identifier
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "american-english" => Some(Self::american_english()),
            "polish" => Some(Self::polish()),
            _ => None,
        }
    }

    /// The identifier, which doubles as the dictionary file name
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Check whether `c` belongs to this language's alphabet
    #[inline]
    #[must_use]
    pub fn allows(&self, c: char) -> bool {
        self.alphabet.contains(&c)
    }

    /// Check whether every letter of `word` belongs to the alphabet
    #[must_use]
    pub fn allows_word(&self, word: &Word) -> bool {
        word.chars().iter().all(|&c| self.allows(c))
    }
}
