//! Reading word lists from disk

use super::{Language, Wordset};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary file and keep the words of the requested length
///
/// The file is expected at `<dir>/<language id>`, one word per line, the way
/// word lists under `/usr/share/dict` are laid out. Lines with letters
/// outside the language's alphabet (possessives, foreign diacritics) are
/// skipped.
///
/// # Errors
/// Returns the underlying I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use wordlet::wordlist::{Language, load_dictionary};
///
/// let language = Language::american_english();
/// let words = load_dictionary(Path::new("/usr/share/dict"), &language, 5)?;
/// println!("{} five-letter words", words.len());
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn load_dictionary(dir: &Path, language: &Language, length: usize) -> io::Result<Wordset> {
    let content = fs::read_to_string(dir.join(language.id()))?;
    Ok(parse_words(&content, language, length))
}

/// Parse newline-separated words, keeping those of `length` letters drawn
/// entirely from the language's alphabet
#[must_use]
pub fn parse_words(content: &str, language: &Language, length: usize) -> Wordset {
    let words = content
        .lines()
        .filter_map(|line| Word::new(line.trim()).ok())
        .filter(|word| language.allows_word(word))
        .collect();
    Wordset::new(length, words)
}

/// Build words from string literals, skipping any that fail validation
#[must_use]
pub fn words_from_slice(words: &[&str]) -> Vec<Word> {
    words.iter().filter_map(|w| Word::new(*w).ok()).collect()
}
