//! Dictionary loading and word pools
//!
//! Word lists come from the system dictionary directory (`/usr/share/dict`
//! by default), one file per language, one word per line. A [`Wordset`] is
//! the filtered fixed-length pool the game and solver draw from.

mod language;
mod loader;
mod set;

pub use language::Language;
pub use loader::{load_dictionary, parse_words, words_from_slice};
pub use set::Wordset;
