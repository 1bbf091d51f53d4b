//! Core domain types: words and the verdicts that score them

mod verdict;
mod word;

pub use verdict::{Mark, Verdict, VerdictError};
pub use word::{Word, WordError};
