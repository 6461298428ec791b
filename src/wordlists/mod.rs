//! Word lists
//!
//! Two newline-delimited lists drive a game: every word accepted as a guess,
//! and the narrower set a solution is drawn from. Both ship embedded in the
//! binary and can be replaced by files at runtime.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::WordCorpus;
pub use embedded::{SOLUTIONS, SOLUTIONS_COUNT, WORDS, WORDS_COUNT};
pub use loader::{LoadError, WordSource};

/// The embedded list of valid guesses
#[must_use]
pub fn default_words() -> WordSource {
    WordSource::embedded("embedded words", WORDS)
}

/// The embedded list of solution candidates
#[must_use]
pub fn default_solutions() -> WordSource {
    WordSource::embedded("embedded solutions", SOLUTIONS)
}
