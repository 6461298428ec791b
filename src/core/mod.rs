//! Core game logic
//!
//! Guess scoring, letter knowledge tracking and the session state machine.
//! Nothing here touches a terminal: every transition produces plain values
//! that a frontend renders however it likes.

mod alphabet;
mod intent;
mod quality;
mod session;

pub use alphabet::{Alphabet, overrides};
pub use intent::RenderingIntent;
pub use quality::{CharQuality, LetterFeedback, evaluate, qualify};
pub use session::{GameSession, GameState, GuessError, SessionError, Turn};

/// Letters in every word
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Letters tracked by the alphabet (`a` to `z`)
pub const ALPHABET_SIZE: usize = 26;
