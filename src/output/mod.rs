//! Terminal output formatting
//!
//! Colouring and plain-text fallbacks for guesses and the alphabet.

pub mod formatters;

pub use formatters::{
    feedback_to_emoji, paint_alphabet, paint_guess, paint_letter, plain_alphabet,
    quality_to_emoji,
};
