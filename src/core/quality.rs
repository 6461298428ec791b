//! Per-letter guess feedback
//!
//! Scoring is a pure function of the guess, the solution and a position.

use std::fmt;

use super::WORD_LENGTH;

/// What is known about a letter
///
/// Variants are declared from least to most informative, so the derived
/// ordering is `Unknown < Wrong < WrongPlace < RightPlace`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharQuality {
    /// Not guessed yet
    #[default]
    Unknown,
    /// Not in the solution (gray)
    Wrong,
    /// In the solution at another position (yellow)
    WrongPlace,
    /// In the solution at this position (green)
    RightPlace,
}

impl CharQuality {
    /// Anything but [`Unknown`](Self::Unknown)
    #[inline]
    #[must_use]
    pub const fn is_determined(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// One scored letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterFeedback {
    pub letter: u8,
    pub quality: CharQuality,
}

impl LetterFeedback {
    #[inline]
    #[must_use]
    pub const fn new(letter: u8, quality: CharQuality) -> Self {
        Self { letter, quality }
    }

    #[inline]
    #[must_use]
    pub fn letter_char(self) -> char {
        char::from(self.letter)
    }
}

impl fmt::Display for LetterFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter_char())
    }
}

/// Score the letter at `position` of `guess` against `solution`
///
/// 1. Same letter at the same position: [`RightPlace`](CharQuality::RightPlace).
/// 2. The letter sits at some other solution position that the guess does
///    not already match exactly: [`WrongPlace`](CharQuality::WrongPlace).
/// 3. Otherwise: [`Wrong`](CharQuality::Wrong).
///
/// Each position is scored on its own; there is no shared budget of
/// solution occurrences. A letter that appears once in the solution can
/// therefore come back `WrongPlace` at several guess positions.
///
/// # Panics
///
/// Panics if `position` is out of bounds for either word.
///
/// # Examples
/// ```
/// use clidle::core::{CharQuality, qualify};
///
/// assert_eq!(qualify(b"trace", b"crane", 1), CharQuality::RightPlace);
/// assert_eq!(qualify(b"trace", b"crane", 3), CharQuality::WrongPlace);
/// assert_eq!(qualify(b"trace", b"crane", 0), CharQuality::Wrong);
/// ```
#[must_use]
pub fn qualify(guess: &[u8], solution: &[u8], position: usize) -> CharQuality {
    debug_assert_eq!(guess.len(), solution.len());

    let letter = guess[position];
    if solution[position] == letter {
        return CharQuality::RightPlace;
    }

    let elsewhere = solution
        .iter()
        .zip(guess)
        .any(|(&wanted, &guessed)| wanted == letter && guessed != wanted);

    if elsewhere {
        CharQuality::WrongPlace
    } else {
        CharQuality::Wrong
    }
}

/// Score every letter of `guess`, in position order
#[must_use]
pub fn evaluate(
    guess: &[u8; WORD_LENGTH],
    solution: &[u8; WORD_LENGTH],
) -> [LetterFeedback; WORD_LENGTH] {
    std::array::from_fn(|i| LetterFeedback::new(guess[i], qualify(guess, solution, i)))
}
