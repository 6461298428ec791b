//! Best-known quality of every letter
//!
//! Knowledge only ever grows: a letter seen in the right place stays green,
//! and a yellow letter only turns green.

use super::{ALPHABET_SIZE, CharQuality};

/// Should `proposed` replace `current` in the alphabet?
///
/// | current              | proposed                  | result |
/// |----------------------|---------------------------|--------|
/// | `RightPlace`         | anything                  | false  |
/// | `Unknown` or `Wrong` | anything but `Unknown`    | true   |
/// | `WrongPlace`         | `RightPlace`              | true   |
/// | `WrongPlace`         | `WrongPlace` or `Wrong`   | false  |
///
/// `Unknown` is never a proposal; it is rejected against every state.
///
/// # Examples
/// ```
/// use clidle::core::{CharQuality, overrides};
///
/// assert!(overrides(CharQuality::WrongPlace, CharQuality::RightPlace));
/// assert!(!overrides(CharQuality::RightPlace, CharQuality::WrongPlace));
/// ```
#[must_use]
pub const fn overrides(current: CharQuality, proposed: CharQuality) -> bool {
    match (current, proposed) {
        (_, CharQuality::Unknown) | (CharQuality::RightPlace, _) => false,
        (CharQuality::Unknown | CharQuality::Wrong, _) => true,
        (CharQuality::WrongPlace, proposed) => matches!(proposed, CharQuality::RightPlace),
    }
}

/// Quality per letter `a` to `z`, all [`Unknown`](CharQuality::Unknown) at first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    qualities: [CharQuality; ALPHABET_SIZE],
}

impl Alphabet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            qualities: [CharQuality::Unknown; ALPHABET_SIZE],
        }
    }

    /// Best-known quality of `letter`, or `None` if it is not `a`..=`z`
    #[must_use]
    pub fn quality(&self, letter: u8) -> Option<CharQuality> {
        slot(letter).map(|i| self.qualities[i])
    }

    /// Record `proposed` for `letter` if it [`overrides`] what is known
    ///
    /// Returns whether the alphabet changed. Letters outside `a`..=`z` are
    /// not tracked and never change anything.
    pub fn update(&mut self, letter: u8, proposed: CharQuality) -> bool {
        let Some(i) = slot(letter) else {
            tracing::debug!(letter, "ignoring untracked letter");
            return false;
        };

        let current = self.qualities[i];
        if !overrides(current, proposed) || current == proposed {
            return false;
        }

        self.qualities[i] = proposed;
        true
    }

    /// Every letter with its quality, alphabetically
    pub fn letters(&self) -> impl Iterator<Item = (char, CharQuality)> + '_ {
        (b'a'..=b'z').zip(self.qualities).map(|(letter, quality)| (char::from(letter), quality))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}

fn slot(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}
