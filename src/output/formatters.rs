//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{Alphabet, CharQuality, LetterFeedback};

/// Colour one letter by what is known about it
///
/// Green for the right place, yellow for the wrong place, gray on white for
/// absent letters, untouched when unknown.
#[must_use]
pub fn paint_letter(letter: char, quality: CharQuality) -> ColoredString {
    let text = letter.to_string();
    match quality {
        CharQuality::RightPlace => text.black().on_green(),
        CharQuality::WrongPlace => text.black().on_yellow(),
        CharQuality::Wrong => text.bright_black().on_white(),
        CharQuality::Unknown => text.normal(),
    }
}

/// A scored guess as coloured letters
#[must_use]
pub fn paint_guess(feedback: &[LetterFeedback]) -> String {
    feedback
        .iter()
        .map(|letter| paint_letter(letter.letter_char(), letter.quality).to_string())
        .collect()
}

/// The whole alphabet as coloured letters
#[must_use]
pub fn paint_alphabet(alphabet: &Alphabet) -> String {
    alphabet
        .letters()
        .map(|(letter, quality)| paint_letter(letter, quality).to_string())
        .collect()
}

#[must_use]
pub const fn quality_to_emoji(quality: CharQuality) -> char {
    match quality {
        CharQuality::RightPlace => '🟩',
        CharQuality::WrongPlace => '🟨',
        CharQuality::Wrong => '⬜',
        CharQuality::Unknown => '⬛',
    }
}

/// Format a scored guess as an emoji row
#[must_use]
pub fn feedback_to_emoji(feedback: &[LetterFeedback]) -> String {
    feedback
        .iter()
        .map(|letter| quality_to_emoji(letter.quality))
        .collect()
}

/// The alphabet without colour
///
/// Letters known to be in the solution are uppercased and absent ones are
/// dotted out.
#[must_use]
pub fn plain_alphabet(alphabet: &Alphabet) -> String {
    alphabet
        .letters()
        .map(|(letter, quality)| match quality {
            CharQuality::Unknown => letter,
            CharQuality::Wrong => '.',
            CharQuality::WrongPlace | CharQuality::RightPlace => letter.to_ascii_uppercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn feedback_to_emoji_trace_vs_crane() {
        let feedback = evaluate(b"trace", b"crane");
        assert_eq!(feedback_to_emoji(&feedback), "⬜🟩🟩🟨🟩");
    }

    #[test]
    fn feedback_to_emoji_all_green() {
        let feedback = evaluate(b"crane", b"crane");
        assert_eq!(feedback_to_emoji(&feedback), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn plain_alphabet_marks_knowledge() {
        let mut alphabet = Alphabet::new();
        for letter in evaluate(b"trace", b"crane") {
            alphabet.update(letter.letter, letter.quality);
        }
        assert_eq!(plain_alphabet(&alphabet), "AbCdEfghijklmnopqRs.uvwxyz");
    }

    /// Drop ANSI SGR sequences, whether or not colouring is enabled
    fn strip_ansi(text: &str) -> String {
        let mut plain = String::with_capacity(text.len());
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                chars.by_ref().find(|&c| c == 'm');
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn paint_letter_colours_by_quality() {
        assert_eq!(paint_letter('c', CharQuality::RightPlace), "c".black().on_green());
        assert_eq!(paint_letter('c', CharQuality::WrongPlace), "c".black().on_yellow());
        assert_eq!(paint_letter('c', CharQuality::Wrong), "c".bright_black().on_white());
        assert_eq!(paint_letter('c', CharQuality::Unknown), "c".normal());
        assert_eq!(&*paint_letter('c', CharQuality::Wrong), "c");
    }

    #[test]
    fn paint_keeps_letters() {
        let feedback = evaluate(b"trace", b"crane");
        assert_eq!(strip_ansi(&paint_guess(&feedback)), "trace");
        assert_eq!(
            strip_ansi(&paint_alphabet(&Alphabet::new())),
            "abcdefghijklmnopqrstuvwxyz"
        );
    }
}
