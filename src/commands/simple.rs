//! Simple line-oriented mode
//!
//! Reads one guess per line and prints coloured feedback below it, without
//! taking over the terminal.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::core::{GameSession, GameState, LetterFeedback, RenderingIntent};
use crate::output::{feedback_to_emoji, paint_alphabet, paint_guess, paint_letter, plain_alphabet};

/// Presentation settings for [`run_simple`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleConfig {
    /// Pause between revealing consecutive letters of a guess
    pub reveal_delay: Duration,
    /// ANSI colours, or a plain emoji rendering when off
    pub color: bool,
}

impl Default for SimpleConfig {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(250),
            color: true,
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Won { guesses: usize },
    Lost { solution: String },
    /// Input ran out mid-game
    Abandoned,
}

/// Play `session` to the end, reading guesses from `input`
///
/// Rejected lines print their reason and cost nothing. End of input stops
/// the game without revealing the solution; a loss prints it.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run_simple<R: BufRead, W: Write>(
    session: &mut GameSession<'_>,
    mut input: R,
    mut output: W,
    config: &SimpleConfig,
) -> io::Result<GameOutcome> {
    let intent = RenderingIntent::initial(session);
    print_alphabet(&mut output, &intent, config)?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("end of input, abandoning game");
            return Ok(GameOutcome::Abandoned);
        }

        let result = session.submit(&line);
        let intent = RenderingIntent::after(session, &result);

        if let Some(message) = &intent.message {
            writeln!(output, "{message}")?;
        }

        let Some(guess) = &intent.guess else {
            continue;
        };
        print_guess(&mut output, guess, config)?;

        match intent.state {
            GameState::Playing { .. } => print_alphabet(&mut output, &intent, config)?,
            GameState::Won { guesses } => return Ok(GameOutcome::Won { guesses }),
            GameState::Lost => {
                let solution = intent.reveal.unwrap_or_default();
                writeln!(output, "The word was: {solution}")?;
                return Ok(GameOutcome::Lost { solution });
            }
        }
    }
}

fn print_guess<W: Write>(
    output: &mut W,
    guess: &[LetterFeedback],
    config: &SimpleConfig,
) -> io::Result<()> {
    if config.color && config.reveal_delay.is_zero() {
        writeln!(output, "{}", paint_guess(guess))
    } else if config.color {
        for letter in guess {
            write!(output, "{}", paint_letter(letter.letter_char(), letter.quality))?;
            output.flush()?;
            thread::sleep(config.reveal_delay);
        }
        writeln!(output)
    } else {
        let word: String = guess.iter().map(|letter| letter.letter_char()).collect();
        writeln!(output, "{word} {}", feedback_to_emoji(guess))
    }
}

fn print_alphabet<W: Write>(
    output: &mut W,
    intent: &RenderingIntent,
    config: &SimpleConfig,
) -> io::Result<()> {
    if config.color {
        writeln!(output, "{}", paint_alphabet(&intent.alphabet))?;
    } else {
        writeln!(output, "{}", plain_alphabet(&intent.alphabet))?;
    }
    output.flush()
}
