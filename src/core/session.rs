//! Game session state machine
//!
//! A session starts in `Playing { attempt: 0 }`. Every valid guess is
//! scored, folded into the alphabet and then either wins the game, uses up
//! an attempt, or (on the last attempt) loses it. Rejected input never
//! touches the alphabet or the attempt counter.

use thiserror::Error;

use super::{Alphabet, LetterFeedback, MAX_ATTEMPTS, WORD_LENGTH, evaluate};
use crate::text::TextSlice;
use crate::wordlists::WordCorpus;

/// Where a session is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for a guess; `attempt` guesses have been used up so far
    Playing { attempt: usize },
    /// Solved with `guesses` scored guesses, the winning one included
    Won { guesses: usize },
    Lost,
}

impl GameState {
    /// `Won` or `Lost`
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing { .. })
    }
}

/// A submitted line was not accepted as a guess
///
/// Rejections cost nothing: the session is exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("Wrong length")]
    WrongLength { expected: usize, actual: usize },

    #[error("Not in word list")]
    NotInWordList,

    #[error("The game is over")]
    GameOver,
}

/// A session could not be started
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("there are no solution words to choose from")]
    NoSolutions,

    #[error("solution index {index} is out of range for {count} solution words")]
    SolutionOutOfRange { index: usize, count: usize },

    #[error("solution \"{solution}\" is not {expected} letters long")]
    SolutionLength { solution: String, expected: usize },
}

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Empty line; nothing happened
    Ignored,
    /// The guess was scored, letter by letter
    Scored([LetterFeedback; WORD_LENGTH]),
}

/// One game against a fixed solution
///
/// Borrows the valid-guess corpus and the solution from their word list
/// buffers; owns everything it mutates.
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    guesses: &'a WordCorpus<'a>,
    solution: TextSlice<'a>,
    solution_letters: [u8; WORD_LENGTH],
    state: GameState,
    alphabet: Alphabet,
    history: Vec<[LetterFeedback; WORD_LENGTH]>,
}

impl<'a> GameSession<'a> {
    /// Start a game whose solution is word `index` of `solutions`
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if `solutions` is empty, `index` is out of
    /// range, or the chosen word is not [`WORD_LENGTH`] bytes long.
    pub fn new(
        guesses: &'a WordCorpus<'a>,
        solutions: &WordCorpus<'a>,
        index: usize,
    ) -> Result<Self, SessionError> {
        if solutions.is_empty() {
            return Err(SessionError::NoSolutions);
        }

        let solution = solutions
            .get(index)
            .ok_or(SessionError::SolutionOutOfRange {
                index,
                count: solutions.count(),
            })?;

        Self::with_solution(guesses, solution)
    }

    /// Start a game against an explicit solution
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SolutionLength`] if `solution` is not
    /// [`WORD_LENGTH`] bytes long.
    pub fn with_solution(
        guesses: &'a WordCorpus<'a>,
        solution: TextSlice<'a>,
    ) -> Result<Self, SessionError> {
        let solution_letters: [u8; WORD_LENGTH] = solution.as_bytes().try_into().map_err(|_| {
            SessionError::SolutionLength {
                solution: solution.to_string(),
                expected: WORD_LENGTH,
            }
        })?;

        tracing::debug!(%solution, "starting session");

        Ok(Self {
            guesses,
            solution,
            solution_letters,
            state: GameState::Playing { attempt: 0 },
            alphabet: Alphabet::new(),
            history: Vec::with_capacity(MAX_ATTEMPTS),
        })
    }

    /// Submit one line of input as a guess
    ///
    /// A trailing line break is ignored and an empty line is
    /// [`Turn::Ignored`]. Otherwise the line must be exactly
    /// [`WORD_LENGTH`] bytes and a word of the guess corpus.
    ///
    /// # Errors
    ///
    /// - [`GuessError::WrongLength`] for a line of any other length
    /// - [`GuessError::NotInWordList`] for an unknown word
    /// - [`GuessError::GameOver`] once the game is won or lost
    pub fn submit(&mut self, raw_line: &str) -> Result<Turn, GuessError> {
        if self.state.is_over() {
            return Err(GuessError::GameOver);
        }

        let line = raw_line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return Ok(Turn::Ignored);
        }

        let Ok(guess) = <[u8; WORD_LENGTH]>::try_from(line.as_bytes()) else {
            tracing::debug!(line, "rejected guess: wrong length");
            return Err(GuessError::WrongLength {
                expected: WORD_LENGTH,
                actual: line.len(),
            });
        };

        if !self.guesses.contains(line) {
            tracing::debug!(line, "rejected guess: not in word list");
            return Err(GuessError::NotInWordList);
        }

        let feedback = evaluate(&guess, &self.solution_letters);
        for letter in feedback {
            self.alphabet.update(letter.letter, letter.quality);
        }
        self.history.push(feedback);

        let guesses = self.history.len();
        if self.solution.eq_text(line) {
            self.state = GameState::Won { guesses };
            tracing::info!(guesses, "game won");
        } else if guesses == MAX_ATTEMPTS {
            self.state = GameState::Lost;
            tracing::info!("game lost");
        } else {
            self.state = GameState::Playing { attempt: guesses };
            tracing::debug!(attempt = guesses, "guess scored");
        }

        Ok(Turn::Scored(feedback))
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Guesses used up without winning
    #[inline]
    #[must_use]
    pub const fn attempt(&self) -> usize {
        match self.state {
            GameState::Playing { attempt } => attempt,
            GameState::Won { guesses } => guesses.saturating_sub(1),
            GameState::Lost => MAX_ATTEMPTS,
        }
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        MAX_ATTEMPTS
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Every scored guess so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[[LetterFeedback; WORD_LENGTH]] {
        &self.history
    }

    /// The solution, whatever the state
    ///
    /// Frontends should only show it through [`revealed`](Self::revealed).
    #[must_use]
    pub const fn solution(&self) -> TextSlice<'a> {
        self.solution
    }

    /// The solution once the game is lost
    #[must_use]
    pub fn revealed(&self) -> Option<TextSlice<'a>> {
        (self.state == GameState::Lost).then_some(self.solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CharQuality::{RightPlace, Wrong, WrongPlace};

    const WORDS: &[u8] = b"crane\ntrace\nslate\nirate\nplumb\nfjord\nnymph\nglitz\n";

    fn session<'a>(guesses: &'a WordCorpus<'a>) -> GameSession<'a> {
        GameSession::with_solution(guesses, TextSlice::from_text("crane")).unwrap()
    }

    #[test]
    fn starts_playing_at_zero() {
        let words = WordCorpus::load(WORDS);
        let game = session(&words);
        assert_eq!(game.state(), GameState::Playing { attempt: 0 });
        assert_eq!(game.attempt(), 0);
        assert_eq!(game.max_attempts(), 6);
        assert!(game.history().is_empty());
        assert_eq!(game.revealed(), None);
    }

    #[test]
    fn new_picks_solution_by_index() {
        let words = WordCorpus::load(WORDS);
        let game = GameSession::new(&words, &words, 2).unwrap();
        assert_eq!(game.solution(), "slate");
    }

    #[test]
    fn new_rejects_bad_solutions() {
        let words = WordCorpus::load(WORDS);
        let empty = WordCorpus::load(b"");
        let short = WordCorpus::load(b"cran\n");

        assert_eq!(
            GameSession::new(&words, &empty, 0).unwrap_err(),
            SessionError::NoSolutions
        );
        assert_eq!(
            GameSession::new(&words, &words, 8).unwrap_err(),
            SessionError::SolutionOutOfRange { index: 8, count: 8 }
        );
        assert_eq!(
            GameSession::new(&words, &short, 0).unwrap_err(),
            SessionError::SolutionLength {
                solution: "cran".to_string(),
                expected: 5
            }
        );
    }

    #[test]
    fn empty_line_is_ignored() {
        let words = WordCorpus::load(WORDS);
        let mut game = session(&words);
        assert_eq!(game.submit(""), Ok(Turn::Ignored));
        assert_eq!(game.submit("\n"), Ok(Turn::Ignored));
        assert_eq!(game.attempt(), 0);
    }

    #[test]
    fn wrong_length_is_rejected_without_cost() {
        let words = WordCorpus::load(WORDS);
        let mut game = session(&words);
        game.submit("slate").unwrap();

        assert_eq!(
            game.submit("cran"),
            Err(GuessError::WrongLength {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(game.state(), GameState::Playing { attempt: 1 });
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn unknown_word_is_rejected_without_cost() {
        let words = WordCorpus::load(WORDS);
        let mut game = session(&words);
        let before = *game.alphabet();

        assert_eq!(game.submit("zzzzz"), Err(GuessError::NotInWordList));
        assert_eq!(game.attempt(), 0);
        assert_eq!(*game.alphabet(), before);
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(
            GuessError::WrongLength {
                expected: 5,
                actual: 4
            }
            .to_string(),
            "Wrong length"
        );
        assert_eq!(GuessError::NotInWordList.to_string(), "Not in word list");
    }

    #[test]
    fn trailing_newline_is_stripped() {
        let words = WordCorpus::load(WORDS);
        let mut game = session(&words);
        assert!(matches!(game.submit("slate\r\n"), Ok(Turn::Scored(_))));
        assert_eq!(game.attempt(), 1);
    }

    #[test]
    fn scored_guess_updates_alphabet() {
        let words = WordCorpus::load(WORDS);
        let mut game = session(&words);

        let Ok(Turn::Scored(feedback)) = game.submit("trace") else {
            panic!("trace should be scored");
        };
        let qualities = feedback.map(|letter| letter.quality);
        assert_eq!(qualities, [Wrong, RightPlace, RightPlace, WrongPlace, RightPlace]);

        let alphabet = game.alphabet();
        assert_eq!(alphabet.quality(b't'), Some(Wrong));
        assert_eq!(alphabet.quality(b'r'), Some(RightPlace));
        assert_eq!(alphabet.quality(b'a'), Some(RightPlace));
        assert_eq!(alphabet.quality(b'c'), Some(WrongPlace));
        assert_eq!(alphabet.quality(b'e'), Some(RightPlace));
        assert_eq!(alphabet.quality(b'z'), Some(crate::core::CharQuality::Unknown));
    }

    #[test]
    fn correct_guess_wins_and_ends_the_game() {
        let words = WordCorpus::load(WORDS);
        let mut game = session(&words);
        game.submit("slate").unwrap();
        game.submit("crane").unwrap();

        assert_eq!(game.state(), GameState::Won { guesses: 2 });
        assert_eq!(game.attempt(), 1);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.revealed(), None);
        assert_eq!(game.submit("trace"), Err(GuessError::GameOver));
        assert_eq!(game.submit(""), Err(GuessError::GameOver));
    }

    #[test]
    fn six_misses_lose_the_game() {
        let words = WordCorpus::load(WORDS);
        let mut game = session(&words);
        let misses = ["trace", "slate", "irate", "plumb", "fjord", "nymph"];

        for (used, miss) in misses.iter().enumerate() {
            assert_eq!(game.state(), GameState::Playing { attempt: used });
            assert_eq!(game.revealed(), None);
            game.submit(miss).unwrap();
        }

        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.attempt(), 6);
        assert_eq!(game.revealed(), Some(TextSlice::from_text("crane")));
        assert_eq!(game.submit("glitz"), Err(GuessError::GameOver));
    }

    #[test]
    fn win_on_last_attempt() {
        let words = WordCorpus::load(WORDS);
        let mut game = session(&words);
        for miss in ["trace", "slate", "irate", "plumb", "fjord"] {
            game.submit(miss).unwrap();
        }
        game.submit("crane").unwrap();
        assert_eq!(game.state(), GameState::Won { guesses: 6 });
        assert_eq!(game.attempt(), 5);
    }

    #[test]
    fn first_guess_win_records_one_guess() {
        let words = WordCorpus::load(WORDS);
        let mut game = session(&words);
        game.submit("crane").unwrap();
        assert_eq!(game.state(), GameState::Won { guesses: 1 });
        assert_eq!(game.attempt(), 0);
        assert!(game.state().is_over());
    }
}
