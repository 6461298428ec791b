//! What a frontend should show after a transition

use super::{Alphabet, GameSession, GameState, GuessError, LetterFeedback, Turn, WORD_LENGTH};

/// Everything a renderer needs after one submission
///
/// Carries no terminal specifics; frontends decide on colours, cursor
/// movement and timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderingIntent {
    /// The scored guess, if the submission was scored
    pub guess: Option<[LetterFeedback; WORD_LENGTH]>,
    /// Alphabet snapshot after the submission
    pub alphabet: Alphabet,
    /// Transient message for a rejected submission
    pub message: Option<String>,
    pub state: GameState,
    /// The solution, only on the transition that lost the game
    pub reveal: Option<String>,
}

impl RenderingIntent {
    /// Intent for a fresh screen, before any submission
    #[must_use]
    pub fn initial(session: &GameSession<'_>) -> Self {
        Self {
            guess: None,
            alphabet: *session.alphabet(),
            message: None,
            state: session.state(),
            reveal: None,
        }
    }

    /// Intent following `result`, which `session` just produced
    #[must_use]
    pub fn after(session: &GameSession<'_>, result: &Result<Turn, GuessError>) -> Self {
        let mut intent = Self::initial(session);

        match result {
            Ok(Turn::Ignored) => {}
            Ok(Turn::Scored(feedback)) => {
                intent.guess = Some(*feedback);
                intent.reveal = session.revealed().map(|solution| solution.to_string());
            }
            Err(err) => intent.message = Some(err.to_string()),
        }

        intent
    }
}
