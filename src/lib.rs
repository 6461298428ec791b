//! Clidle
//!
//! Wordle in the terminal. Word lists are tokenized into zero-copy text
//! slices, guesses are scored letter by letter, and a small state machine
//! drives each game to a win or a loss.
//!
//! # Quick Start
//!
//! ```rust
//! use clidle::core::{GameSession, GameState, Turn};
//! use clidle::wordlists::WordCorpus;
//!
//! let words = WordCorpus::load(b"crane\ntrace\nslate\n");
//! let mut game = GameSession::new(&words, &words, 0).unwrap();
//!
//! assert!(matches!(game.submit("trace"), Ok(Turn::Scored(_))));
//! assert!(game.submit("crane").is_ok());
//! assert_eq!(game.state(), GameState::Won { guesses: 2 });
//! ```

// Zero-copy text views
pub mod text;

// Word lists
pub mod wordlists;

// Core game logic
pub mod core;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
