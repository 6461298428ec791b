//! TUI application state and logic

use crate::core::{GameSession, GameState, RenderingIntent, SessionError};
use crate::wordlists::WordCorpus;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest line the input box accepts
const MAX_INPUT: usize = 16;

/// Application state
pub struct App<'a> {
    pub guesses: &'a WordCorpus<'a>,
    pub solutions: &'a WordCorpus<'a>,
    pub session: GameSession<'a>,
    pub input_buffer: String,
    pub message: Option<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses (index 1 to 6)
    pub guess_distribution: [usize; 7],
}

impl<'a> App<'a> {
    /// Start with an existing session; later games draw from `rng`
    #[must_use]
    pub fn with_session(
        guesses: &'a WordCorpus<'a>,
        solutions: &'a WordCorpus<'a>,
        session: GameSession<'a>,
        rng: StdRng,
    ) -> Self {
        let tries = session.max_attempts();
        Self {
            guesses,
            solutions,
            session,
            input_buffer: String::new(),
            message: Some(Message {
                text: format!("Guess the word in {tries} tries. Enter submits, Esc quits."),
                style: MessageStyle::Info,
            }),
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
            should_quit: false,
            rng,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                // Ctrl-D is end of input: leave without revealing anything
                KeyCode::Char('c' | 'd') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    if c.is_ascii_alphabetic() && self.input_buffer.len() < MAX_INPUT {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
        }
    }

    /// Submit the input box as a guess
    pub fn submit_input(&mut self) {
        let line = std::mem::take(&mut self.input_buffer);
        let result = self.session.submit(&line);
        let intent = RenderingIntent::after(&self.session, &result);

        if let Some(text) = intent.message {
            self.message = Some(Message {
                text,
                style: MessageStyle::Error,
            });
            // Keep what was typed so it can be fixed
            self.input_buffer = line;
            return;
        }

        if intent.guess.is_none() {
            return;
        }
        self.message = None;

        match intent.state {
            GameState::Playing { .. } => {}
            GameState::Won { guesses } => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.guess_distribution.get_mut(guesses) {
                    *slot += 1;
                }
                self.finish(
                    format!("Solved in {guesses}! Press 'n' for a new game or 'q' to quit."),
                    MessageStyle::Success,
                );
            }
            GameState::Lost => {
                self.stats.total_games += 1;
                let solution = intent.reveal.unwrap_or_default();
                self.finish(
                    format!("The word was: {solution}. Press 'n' for a new game or 'q' to quit."),
                    MessageStyle::Error,
                );
            }
        }
    }

    fn finish(&mut self, text: String, style: MessageStyle) {
        self.input_mode = InputMode::GameOver;
        self.message = Some(Message { text, style });
    }

    /// Replace the session with a fresh one against a new random solution
    pub fn new_game(&mut self) {
        let started = self
            .solutions
            .random_index(&mut self.rng)
            .ok_or(SessionError::NoSolutions)
            .and_then(|index| GameSession::new(self.guesses, self.solutions, index));

        match started {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.input_mode = InputMode::Guessing;
                self.message = Some(Message {
                    text: "New game started!".to_string(),
                    style: MessageStyle::Info,
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not start a new game");
                self.message = Some(Message {
                    text: err.to_string(),
                    style: MessageStyle::Error,
                });
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "TUI loop failed");
    }

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
