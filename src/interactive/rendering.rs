//! TUI rendering with ratatui
//!
//! A board of scored guesses, the alphabet below it, and an input box.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{CharQuality, GameState, LetterFeedback, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and alphabet
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Cell colours for a letter of the given quality
fn quality_style(quality: CharQuality) -> Style {
    match quality {
        CharQuality::RightPlace => Style::default().fg(Color::Black).bg(Color::Green),
        CharQuality::WrongPlace => Style::default().fg(Color::Black).bg(Color::Yellow),
        CharQuality::Wrong => Style::default().fg(Color::DarkGray).bg(Color::White),
        CharQuality::Unknown => Style::default(),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("CLIDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn scored_row(feedback: &[LetterFeedback]) -> Line<'static> {
    let mut spans = Vec::with_capacity(feedback.len() * 2);
    for letter in feedback {
        spans.push(Span::styled(
            format!(" {} ", letter.letter_char().to_ascii_uppercase()),
            quality_style(letter.quality).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn pending_row(typed: &str) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    let mut letters = typed.chars();
    for _ in 0..WORD_LENGTH {
        let cell = letters
            .next()
            .map_or_else(|| " _ ".to_string(), |c| format!(" {} ", c.to_ascii_uppercase()));
        spans.push(Span::styled(cell, Style::default().fg(Color::White)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let playing = matches!(app.session.state(), GameState::Playing { .. });

    let mut lines = Vec::with_capacity(app.session.max_attempts() * 2);
    for row in 0..app.session.max_attempts() {
        let line = match history.get(row) {
            Some(feedback) => scored_row(feedback),
            None if playing && row == history.len() => pending_row(&app.input_buffer),
            None => pending_row(""),
        };
        lines.push(line);
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    render_alphabet(f, app, chunks[0]);
    render_message(f, app, chunks[1]);
}

fn render_alphabet(f: &mut Frame, app: &App, area: Rect) {
    let letters: Vec<Span> = app
        .session
        .alphabet()
        .letters()
        .map(|(letter, quality)| {
            Span::styled(letter.to_ascii_uppercase().to_string(), quality_style(quality))
        })
        .collect();

    // Two rows of 13 so the panel stays narrow
    let (first, second) = letters.split_at(letters.len().div_ceil(2));
    let content = vec![Line::from(first.to_vec()), Line::from(second.to_vec())];

    let alphabet = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(alphabet, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let content = app.message.as_ref().map_or_else(Line::default, |msg| {
        let style = match msg.style {
            MessageStyle::Info => Style::default().fg(Color::White),
            MessageStyle::Success => Style::default().fg(Color::Green),
            MessageStyle::Error => Style::default().fg(Color::Red),
        };
        Line::styled(msg.text.clone(), style)
    });

    let message = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(message, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Type a guess | Enter to submit | Esc to quit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::GameOver => (" Press 'n' for new game or 'q' to quit ", "", Color::Green),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let progress = match app.session.state() {
        GameState::Playing { attempt } => {
            format!("Guess {}/{}", attempt + 1, app.session.max_attempts())
        }
        GameState::Won { guesses } => format!("Solved in {guesses}"),
        GameState::Lost => "Out of guesses".to_string(),
    };
    f.render_widget(Paragraph::new(progress).alignment(Alignment::Center), chunks[0]);

    let win_rate = (app.stats.games_won * 100)
        .checked_div(app.stats.total_games)
        .unwrap_or(0);
    let stats_text = format!("Games: {} | Win Rate: {win_rate}%", app.stats.total_games);
    let stats = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(stats, chunks[1]);
}
