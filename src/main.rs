//! Clidle - CLI
//!
//! Wordle in the terminal, as a full-screen TUI or a line-oriented game.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clidle::{
    commands::{GameOutcome, SimpleConfig, run_simple},
    core::GameSession,
    interactive::{App, run_tui},
    wordlists::{WordCorpus, WordSource, default_solutions, default_words},
};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "clidle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File of accepted guesses, one per line (default: built-in list)
    #[arg(long, global = true)]
    words: Option<PathBuf>,

    /// File of solution candidates, one per line (default: built-in list)
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Seed for choosing the solution
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Play against this solution from the list instead of a random one
    #[arg(long, global = true)]
    solution_index: Option<usize>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen TUI (default)
    Play,

    /// Line-oriented game on stdin/stdout
    Simple {
        /// Pause between revealed letters, in milliseconds
        #[arg(long, default_value = "250")]
        delay_ms: u64,

        /// Print an emoji row instead of colours
        #[arg(long)]
        no_color: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Simple { .. }))?;

    let word_source = load_source(cli.words.as_deref(), default_words)?;
    let solution_source = load_source(cli.solutions.as_deref(), default_solutions)?;
    let words = word_source
        .corpus()
        .context("cannot play without valid guesses")?
        .with_index();
    let solutions = solution_source
        .corpus()
        .context("cannot play without solutions")?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let index = match cli.solution_index {
        Some(index) => index,
        None => solutions
            .random_index(&mut rng)
            .context("no solution words to choose from")?,
    };
    tracing::debug!(index, "chose solution");

    let session = GameSession::new(&words, &solutions, index).context("cannot start a game")?;

    match command {
        Commands::Play => run_play_command(&words, &solutions, session, rng),
        Commands::Simple { delay_ms, no_color } => {
            let config = SimpleConfig {
                reveal_delay: Duration::from_millis(delay_ms),
                color: !no_color,
            };
            run_simple_command(session, &config)
        }
    }
}

/// Install the tracing subscriber
///
/// Logs go to `log_file` when given. Without one only the line-oriented mode
/// logs, to stderr, since the TUI owns the whole terminal.
fn init_logging(log_file: Option<&Path>, simple: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|err| anyhow::anyhow!(err))?;
        }
        None if simple => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init()
                .map_err(|err| anyhow::anyhow!(err))?;
        }
        None => {}
    }

    Ok(())
}

fn load_source(path: Option<&Path>, fallback: fn() -> WordSource) -> Result<WordSource> {
    match path {
        Some(path) => Ok(WordSource::from_file(path)?),
        None => Ok(fallback()),
    }
}

fn run_play_command<'a>(
    words: &'a WordCorpus<'a>,
    solutions: &'a WordCorpus<'a>,
    session: GameSession<'a>,
    rng: StdRng,
) -> Result<()> {
    let app = App::with_session(words, solutions, session, rng);
    run_tui(app)
}

fn run_simple_command(mut session: GameSession<'_>, config: &SimpleConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let outcome = run_simple(&mut session, stdin.lock(), stdout.lock(), config)
        .context("terminal I/O failed")?;
    tracing::info!(?outcome, "game finished");

    if let GameOutcome::Won { guesses } = outcome {
        println!("Solved in {guesses}!");
    }
    Ok(())
}
