//! Whole games played through the public API

use clidle::core::{
    CharQuality::{RightPlace, Wrong, WrongPlace},
    GameSession, GameState, GuessError, RenderingIntent, Turn,
};
use clidle::text::TextSlice;
use clidle::wordlists::{WordCorpus, default_solutions, default_words};

const WORDS: &[u8] = b"crane\ntrace\nslate\nirate\nplumb\nfjord\nnymph\n";

fn qualities(turn: Turn) -> Vec<clidle::core::CharQuality> {
    match turn {
        Turn::Scored(feedback) => feedback.iter().map(|letter| letter.quality).collect(),
        Turn::Ignored => panic!("expected a scored turn"),
    }
}

#[test]
fn trace_against_crane() {
    let words = WordCorpus::load(WORDS);
    let mut game = GameSession::with_solution(&words, TextSlice::from_text("crane")).unwrap();

    let turn = game.submit("trace\n").unwrap();

    assert_eq!(
        qualities(turn),
        [Wrong, RightPlace, RightPlace, WrongPlace, RightPlace]
    );
    assert_eq!(game.alphabet().quality(b'c'), Some(WrongPlace));
    assert_eq!(game.alphabet().quality(b't'), Some(Wrong));
    assert_eq!(game.state(), GameState::Playing { attempt: 1 });
}

#[test]
fn correct_guess_wins_and_locks_the_game() {
    let words = WordCorpus::load(WORDS);
    let mut game = GameSession::with_solution(&words, TextSlice::from_text("crane")).unwrap();

    game.submit("slate").unwrap();
    game.submit("crane").unwrap();

    assert_eq!(game.state(), GameState::Won { guesses: 2 });
    assert_eq!(game.submit("trace"), Err(GuessError::GameOver));
    assert_eq!(game.history().len(), 2);
}

#[test]
fn six_misses_lose_and_reveal_once() {
    let words = WordCorpus::load(WORDS);
    let mut game = GameSession::with_solution(&words, TextSlice::from_text("crane")).unwrap();

    let mut reveals = 0;
    for guess in ["trace", "slate", "irate", "plumb", "fjord", "nymph"] {
        let result = game.submit(guess);
        assert!(result.is_ok());
        if RenderingIntent::after(&game, &result).reveal.is_some() {
            reveals += 1;
        }
    }

    assert_eq!(game.state(), GameState::Lost);
    assert_eq!(reveals, 1);
    assert_eq!(game.revealed().unwrap(), "crane");
}

#[test]
fn rejected_lines_cost_nothing() {
    let words = WordCorpus::load(WORDS);
    let mut game = GameSession::with_solution(&words, TextSlice::from_text("crane")).unwrap();

    let short = game.submit("cran");
    assert_eq!(short.as_ref().map_err(ToString::to_string), Err("Wrong length".to_string()));

    let unknown = game.submit("zzzzz");
    assert_eq!(unknown, Err(GuessError::NotInWordList));

    assert_eq!(game.submit("\r\n"), Ok(Turn::Ignored));
    assert_eq!(game.attempt(), 0);
    assert!(game.history().is_empty());
}

#[test]
fn every_embedded_solution_starts_a_game() {
    let word_source = default_words();
    let solution_source = default_solutions();
    let words = word_source.corpus().unwrap().with_index();
    let solutions = solution_source.corpus().unwrap();

    for index in 0..solutions.count() {
        let mut game = GameSession::new(&words, &solutions, index).unwrap();
        let solution = game.solution().to_string();
        game.submit(&solution).unwrap();
        assert_eq!(game.state(), GameState::Won { guesses: 1 }, "solution {solution}");
    }
}
