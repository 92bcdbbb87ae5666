//! Common test utilities for integration tests.
//!
//! Games are played against scripted input with a seeded RNG, so the
//! questions a test sees can be regenerated up front to compute answers.

pub mod fixtures;

use std::io::Cursor;
use std::path::Path;

use numquiz_core::{generate_questions, GameSettings, GameType, Question, SessionSummary};
use rand::rngs::StdRng;
use rand::SeedableRng;

use numquiz_terminal::config::AppConfig;
use numquiz_terminal::error::Result;

pub const SEED: u64 = 20_240_601;

/// Configuration for `game` writing history to `history_path`.
pub fn config(game_type: GameType, settings: GameSettings, history_path: &Path) -> AppConfig {
    AppConfig {
        game_type,
        settings,
        seed: Some(SEED),
        history_path: history_path.to_path_buf(),
    }
}

/// The questions a game with `config` will ask.
pub fn questions(config: &AppConfig) -> Vec<Question> {
    let mut rng = StdRng::seed_from_u64(SEED);
    generate_questions(&mut rng, config.game_type, &config.settings)
        .expect("test settings must be valid")
}

/// Play a game with `input` as the player's typed lines. Returns the
/// summary and everything written to the terminal.
pub fn play(config: &AppConfig, input: &str) -> Result<(Option<SessionSummary>, String)> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut output = Vec::new();
    let summary = numquiz_terminal::play(&mut rng, config, Cursor::new(input.to_string()), &mut output)?;
    Ok((summary, String::from_utf8(output).expect("output is UTF-8")))
}

/// Join answers into one line each.
pub fn script<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| format!("{}\n", line.as_ref()))
        .collect()
}
