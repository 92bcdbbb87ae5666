//! Game configuration read from the environment.

use std::path::PathBuf;
use std::str::FromStr;

use numquiz_core::factory::validate_ranges;
use numquiz_core::{CustomRanges, Difficulty, GameSettings, GameType, NumberFormat, QuestionMode};

use crate::error::{AppError, Result};

pub const GAME_VAR: &str = "NUMQUIZ_GAME";
pub const DIFFICULTY_VAR: &str = "NUMQUIZ_DIFFICULTY";
pub const QUESTIONS_VAR: &str = "NUMQUIZ_QUESTIONS";
pub const MODE_VAR: &str = "NUMQUIZ_MODE";
pub const FORMAT_VAR: &str = "NUMQUIZ_FORMAT";
pub const TIMER_VAR: &str = "NUMQUIZ_TIMER";
pub const MATCH_THRESHOLD_VAR: &str = "NUMQUIZ_MATCH_THRESHOLD";
pub const CUSTOM_RANGES_VAR: &str = "NUMQUIZ_CUSTOM_RANGES";
pub const SEED_VAR: &str = "NUMQUIZ_SEED";
pub const HISTORY_VAR: &str = "NUMQUIZ_HISTORY";

/// Everything needed to start one game.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub game_type: GameType,
    pub settings: GameSettings,
    /// Seed for reproducible question sequences.
    pub seed: Option<u64>,
    pub history_path: PathBuf,
}

impl AppConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which returns the raw value
    /// of a variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GameSettings::default();

        let game_type = parse_var(&lookup, GAME_VAR, GameType::default(), GameType::from_str)?;
        let difficulty = parse_var(&lookup, DIFFICULTY_VAR, defaults.difficulty, Difficulty::from_str)?;
        let question_mode = parse_var(&lookup, MODE_VAR, defaults.question_mode, QuestionMode::from_str)?;
        let number_format = parse_var(&lookup, FORMAT_VAR, defaults.number_format, NumberFormat::from_str)?;
        let timer_enabled = parse_var(&lookup, TIMER_VAR, defaults.timer_enabled, parse_flag)?;

        let questions_count = parse_var(&lookup, QUESTIONS_VAR, defaults.questions_count, |s| {
            usize::from_str(s).ok()
        })?;
        if questions_count == 0 {
            return Err(invalid(QUESTIONS_VAR, "must be at least 1"));
        }

        let match_threshold = parse_var(&lookup, MATCH_THRESHOLD_VAR, defaults.match_threshold, |s| {
            f64::from_str(s).ok()
        })?;
        if !(match_threshold > 0.0 && match_threshold <= 1.0) {
            return Err(invalid(MATCH_THRESHOLD_VAR, "must be in (0, 1]"));
        }

        let custom_ranges = match non_empty(&lookup, CUSTOM_RANGES_VAR) {
            Some(raw) => Some(
                serde_json::from_str::<CustomRanges>(&raw)
                    .map_err(|e| invalid(CUSTOM_RANGES_VAR, &e.to_string()))?,
            ),
            None => None,
        };

        let seed = match non_empty(&lookup, SEED_VAR) {
            Some(raw) => Some(
                u64::from_str(&raw).map_err(|_| invalid(SEED_VAR, "expected an unsigned integer"))?,
            ),
            None => None,
        };

        let history_path = non_empty(&lookup, HISTORY_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_history_path);

        let settings = GameSettings {
            difficulty,
            question_mode,
            number_format,
            timer_enabled,
            questions_count,
            custom_ranges,
            match_threshold,
        };

        validate_ranges(game_type, &settings)
            .map_err(|e| invalid(CUSTOM_RANGES_VAR, &e.to_string()))?;

        Ok(Self {
            game_type,
            settings,
            seed,
            history_path,
        })
    }
}

fn default_history_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("numquiz")
        .join("history.json")
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T, parse: impl Fn(&str) -> Option<T>) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup, key) {
        Some(raw) => parse(&raw).ok_or_else(|| invalid(key, &format!("unrecognised value {raw:?}"))),
        None => Ok(default),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn invalid(key: &str, reason: &str) -> AppError {
    AppError::Config(format!("{key}: {reason}"))
}
