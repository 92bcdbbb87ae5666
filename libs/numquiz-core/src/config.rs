//! Default game configuration: ranges, time limits and scoring.

use crate::types::{Difficulty, FractionRange, GameSettings, GameType, NumberRange};

/// Number of questions per session when not configured.
pub const DEFAULT_QUESTIONS_COUNT: usize = 10;

/// Number of candidates in a multiple-choice question.
pub const MULTIPLE_CHOICE_OPTIONS: usize = 4;

/// Minimum similarity for a written number to be accepted.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.7;

/// Range used for `Custom` difficulty when no override was supplied.
pub const FALLBACK_RANGE: NumberRange = NumberRange::new(0, 10);

/// Largest number the reading game can ask about.
pub const MAX_WORD_NUMBER: i64 = 9999;

pub const DEFAULT_FRACTION_RANGE: FractionRange = FractionRange {
    denominator_min: 2,
    denominator_max: 9,
    numerator_min: 1,
    numerator_max: 8,
};

/// Built-in operand range for a range key at a fixed difficulty.
///
/// Returns `None` for `Custom` and for keys without a table (mixed games and
/// fractions).
pub fn default_range(key: GameType, difficulty: Difficulty) -> Option<NumberRange> {
    let [low, medium, high] = match key {
        GameType::Addition | GameType::Subtraction | GameType::ComparingNumbers => {
            [(0, 9), (10, 99), (100, 999)]
        }
        GameType::Multiplication => [(0, 10), (10, 99), (100, 999)],
        GameType::Division => [(0, 100), (100, 10_000), (10_000, 1_000_000)],
        GameType::ReadingNumbers => [(0, 99), (100, 999), (1000, 9999)],
        GameType::AdditionSubtraction
        | GameType::MultiplicationDivision
        | GameType::Arithmetic
        | GameType::Fractions => return None,
    };

    let (min, max) = match difficulty {
        Difficulty::Low => low,
        Difficulty::Medium => medium,
        Difficulty::High => high,
        Difficulty::Custom => return None,
    };
    Some(NumberRange::new(min, max))
}

/// Operand range for a range key under the given settings.
///
/// Custom overrides apply only at `Custom` difficulty; a `Custom` game without
/// an override falls back to [`FALLBACK_RANGE`].
pub fn resolve_range(key: GameType, settings: &GameSettings) -> NumberRange {
    if settings.difficulty == Difficulty::Custom {
        if let Some(range) = settings
            .custom_ranges
            .as_ref()
            .and_then(|custom| custom.range_for(key))
        {
            return range;
        }
    }

    default_range(key, settings.difficulty).unwrap_or(FALLBACK_RANGE)
}

/// Fraction bounds under the given settings.
pub fn resolve_fraction_range(settings: &GameSettings) -> FractionRange {
    if settings.difficulty == Difficulty::Custom {
        if let Some(range) = settings
            .custom_ranges
            .as_ref()
            .and_then(|custom| custom.fractions)
        {
            return range;
        }
    }
    DEFAULT_FRACTION_RANGE
}

/// Seconds allowed per question when the timer is enabled.
pub fn time_limit(game: GameType, difficulty: Difficulty) -> u32 {
    let [low, medium, high, custom] = match game {
        GameType::Addition | GameType::Subtraction | GameType::AdditionSubtraction => {
            [30, 45, 60, 45]
        }
        GameType::Multiplication => [30, 60, 90, 60],
        GameType::Division | GameType::MultiplicationDivision => [45, 75, 120, 75],
        GameType::Arithmetic | GameType::ReadingNumbers | GameType::Fractions => {
            [45, 60, 90, 60]
        }
        GameType::ComparingNumbers => [20, 30, 45, 30],
    };

    match difficulty {
        Difficulty::Low => low,
        Difficulty::Medium => medium,
        Difficulty::High => high,
        Difficulty::Custom => custom,
    }
}

/// Points awarded per answer.
#[derive(Debug, Clone)]
pub struct Scoring {
    pub correct_answer: u32,
    pub wrong_answer: u32,
    pub skip_question: u32,
    /// Multiplier applied to fast correct answers.
    pub bonus_time_multiplier: f64,
    /// Fraction of the time limit under which the bonus applies.
    pub bonus_time_threshold: f64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            correct_answer: 10,
            wrong_answer: 0,
            skip_question: 0,
            bonus_time_multiplier: 1.5,
            bonus_time_threshold: 0.5,
        }
    }
}

impl Scoring {
    /// Points for a submitted answer. `time_limit` is `Some` only when the
    /// timer is enabled.
    pub fn points(&self, is_correct: bool, time_spent: f64, time_limit: Option<u32>) -> u32 {
        if !is_correct {
            return self.wrong_answer;
        }

        match time_limit {
            Some(limit) if time_spent < f64::from(limit) * self.bonus_time_threshold => {
                (f64::from(self.correct_answer) * self.bonus_time_multiplier).round() as u32
            }
            _ => self.correct_answer,
        }
    }
}

/// Overall result band of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceGrade {
    Excellent,
    Good,
    Average,
    NeedsPractice,
}

impl PerformanceGrade {
    /// Grade from the percentage of correct answers (0-100).
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Excellent
        } else if percentage >= 70.0 {
            Self::Good
        } else if percentage >= 50.0 {
            Self::Average
        } else {
            Self::NeedsPractice
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "ممتاز!",
            Self::Good => "جيد جداً!",
            Self::Average => "جيد!",
            Self::NeedsPractice => "تحتاج للمزيد من التمرين",
        }
    }
}
