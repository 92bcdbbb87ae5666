//! Question engine for the Arabic number-literacy quiz.
//!
//! Provides:
//! - Question generation for arithmetic, comparison, fraction and
//!   number-reading games, bounded by difficulty or custom ranges
//! - Arabic word forms for 0-9999 and Arabic text normalization
//! - Fuzzy answer matching (Levenshtein similarity)
//! - Answer verification, scoring and session summaries
//! - Conversion between Latin and Arabic-Indic digits

pub mod arabic;
pub mod config;
pub mod digits;
pub mod error;
pub mod factory;
pub mod generator;
pub mod matching;
pub mod summary;
pub mod types;
pub mod verifier;

pub use arabic::{all_valid_forms, normalize, number_to_words};
pub use config::{PerformanceGrade, Scoring};
pub use digits::{format_number, parse_user_input};
pub use error::{QuizError, Result};
pub use factory::generate_questions;
pub use matching::{
    answer_hint, find_best_match, is_match, is_number_written_correctly, levenshtein_distance,
    similarity, AnswerHint, BestMatch,
};
pub use summary::SessionSummary;
pub use types::{
    AnswerRecord, CustomRanges, Difficulty, FractionRange, GameSettings, GameType, NumberFormat,
    NumberRange, Operation, Question, QuestionKind, QuestionMode, Relation, UserAnswer,
};
pub use verifier::{check_answer, AnswerVerifier};
