//! Aggregated result of a finished game.

use crate::config::PerformanceGrade;
use crate::types::{AnswerRecord, Difficulty, GameSettings, GameType, NumberFormat, QuestionMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable record of one played game, as kept in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: Uuid,
    pub game_type: GameType,
    pub difficulty: Difficulty,
    pub question_mode: QuestionMode,
    pub number_format: NumberFormat,
    pub timer_enabled: bool,
    /// Planned number of questions, not the number answered.
    pub questions_count: usize,
    pub correct_answers: usize,
    pub wrong_answers: usize,
    pub skipped_questions: usize,
    pub total_score: u32,
    /// Seconds across all answered and skipped questions.
    pub total_time: f64,
    pub date: DateTime<Utc>,
    pub answers: Vec<AnswerRecord>,
}

impl SessionSummary {
    /// Aggregate an answer log.
    pub fn from_answers(
        game_type: GameType,
        settings: &GameSettings,
        answers: Vec<AnswerRecord>,
        total_score: u32,
        date: DateTime<Utc>,
    ) -> Self {
        let correct_answers = answers.iter().filter(|a| a.is_correct).count();
        let skipped_questions = answers.iter().filter(|a| a.is_skipped).count();
        let wrong_answers = answers
            .iter()
            .filter(|a| !a.is_correct && !a.is_skipped)
            .count();
        let total_time = answers.iter().map(|a| a.time_spent).sum();

        Self {
            id: Uuid::new_v4(),
            game_type,
            difficulty: settings.difficulty,
            question_mode: settings.question_mode,
            number_format: settings.number_format,
            timer_enabled: settings.timer_enabled,
            questions_count: settings.questions_count,
            correct_answers,
            wrong_answers,
            skipped_questions,
            total_score,
            total_time,
            date,
            answers,
        }
    }

    /// Correct answers as a percentage of the planned question count.
    pub fn percentage(&self) -> f64 {
        if self.questions_count == 0 {
            return 0.0;
        }
        self.correct_answers as f64 / self.questions_count as f64 * 100.0
    }

    pub fn grade(&self) -> PerformanceGrade {
        PerformanceGrade::from_percentage(self.percentage())
    }
}
