//! Test fixtures and factory functions for creating test data.

use chrono::Utc;

use numquiz_core::{
    AnswerRecord, Difficulty, GameSettings, GameType, NumberFormat, Question, QuestionKind,
    QuestionMode, SessionSummary, UserAnswer,
};

/// Settings for a short untimed game.
pub fn settings(questions_count: usize, question_mode: QuestionMode) -> GameSettings {
    GameSettings {
        difficulty: Difficulty::Low,
        question_mode,
        number_format: NumberFormat::Arabic,
        timer_enabled: false,
        questions_count,
        ..Default::default()
    }
}

/// What a player who knows the answer would type.
pub fn correct_input(question: &Question) -> String {
    match &question.kind {
        QuestionKind::Arithmetic(q) => q.correct_answer.to_string(),
        QuestionKind::ReadingNumber(q) => q.correct_answers[0].clone(),
        QuestionKind::Comparison(q) => q.correct_answer.symbol().to_string(),
        QuestionKind::Fraction(q) => q.numerator.to_string(),
    }
}

/// The option letter of the correct answer in a multiple-choice question.
pub fn correct_letter(question: &Question) -> String {
    let QuestionKind::Arithmetic(q) = &question.kind else {
        panic!("only arithmetic questions have options");
    };
    let options = q.options.as_ref().expect("multiple-choice question");
    let index = options
        .iter()
        .position(|value| *value == q.correct_answer)
        .expect("options contain the correct answer");
    char::from(b'a' + index as u8).to_string()
}

/// A summary of a game with `correct` right answers out of `count`.
pub fn summary(game_type: GameType, correct: usize, count: usize) -> SessionSummary {
    let answers = (0..count)
        .map(|id| AnswerRecord::answered(id, UserAnswer::Number(id as i64), id < correct, 2.0))
        .collect();
    let settings = GameSettings {
        questions_count: count,
        ..Default::default()
    };
    SessionSummary::from_answers(game_type, &settings, answers, correct as u32 * 10, Utc::now())
}
