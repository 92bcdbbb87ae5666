//! Answer checking for every question kind.

use crate::config::DEFAULT_MATCH_THRESHOLD;
use crate::digits::parse_user_input;
use crate::matching::is_number_written_correctly;
use crate::types::{Question, QuestionKind, UserAnswer};

/// Checks submitted answers. Stateless apart from the fuzzy-match threshold.
#[derive(Debug, Clone)]
pub struct AnswerVerifier {
    /// Minimum similarity for a written number to be accepted.
    pub match_threshold: f64,
}

impl Default for AnswerVerifier {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl AnswerVerifier {
    pub fn new(match_threshold: f64) -> Self {
        Self { match_threshold }
    }

    /// Whether `answer` is correct for `question`.
    ///
    /// Unparseable numeric answers are incorrect, never an error.
    pub fn check(&self, question: &Question, answer: &UserAnswer) -> bool {
        let is_correct = match &question.kind {
            QuestionKind::Arithmetic(q) => numeric_answer(answer) == Some(q.correct_answer),
            QuestionKind::Comparison(q) => match answer {
                UserAnswer::Text(text) => text.trim() == q.correct_answer.symbol(),
                UserAnswer::Number(_) => false,
            },
            QuestionKind::Fraction(q) => numeric_answer(answer) == Some(i64::from(q.numerator)),
            QuestionKind::ReadingNumber(q) => match answer {
                UserAnswer::Text(text) => {
                    is_number_written_correctly(text, i64::from(q.number), self.match_threshold)
                }
                UserAnswer::Number(_) => false,
            },
        };

        tracing::debug!(question_id = question.id, is_correct, "checked answer");
        is_correct
    }
}

/// Check with the default threshold.
pub fn check_answer(question: &Question, answer: &UserAnswer) -> bool {
    AnswerVerifier::default().check(question, answer)
}

fn numeric_answer(answer: &UserAnswer) -> Option<i64> {
    match answer {
        UserAnswer::Number(n) => Some(*n),
        UserAnswer::Text(text) => match parse_user_input(text) {
            Ok(n) => Some(n),
            Err(err) => {
                tracing::debug!(error = %err, "numeric answer did not parse");
                None
            }
        },
    }
}
