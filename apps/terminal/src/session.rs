//! State of one game in progress.

use chrono::Utc;
use numquiz_core::config::time_limit;
use numquiz_core::{
    answer_hint, generate_questions, AnswerHint, AnswerRecord, AnswerVerifier, GameSettings,
    GameType, Question, QuestionKind, Scoring, SessionSummary, UserAnswer,
};
use rand::Rng;

use crate::error::{AppError, Result};
use crate::prompt::correct_answer_text;

/// How a question was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong,
    Skipped,
    /// The timer ran out before the answer arrived.
    TimeUp,
}

/// Result shown to the player after answering or skipping.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub outcome: Outcome,
    pub points: u32,
    /// Correct answer, ready for display.
    pub correct_answer: String,
    /// Closeness hint for wrong written numbers.
    pub hint: Option<AnswerHint>,
}

impl Feedback {
    pub fn is_correct(&self) -> bool {
        self.outcome == Outcome::Correct
    }
}

/// What happened on [`GameSession::advance`].
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    Next,
    Finished(SessionSummary),
}

/// A game from first question to summary.
#[derive(Debug)]
pub struct GameSession {
    game_type: GameType,
    settings: GameSettings,
    questions: Vec<Question>,
    verifier: AnswerVerifier,
    scoring: Scoring,
    current: usize,
    answers: Vec<AnswerRecord>,
    score: u32,
    showing_feedback: bool,
    finished: bool,
}

impl GameSession {
    /// Generate questions for `game_type` and start at the first one.
    pub fn start<R: Rng + ?Sized>(
        rng: &mut R,
        game_type: GameType,
        settings: GameSettings,
    ) -> Result<Self> {
        let questions = generate_questions(rng, game_type, &settings)?;
        tracing::info!(
            game = game_type.as_str(),
            difficulty = settings.difficulty.as_str(),
            questions = questions.len(),
            "game started"
        );
        Ok(Self::with_questions(game_type, settings, questions))
    }

    /// Start a game over an existing question list.
    pub fn with_questions(game_type: GameType, settings: GameSettings, questions: Vec<Question>) -> Self {
        let verifier = AnswerVerifier::new(settings.match_threshold);
        let finished = questions.is_empty();
        Self {
            game_type,
            settings,
            questions,
            verifier,
            scoring: Scoring::default(),
            current: 0,
            answers: Vec::new(),
            score: 0,
            showing_feedback: false,
            finished,
        }
    }

    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question being played, `None` once the game is finished.
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.questions.get(self.current)
    }

    /// One-based position of the current question and the total.
    pub fn progress(&self) -> (usize, usize) {
        ((self.current + 1).min(self.questions.len()), self.questions.len())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Seconds allowed per question, when the timer is on.
    pub fn time_limit(&self) -> Option<u32> {
        self.settings
            .timer_enabled
            .then(|| time_limit(self.game_type, self.settings.difficulty))
    }

    /// Check `answer` against the current question.
    ///
    /// An answer arriving after the time limit is recorded as a skip.
    pub fn submit(&mut self, answer: UserAnswer, elapsed: f64) -> Result<Feedback> {
        let question = self.answerable()?.clone();

        if self.is_expired(elapsed) {
            return Ok(self.record_skip(&question, elapsed, Outcome::TimeUp));
        }

        let is_correct = self.verifier.check(&question, &answer);
        let points = self.scoring.points(is_correct, elapsed, self.time_limit());

        let hint = match (&question.kind, &answer, is_correct) {
            (QuestionKind::ReadingNumber(q), UserAnswer::Text(text), false) => {
                answer_hint(text, &q.correct_answers)
            }
            _ => None,
        };

        tracing::debug!(question_id = question.id, is_correct, points, "answer submitted");

        self.answers
            .push(AnswerRecord::answered(question.id, answer, is_correct, elapsed));
        self.score += points;
        self.showing_feedback = true;

        Ok(Feedback {
            outcome: if is_correct { Outcome::Correct } else { Outcome::Wrong },
            points,
            correct_answer: correct_answer_text(&question, self.settings.number_format),
            hint,
        })
    }

    /// Skip the current question.
    pub fn skip(&mut self, elapsed: f64) -> Result<Feedback> {
        let question = self.answerable()?.clone();
        let outcome = if self.is_expired(elapsed) {
            Outcome::TimeUp
        } else {
            Outcome::Skipped
        };
        Ok(self.record_skip(&question, elapsed, outcome))
    }

    /// Move past the feedback of the current question. After the last
    /// question the game finishes and its summary is returned.
    pub fn advance(&mut self) -> Result<Advance> {
        if self.finished {
            return Err(AppError::Session("the game is already finished".to_string()));
        }
        if !self.showing_feedback {
            return Err(AppError::Session(
                "the current question has not been answered".to_string(),
            ));
        }

        self.showing_feedback = false;
        self.current += 1;
        if self.current < self.questions.len() {
            return Ok(Advance::Next);
        }

        self.finished = true;
        tracing::info!(score = self.score, "game finished");
        Ok(Advance::Finished(self.summary()))
    }

    /// Stop the game early. A summary is produced only when at least one
    /// question was answered or skipped.
    pub fn end(&mut self) -> Option<SessionSummary> {
        if self.finished {
            return None;
        }
        self.finished = true;
        tracing::info!(answered = self.answers.len(), "game ended early");

        if self.answers.is_empty() {
            None
        } else {
            Some(self.summary())
        }
    }

    fn answerable(&self) -> Result<&Question> {
        if self.showing_feedback {
            return Err(AppError::Session(
                "feedback for the current question is still pending".to_string(),
            ));
        }
        self.current_question()
            .ok_or_else(|| AppError::Session("there is no current question".to_string()))
    }

    fn is_expired(&self, elapsed: f64) -> bool {
        self.time_limit()
            .is_some_and(|limit| elapsed > f64::from(limit))
    }

    fn record_skip(&mut self, question: &Question, elapsed: f64, outcome: Outcome) -> Feedback {
        tracing::debug!(question_id = question.id, ?outcome, "question skipped");

        self.answers.push(AnswerRecord::skipped(question.id, elapsed));
        self.score += self.scoring.skip_question;
        self.showing_feedback = true;

        Feedback {
            outcome,
            points: self.scoring.skip_question,
            correct_answer: correct_answer_text(question, self.settings.number_format),
            hint: None,
        }
    }

    fn summary(&self) -> SessionSummary {
        SessionSummary::from_answers(
            self.game_type,
            &self.settings,
            self.answers.clone(),
            self.score,
            Utc::now(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numquiz_core::types::{ArithmeticQuestion, ReadingNumberQuestion};
    use numquiz_core::{all_valid_forms, Operation};

    fn addition(id: usize, num1: i64, num2: i64) -> Question {
        Question {
            id,
            game_type: GameType::Addition,
            kind: QuestionKind::Arithmetic(ArithmeticQuestion {
                num1,
                num2,
                operator: Operation::Add,
                correct_answer: num1 + num2,
                options: None,
            }),
        }
    }

    fn session(timer_enabled: bool) -> GameSession {
        let settings = GameSettings {
            questions_count: 2,
            timer_enabled,
            ..Default::default()
        };
        GameSession::with_questions(
            GameType::Addition,
            settings,
            vec![addition(0, 2, 3), addition(1, 4, 4)],
        )
    }

    #[test]
    fn test_submit_then_advance() {
        let mut session = session(false);

        let feedback = session.submit(UserAnswer::Number(5), 3.0).unwrap();
        assert!(feedback.is_correct());
        assert_eq!(feedback.points, 10);
        assert_eq!(session.score(), 10);
        assert_eq!(session.advance().unwrap(), Advance::Next);
        assert_eq!(session.progress(), (2, 2));

        let feedback = session.submit(UserAnswer::from("٩"), 2.0).unwrap();
        assert_eq!(feedback.outcome, Outcome::Wrong);
        assert_eq!(feedback.correct_answer, "٨");

        let Advance::Finished(summary) = session.advance().unwrap() else {
            panic!("expected the game to finish");
        };
        assert_eq!(summary.correct_answers, 1);
        assert_eq!(summary.wrong_answers, 1);
        assert_eq!(summary.total_score, 10);
        assert_eq!(summary.total_time, 5.0);
        assert!(session.is_finished());
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_submit_twice_is_rejected() {
        let mut session = session(false);
        session.submit(UserAnswer::Number(5), 1.0).unwrap();
        assert!(matches!(
            session.submit(UserAnswer::Number(5), 1.0),
            Err(AppError::Session(_))
        ));
        assert!(matches!(session.skip(1.0), Err(AppError::Session(_))));
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn test_advance_requires_feedback() {
        let mut session = session(false);
        assert!(matches!(session.advance(), Err(AppError::Session(_))));
    }

    #[test]
    fn test_skip_records_no_answer() {
        let mut session = session(false);
        let feedback = session.skip(4.0).unwrap();
        assert_eq!(feedback.outcome, Outcome::Skipped);
        assert_eq!(feedback.points, 0);
        assert_eq!(session.answers()[0].user_answer, None);
        assert!(session.answers()[0].is_skipped);
    }

    #[test]
    fn test_fast_answer_earns_bonus() {
        let mut session = session(true);
        assert_eq!(session.time_limit(), Some(30));
        let feedback = session.submit(UserAnswer::Number(5), 10.0).unwrap();
        assert_eq!(feedback.points, 15);
    }

    #[test]
    fn test_slow_answer_has_no_bonus() {
        let mut session = session(true);
        let feedback = session.submit(UserAnswer::Number(5), 20.0).unwrap();
        assert_eq!(feedback.points, 10);
    }

    #[test]
    fn test_expired_answer_is_a_skip() {
        let mut session = session(true);
        let feedback = session.submit(UserAnswer::Number(5), 31.0).unwrap();
        assert_eq!(feedback.outcome, Outcome::TimeUp);
        assert_eq!(session.score(), 0);
        assert!(session.answers()[0].is_skipped);
    }

    #[test]
    fn test_end_without_answers_has_no_summary() {
        let mut session = session(false);
        assert!(session.end().is_none());
        assert!(session.is_finished());
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_end_with_answers_summarises() {
        let mut session = session(false);
        session.submit(UserAnswer::Number(5), 2.0).unwrap();
        let summary = session.end().unwrap();
        assert_eq!(summary.correct_answers, 1);
        assert_eq!(summary.questions_count, 2);
        assert_eq!(summary.percentage(), 50.0);
        assert!(session.end().is_none());
    }

    #[test]
    fn test_wrong_reading_answer_gets_hint() {
        let question = Question {
            id: 0,
            game_type: GameType::ReadingNumbers,
            kind: QuestionKind::ReadingNumber(ReadingNumberQuestion {
                number: 3,
                correct_answers: all_valid_forms(3).unwrap(),
            }),
        };
        let settings = GameSettings {
            questions_count: 1,
            ..Default::default()
        };
        let mut session = GameSession::with_questions(GameType::ReadingNumbers, settings, vec![question]);

        let feedback = session.submit(UserAnswer::from("ثل"), 2.0).unwrap();
        assert_eq!(feedback.outcome, Outcome::Wrong);
        assert_eq!(feedback.hint, Some(AnswerHint::TryAgain));
        assert_eq!(feedback.correct_answer, "ثلاثة");
    }

    #[test]
    fn test_accepted_reading_answer_has_no_hint() {
        let question = Question {
            id: 0,
            game_type: GameType::ReadingNumbers,
            kind: QuestionKind::ReadingNumber(ReadingNumberQuestion {
                number: 3,
                correct_answers: all_valid_forms(3).unwrap(),
            }),
        };
        let mut session = GameSession::with_questions(
            GameType::ReadingNumbers,
            GameSettings::default(),
            vec![question],
        );

        let feedback = session.submit(UserAnswer::from("ثلاث"), 2.0).unwrap();
        assert!(feedback.is_correct());
        assert_eq!(feedback.hint, None);
    }

    #[test]
    fn test_empty_game_is_finished() {
        let session = GameSession::with_questions(GameType::Addition, GameSettings::default(), vec![]);
        assert!(session.is_finished());
        assert!(session.current_question().is_none());
    }
}
