//! Builds question sequences for a game.

use crate::arabic::all_valid_forms;
use crate::config::{resolve_fraction_range, resolve_range, MAX_WORD_NUMBER, MULTIPLE_CHOICE_OPTIONS};
use crate::error::{QuizError, Result};
use crate::generator::pairs::random_int;
use crate::generator::{comparison_pair, fraction, generate_options, operands_for};
use crate::types::{
    ArithmeticQuestion, ComparisonQuestion, FractionQuestion, GameSettings, GameType, Operation,
    Question, QuestionKind, QuestionMode, ReadingNumberQuestion, Relation,
};
use rand::Rng;

/// Generate `settings.questions_count` questions for `game`, with ids
/// `0..count`.
///
/// Every range the game can draw from is validated before the first
/// question is built, so a malformed configuration yields no questions at all.
pub fn generate_questions<R: Rng + ?Sized>(
    rng: &mut R,
    game: GameType,
    settings: &GameSettings,
) -> Result<Vec<Question>> {
    validate_ranges(game, settings)?;

    let questions = (0..settings.questions_count)
        .map(|id| generate_question(rng, id, game, settings))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        game = game.as_str(),
        difficulty = settings.difficulty.as_str(),
        count = questions.len(),
        "generated questions"
    );
    Ok(questions)
}

/// Check every range `game` may use under `settings`.
pub fn validate_ranges(game: GameType, settings: &GameSettings) -> Result<()> {
    match game {
        GameType::Addition
        | GameType::Subtraction
        | GameType::AdditionSubtraction
        | GameType::Multiplication
        | GameType::Division
        | GameType::MultiplicationDivision
        | GameType::Arithmetic => {
            for operation in game.operations() {
                let range = resolve_range(operation.range_key(), settings);
                range.validate()?;
                let fits = match operation {
                    Operation::Add => range.max.checked_add(range.max).is_some(),
                    Operation::Multiply => range.max.checked_mul(range.max).is_some(),
                    Operation::Subtract | Operation::Divide => true,
                };
                if !fits {
                    return Err(QuizError::invalid_range(
                        range.min,
                        range.max,
                        "results would not fit in a 64-bit integer",
                    ));
                }
                if *operation == Operation::Divide && range.max < 1 {
                    return Err(QuizError::invalid_range(
                        range.min,
                        range.max,
                        "division needs a maximum of at least 1",
                    ));
                }
            }
            Ok(())
        }
        GameType::ReadingNumbers => {
            let range = resolve_range(GameType::ReadingNumbers, settings);
            range.validate()?;
            if range.max > MAX_WORD_NUMBER {
                return Err(QuizError::invalid_range(
                    range.min,
                    range.max,
                    "numbers to read must not exceed 9999",
                ));
            }
            Ok(())
        }
        GameType::ComparingNumbers => resolve_range(GameType::ComparingNumbers, settings).validate(),
        GameType::Fractions => resolve_fraction_range(settings).validate(),
    }
}

fn generate_question<R: Rng + ?Sized>(
    rng: &mut R,
    id: usize,
    game: GameType,
    settings: &GameSettings,
) -> Result<Question> {
    let (game_type, kind) = match game {
        GameType::Addition
        | GameType::Subtraction
        | GameType::AdditionSubtraction
        | GameType::Multiplication
        | GameType::Division
        | GameType::MultiplicationDivision
        | GameType::Arithmetic => {
            let operations = game.operations();
            let operation = operations[rng.gen_range(0..operations.len())];
            (operation.range_key(), arithmetic_question(rng, operation, settings)?)
        }
        GameType::ReadingNumbers => (game, reading_question(rng, settings)?),
        GameType::ComparingNumbers => (game, comparison_question(rng, settings)?),
        GameType::Fractions => (game, fraction_question(rng, settings)?),
    };

    Ok(Question { id, game_type, kind })
}

fn arithmetic_question<R: Rng + ?Sized>(
    rng: &mut R,
    operation: Operation,
    settings: &GameSettings,
) -> Result<QuestionKind> {
    let range = resolve_range(operation.range_key(), settings);
    let (num1, num2) = operands_for(rng, operation, range)?;
    let correct_answer = operation.apply(num1, num2);

    let options = match settings.question_mode {
        QuestionMode::MultipleChoice => Some(generate_options(
            rng,
            correct_answer,
            MULTIPLE_CHOICE_OPTIONS,
        )),
        QuestionMode::Written => None,
    };

    Ok(QuestionKind::Arithmetic(ArithmeticQuestion {
        num1,
        num2,
        operator: operation,
        correct_answer,
        options,
    }))
}

fn reading_question<R: Rng + ?Sized>(rng: &mut R, settings: &GameSettings) -> Result<QuestionKind> {
    let range = resolve_range(GameType::ReadingNumbers, settings);
    let number = random_int(rng, range.min, range.max);
    let correct_answers = all_valid_forms(number)?;
    let number = u32::try_from(number).map_err(|_| QuizError::UnsupportedMagnitude(number))?;

    Ok(QuestionKind::ReadingNumber(ReadingNumberQuestion {
        number,
        correct_answers,
    }))
}

fn comparison_question<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &GameSettings,
) -> Result<QuestionKind> {
    let range = resolve_range(GameType::ComparingNumbers, settings);
    let (num1, num2) = comparison_pair(rng, range)?;

    Ok(QuestionKind::Comparison(ComparisonQuestion {
        num1,
        num2,
        correct_answer: Relation::of(num1, num2),
    }))
}

fn fraction_question<R: Rng + ?Sized>(rng: &mut R, settings: &GameSettings) -> Result<QuestionKind> {
    let (numerator, denominator) = fraction(rng, resolve_fraction_range(settings))?;
    Ok(QuestionKind::Fraction(FractionQuestion {
        numerator,
        denominator,
    }))
}
