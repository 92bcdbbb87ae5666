//! Core types for the quiz engine.

use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};

/// Kind of game a session is played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameType {
    Addition,
    Subtraction,
    AdditionSubtraction,
    Multiplication,
    Division,
    MultiplicationDivision,
    Arithmetic,
    ReadingNumbers,
    ComparingNumbers,
    Fractions,
}

impl Default for GameType {
    fn default() -> Self {
        Self::Addition
    }
}

impl GameType {
    pub const ALL: [GameType; 10] = [
        Self::Addition,
        Self::Subtraction,
        Self::AdditionSubtraction,
        Self::Multiplication,
        Self::Division,
        Self::MultiplicationDivision,
        Self::Arithmetic,
        Self::ReadingNumbers,
        Self::ComparingNumbers,
        Self::Fractions,
    ];

    /// Get the game type name as used in settings and history.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::AdditionSubtraction => "additionSubtraction",
            Self::Multiplication => "multiplication",
            Self::Division => "division",
            Self::MultiplicationDivision => "multiplicationDivision",
            Self::Arithmetic => "arithmetic",
            Self::ReadingNumbers => "readingNumbers",
            Self::ComparingNumbers => "comparingNumbers",
            Self::Fractions => "fractions",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|game| game.as_str() == s)
    }

    /// Operations a question of this game may use. Empty for non-arithmetic games.
    pub fn operations(&self) -> &'static [Operation] {
        match self {
            Self::Addition => &[Operation::Add],
            Self::Subtraction => &[Operation::Subtract],
            Self::AdditionSubtraction => &[Operation::Add, Operation::Subtract],
            Self::Multiplication => &[Operation::Multiply],
            Self::Division => &[Operation::Divide],
            Self::MultiplicationDivision => &[Operation::Multiply, Operation::Divide],
            Self::Arithmetic => &[
                Operation::Add,
                Operation::Subtract,
                Operation::Multiply,
                Operation::Divide,
            ],
            Self::ReadingNumbers | Self::ComparingNumbers | Self::Fractions => &[],
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        !self.operations().is_empty()
    }

    /// Arabic display name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Addition => "لعبة الجمع",
            Self::Subtraction => "لعبة الطرح",
            Self::AdditionSubtraction => "الجمع والطرح",
            Self::Multiplication => "لعبة الضرب",
            Self::Division => "لعبة القسمة",
            Self::MultiplicationDivision => "الضرب والقسمة",
            Self::Arithmetic => "العمليات الحسابية",
            Self::ReadingNumbers => "قراءة الأعداد",
            Self::ComparingNumbers => "مقارنة الأعداد",
            Self::Fractions => "الكسور",
        }
    }
}

/// Arithmetic operator of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operation. Division truncates, so callers must only pass
    /// operand pairs produced by the division generator. Operands must come
    /// from a range accepted by `factory::validate_ranges`, which keeps the
    /// result inside `i64`.
    pub fn apply(&self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }

    /// Game whose range table governs operands of this operation.
    pub fn range_key(&self) -> GameType {
        match self {
            Self::Add => GameType::Addition,
            Self::Subtract => GameType::Subtraction,
            Self::Multiply => GameType::Multiplication,
            Self::Divide => GameType::Division,
        }
    }

    /// Arabic question prompt ("what is the result of ...").
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Add => "ما ناتج جمع",
            Self::Subtract => "ما ناتج طرح",
            Self::Multiply => "ما ناتج ضرب",
            Self::Divide => "ما ناتج قسمة",
        }
    }
}

/// Difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Low,
    Medium,
    High,
    Custom,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Low
    }
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Custom => "custom",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "سهل",
            Self::Medium => "متوسط",
            Self::High => "صعب",
            Self::Custom => "مخصص",
        }
    }
}

/// How answers are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionMode {
    MultipleChoice,
    Written,
}

impl Default for QuestionMode {
    fn default() -> Self {
        Self::MultipleChoice
    }
}

impl QuestionMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "multipleChoice" => Some(Self::MultipleChoice),
            "written" => Some(Self::Written),
            _ => None,
        }
    }
}

/// Digit set used when displaying numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// Arabic-Indic digits (٠١٢...).
    Arabic,
    /// Latin digits (012...).
    English,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::Arabic
    }
}

impl NumberFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "arabic" => Some(Self::Arabic),
            "english" => Some(Self::English),
            _ => None,
        }
    }
}

/// Relation of the first operand to the second in a comparison question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "=")]
    Equal,
}

impl Relation {
    pub fn of(lhs: i64, rhs: i64) -> Self {
        match lhs.cmp(&rhs) {
            std::cmp::Ordering::Greater => Self::Greater,
            std::cmp::Ordering::Less => Self::Less,
            std::cmp::Ordering::Equal => Self::Equal,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equal => "=",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Greater => "أكبر من",
            Self::Less => "أصغر من",
            Self::Equal => "يساوي",
        }
    }
}

/// Inclusive operand range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: i64,
    pub max: i64,
}

impl NumberRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Check that the range is non-empty and non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.min < 0 {
            return Err(QuizError::invalid_range(
                self.min,
                self.max,
                "operands must be non-negative",
            ));
        }
        if self.min > self.max {
            return Err(QuizError::invalid_range(
                self.min,
                self.max,
                "min is greater than max",
            ));
        }
        Ok(())
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Bounds for fraction questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FractionRange {
    pub denominator_min: u32,
    pub denominator_max: u32,
    pub numerator_min: u32,
    pub numerator_max: u32,
}

impl FractionRange {
    pub fn validate(&self) -> Result<()> {
        let (dmin, dmax) = (i64::from(self.denominator_min), i64::from(self.denominator_max));
        if self.denominator_min < 2 {
            return Err(QuizError::invalid_range(
                dmin,
                dmax,
                "denominator must be at least 2",
            ));
        }
        if self.denominator_min > self.denominator_max {
            return Err(QuizError::invalid_range(
                dmin,
                dmax,
                "denominator min is greater than max",
            ));
        }
        if self.numerator_min > self.numerator_max {
            return Err(QuizError::invalid_range(
                i64::from(self.numerator_min),
                i64::from(self.numerator_max),
                "numerator min is greater than max",
            ));
        }
        Ok(())
    }
}

/// Per-game overrides used when difficulty is `Custom`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addition: Option<NumberRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtraction: Option<NumberRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplication: Option<NumberRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<NumberRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_numbers: Option<NumberRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparing_numbers: Option<NumberRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fractions: Option<FractionRange>,
}

impl CustomRanges {
    /// Operand override for a range key, if any. Mixed games and fractions have none.
    pub fn range_for(&self, key: GameType) -> Option<NumberRange> {
        match key {
            GameType::Addition => self.addition,
            GameType::Subtraction => self.subtraction,
            GameType::Multiplication => self.multiplication,
            GameType::Division => self.division,
            GameType::ReadingNumbers => self.reading_numbers,
            GameType::ComparingNumbers => self.comparing_numbers,
            GameType::AdditionSubtraction
            | GameType::MultiplicationDivision
            | GameType::Arithmetic
            | GameType::Fractions => None,
        }
    }
}

/// Settings a game is started with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub question_mode: QuestionMode,
    pub number_format: NumberFormat,
    pub timer_enabled: bool,
    pub questions_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_ranges: Option<CustomRanges>,
    /// Minimum similarity for a written number to count as correct.
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
}

fn default_match_threshold() -> f64 {
    crate::config::DEFAULT_MATCH_THRESHOLD
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            question_mode: QuestionMode::default(),
            number_format: NumberFormat::default(),
            timer_enabled: false,
            questions_count: crate::config::DEFAULT_QUESTIONS_COUNT,
            custom_ranges: None,
            match_threshold: default_match_threshold(),
        }
    }
}

/// A generated question.
///
/// Serialised flat: the variant's fields sit next to `id` and `type`, and
/// `type` alone decides the variant when reading a question back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionFields")]
pub struct Question {
    /// Position in the generated sequence, starting at 0.
    pub id: usize,
    /// For arithmetic questions, the game of the operation actually asked,
    /// so a `-` question in a mixed game is a `subtraction` question.
    #[serde(rename = "type")]
    pub game_type: GameType,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QuestionKind {
    Arithmetic(ArithmeticQuestion),
    ReadingNumber(ReadingNumberQuestion),
    Comparison(ComparisonQuestion),
    Fraction(FractionQuestion),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArithmeticQuestion {
    pub num1: i64,
    pub num2: i64,
    pub operator: Operation,
    pub correct_answer: i64,
    /// Shuffled candidates, present only in multiple-choice mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingNumberQuestion {
    pub number: u32,
    /// Every accepted spelling, deduplicated.
    pub correct_answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonQuestion {
    pub num1: i64,
    pub num2: i64,
    pub correct_answer: Relation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FractionQuestion {
    pub numerator: u32,
    pub denominator: u32,
}

/// Every field any question variant can carry, as read from the wire.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionFields {
    id: usize,
    #[serde(rename = "type")]
    game_type: GameType,
    num1: Option<i64>,
    num2: Option<i64>,
    operator: Option<Operation>,
    correct_answer: Option<CorrectAnswerField>,
    options: Option<Vec<i64>>,
    number: Option<u32>,
    correct_answers: Option<Vec<String>>,
    numerator: Option<u32>,
    denominator: Option<u32>,
}

/// `correctAnswer` is a number for arithmetic and a symbol for comparison.
#[derive(Deserialize)]
#[serde(untagged)]
enum CorrectAnswerField {
    Number(i64),
    Relation(Relation),
}

impl TryFrom<QuestionFields> for Question {
    type Error = String;

    fn try_from(fields: QuestionFields) -> std::result::Result<Self, Self::Error> {
        let game_type = fields.game_type;
        let missing = |field: &str| format!("{} question is missing `{field}`", game_type.as_str());

        let kind = match game_type {
            GameType::Addition
            | GameType::Subtraction
            | GameType::AdditionSubtraction
            | GameType::Multiplication
            | GameType::Division
            | GameType::MultiplicationDivision
            | GameType::Arithmetic => {
                let operator = fields.operator.ok_or_else(|| missing("operator"))?;
                if !game_type.operations().contains(&operator) {
                    return Err(format!(
                        "operator {} does not belong to a {} question",
                        operator.symbol(),
                        game_type.as_str()
                    ));
                }
                let correct_answer = match fields.correct_answer {
                    Some(CorrectAnswerField::Number(n)) => n,
                    _ => return Err(missing("correctAnswer")),
                };
                QuestionKind::Arithmetic(ArithmeticQuestion {
                    num1: fields.num1.ok_or_else(|| missing("num1"))?,
                    num2: fields.num2.ok_or_else(|| missing("num2"))?,
                    operator,
                    correct_answer,
                    options: fields.options,
                })
            }
            GameType::ReadingNumbers => QuestionKind::ReadingNumber(ReadingNumberQuestion {
                number: fields.number.ok_or_else(|| missing("number"))?,
                correct_answers: fields.correct_answers.ok_or_else(|| missing("correctAnswers"))?,
            }),
            GameType::ComparingNumbers => {
                let correct_answer = match fields.correct_answer {
                    Some(CorrectAnswerField::Relation(relation)) => relation,
                    _ => return Err(missing("correctAnswer")),
                };
                QuestionKind::Comparison(ComparisonQuestion {
                    num1: fields.num1.ok_or_else(|| missing("num1"))?,
                    num2: fields.num2.ok_or_else(|| missing("num2"))?,
                    correct_answer,
                })
            }
            GameType::Fractions => QuestionKind::Fraction(FractionQuestion {
                numerator: fields.numerator.ok_or_else(|| missing("numerator"))?,
                denominator: fields.denominator.ok_or_else(|| missing("denominator"))?,
            }),
        };

        Ok(Self {
            id: fields.id,
            game_type,
            kind,
        })
    }
}

/// Raw answer submitted by the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserAnswer {
    Number(i64),
    Text(String),
}

impl From<i64> for UserAnswer {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for UserAnswer {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<&str> for UserAnswer {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for UserAnswer {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One entry of a session's answer log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: usize,
    pub user_answer: Option<UserAnswer>,
    pub is_correct: bool,
    pub is_skipped: bool,
    /// Seconds spent on the question.
    pub time_spent: f64,
}

impl AnswerRecord {
    pub fn answered(question_id: usize, answer: UserAnswer, is_correct: bool, time_spent: f64) -> Self {
        Self {
            question_id,
            user_answer: Some(answer),
            is_correct,
            is_skipped: false,
            time_spent,
        }
    }

    pub fn skipped(question_id: usize, time_spent: f64) -> Self {
        Self {
            question_id,
            user_answer: None,
            is_correct: false,
            is_skipped: true,
            time_spent,
        }
    }
}
