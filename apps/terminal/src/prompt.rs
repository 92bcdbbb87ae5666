//! Text rendering of questions, feedback and summaries, and interpretation
//! of what the player types.

use numquiz_core::{
    format_number, AnswerHint, NumberFormat, Question, QuestionKind, SessionSummary, UserAnswer,
};

const OPTION_LABELS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Question text shown to the player, one line per entry.
pub fn question_lines(question: &Question, format: NumberFormat) -> Vec<String> {
    let n = |value: i64| format_number(value, format);

    match &question.kind {
        QuestionKind::Arithmetic(q) => {
            let mut lines = vec![format!(
                "{}: {} {} {} = ؟",
                q.operator.prompt(),
                n(q.num1),
                q.operator.symbol(),
                n(q.num2)
            )];
            if let Some(options) = &q.options {
                lines.extend(
                    options
                        .iter()
                        .zip(OPTION_LABELS)
                        .map(|(value, label)| format!("  {label}) {}", n(*value))),
                );
            }
            lines
        }
        QuestionKind::ReadingNumber(q) => vec![
            "اكتب الرقم التالي بالحروف العربية:".to_string(),
            format!("  {}", n(i64::from(q.number))),
        ],
        QuestionKind::Comparison(q) => vec![
            "قارن بين الرقمين:".to_string(),
            format!("  {}  ؟  {}", n(q.num1), n(q.num2)),
            "  اكتب > أو < أو =".to_string(),
        ],
        QuestionKind::Fraction(q) => vec![
            format!(
                "لون الكسر {}/{} على البيتزا:",
                n(i64::from(q.numerator)),
                n(i64::from(q.denominator))
            ),
            format!("  كم شريحة تلون من {} شرائح؟", n(i64::from(q.denominator))),
        ],
    }
}

/// Turn a line typed by the player into an answer for `question`.
///
/// For multiple-choice questions an option letter selects that option;
/// anything else is taken as typed. Numeric text stays text so that the
/// verifier can parse Arabic-Indic digits.
pub fn interpret_input(question: &Question, input: &str) -> UserAnswer {
    let input = input.trim();

    if let QuestionKind::Arithmetic(q) = &question.kind {
        if let Some(options) = &q.options {
            if let Some(value) = option_for_label(options, input) {
                return UserAnswer::Number(value);
            }
        }
    }

    UserAnswer::from(input)
}

fn option_for_label(options: &[i64], input: &str) -> Option<i64> {
    let mut chars = input.chars();
    let label = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() {
        return None;
    }
    OPTION_LABELS
        .iter()
        .position(|l| *l == label)
        .and_then(|index| options.get(index).copied())
}

/// The correct answer as it should be shown after a wrong answer or skip.
pub fn correct_answer_text(question: &Question, format: NumberFormat) -> String {
    match &question.kind {
        QuestionKind::Arithmetic(q) => format_number(q.correct_answer, format),
        QuestionKind::ReadingNumber(q) => q
            .correct_answers
            .first()
            .cloned()
            .unwrap_or_else(|| format_number(i64::from(q.number), format)),
        QuestionKind::Comparison(q) => {
            format!("{} ({})", q.correct_answer.symbol(), q.correct_answer.label())
        }
        QuestionKind::Fraction(q) => format_number(i64::from(q.numerator), format),
    }
}

/// Feedback line for an answered or skipped question.
pub fn feedback_lines(feedback: &crate::session::Feedback) -> Vec<String> {
    use crate::session::Outcome;

    let mut lines = match feedback.outcome {
        Outcome::Correct => vec![format!("صحيح! أحسنت (+{})", feedback.points)],
        Outcome::Wrong => vec![format!("خطأ! الإجابة الصحيحة: {}", feedback.correct_answer)],
        Outcome::Skipped => vec![format!("تم التخطي. الإجابة الصحيحة: {}", feedback.correct_answer)],
        Outcome::TimeUp => vec![format!("انتهى الوقت! الإجابة الصحيحة: {}", feedback.correct_answer)],
    };
    if let Some(hint) = feedback.hint {
        lines.push(hint_line(hint));
    }
    lines
}

fn hint_line(hint: AnswerHint) -> String {
    format!("  ({})", hint.message())
}

/// Final results screen.
pub fn summary_lines(summary: &SessionSummary) -> Vec<String> {
    let n = |value: usize| format_number(value as i64, summary.number_format);
    let percentage = summary.percentage().round() as i64;

    vec![
        "انتهت اللعبة!".to_string(),
        format!("{} - {}", summary.game_type.label(), summary.difficulty.label()),
        format!("النتيجة: {}", format_number(i64::from(summary.total_score), summary.number_format)),
        format!("إجابات صحيحة: {} من {}", n(summary.correct_answers), n(summary.questions_count)),
        format!("إجابات خاطئة: {}", n(summary.wrong_answers)),
        format!("أسئلة متخطاة: {}", n(summary.skipped_questions)),
        format!("الوقت: {}", duration_text(summary.total_time, summary.number_format)),
        format!("{}% {}", format_number(percentage, summary.number_format), summary.grade().label()),
    ]
}

/// Seconds as `m:ss`.
pub fn duration_text(seconds: f64, format: NumberFormat) -> String {
    let total = seconds.max(0.0).round() as i64;
    let text = format!("{}:{:02}", total / 60, total % 60);
    match format {
        NumberFormat::Arabic => numquiz_core::digits::to_arabic_digits(&text),
        NumberFormat::English => text,
    }
}
