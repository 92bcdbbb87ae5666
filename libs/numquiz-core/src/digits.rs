//! Conversion between Latin and Arabic-Indic digits.

use crate::error::{QuizError, Result};
use crate::types::NumberFormat;

const ARABIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Replace every Latin digit with its Arabic-Indic counterpart.
pub fn to_arabic_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => ARABIC_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Replace every Arabic-Indic digit with its Latin counterpart.
pub fn to_latin_digits(text: &str) -> String {
    text.chars()
        .map(|c| match ARABIC_DIGITS.iter().position(|&d| d == c) {
            Some(d) => char::from(b'0' + d as u8),
            None => c,
        })
        .collect()
}

/// Render a number in the requested digit set.
pub fn format_number(n: i64, format: NumberFormat) -> String {
    match format {
        NumberFormat::Arabic => to_arabic_digits(&n.to_string()),
        NumberFormat::English => n.to_string(),
    }
}

/// Parse a typed number written with either digit set.
pub fn parse_user_input(input: &str) -> Result<i64> {
    let converted = to_latin_digits(input.trim());
    converted
        .parse::<i64>()
        .map_err(|_| QuizError::ParseFailure {
            input: input.to_string(),
        })
}
