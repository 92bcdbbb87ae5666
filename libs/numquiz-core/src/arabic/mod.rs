//! Arabic word forms for the numbers 0-9999.
//!
//! A number has several acceptable spellings: masculine and feminine
//! agreement, informal spellings of common numbers, and compound phrases
//! written without the "و" connector. [`all_valid_forms`] collects them,
//! together with their [`normalize`]d counterparts, into the set a written
//! answer is checked against.

pub mod tables;

use crate::config::MAX_WORD_NUMBER;
use crate::error::{QuizError, Result};
use tables::{spelling_variants, teens, units, Gender, ThousandsForm, CONNECTOR, HUNDREDS, TENS};

/// Every valid Arabic spelling of `n`, deduplicated, in a stable order
/// (masculine form first).
pub fn number_to_words(n: i64) -> Result<Vec<String>> {
    let value = u32::try_from(n)
        .ok()
        .filter(|value| i64::from(*value) <= MAX_WORD_NUMBER)
        .ok_or(QuizError::UnsupportedMagnitude(n))?;

    let mut forms = Vec::new();
    for gender in Gender::ALL {
        push_unique(&mut forms, compose(value, gender));
    }
    for variant in spelling_variants(value) {
        push_unique(&mut forms, (*variant).to_string());
    }

    let joiner = format!(" {CONNECTOR}");
    let without_connector: Vec<String> = forms
        .iter()
        .filter(|form| form.contains(&joiner))
        .map(|form| form.replace(&joiner, " "))
        .collect();
    for form in without_connector {
        push_unique(&mut forms, form);
    }

    Ok(forms)
}

/// Word forms of `n` plus their normalized spellings.
pub fn all_valid_forms(n: i64) -> Result<Vec<String>> {
    let mut forms = number_to_words(n)?;
    let normalized: Vec<String> = forms.iter().map(|form| normalize(form)).collect();
    for form in normalized {
        push_unique(&mut forms, form);
    }
    Ok(forms)
}

/// Normalize Arabic text for comparison.
///
/// Strips diacritics, folds alef variants to bare alef, teh marbuta to heh
/// and alef maqsura to yeh, collapses whitespace and lowercases.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .chars()
        .filter(|c| !('\u{064B}'..='\u{065F}').contains(c))
        .map(|c| match c {
            'أ' | 'إ' | 'آ' => 'ا',
            'ة' => 'ه',
            'ى' => 'ي',
            _ => c,
        })
        .collect();

    folded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn compose(n: u32, gender: Gender) -> String {
    if n == 0 {
        return units(gender)[0].to_string();
    }

    let mut parts: Vec<String> = Vec::with_capacity(3);

    let thousands = n / 1000;
    if thousands > 0 {
        let form = ThousandsForm::for_count(thousands);
        match form {
            ThousandsForm::One | ThousandsForm::Two => parts.push(form.word().to_string()),
            // Counted thousands always take the masculine count word
            ThousandsForm::Plural | ThousandsForm::Many => parts.push(format!(
                "{} {}",
                units(Gender::Masculine)[thousands as usize],
                form.word()
            )),
        }
    }

    let hundreds = (n % 1000) / 100;
    if hundreds > 0 {
        parts.push(HUNDREDS[hundreds as usize].to_string());
    }

    let remainder = n % 100;
    match remainder {
        0 => {}
        1..=9 => parts.push(units(gender)[remainder as usize].to_string()),
        10..=19 => parts.push(teens(gender)[(remainder - 10) as usize].to_string()),
        _ => {
            let tens = (remainder / 10) as usize;
            let unit = (remainder % 10) as usize;
            if unit > 0 {
                // Units precede tens: "one and twenty"
                parts.push(format!("{} {}{}", units(gender)[unit], CONNECTOR, TENS[tens]));
            } else {
                parts.push(TENS[tens].to_string());
            }
        }
    }

    parts.join(&format!(" {CONNECTOR}"))
}

fn push_unique(forms: &mut Vec<String>, form: String) {
    if !forms.contains(&form) {
        forms.push(form);
    }
}
