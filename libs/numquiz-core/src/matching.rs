//! Fuzzy matching of written answers (Levenshtein distance).

use crate::arabic::{all_valid_forms, normalize};
use serde::{Deserialize, Serialize};

/// Calculate Levenshtein distance between two strings, counted in chars.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Use two rows instead of full matrix for memory efficiency
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity ratio in `[0, 1]`: one minus the edit distance over the longer
/// length. Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    1.0 - (distance as f64 / max_len as f64)
}

/// Whether `input` matches any candidate after normalization, either exactly
/// or with a similarity of at least `threshold`.
pub fn is_match<S: AsRef<str>>(input: &str, candidates: &[S], threshold: f64) -> bool {
    let input = normalize(input);

    candidates.iter().any(|candidate| {
        let candidate = normalize(candidate.as_ref());
        candidate == input || similarity(&input, &candidate) >= threshold
    })
}

/// Check a written answer against every valid spelling of `number`.
///
/// Numbers without word forms never match.
pub fn is_number_written_correctly(input: &str, number: i64, threshold: f64) -> bool {
    match all_valid_forms(number) {
        Ok(forms) => is_match(input, &forms, threshold),
        Err(err) => {
            tracing::debug!(number, error = %err, "no word forms to match against");
            false
        }
    }
}

/// Closest candidate to a written answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestMatch {
    /// The candidate as given (not normalized).
    pub candidate: String,
    pub score: f64,
}

/// Find the candidate most similar to `input`. Candidates with zero
/// similarity are never reported.
pub fn find_best_match<S: AsRef<str>>(input: &str, candidates: &[S]) -> Option<BestMatch> {
    let input = normalize(input);
    let mut best: Option<BestMatch> = None;

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let score = similarity(&input, &normalize(candidate));
        let current = best.as_ref().map_or(0.0, |b| b.score);
        if score > current {
            best = Some(BestMatch {
                candidate: candidate.to_string(),
                score,
            });
        }
    }

    best
}

/// Hint shown to a player whose written answer was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerHint {
    VeryClose,
    Close,
    TryAgain,
}

impl AnswerHint {
    pub fn from_score(score: f64) -> Option<Self> {
        if score >= 0.9 {
            Some(Self::VeryClose)
        } else if score >= 0.7 {
            Some(Self::Close)
        } else if score >= 0.5 {
            Some(Self::TryAgain)
        } else {
            None
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::VeryClose => "قريب جداً! تحقق من الإملاء",
            Self::Close => "قريب! راجع الكتابة",
            Self::TryAgain => "حاول مرة أخرى",
        }
    }
}

/// Hint for `input` based on its closest candidate.
pub fn answer_hint<S: AsRef<str>>(input: &str, candidates: &[S]) -> Option<AnswerHint> {
    find_best_match(input, candidates).and_then(|best| AnswerHint::from_score(best.score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
    }

    #[test]
    fn test_no_transposition_discount() {
        assert_eq!(levenshtein_distance("ab", "ba"), 2);
    }

    #[test]
    fn test_distance_counts_arabic_chars() {
        assert_eq!(levenshtein_distance("خمسة", "خمسه"), 1);
        assert_eq!(levenshtein_distance("ستة", ""), 3);
    }

    #[test]
    fn test_similarity() {
        assert_eq!(similarity("abc", "abc"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("خمسة", "خمسة"), 1.0);
        assert_eq!(similarity("خمسة", "خمسه"), 0.75);
        assert!(similarity("kitten", "sitting") > 0.5);
        assert!(similarity("abc", "xyz") < 0.5);
    }

    #[test]
    fn test_is_match_normalizes_input() {
        let candidates = ["أربعة"];
        assert!(is_match("اربعه", &candidates, 0.7));
        assert!(is_match("  أَرْبَعَة ", &candidates, 0.7));
    }

    #[test]
    fn test_is_match_tolerates_typos() {
        let candidates = ["ثلاثمائة"];
        assert!(is_match("ثلاثماية", &candidates, 0.7));
        assert!(!is_match("سبعة", &candidates, 0.7));
    }

    #[test]
    fn test_threshold_is_configurable() {
        let candidates = ["خمسة"];
        // "خمسا" vs "خمسه": 3 of 4 chars agree
        assert!(is_match("خمسا", &candidates, 0.7));
        assert!(!is_match("خمسا", &candidates, 0.8));
    }

    #[test]
    fn test_written_numbers() {
        assert!(is_number_written_correctly("واحد وعشرون", 21, 0.7));
        assert!(is_number_written_correctly("واحد عشرون", 21, 0.7));
        assert!(!is_number_written_correctly("تسعة", 21, 0.7));
        assert!(!is_number_written_correctly("عشرة آلاف", 10_000, 0.7));
    }

    #[test]
    fn test_best_match() {
        let candidates = ["عشرون", "ثلاثون"];
        let best = find_best_match("عشرين", &candidates).unwrap();
        assert_eq!(best.candidate, "عشرون");
        assert!(best.score > 0.7);

        assert_eq!(find_best_match("abc", &["xyz"]), None);
        assert_eq!(find_best_match::<&str>("abc", &[]), None);
    }

    #[test]
    fn test_hints() {
        assert_eq!(AnswerHint::from_score(0.95), Some(AnswerHint::VeryClose));
        assert_eq!(AnswerHint::from_score(0.75), Some(AnswerHint::Close));
        assert_eq!(AnswerHint::from_score(0.5), Some(AnswerHint::TryAgain));
        assert_eq!(AnswerHint::from_score(0.2), None);

        let candidates = ["خمسة"];
        assert_eq!(answer_hint("خمسا", &candidates), Some(AnswerHint::Close));
    }
}
