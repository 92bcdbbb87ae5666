//! Multiple-choice option sets around a correct answer.

use super::pairs::random_int;
use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffled option set of `total` distinct non-negative values containing
/// `correct` exactly once.
///
/// Distractor offsets scale with the answer's order of magnitude, so an
/// answer of 7 gets neighbours a few units away while 4500 gets neighbours
/// hundreds away.
pub fn generate_options<R: Rng + ?Sized>(rng: &mut R, correct: i64, total: usize) -> Vec<i64> {
    let magnitude = ((correct.unsigned_abs() as f64 + 1.0).log10().floor() as u32).max(1);
    let min_diff = 10_i64.pow(magnitude - 1).max(1);
    let max_diff = 10_i64.pow(magnitude).max(5);

    let mut options = vec![correct];
    options.extend(wrong_options(
        rng,
        correct,
        total.saturating_sub(1),
        min_diff,
        max_diff,
    ));
    options.shuffle(rng);
    options
}

/// Up to `count` distinct distractors near `correct`, never negative and
/// never equal to `correct`. Offsets that would overflow `i64` are skipped.
///
/// Random offsets in `[min_diff, max_diff]` are tried first; if they cannot
/// fill the set the remainder comes from `+1, -1, +2, -2, ...`.
pub fn wrong_options<R: Rng + ?Sized>(
    rng: &mut R,
    correct: i64,
    count: usize,
    min_diff: i64,
    max_diff: i64,
) -> Vec<i64> {
    let mut options: Vec<i64> = Vec::with_capacity(count);
    let accept = |options: &[i64], candidate: i64| {
        candidate >= 0 && candidate != correct && !options.contains(&candidate)
    };

    let max_attempts = count * 10;
    let mut attempts = 0;
    while options.len() < count && attempts < max_attempts {
        attempts += 1;

        let diff = random_int(rng, min_diff, max_diff);
        let candidate = if rng.gen_bool(0.5) {
            correct.checked_add(diff)
        } else {
            correct.checked_sub(diff)
        };
        if let Some(candidate) = candidate.filter(|c| accept(options.as_slice(), *c)) {
            options.push(candidate);
        }
    }

    let mut offset: i64 = 1;
    while options.len() < count {
        if let Some(candidate) = correct
            .checked_add(offset)
            .filter(|c| accept(options.as_slice(), *c))
        {
            options.push(candidate);
        }
        offset = if offset > 0 { -offset } else { -offset + 1 };
    }

    options
}
