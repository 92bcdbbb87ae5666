//! Operand pair generation for each kind of question.
//!
//! Every generator validates its range first and fails with
//! [`QuizError::InvalidRange`] instead of clamping a malformed one.

use crate::error::{QuizError, Result};
use crate::types::{FractionRange, NumberRange, Operation};
use rand::Rng;

/// Probability that two equal comparison operands are pulled apart.
const COMPARISON_SPLIT_PROBABILITY: f64 = 0.9;

/// Uniform integer in `[min, max]`. Callers guarantee `min <= max`.
pub(crate) fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

/// Two operands drawn independently from the range.
pub fn addition_pair<R: Rng + ?Sized>(rng: &mut R, range: NumberRange) -> Result<(i64, i64)> {
    range.validate()?;
    Ok((
        random_int(rng, range.min, range.max),
        random_int(rng, range.min, range.max),
    ))
}

/// Two operands with the larger first, so the difference is never negative.
pub fn subtraction_pair<R: Rng + ?Sized>(rng: &mut R, range: NumberRange) -> Result<(i64, i64)> {
    let (a, b) = addition_pair(rng, range)?;
    Ok(if a < b { (b, a) } else { (a, b) })
}

/// Two operands drawn independently from the range.
pub fn multiplication_pair<R: Rng + ?Sized>(
    rng: &mut R,
    range: NumberRange,
) -> Result<(i64, i64)> {
    addition_pair(rng, range)
}

/// `(dividend, divisor)` with an exact integer quotient.
///
/// The divisor comes from `[max(1, √min), √max]` and the quotient from
/// `[max(1, min / divisor), max / divisor]`, so the dividend stays roughly
/// inside the range.
pub fn division_pair<R: Rng + ?Sized>(rng: &mut R, range: NumberRange) -> Result<(i64, i64)> {
    range.validate()?;
    if range.max < 1 {
        return Err(QuizError::invalid_range(
            range.min,
            range.max,
            "division needs a maximum of at least 1",
        ));
    }

    let divisor = random_int(rng, floor_sqrt(range.min).max(1), floor_sqrt(range.max));

    let quotient_min = (range.min / divisor).max(1);
    let quotient_max = (range.max / divisor).max(quotient_min);
    let quotient = random_int(rng, quotient_min, quotient_max);

    Ok((divisor * quotient, divisor))
}

/// Two operands for a comparison question.
///
/// Equal draws are usually split by one (staying inside the range) so that
/// "=" shows up only occasionally.
pub fn comparison_pair<R: Rng + ?Sized>(rng: &mut R, range: NumberRange) -> Result<(i64, i64)> {
    let (a, mut b) = addition_pair(rng, range)?;

    if a == b && rng.gen_bool(COMPARISON_SPLIT_PROBABILITY) {
        let (up, down) = (a.checked_add(1), a.checked_sub(1));
        let preferred = if rng.gen_bool(0.5) { [up, down] } else { [down, up] };
        if let Some(nudged) = preferred.into_iter().flatten().find(|n| range.contains(*n)) {
            b = nudged;
        }
    }

    Ok((a, b))
}

/// Operands for one arithmetic operation.
pub fn operands_for<R: Rng + ?Sized>(
    rng: &mut R,
    operation: Operation,
    range: NumberRange,
) -> Result<(i64, i64)> {
    match operation {
        Operation::Add => addition_pair(rng, range),
        Operation::Subtract => subtraction_pair(rng, range),
        Operation::Multiply => multiplication_pair(rng, range),
        Operation::Divide => division_pair(rng, range),
    }
}

/// `(numerator, denominator)` with `numerator <= denominator`.
pub fn fraction<R: Rng + ?Sized>(rng: &mut R, range: FractionRange) -> Result<(u32, u32)> {
    range.validate()?;

    let denominator = rng.gen_range(range.denominator_min..=range.denominator_max);
    let numerator_max = range.numerator_max.min(denominator);
    let numerator_min = range.numerator_min.min(numerator_max);
    let numerator = rng.gen_range(numerator_min..=numerator_max);

    Ok((numerator, denominator))
}

fn floor_sqrt(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    let square_fits = |r: i64| r.checked_mul(r).is_some_and(|sq| sq <= n);
    let mut root = (n as f64).sqrt() as i64;
    while !square_fits(root) {
        root -= 1;
    }
    while square_fits(root + 1) {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn addition_stays_in_range() {
        let mut rng = rng();
        let range = NumberRange::new(0, 9);
        for _ in 0..1000 {
            let (a, b) = addition_pair(&mut rng, range).unwrap();
            assert!(range.contains(a) && range.contains(b));
        }
    }

    #[test]
    fn multiplication_stays_in_range() {
        let mut rng = rng();
        let range = NumberRange::new(10, 99);
        for _ in 0..1000 {
            let (a, b) = multiplication_pair(&mut rng, range).unwrap();
            assert!(range.contains(a) && range.contains(b));
        }
    }

    #[test]
    fn subtraction_never_negative() {
        let mut rng = rng();
        for _ in 0..1000 {
            let (a, b) = subtraction_pair(&mut rng, NumberRange::new(0, 999)).unwrap();
            assert!(a >= b);
        }
    }

    #[test]
    fn division_is_exact() {
        let mut rng = rng();
        for range in [
            NumberRange::new(0, 100),
            NumberRange::new(100, 10_000),
            NumberRange::new(10_000, 1_000_000),
            NumberRange::new(1, 1),
        ] {
            for _ in 0..500 {
                let (dividend, divisor) = division_pair(&mut rng, range).unwrap();
                assert!(divisor >= 1);
                assert_eq!(dividend % divisor, 0);
            }
        }
    }

    #[test]
    fn division_rejects_zero_maximum() {
        let mut rng = rng();
        assert!(matches!(
            division_pair(&mut rng, NumberRange::new(0, 0)),
            Err(QuizError::InvalidRange { .. })
        ));
    }

    #[test]
    fn malformed_range_is_rejected() {
        let mut rng = rng();
        let range = NumberRange::new(50, 10);
        assert!(addition_pair(&mut rng, range).is_err());
        assert!(division_pair(&mut rng, range).is_err());
        assert!(comparison_pair(&mut rng, range).is_err());
    }

    #[test]
    fn comparison_mostly_distinct_and_in_range() {
        let mut rng = rng();
        let range = NumberRange::new(0, 2);
        let mut equal = 0;
        for _ in 0..3000 {
            let (a, b) = comparison_pair(&mut rng, range).unwrap();
            assert!(range.contains(a) && range.contains(b));
            if a == b {
                equal += 1;
            }
        }
        // A third of the draws collide and about a tenth of those stay equal
        assert!(equal > 0);
        assert!(equal < 300);
    }

    #[test]
    fn comparison_single_value_range_stays_equal() {
        let mut rng = rng();
        for _ in 0..20 {
            assert_eq!(comparison_pair(&mut rng, NumberRange::new(4, 4)).unwrap(), (4, 4));
        }
    }

    #[test]
    fn fraction_numerator_within_denominator() {
        let mut rng = rng();
        let range = FractionRange {
            denominator_min: 2,
            denominator_max: 9,
            numerator_min: 1,
            numerator_max: 8,
        };
        for _ in 0..1000 {
            let (numerator, denominator) = fraction(&mut rng, range).unwrap();
            assert!((2..=9).contains(&denominator));
            assert!(numerator <= denominator);
            assert!(numerator >= 1);
        }
    }

    #[test]
    fn floor_sqrt_boundaries() {
        assert_eq!(floor_sqrt(0), 0);
        assert_eq!(floor_sqrt(99), 9);
        assert_eq!(floor_sqrt(100), 10);
        assert_eq!(floor_sqrt(1_000_000), 1000);
        assert_eq!(floor_sqrt(i64::MAX), 3_037_000_499);
    }

    #[test]
    fn division_over_the_whole_i64_range() {
        let mut rng = rng();
        for _ in 0..1000 {
            let (dividend, divisor) = division_pair(&mut rng, NumberRange::new(0, i64::MAX)).unwrap();
            assert!((1..=3_037_000_499).contains(&divisor));
            assert_eq!(dividend % divisor, 0);
        }
    }

    #[test]
    fn comparison_at_i64_max_stays_in_range() {
        let mut rng = rng();
        for _ in 0..50 {
            assert_eq!(
                comparison_pair(&mut rng, NumberRange::new(i64::MAX, i64::MAX)).unwrap(),
                (i64::MAX, i64::MAX)
            );
            let (a, b) = comparison_pair(&mut rng, NumberRange::new(i64::MAX - 1, i64::MAX)).unwrap();
            assert!(a >= i64::MAX - 1 && b >= i64::MAX - 1);
        }
    }
}
