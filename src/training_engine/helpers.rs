//! Shared helpers used across the value, exercise and option generators.
//!
//! Sampling primitives (weighted pick, scaled decimal bounds, gcd) live here
//! so the generators only deal with their own constraint logic, plus the
//! small builders every topic uses to assemble answers and scenarios.

use rand::{
    distributions::{Distribution, WeightedIndex},
    seq::SliceRandom,
    Rng,
};

use crate::training_engine::models::*;

/// Ids given to answer options, in display order.
pub const OPTION_IDS: [&str; 4] = ["A", "B", "C", "D"];

/// Pick one type with probability proportional to `max(weight, 0)`.
///
/// When every weight is zero the pick is uniform over `items`.
/// Returns `None` only for an empty slice.
pub fn weighted_pick<'a, R: Rng + ?Sized>(
    items: &[&'a PreparedType],
    rng: &mut R,
) -> Option<&'a PreparedType> {
    match WeightedIndex::new(items.iter().map(|t| t.weight.max(0.0))) {
        Ok(dist) => items.get(dist.sample(rng)).copied(),
        Err(_) => items.choose(rng).copied(),
    }
}

/// Euclid's gcd on magnitudes. `gcd(0, 0)` is 1 so callers can divide by it.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    if a == 0 { 1 } else { a }
}

/// `10^precision` as a float.
pub fn scale_factor(precision: u32) -> f64 {
    10f64.powi(precision as i32)
}

/// Largest scaled magnitude a decimal may reach (2^53), so every grid
/// point stays exact in `f64` and segment arithmetic stays inside `i64`.
pub const MAX_SCALED_MAGNITUDE: f64 = 9_007_199_254_740_992.0;

/// Integer bounds of `[min, max]` at the given decimal scale,
/// `None` when no multiple of `10^-precision` lies inside or when the
/// scaled range exceeds [`MAX_SCALED_MAGNITUDE`].
pub fn scaled_bounds(min: f64, max: f64, precision: u32) -> Option<(i64, i64)> {
    let factor = scale_factor(precision);
    let lo = (min * factor - EPSILON).ceil();
    let hi = (max * factor + EPSILON).floor();
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return None;
    }
    if lo.abs() > MAX_SCALED_MAGNITUDE || hi.abs() > MAX_SCALED_MAGNITUDE {
        return None;
    }
    Some((lo as i64, hi as i64))
}

/// Fixed-point rendering with exactly `precision` fractional digits.
pub fn format_fixed(value: f64, precision: u32) -> String {
    let s = format!("{:.*}", precision as usize, value);
    // "-0.0" reads badly on a worksheet
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/// Build one answer option.
pub fn answer(id: &str, text: impl Into<String>, is_correct: bool, explanation: String) -> AnswerOption {
    AnswerOption { id: id.to_string(), text: text.into(), is_correct, explanation }
}

/// Assemble the final [`TrainingScenario`] from all its parts.
pub fn scenario(
    id: String, topic: TrainingTopic, branch_key: impl Into<String>,
    question: String, answers: Vec<AnswerOption>, payload: DrillPayload,
) -> TrainingScenario {
    TrainingScenario {
        scenario_id: id,
        topic,
        branch_key: branch_key.into(),
        question,
        answers,
        payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn int_type(weight: f64, max: i64) -> PreparedType {
        PreparedType {
            kind: ValueKind::NonNegativeInt,
            weight,
            gap: GapSettings::default(),
            domain: PreparedDomain::Integer { min: 0, max },
        }
    }

    #[test]
    fn gcd_handles_zero() {
        assert_eq!(gcd(0, 0), 1);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-4, 6), 2);
    }

    #[test]
    fn scaled_bounds_respect_precision() {
        assert_eq!(scaled_bounds(0.15, 0.45, 1), Some((2, 4)));
        assert_eq!(scaled_bounds(0.11, 0.19, 1), None);
        assert_eq!(scaled_bounds(-1.0, 1.0, 2), Some((-100, 100)));
        assert_eq!(scaled_bounds(0.3, 0.3, 1), Some((3, 3)));
    }

    #[test]
    fn scaled_bounds_reject_ranges_beyond_exact_f64() {
        assert_eq!(scaled_bounds(-1e17, 1e17, 2), None);
        assert_eq!(scaled_bounds(0.0, 1e10, 6), None);
        assert_eq!(scaled_bounds(0.0, 1e9, 6), Some((0, 1_000_000_000_000_000)));
    }

    #[test]
    fn format_fixed_pads_and_drops_negative_zero() {
        assert_eq!(format_fixed(3.5, 2), "3.50");
        assert_eq!(format_fixed(-0.0001, 2), "0.00");
        assert_eq!(format_fixed(-1.25, 2), "-1.25");
    }

    #[test]
    fn weighted_pick_ignores_zero_weight() {
        let heavy = int_type(10.0, 5);
        let dead = int_type(0.0, 9);
        let items = [&heavy, &dead];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let picked = weighted_pick(&items, &mut rng).unwrap();
            assert_eq!(picked.domain, heavy.domain);
        }
    }

    #[test]
    fn weighted_pick_falls_back_to_uniform() {
        let a = int_type(0.0, 1);
        let b = int_type(-5.0, 2);
        let items = [&a, &b];
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen_a = false;
        let mut seen_b = false;
        for _ in 0..200 {
            match weighted_pick(&items, &mut rng).unwrap().domain {
                PreparedDomain::Integer { max: 1, .. } => seen_a = true,
                _ => seen_b = true,
            }
        }
        assert!(seen_a && seen_b, "all-zero weights must still reach every type");
    }

    #[test]
    fn weighted_pick_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(weighted_pick(&[], &mut rng).is_none());
    }
}
