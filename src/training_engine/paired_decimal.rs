//! Paired decimal generation for decimal-vs-decimal exercises.
//!
//! Two decimals drawn independently almost always differ in their whole
//! part, which makes the comparison trivial. Here the pair is built on
//! purpose: most of the time both sides share one integer part (3.47 vs
//! 3.52), otherwise they straddle a boundary (3.9 vs 4.1).
//!
//! Integer part means `floor(value)` throughout.

use rand::{seq::SliceRandom, Rng};

use crate::training_engine::{
    helpers::scaled_bounds,
    models::{GapSettings, GeneratedValue, PreparedDomain, PreparedType, EPSILON},
    values::decimal_value,
};

/// Probability of trying the shared-integer-part strategy first.
pub const SAME_INTEGER_BIAS: f64 = 0.75;
/// Attempts for the shared-integer-part strategy.
pub const SAME_INTEGER_ATTEMPTS: usize = 120;
/// Attempts for the adjacent-integer-parts strategy.
pub const ADJACENT_INTEGER_ATTEMPTS: usize = 40;
/// Half-width of the "near" window, as a share of the segment span.
pub const NEAR_WINDOW_RATIO: f64 = 0.1;
/// Width of the "high"/"low" windows, as a share of the segment span.
pub const EDGE_WINDOW_RATIO: f64 = 0.2;

/// Where inside an integer segment a value is placed.
#[derive(Debug, Clone, Copy)]
enum Placement {
    Random,
    Near(f64),
    High,
    Low,
}

struct DecimalSide<'a> {
    min: f64,
    max: f64,
    precisions: &'a [u32],
}

impl<'a> DecimalSide<'a> {
    fn of(ty: &'a PreparedType) -> Option<Self> {
        match &ty.domain {
            PreparedDomain::Decimal { min, max, precisions } => {
                Some(DecimalSide { min: *min, max: *max, precisions })
            }
            _ => None,
        }
    }

    fn whole_parts(&self) -> (i64, i64) {
        (self.min.floor() as i64, self.max.floor() as i64)
    }

    /// Scaled bounds of `[w, w + 1)` clipped to the side's range.
    fn segment(&self, whole: i64, precision: u32) -> Option<(i64, i64)> {
        let step = 10i64.pow(precision);
        let (lo, hi) = scaled_bounds(self.min, self.max, precision)?;
        let start = whole.checked_mul(step)?;
        let end = whole.checked_add(1)?.checked_mul(step)?.checked_sub(1)?;
        let lo = lo.max(start);
        let hi = hi.min(end);
        (lo <= hi).then_some((lo, hi))
    }

    fn sample<R: Rng + ?Sized>(&self, whole: i64, placement: Placement, rng: &mut R) -> Option<GeneratedValue> {
        let precision = *self.precisions.choose(rng)?;
        let (lo, hi) = self.segment(whole, precision)?;
        let scaled = match placement {
            Placement::Random => rng.gen_range(lo..=hi),
            Placement::Near(target) => {
                let centre = ((target * 10f64.powi(precision as i32)).round() as i64).clamp(lo, hi);
                let w = window(hi - lo, NEAR_WINDOW_RATIO);
                rng.gen_range((centre - w).max(lo)..=(centre + w).min(hi))
            }
            Placement::High => rng.gen_range((hi - window(hi - lo, EDGE_WINDOW_RATIO)).max(lo)..=hi),
            Placement::Low => rng.gen_range(lo..=(lo + window(hi - lo, EDGE_WINDOW_RATIO)).min(hi)),
        };
        Some(decimal_value(scaled, precision))
    }
}

fn window(span: i64, ratio: f64) -> i64 {
    ((span as f64 * ratio).round() as i64).max(1)
}

fn distinct(a: &GeneratedValue, b: &GeneratedValue) -> bool {
    (a.value - b.value).abs() >= EPSILON
}

/// Build a `(left, right)` decimal pair that is hard to compare.
///
/// Returns `None` when both types are not decimal, when `gap` rules out
/// both strategies, or when neither strategy finds a pair within its
/// attempt budget. The caller still checks the gap on the result.
pub fn paired_decimals<R: Rng + ?Sized>(
    left: &PreparedType,
    right: &PreparedType,
    gap: &GapSettings,
    rng: &mut R,
) -> Option<(GeneratedValue, GeneratedValue)> {
    let l = DecimalSide::of(left)?;
    let r = DecimalSide::of(right)?;

    // a shared whole part keeps |diff| < 1, adjacent ones keep it < 2
    let same_ok = gap.min < 1.0;
    let adjacent_ok = gap.min < 2.0;

    if same_ok && rng.gen_bool(SAME_INTEGER_BIAS) {
        same_integer_part(&l, &r, rng).or_else(|| adjacent_integer_parts(&l, &r, rng))
    } else if adjacent_ok {
        let adjacent = adjacent_integer_parts(&l, &r, rng);
        if same_ok {
            adjacent.or_else(|| same_integer_part(&l, &r, rng))
        } else {
            adjacent
        }
    } else {
        None
    }
}

fn same_integer_part<R: Rng + ?Sized>(
    l: &DecimalSide<'_>,
    r: &DecimalSide<'_>,
    rng: &mut R,
) -> Option<(GeneratedValue, GeneratedValue)> {
    let (l_lo, l_hi) = l.whole_parts();
    let (r_lo, r_hi) = r.whole_parts();
    let (lo, hi) = (l_lo.max(r_lo), l_hi.min(r_hi));
    if lo > hi {
        return None;
    }

    for _ in 0..SAME_INTEGER_ATTEMPTS {
        let whole = rng.gen_range(lo..=hi);
        let Some(a) = l.sample(whole, Placement::Random, rng) else { continue };
        let b = match r.sample(whole, Placement::Near(a.value), rng) {
            Some(b) if distinct(&a, &b) => b,
            _ => match r.sample(whole, Placement::High, rng) {
                Some(b) if distinct(&a, &b) => b,
                _ => continue,
            },
        };
        return Some((a, b));
    }
    None
}

fn adjacent_integer_parts<R: Rng + ?Sized>(
    l: &DecimalSide<'_>,
    r: &DecimalSide<'_>,
    rng: &mut R,
) -> Option<(GeneratedValue, GeneratedValue)> {
    for _ in 0..ADJACENT_INTEGER_ATTEMPTS {
        let left_is_lower = rng.gen_bool(0.5);
        let (lower, upper) = if left_is_lower { (l, r) } else { (r, l) };
        let (lower_lo, lower_hi) = lower.whole_parts();
        let (upper_lo, upper_hi) = upper.whole_parts();
        let (lo, hi) = (lower_lo.max(upper_lo - 1), lower_hi.min(upper_hi - 1));
        if lo > hi {
            continue;
        }
        let whole = rng.gen_range(lo..=hi);
        let Some(a) = lower.sample(whole, Placement::High, rng) else { continue };
        let Some(b) = upper.sample(whole + 1, Placement::Low, rng) else { continue };
        return Some(if left_is_lower { (a, b) } else { (b, a) });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::models::ValueKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn decimal(min: f64, max: f64, precisions: Vec<u32>) -> PreparedType {
        PreparedType {
            kind: ValueKind::Decimal,
            weight: 1.0,
            gap: GapSettings::default(),
            domain: PreparedDomain::Decimal { min, max, precisions },
        }
    }

    #[test]
    fn pairs_are_distinct_and_close() {
        let ty = decimal(0.0, 50.0, vec![1, 2]);
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..300 {
            let (a, b) = paired_decimals(&ty, &ty, &GapSettings::default(), &mut rng).unwrap();
            assert!(distinct(&a, &b));
            let (wa, wb) = (a.value.floor(), b.value.floor());
            assert!((wa - wb).abs() <= 1.0, "{} vs {} should share or neighbour a whole part", a.display, b.display);
            assert!((0.0..=50.0).contains(&a.value) && (0.0..=50.0).contains(&b.value));
        }
    }

    #[test]
    fn mostly_shares_the_whole_part() {
        let ty = decimal(0.0, 100.0, vec![2]);
        let mut rng = StdRng::seed_from_u64(5);
        let shared = (0..400)
            .filter_map(|_| paired_decimals(&ty, &ty, &GapSettings::default(), &mut rng))
            .filter(|(a, b)| a.value.floor() == b.value.floor())
            .count();
        assert!(shared > 200, "expected a clear majority of shared whole parts, got {shared}/400");
    }

    #[test]
    fn single_grid_point_segment_falls_back_to_adjacent() {
        // only 1.9 and 2.0 lie on the tenths grid, and they never share a whole part
        let ty = decimal(1.9, 2.0, vec![1]);
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..50 {
            let (a, b) = paired_decimals(&ty, &ty, &GapSettings::default(), &mut rng).unwrap();
            let mut pair = [a.display.clone(), b.display.clone()];
            pair.sort();
            assert_eq!(pair, ["1.9".to_string(), "2.0".to_string()]);
        }
    }

    #[test]
    fn wide_minimum_gap_disables_pairing() {
        let ty = decimal(0.0, 100.0, vec![1]);
        let gap = GapSettings { min: 2.5, max: None };
        let mut rng = StdRng::seed_from_u64(9);
        assert!(paired_decimals(&ty, &ty, &gap, &mut rng).is_none());
    }

    #[test]
    fn disjoint_ranges_use_adjacent_parts_when_touching() {
        let low = decimal(2.0, 2.99, vec![2]);
        let high = decimal(3.0, 3.99, vec![2]);
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..100 {
            let (a, b) = paired_decimals(&low, &high, &GapSettings::default(), &mut rng).unwrap();
            assert!(a.value < 3.0 && b.value >= 3.0);
        }
    }

    #[test]
    fn segment_arithmetic_never_overflows() {
        let side = DecimalSide { min: 0.0, max: 1.0, precisions: &[2] };
        assert_eq!(side.segment(0, 2), Some((0, 99)));
        assert_eq!(side.segment(i64::MAX / 10, 2), None);
        assert_eq!(side.segment(i64::MIN, 1), None);
    }

    #[test]
    fn huge_unprepared_range_yields_no_pair() {
        let ty = decimal(-1e17, 1e17, vec![2]);
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..50 {
            assert!(paired_decimals(&ty, &ty, &GapSettings::default(), &mut rng).is_none());
        }
    }
}
