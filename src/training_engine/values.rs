//! Per-type value generators.
//!
//! Every generator draws one value from a [`PreparedType`] and renders it the
//! way it is shown on screen. They are stateless; the caller owns the RNG.

use rand::{seq::SliceRandom, Rng};

use crate::training_engine::{
    helpers::{format_fixed, gcd, scale_factor, scaled_bounds},
    models::{GeneratedValue, PreparedDomain, PreparedType, ValueKind, ValueMeta},
};

/// Attempts to draw a fraction with a non-zero denominator.
pub const FRACTION_ATTEMPTS: usize = 20;

/// Draw one value of the given type. `None` means the domain could not
/// produce a value, which a prepared type should never hit.
pub fn generate_value<R: Rng + ?Sized>(ty: &PreparedType, rng: &mut R) -> Option<GeneratedValue> {
    match &ty.domain {
        PreparedDomain::Integer { min, max } => Some(integer_value(ty.kind, rng.gen_range(*min..=*max))),
        PreparedDomain::Decimal { min, max, precisions } => {
            let precision = *precisions.choose(rng)?;
            let (lo, hi) = scaled_bounds(*min, *max, precision)?;
            Some(decimal_value(rng.gen_range(lo..=hi), precision))
        }
        PreparedDomain::Fraction { numerator, denominator } => {
            for _ in 0..FRACTION_ATTEMPTS {
                let n = rng.gen_range(numerator.0..=numerator.1);
                let d = rng.gen_range(denominator.0..=denominator.1);
                if d == 0 {
                    continue;
                }
                return Some(fraction_value(n, d));
            }
            None
        }
    }
}

/// Wrap a whole number.
pub fn integer_value(kind: ValueKind, n: i64) -> GeneratedValue {
    GeneratedValue { kind, value: n as f64, display: n.to_string(), meta: None }
}

/// A decimal given as an integer count of `10^-precision` steps.
pub fn decimal_value(scaled: i64, precision: u32) -> GeneratedValue {
    let value = scaled as f64 / scale_factor(precision);
    GeneratedValue {
        kind: ValueKind::Decimal,
        value,
        display: format_fixed(value, precision),
        meta: Some(ValueMeta { precision: Some(precision), ..ValueMeta::default() }),
    }
}

/// `n/d` reduced to lowest terms. `value` is the exact quotient.
pub fn fraction_value(n: i64, d: i64) -> GeneratedValue {
    let g = gcd(n, d);
    let sign = if d < 0 { -1 } else { 1 };
    let (num, den) = (sign * n / g, sign * d / g);
    GeneratedValue {
        kind: ValueKind::Fraction,
        value: n as f64 / d as f64,
        display: format!("{num}/{den}"),
        meta: Some(ValueMeta { numerator: Some(num), denominator: Some(den), precision: None }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::models::GapSettings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn prepared(kind: ValueKind, domain: PreparedDomain) -> PreparedType {
        PreparedType { kind, weight: 1.0, gap: GapSettings::default(), domain }
    }

    #[test]
    fn integers_stay_in_range() {
        let ty = prepared(ValueKind::SignedInt, PreparedDomain::Integer { min: -7, max: 4 });
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let v = generate_value(&ty, &mut rng).unwrap();
            assert!((-7.0..=4.0).contains(&v.value), "{} out of range", v.value);
            assert_eq!(v.display, (v.value as i64).to_string());
            assert!(v.meta.is_none());
        }
    }

    #[test]
    fn decimals_sit_on_their_precision_grid() {
        let ty = prepared(
            ValueKind::Decimal,
            PreparedDomain::Decimal { min: -2.5, max: 3.75, precisions: vec![1, 2, 3] },
        );
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..500 {
            let v = generate_value(&ty, &mut rng).unwrap();
            let p = v.meta.as_ref().and_then(|m| m.precision).unwrap();
            let scaled = v.value * scale_factor(p);
            assert!((scaled - scaled.round()).abs() < 1e-6, "{} not on 10^-{p} grid", v.value);
            assert!(v.value >= -2.5 - 1e-9 && v.value <= 3.75 + 1e-9);
            let digits = v.display.split('.').nth(1).map(str::len).unwrap_or(0);
            assert_eq!(digits as u32, p, "display {} should carry {p} digits", v.display);
        }
    }

    #[test]
    fn fractions_are_reduced() {
        let ty = prepared(
            ValueKind::Fraction,
            PreparedDomain::Fraction { numerator: (0, 20), denominator: (1, 20) },
        );
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let v = generate_value(&ty, &mut rng).unwrap();
            let meta = v.meta.clone().unwrap();
            let (n, d) = (meta.numerator.unwrap(), meta.denominator.unwrap());
            assert_eq!(gcd(n, d), 1, "{n}/{d} not reduced");
            assert!((v.value - n as f64 / d as f64).abs() < 1e-12);
            assert_eq!(v.display, format!("{n}/{d}"));
        }
    }

    #[test]
    fn zero_numerator_reduces_to_zero_over_one() {
        let v = fraction_value(0, 8);
        assert_eq!(v.display, "0/1");
        assert_eq!(v.value, 0.0);
    }

    #[test]
    fn fraction_keeps_exact_quotient() {
        let v = fraction_value(6, 8);
        assert_eq!(v.display, "3/4");
        assert_eq!(v.value, 0.75);
    }

    #[test]
    fn zero_only_denominator_exhausts_attempts() {
        let ty = prepared(
            ValueKind::Fraction,
            PreparedDomain::Fraction { numerator: (1, 3), denominator: (0, 0) },
        );
        let mut rng = StdRng::seed_from_u64(4);
        assert!(generate_value(&ty, &mut rng).is_none());
    }
}
