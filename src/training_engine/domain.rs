//! Numeric domain preparation: raw setup → [`PreparedGenerator`].
//!
//! Each of the four value types is sanitized on its own. A type that is
//! disabled, or whose range turns out empty after sanitizing, is left out of
//! the prepared generator entirely. Preparation is pure: the same
//! `RawConfig` always yields the same `PreparedGenerator`.

use tracing::debug;

use crate::training_engine::{
    config::{DecimalConfig, FractionConfig, IntegerConfig, PrecisionMode, RawConfig},
    helpers::scaled_bounds,
    models::{PreparedDomain, PreparedGenerator, PreparedType, ValueKind},
};

/// Hard ceiling on the share of forced-equal exercises.
pub const MAX_EQUAL_RATIO: f64 = 0.5;

/// Largest number of fractional digits a decimal may carry.
pub const MAX_DECIMAL_PRECISION: u32 = 6;

/// Build the session's generator configuration. Output order follows the
/// declaration order of `RawConfig`, never the weights.
pub fn prepare_generator(config: &RawConfig) -> PreparedGenerator {
    let types: Vec<PreparedType> = [
        prepare_integer(ValueKind::NonNegativeInt, &config.non_negative_int),
        prepare_integer(ValueKind::SignedInt, &config.signed_int),
        prepare_decimal(&config.decimal),
        prepare_fraction(&config.fraction),
    ]
    .into_iter()
    .flatten()
    .collect();

    let equal_ratio = if config.equal_ratio.is_finite() {
        config.equal_ratio.clamp(0.0, MAX_EQUAL_RATIO)
    } else {
        0.0
    };

    debug!(types = types.len(), equal_ratio, "prepared generator");
    PreparedGenerator { types, equal_ratio }
}

/// True when at least one type survived preparation.
pub fn can_generate(prepared: &PreparedGenerator) -> bool {
    !prepared.types.is_empty()
}

fn sanitize_weight(weight: f64) -> f64 {
    if weight.is_finite() { weight.max(0.0) } else { 0.0 }
}

/// Integer bounds of a raw float range, `None` if empty or non-finite.
fn integer_range(min: f64, max: f64) -> Option<(i64, i64)> {
    if !min.is_finite() || !max.is_finite() {
        return None;
    }
    let lo = min.ceil() as i64;
    let hi = max.floor() as i64;
    (lo <= hi).then_some((lo, hi))
}

fn prepare_integer(kind: ValueKind, cfg: &IntegerConfig) -> Option<PreparedType> {
    if !cfg.enabled {
        return None;
    }
    let min = if kind == ValueKind::NonNegativeInt { cfg.min.max(0.0) } else { cfg.min };
    let Some((min, max)) = integer_range(min, cfg.max) else {
        debug!(%kind, min = cfg.min, max = cfg.max, "dropping type: empty range");
        return None;
    };
    Some(PreparedType {
        kind,
        weight: sanitize_weight(cfg.weight),
        gap: cfg.gap.sanitized(),
        domain: PreparedDomain::Integer { min, max },
    })
}

/// Candidate precisions before the range check.
fn precision_pool(cfg: &DecimalConfig) -> Vec<u32> {
    let clamp = |p: u32| p.clamp(1, MAX_DECIMAL_PRECISION);
    match cfg.precision_mode {
        PrecisionMode::Exact => vec![clamp(cfg.precision)],
        PrecisionMode::UpTo => (1..=clamp(cfg.max_precision)).collect(),
    }
}

fn prepare_decimal(cfg: &DecimalConfig) -> Option<PreparedType> {
    if !cfg.enabled {
        return None;
    }
    if !cfg.min.is_finite() || !cfg.max.is_finite() || cfg.min > cfg.max {
        debug!(min = cfg.min, max = cfg.max, "dropping decimal: empty range");
        return None;
    }
    let precisions: Vec<u32> = precision_pool(cfg)
        .into_iter()
        .filter(|&p| scaled_bounds(cfg.min, cfg.max, p).is_some())
        .collect();
    if precisions.is_empty() {
        debug!(min = cfg.min, max = cfg.max, "dropping decimal: no usable precision");
        return None;
    }
    Some(PreparedType {
        kind: ValueKind::Decimal,
        weight: sanitize_weight(cfg.weight),
        gap: cfg.gap.sanitized(),
        domain: PreparedDomain::Decimal { min: cfg.min, max: cfg.max, precisions },
    })
}

fn prepare_fraction(cfg: &FractionConfig) -> Option<PreparedType> {
    if !cfg.enabled {
        return None;
    }
    let (numerator, denominator) = match cfg.preset.bounds() {
        Some(bounds) => bounds,
        None => {
            let num = integer_range(cfg.numerator_min.max(0.0), cfg.numerator_max);
            let den = integer_range(cfg.denominator_min.max(1.0), cfg.denominator_max);
            match (num, den) {
                (Some(n), Some(d)) => (n, d),
                _ => {
                    debug!(?num, ?den, "dropping fraction: empty numerator or denominator range");
                    return None;
                }
            }
        }
    };
    Some(PreparedType {
        kind: ValueKind::Fraction,
        weight: sanitize_weight(cfg.weight),
        gap: cfg.gap.sanitized(),
        domain: PreparedDomain::Fraction { numerator, denominator },
    })
}
