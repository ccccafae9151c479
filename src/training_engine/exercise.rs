//! Comparison exercise generation.
//!
//! An exercise is two values and the relation between them. Each call first
//! decides whether this exercise should be a forced equality, then runs a
//! bounded rejection loop until a pair satisfies the combined gap of the two
//! chosen types. Running out of attempts yields `None`, never a spin.

use rand::Rng;
use tracing::{trace, warn};

use crate::training_engine::{
    helpers::weighted_pick,
    models::{
        GeneratedExercise, GeneratedValue, PreparedDomain, PreparedGenerator, PreparedType,
        Relation, EPSILON,
    },
    paired_decimal::paired_decimals,
    values::generate_value,
};

/// Attempts per exercise before the generator gives up.
pub const EXERCISE_ATTEMPTS: usize = 300;

/// Generate one comparison exercise, or `None` if the configuration could
/// not be satisfied within [`EXERCISE_ATTEMPTS`].
pub fn generate_exercise<R: Rng + ?Sized>(
    prepared: &PreparedGenerator,
    rng: &mut R,
) -> Option<GeneratedExercise> {
    if prepared.types.is_empty() {
        return None;
    }

    let all: Vec<&PreparedType> = prepared.types.iter().collect();
    // a positive minimum gap forbids equal operands
    let equality_candidates: Vec<&PreparedType> =
        all.iter().copied().filter(|t| t.gap.min <= 0.0).collect();

    let wants_equality =
        !equality_candidates.is_empty() && rng.gen::<f64>() < prepared.equal_ratio;

    for attempt in 0..EXERCISE_ATTEMPTS {
        let exercise = if wants_equality {
            equal_pair(&equality_candidates, rng)
        } else {
            distinct_pair(&all, rng)
        };
        if let Some(exercise) = exercise {
            trace!(attempt, relation = %exercise.correct_relation, "exercise generated");
            return Some(exercise);
        }
    }

    warn!(attempts = EXERCISE_ATTEMPTS, wants_equality, "exercise generator exhausted");
    None
}

/// One value shown twice. Equality is never left to two draws converging.
fn equal_pair<R: Rng + ?Sized>(candidates: &[&PreparedType], rng: &mut R) -> Option<GeneratedExercise> {
    let ty = weighted_pick(candidates, rng)?;
    if ty.gap.combine(&ty.gap).min > EPSILON {
        return None;
    }
    let left = generate_value(ty, rng)?;
    let right = left.clone();
    Some(GeneratedExercise { left, right, correct_relation: Relation::Equal })
}

fn distinct_pair<R: Rng + ?Sized>(all: &[&PreparedType], rng: &mut R) -> Option<GeneratedExercise> {
    let left_ty = weighted_pick(all, rng)?;
    let right_ty = weighted_pick(all, rng)?;
    let gap = left_ty.gap.combine(&right_ty.gap);

    let (left, right) = match (&left_ty.domain, &right_ty.domain) {
        (PreparedDomain::Decimal { .. }, PreparedDomain::Decimal { .. }) => {
            match paired_decimals(left_ty, right_ty, &gap, rng) {
                Some(pair) => pair,
                // a minimum gap of 2 or more rules out every paired strategy,
                // so draw freely instead of burning the attempt
                None => independent(left_ty, right_ty, rng)?,
            }
        }
        _ => independent(left_ty, right_ty, rng)?,
    };

    let diff = left.value - right.value;
    if diff.abs() < EPSILON || !gap.admits(diff) {
        return None;
    }

    let correct_relation = if diff > 0.0 { Relation::Greater } else { Relation::Less };
    Some(GeneratedExercise { left, right, correct_relation })
}

fn independent<R: Rng + ?Sized>(
    left: &PreparedType,
    right: &PreparedType,
    rng: &mut R,
) -> Option<(GeneratedValue, GeneratedValue)> {
    Some((generate_value(left, rng)?, generate_value(right, rng)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::models::{GapSettings, ValueKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn integer(min: i64, max: i64, gap: GapSettings) -> PreparedType {
        PreparedType { kind: ValueKind::SignedInt, weight: 1.0, gap, domain: PreparedDomain::Integer { min, max } }
    }

    #[test]
    fn empty_generator_fails_immediately() {
        let prepared = PreparedGenerator { types: vec![], equal_ratio: 0.5 };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_exercise(&prepared, &mut rng).is_none());
    }

    #[test]
    fn equality_is_a_clone() {
        let prepared = PreparedGenerator {
            types: vec![integer(0, 1_000_000, GapSettings::default())],
            equal_ratio: 1.0,
        };
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let ex = generate_exercise(&prepared, &mut rng).unwrap();
            assert_eq!(ex.correct_relation, Relation::Equal);
            assert_eq!(ex.left, ex.right);
        }
    }

    #[test]
    fn positive_min_gap_never_forces_equality() {
        let prepared = PreparedGenerator {
            types: vec![integer(0, 20, GapSettings { min: 3.0, max: None })],
            equal_ratio: 0.5,
        };
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let ex = generate_exercise(&prepared, &mut rng).unwrap();
            assert_ne!(ex.correct_relation, Relation::Equal);
            assert!((ex.left.value - ex.right.value).abs() >= 3.0);
        }
    }

    #[test]
    fn gap_bounds_are_honoured() {
        let prepared = PreparedGenerator {
            types: vec![integer(-50, 50, GapSettings { min: 2.0, max: Some(5.0) })],
            equal_ratio: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..300 {
            let ex = generate_exercise(&prepared, &mut rng).unwrap();
            let d = (ex.left.value - ex.right.value).abs();
            assert!((2.0..=5.0).contains(&d), "diff {d} outside [2, 5]");
        }
    }

    #[test]
    fn unsatisfiable_gap_exhausts() {
        // the whole range is narrower than the minimum gap
        let prepared = PreparedGenerator {
            types: vec![integer(0, 3, GapSettings { min: 10.0, max: None })],
            equal_ratio: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(4);
        assert!(generate_exercise(&prepared, &mut rng).is_none());
    }

    #[test]
    fn single_point_range_without_equality_exhausts() {
        let prepared = PreparedGenerator {
            types: vec![integer(7, 7, GapSettings::default())],
            equal_ratio: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(5);
        assert!(generate_exercise(&prepared, &mut rng).is_none());
    }

    #[test]
    fn decimal_pairs_with_large_gap_fall_back_to_independent_draws() {
        let decimal = PreparedType {
            kind: ValueKind::Decimal,
            weight: 1.0,
            gap: GapSettings { min: 5.0, max: None },
            domain: PreparedDomain::Decimal { min: 0.0, max: 100.0, precisions: vec![1] },
        };
        let prepared = PreparedGenerator { types: vec![decimal], equal_ratio: 0.0 };
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..100 {
            let ex = generate_exercise(&prepared, &mut rng).unwrap();
            assert!((ex.left.value - ex.right.value).abs() >= 5.0);
        }
    }

    #[test]
    fn relation_matches_values() {
        let prepared = PreparedGenerator {
            types: vec![integer(-9, 9, GapSettings::default())],
            equal_ratio: 0.3,
        };
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let ex = generate_exercise(&prepared, &mut rng).unwrap();
            match ex.correct_relation {
                Relation::Equal   => assert_eq!(ex.left.value, ex.right.value),
                Relation::Greater => assert!(ex.left.value > ex.right.value),
                Relation::Less    => assert!(ex.left.value < ex.right.value),
            }
        }
    }
}
