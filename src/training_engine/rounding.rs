//! School rounding to tens, hundreds and thousands.
//!
//! Ties go away from zero (25 → 30, -25 → -30), which is what pupils are
//! taught; this is neither banker's rounding nor IEEE round-half-even.

use serde::{Deserialize, Serialize};

use crate::training_engine::models::RoundingPlace;

/// Half-away-from-zero on a plain number.
fn round_half_away(x: f64) -> f64 {
    if x >= 0.0 {
        (x + 0.5).floor()
    } else {
        -(-x + 0.5).floor()
    }
}

/// Round `n` to the nearest multiple of `place`, ties away from zero.
pub fn round_half_up_to(n: f64, place: RoundingPlace) -> f64 {
    let p = place.factor();
    round_half_away(n / p) * p
}

/// Truncate toward zero at `place` granularity ("just chopped the digits").
pub fn floor_to_place(n: f64, place: RoundingPlace) -> f64 {
    let p = place.factor();
    n.signum() * (n.abs() / p).floor() * p
}

/// Round away from zero at `place` granularity ("always rounded up").
pub fn ceil_to_place(n: f64, place: RoundingPlace) -> f64 {
    let p = place.factor();
    n.signum() * (n.abs() / p).ceil() * p
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundDirection {
    /// Away from zero.
    Up,
    /// Toward zero.
    Down,
}

/// Why a whole number rounds the way it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingExplanation {
    pub number: i64,
    pub place: RoundingPlace,
    /// The place one rank below the target, e.g. 10 when rounding to 100.
    pub inspected_place: u32,
    pub inspected_digit: u8,
    pub direction: RoundDirection,
    pub result: i64,
}

impl RoundingExplanation {
    /// One-sentence narration for the answer sheet.
    pub fn sentence(&self) -> String {
        let digit_name = match self.inspected_place {
            1 => "ones",
            10 => "tens",
            _ => "hundreds",
        };
        let verdict = match self.direction {
            RoundDirection::Up => "5 or more, so we round up",
            RoundDirection::Down => "less than 5, so we round down",
        };
        format!(
            "To round {} to the nearest {}, look at the {} digit: {} is {} to {}.",
            self.number,
            self.place.name(),
            digit_name,
            self.inspected_digit,
            verdict,
            self.result,
        )
    }
}

/// Inspect the digit below `place` and narrate the rounding of `n`.
pub fn explain_rounding(n: i64, place: RoundingPlace) -> RoundingExplanation {
    let inspected_place = place.as_u32() / 10;
    let inspected_digit = ((n.unsigned_abs() / inspected_place as u64) % 10) as u8;
    let direction = if inspected_digit >= 5 { RoundDirection::Up } else { RoundDirection::Down };
    let result = round_half_up_to(n as f64, place) as i64;
    RoundingExplanation { number: n, place, inspected_place, inspected_digit, direction, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::models::RoundingPlace::*;

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(round_half_up_to(25.0, Tens), 30.0);
        assert_eq!(round_half_up_to(-25.0, Tens), -30.0);
        assert_eq!(round_half_up_to(24.0, Tens), 20.0);
        assert_eq!(round_half_up_to(1500.0, Thousands), 2000.0);
        assert_eq!(round_half_up_to(2500.0, Thousands), 3000.0);
    }

    #[test]
    fn below_half_rounds_toward_zero() {
        assert_eq!(round_half_up_to(1250.0, Thousands), 1000.0);
        assert_eq!(round_half_up_to(-1499.0, Thousands), -1000.0);
        assert_eq!(round_half_up_to(349.0, Hundreds), 300.0);
    }

    #[test]
    fn floor_and_ceil_keep_sign() {
        assert_eq!(floor_to_place(347.0, Tens), 340.0);
        assert_eq!(ceil_to_place(341.0, Tens), 350.0);
        assert_eq!(floor_to_place(-347.0, Tens), -340.0);
        assert_eq!(ceil_to_place(-341.0, Tens), -350.0);
        assert_eq!(ceil_to_place(340.0, Tens), 340.0);
        assert_eq!(floor_to_place(0.0, Hundreds), 0.0);
    }

    #[test]
    fn explanation_inspects_digit_below_place() {
        let e = explain_rounding(4_651, Hundreds);
        assert_eq!(e.inspected_place, 10);
        assert_eq!(e.inspected_digit, 5);
        assert_eq!(e.direction, RoundDirection::Up);
        assert_eq!(e.result, 4_700);

        let e = explain_rounding(4_651, Thousands);
        assert_eq!(e.inspected_digit, 6);
        assert_eq!(e.result, 5_000);

        let e = explain_rounding(-84, Tens);
        assert_eq!(e.inspected_digit, 4);
        assert_eq!(e.direction, RoundDirection::Down);
        assert_eq!(e.result, -80);
    }

    #[test]
    fn explanation_direction_agrees_with_result() {
        for n in -2_000i64..=2_000 {
            for place in RoundingPlace::ALL {
                let e = explain_rounding(n, place);
                let away = e.result.abs() > n.abs();
                if e.result != n {
                    assert_eq!(e.direction == RoundDirection::Up, away, "n={n} place={place}");
                }
            }
        }
    }

    #[test]
    fn sentence_mentions_digit_and_result() {
        let s = explain_rounding(347, Tens).sentence();
        assert!(s.contains("ones digit"));
        assert!(s.contains("7 is 5 or more"));
        assert!(s.ends_with("350."));
    }
}
