//! Multiple-choice option sets: the correct answer plus three plausible
//! wrong ones, shuffled.
//!
//! Both builders are bounded. The padding step is arranged so that it
//! always completes the set, so `None` is only a guard on the final
//! conversion and never seen in practice.

use rand::{seq::SliceRandom, Rng};

use crate::training_engine::{
    models::{RoundingPlace, EPSILON},
    rounding::{ceil_to_place, floor_to_place, round_half_up_to},
};

/// Number of options shown for one question.
pub const OPTION_COUNT: usize = 4;
/// Random delta draws for arithmetic distractors.
pub const DELTA_ATTEMPTS: usize = 100;
/// Padding steps when collisions left the set short.
pub const PAD_ATTEMPTS: usize = 25;
/// Spread of the random start for arithmetic padding.
pub const PAD_WINDOW: i64 = 5;

const DELTAS: [i64; 10] = [-5, -4, -3, -2, -1, 1, 2, 3, 4, 5];

/// Options for an arithmetic answer: off-by-one-to-five slips.
///
/// Negative candidates are reflected to their absolute value, since a
/// negative option next to a whole-number sum gives the answer away.
pub fn arithmetic_options<R: Rng + ?Sized>(correct: i64, rng: &mut R) -> Option<[i64; OPTION_COUNT]> {
    let mut options = vec![correct];

    for _ in 0..DELTA_ATTEMPTS {
        if options.len() == OPTION_COUNT {
            break;
        }
        let candidate = (correct + DELTAS.choose(rng)?).abs();
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    pad_above(&mut options, correct, rng);
    options.shuffle(rng);
    options.truncate(OPTION_COUNT);
    options.try_into().ok()
}

/// Fill the set with consecutive values starting a random step above
/// `|correct| + 5`, past the reach of every delta.
fn pad_above<R: Rng + ?Sized>(options: &mut Vec<i64>, correct: i64, rng: &mut R) {
    if options.len() >= OPTION_COUNT {
        return;
    }
    let base = correct.abs() + 5 + rng.gen_range(0..PAD_WINDOW);
    for k in 1..=PAD_ATTEMPTS as i64 {
        if options.len() == OPTION_COUNT {
            break;
        }
        options.push(base + k);
    }
}

fn push_unique(options: &mut Vec<f64>, candidate: f64) {
    if options.len() < OPTION_COUNT && options.iter().all(|o| (o - candidate).abs() >= EPSILON) {
        options.push(candidate);
    }
}

/// Options for a rounding question, built from the classic mistakes:
/// rounding the other way, truncating, and rounding to the wrong place.
pub fn rounding_options<R: Rng + ?Sized>(
    n: f64,
    place: RoundingPlace,
    rng: &mut R,
) -> Option<[f64; OPTION_COUNT]> {
    let correct = round_half_up_to(n, place);
    let other_way = if correct.abs() >= n.abs() {
        floor_to_place(n, place)
    } else {
        ceil_to_place(n, place)
    };

    let mut options = vec![correct];
    push_unique(&mut options, other_way);
    push_unique(&mut options, floor_to_place(n, place));
    push_unique(&mut options, round_half_up_to(n, place.neighbour()));

    let step = place.factor();
    for k in 1..=PAD_ATTEMPTS {
        if options.len() == OPTION_COUNT {
            break;
        }
        let up = correct + k as f64 * step;
        let down = correct - k as f64 * step;
        let candidate = if rng.gen_bool(0.5) && !(n >= 0.0 && down < 0.0) { down } else { up };
        push_unique(&mut options, candidate);
    }

    options.shuffle(rng);
    options.try_into().ok()
}
