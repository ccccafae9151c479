use rand::{seq::SliceRandom, Rng};

use crate::error::{DrillError, Result};
use crate::training_engine::{
    helpers::{answer, scenario, OPTION_IDS},
    models::{DifficultyLevel, DrillPayload, RoundingPlace, RoundingTask, TrainingScenario, TrainingTopic},
    options::{rounding_options, PAD_ATTEMPTS},
    rounding::{explain_rounding, floor_to_place, round_half_up_to},
};

const BEGINNER_PLACES: &[RoundingPlace] = &[RoundingPlace::Tens];
const INTERMEDIATE_PLACES: &[RoundingPlace] = &[RoundingPlace::Tens, RoundingPlace::Hundreds];
const ADVANCED_PLACES: &[RoundingPlace] = &RoundingPlace::ALL;

/// Pick the number and the place to round it to.
pub fn make_task<R: Rng + ?Sized>(rng: &mut R, difficulty: DifficultyLevel) -> RoundingTask {
    let (number, places): (i64, &[RoundingPlace]) = match difficulty {
        DifficultyLevel::Beginner     => (rng.gen_range(10..=999), BEGINNER_PLACES),
        DifficultyLevel::Intermediate => (rng.gen_range(100..=9_999), INTERMEDIATE_PLACES),
        DifficultyLevel::Advanced     => (rng.gen_range(-99_999..=99_999), ADVANCED_PLACES),
    };
    let place = places.choose(rng).copied().unwrap_or(RoundingPlace::Tens);
    let answer = round_half_up_to(number as f64, place) as i64;
    RoundingTask { number, place, answer }
}

/// Why a particular wrong option is wrong.
fn mistake(task: &RoundingTask, option: i64) -> String {
    let n = task.number as f64;
    if option == floor_to_place(n, task.place) as i64 {
        format!("{option} just drops the digits below the {}s instead of rounding.", task.place.name())
    } else if option == round_half_up_to(n, task.place.neighbour()) as i64 {
        format!("{option} is rounded to the nearest {}, not the nearest {}.", task.place.neighbour().name(), task.place.name())
    } else {
        format!("{option} is not the nearest multiple of {}.", task.place)
    }
}

pub fn generate<R: Rng>(
    rng: &mut R,
    difficulty: DifficultyLevel,
    scenario_id: String,
) -> Result<TrainingScenario> {
    let task = make_task(rng, difficulty);
    let options = rounding_options(task.number as f64, task.place, rng)
        .ok_or(DrillError::GeneratorExhausted { attempts: PAD_ATTEMPTS })?;
    let why = explain_rounding(task.number, task.place);
    let sentence = why.sentence();

    let question = format!("Round {} to the nearest {}.", task.number, task.place.name());
    let answers = options
        .iter()
        .map(|&o| o as i64)
        .zip(OPTION_IDS)
        .map(|(value, id)| {
            let is_correct = value == task.answer;
            let explanation = if is_correct {
                sentence.clone()
            } else {
                format!("{} {sentence}", mistake(&task, value))
            };
            answer(id, value.to_string(), is_correct, explanation)
        })
        .collect();

    let branch_key = format!("Rounding:{}:{:?}", task.place, why.direction);
    Ok(scenario(
        scenario_id,
        TrainingTopic::Rounding,
        branch_key,
        question,
        answers,
        DrillPayload::Rounding(task),
    ))
}
