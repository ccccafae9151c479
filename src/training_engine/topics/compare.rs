use rand::Rng;

use crate::error::{DrillError, Result};
use crate::training_engine::{
    config::RawConfig,
    domain::prepare_generator,
    exercise::{generate_exercise, EXERCISE_ATTEMPTS},
    helpers::{answer, scenario, OPTION_IDS},
    models::{
        DifficultyLevel, DrillPayload, GeneratedExercise, GeneratedValue, Relation,
        TrainingScenario, TrainingTopic, ValueKind,
    },
};

fn relation_words(relation: Relation) -> &'static str {
    match relation {
        Relation::Less    => "less than",
        Relation::Greater => "greater than",
        Relation::Equal   => "equal to",
    }
}

/// How to see the relation for this pair of kinds.
fn hint(left: &GeneratedValue, right: &GeneratedValue) -> &'static str {
    match (left.kind, right.kind) {
        (ValueKind::Fraction, ValueKind::Fraction) => {
            "Bring both fractions to a common denominator, then compare the numerators."
        }
        (ValueKind::Decimal, ValueKind::Decimal) => {
            "Compare the whole parts first, then the digits after the point from left to right."
        }
        (ValueKind::Fraction, _) | (_, ValueKind::Fraction) => {
            "Turn the fraction into a decimal, then compare."
        }
        (ValueKind::SignedInt, _) | (_, ValueKind::SignedInt) => {
            "On the number line, the number further to the right is greater."
        }
        _ => "Compare the place values from the left.",
    }
}

/// Compare drill on the setup that matches `difficulty`.
pub fn generate<R: Rng>(
    rng: &mut R,
    difficulty: DifficultyLevel,
    scenario_id: String,
) -> Result<TrainingScenario> {
    let prepared = prepare_generator(&RawConfig::for_difficulty(difficulty));
    let exercise = generate_exercise(&prepared, rng)
        .ok_or(DrillError::GeneratorExhausted { attempts: EXERCISE_ATTEMPTS })?;
    Ok(from_exercise(exercise, scenario_id))
}

/// Wrap an already generated exercise as a three-answer scenario.
pub fn from_exercise(exercise: GeneratedExercise, scenario_id: String) -> TrainingScenario {
    let GeneratedExercise { left, right, correct_relation } = &exercise;
    let (l, r) = (&left.display, &right.display);
    let tip = hint(left, right);

    let question = format!("Which sign belongs between {l} and {r}?");
    let answers = Relation::ALL
        .iter()
        .zip(OPTION_IDS)
        .map(|(&rel, id)| {
            let is_correct = rel == *correct_relation;
            let explanation = if is_correct {
                format!("Correct: {l} is {} {r}. {tip}", relation_words(rel))
            } else {
                format!(
                    "Not quite: {l} is {} {r}, not {} it. {tip}",
                    relation_words(*correct_relation),
                    relation_words(rel),
                )
            };
            answer(id, rel.symbol(), is_correct, explanation)
        })
        .collect();

    let branch_key = format!("Compare:{:?}:{:?}:{}", left.kind, right.kind, correct_relation);
    scenario(
        scenario_id,
        TrainingTopic::CompareNumbers,
        branch_key,
        question,
        answers,
        DrillPayload::Compare(exercise),
    )
}
