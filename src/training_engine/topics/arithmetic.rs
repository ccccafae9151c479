use rand::{seq::SliceRandom, Rng};

use crate::error::{DrillError, Result};
use crate::training_engine::{
    helpers::{answer, scenario, OPTION_IDS},
    models::{ArithmeticTask, DifficultyLevel, DrillPayload, Operation, TrainingScenario, TrainingTopic},
    options::{arithmetic_options, PAD_ATTEMPTS},
};

/// Operand ceilings per difficulty: `(add/subtract, multiply/divide)`.
fn operand_limits(difficulty: DifficultyLevel) -> (i64, i64) {
    match difficulty {
        DifficultyLevel::Beginner     => (20, 5),
        DifficultyLevel::Intermediate => (100, 10),
        DifficultyLevel::Advanced     => (1000, 20),
    }
}

fn operations(difficulty: DifficultyLevel) -> &'static [Operation] {
    match difficulty {
        DifficultyLevel::Beginner => &[Operation::Add, Operation::Subtract],
        _ => &[Operation::Add, Operation::Subtract, Operation::Multiply, Operation::Divide],
    }
}

/// Draw one task. Differences are never negative and quotients are exact.
pub fn make_task<R: Rng + ?Sized>(rng: &mut R, difficulty: DifficultyLevel) -> ArithmeticTask {
    let (sum_max, product_max) = operand_limits(difficulty);
    let operation = operations(difficulty)
        .choose(rng)
        .copied()
        .unwrap_or(Operation::Add);

    let (left, right, answer) = match operation {
        Operation::Add => {
            let (a, b) = (rng.gen_range(0..=sum_max), rng.gen_range(0..=sum_max));
            (a, b, a + b)
        }
        Operation::Subtract => {
            let (a, b) = (rng.gen_range(0..=sum_max), rng.gen_range(0..=sum_max));
            let (a, b) = if a < b { (b, a) } else { (a, b) };
            (a, b, a - b)
        }
        Operation::Multiply => {
            let (a, b) = (rng.gen_range(1..=product_max), rng.gen_range(1..=product_max));
            (a, b, a * b)
        }
        Operation::Divide => {
            let divisor = rng.gen_range(1..=product_max);
            let quotient = rng.gen_range(0..=product_max);
            (divisor * quotient, divisor, quotient)
        }
    };
    ArithmeticTask { left, right, operation, answer }
}

pub fn generate<R: Rng>(
    rng: &mut R,
    difficulty: DifficultyLevel,
    scenario_id: String,
) -> Result<TrainingScenario> {
    let task = make_task(rng, difficulty);
    let options = arithmetic_options(task.answer, rng)
        .ok_or(DrillError::GeneratorExhausted { attempts: PAD_ATTEMPTS })?;

    let sym = task.operation.symbol();
    let worked = format!("{} {sym} {} = {}", task.left, task.right, task.answer);
    let question = format!("What is {} {sym} {}?", task.left, task.right);

    let answers = options
        .iter()
        .zip(OPTION_IDS)
        .map(|(&value, id)| {
            let is_correct = value == task.answer;
            let explanation = if is_correct {
                format!("Right: {worked}.")
            } else {
                format!("{value} is off by {}: {worked}.", (value - task.answer).abs())
            };
            answer(id, value.to_string(), is_correct, explanation)
        })
        .collect();

    let branch_key = format!("Arithmetic:{:?}", task.operation);
    Ok(scenario(
        scenario_id,
        TrainingTopic::Arithmetic,
        branch_key,
        question,
        answers,
        DrillPayload::Arithmetic(task),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn tasks_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(17);
        for difficulty in [DifficultyLevel::Beginner, DifficultyLevel::Intermediate, DifficultyLevel::Advanced] {
            for _ in 0..300 {
                let t = make_task(&mut rng, difficulty);
                let expected = match t.operation {
                    Operation::Add      => t.left + t.right,
                    Operation::Subtract => t.left - t.right,
                    Operation::Multiply => t.left * t.right,
                    Operation::Divide   => {
                        assert_eq!(t.left % t.right, 0, "{} / {} is not exact", t.left, t.right);
                        t.left / t.right
                    }
                };
                assert_eq!(t.answer, expected);
                assert!(t.answer >= 0);
            }
        }
    }

    #[test]
    fn beginners_only_add_and_subtract() {
        let mut rng = StdRng::seed_from_u64(18);
        for _ in 0..200 {
            let t = make_task(&mut rng, DifficultyLevel::Beginner);
            assert!(matches!(t.operation, Operation::Add | Operation::Subtract));
        }
    }
}
