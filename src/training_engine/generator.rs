use rand::{rngs::StdRng, RngCore, SeedableRng};
use tracing::debug;

use crate::error::Result;
use crate::training_engine::{
    models::{TrainingRequest, TrainingScenario, TrainingTopic},
    topics,
};

/// Generate a scenario ID from topic + RNG.
fn make_scenario_id(topic: TrainingTopic, rng: &mut impl RngCore) -> String {
    let prefix = match topic {
        TrainingTopic::CompareNumbers => "CN",
        TrainingTopic::Arithmetic     => "AR",
        TrainingTopic::Rounding       => "RD",
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Core dispatch: routes to the correct topic module.
pub fn generate_training(request: TrainingRequest) -> Result<TrainingScenario> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let scenario_id = make_scenario_id(request.topic, &mut rng);
    debug!(%scenario_id, topic = %request.topic, difficulty = %request.difficulty, "generating drill");

    match request.topic {
        TrainingTopic::CompareNumbers =>
            topics::compare::generate(&mut rng, request.difficulty, scenario_id),

        TrainingTopic::Arithmetic =>
            topics::arithmetic::generate(&mut rng, request.difficulty, scenario_id),

        TrainingTopic::Rounding =>
            topics::rounding::generate(&mut rng, request.difficulty, scenario_id),
    }
}
