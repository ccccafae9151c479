//! End-to-end demo of the drill engine.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Compare session**: a seeded session on a mixed setup (integers,
//!    decimals, fractions), answering every exercise and printing the score.
//! 2. **Drills**: one arithmetic and one rounding scenario with every option
//!    and its explanation.
//!
//! Set a different seed to see different numbers; the same seed always
//! prints the same output.

use std::time::Duration;

use number_drill_gen::{
    generate_training, DifficultyLevel, RawConfig, Session, SessionLimits, TrainingRequest,
    TrainingTopic,
};

fn print_drill(topic: TrainingTopic, seed: u64) -> number_drill_gen::Result<()> {
    let scenario = generate_training(TrainingRequest {
        topic,
        difficulty: DifficultyLevel::Intermediate,
        rng_seed: Some(seed),
    })?;

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  ID: {}  Branch: {}", scenario.topic, scenario.scenario_id, scenario.branch_key);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Q: {}", scenario.question);
    for ans in &scenario.answers {
        let marker = if ans.is_correct { "✓" } else { " " };
        println!("  [{marker}] {}: {}", ans.id, ans.text);
        println!("        {}", ans.explanation);
    }
    println!();
    Ok(())
}

fn main() -> number_drill_gen::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let config = RawConfig::for_difficulty(DifficultyLevel::Advanced);
    let limits = SessionLimits { time_limit: None, exercise_limit: Some(8) };
    let mut session = Session::new(&config, limits, Some(2024))?;

    println!("Compare session ({} value kinds in play)", session.prepared().types.len());
    let mut second = 0;
    while !session.is_over() {
        let exercise = session.next_exercise()?.clone();
        // a pupil who always guesses "<"
        let outcome = session.submit(number_drill_gen::Relation::Less, Duration::from_secs(second))?;
        println!(
            "  {:>10} {} {:<10}  {}",
            exercise.left.display,
            exercise.correct_relation,
            exercise.right.display,
            if outcome.correct { "✓" } else { "✗" },
        );
        second += 5;
    }
    let score = session.score();
    println!(
        "  correct {}  wrong {}  accuracy {}%  best streak {}\n",
        score.correct_count, score.wrong_count, score.accuracy(), score.best_streak
    );

    print_drill(TrainingTopic::Arithmetic, 7)?;
    print_drill(TrainingTopic::Rounding, 11)?;
    Ok(())
}
