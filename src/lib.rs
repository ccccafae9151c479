//! # number_drill_gen
//!
//! An offline, deterministic generator of number-sense drills: "which sign
//! goes between these two numbers", four-option arithmetic, and rounding to
//! tens, hundreds and thousands.
//!
//! ## How it works
//!
//! 1. The setup screen hands over a [`RawConfig`]: which value kinds
//!    (non-negative integers, signed integers, decimals, fractions) are in
//!    play, their ranges, weights, gap constraints and the share of
//!    forced-equal exercises.
//! 2. [`prepare_generator`] sanitizes it once per session. Kinds whose range
//!    is empty are dropped; [`can_generate`] tells the UI whether anything
//!    is left.
//! 3. [`generate_exercise`] draws one comparison per call with bounded
//!    rejection sampling. `None` means the configuration could not be
//!    satisfied, which ends the session rather than retrying forever.
//! 4. [`Session`] keeps score: correct and wrong counts, streaks, accuracy,
//!    and the time / exercise limits.
//!
//! For the arithmetic and rounding trainers, [`generate_training`] builds a
//! full multiple-choice [`TrainingScenario`] from a [`TrainingRequest`].
//!
//! ## Key features
//!
//! - **Deterministic**: every generator takes `&mut impl Rng`; pass a seeded
//!   `StdRng` (or `rng_seed: Some(u64)`) to reproduce a sequence exactly.
//! - **Bounded**: every retry loop has a fixed attempt budget.
//! - **One epsilon**: all float comparisons use [`EPSILON`] (`1e-9`).
//!
//! ## Quick start
//!
//! ```rust
//! use number_drill_gen::{
//!     generate_exercise, prepare_generator, RawConfig, Relation,
//! };
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let prepared = prepare_generator(&RawConfig::default());
//! let mut rng = StdRng::seed_from_u64(7);
//! let ex = generate_exercise(&prepared, &mut rng).expect("integers 0..=99 always work");
//! println!("{} _ {}  (answer: {})", ex.left.display, ex.right.display, ex.correct_relation);
//! assert!(matches!(ex.correct_relation, Relation::Less | Relation::Greater | Relation::Equal));
//! ```
//!
//! ```rust
//! use number_drill_gen::{generate_training, DifficultyLevel, TrainingRequest, TrainingTopic};
//!
//! let scenario = generate_training(TrainingRequest {
//!     topic: TrainingTopic::Rounding,
//!     difficulty: DifficultyLevel::Intermediate,
//!     rng_seed: Some(42),
//! })?;
//! for ans in &scenario.answers {
//!     let mark = if ans.is_correct { "+" } else { " " };
//!     println!("[{mark}] {}: {}", ans.id, ans.text);
//! }
//! # Ok::<(), number_drill_gen::DrillError>(())
//! ```

pub mod client_adapter;
pub mod error;
pub mod training_engine;

// Convenience re-exports so callers can use `number_drill_gen::generate_exercise`
// directly without reaching into `training_engine::`.
pub use client_adapter::{reveal_answer, to_client_payload};
pub use error::{DrillError, Result};
pub use training_engine::{
    arithmetic_options, can_generate, ceil_to_place, explain_rounding, floor_to_place,
    generate_exercise, generate_training, prepare_generator, round_half_up_to,
    rounding_options, AnswerOption, DifficultyLevel, DrillPayload, GapSettings,
    GeneratedExercise, GeneratedValue, PreparedGenerator, RawConfig, Relation,
    RoundingPlace, Session, SessionLimits, SessionScore, TrainingRequest,
    TrainingScenario, TrainingTopic, ValueKind,
};
pub use training_engine::models::EPSILON;
