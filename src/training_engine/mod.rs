//! Core training engine: numeric domains, exercise generation, rounding,
//! option sets and scoring.
//!
//! ## Module overview
//!
//! | Module           | Purpose |
//! |------------------|---------|
//! | `models`         | Shared types: prepared domains, generated values, request/response structs |
//! | `config`         | Raw setup-screen configuration, defaults and JSON loading |
//! | `domain`         | Sanitizes a raw config into a `PreparedGenerator` |
//! | `values`         | One random value per type (integer, decimal, fraction) |
//! | `exercise`       | Bounded rejection sampling of comparison exercises |
//! | `paired_decimal` | Decimal-vs-decimal pairs that share or neighbour a whole part |
//! | `rounding`       | Half-away-from-zero rounding and its explanation |
//! | `options`        | Four-option multiple-choice sets with plausible distractors |
//! | `session`        | Counters, streaks, limits and the compare session driver |
//! | `helpers`        | Weighted pick, gcd, fixed-point formatting, answer builders |
//! | `generator`      | Single entry point `generate_training()`, dispatches to topics |
//! | `topics`         | One drill generator per trainer |

pub mod config;
pub mod domain;
pub mod exercise;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod options;
pub mod paired_decimal;
pub mod rounding;
pub mod session;
pub mod topics;
pub mod values;

// Re-export the public API surface so callers can use
// `training_engine::generate_training` without reaching into sub-modules.
pub use config::RawConfig;
pub use domain::{can_generate, prepare_generator};
pub use exercise::generate_exercise;
pub use generator::generate_training;
pub use models::{
    AnswerOption, DifficultyLevel, DrillPayload, GapSettings, GeneratedExercise,
    GeneratedValue, PreparedGenerator, Relation, RoundingPlace, TrainingRequest,
    TrainingScenario, TrainingTopic, ValueKind,
};
pub use options::{arithmetic_options, rounding_options};
pub use rounding::{ceil_to_place, explain_rounding, floor_to_place, round_half_up_to};
pub use session::{Session, SessionLimits, SessionScore};
