//! Drill generators, one module per trainer.
//!
//! Every public `generate` follows the same signature:
//!
//! ```ignore
//! pub fn generate<R: Rng>(
//!     rng: &mut R,
//!     difficulty: DifficultyLevel,
//!     scenario_id: String,
//! ) -> Result<TrainingScenario>
//! ```
//!
//! The generator dispatches to these via `generator.rs`.

/// CN- : which sign goes between two numbers
pub mod compare;
/// AR- : four-option sums, differences, products and quotients
pub mod arithmetic;
/// RD- : round to tens, hundreds or thousands
pub mod rounding;
