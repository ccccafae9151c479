//! Error types for number_drill_gen.

use thiserror::Error;

/// Result type for drill operations.
pub type Result<T> = std::result::Result<T, DrillError>;

/// Everything a caller of the drill engine can be told "no" about.
///
/// None of these are fatal: a degenerate configuration or an exhausted
/// generator ends the current session, it never panics.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DrillError {
    /// Raw configuration could not be understood.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Every value type was disabled or dropped during preparation.
    #[error("No value type is available with this configuration")]
    NoAvailableTypes,

    /// A bounded retry loop ran out of attempts.
    #[error("Generator exhausted after {attempts} attempts")]
    GeneratorExhausted { attempts: usize },

    /// An answer was submitted while no exercise was on screen.
    #[error("No active exercise to answer")]
    NoActiveExercise,

    /// The session hit its time or exercise limit.
    #[error("Session is over")]
    SessionOver,

    /// Rounding was asked for a place other than 10, 100 or 1000.
    #[error("Unsupported rounding place: {0}")]
    UnsupportedPlace(u32),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DrillError {
    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        DrillError::InvalidConfig(msg.into())
    }

    /// Whether the error means the session cannot continue with this setup.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DrillError::NoAvailableTypes
                | DrillError::GeneratorExhausted { .. }
                | DrillError::SessionOver
        )
    }
}
