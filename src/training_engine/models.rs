use std::fmt;
use serde::{Deserialize, Serialize};

/// Tolerance used for every floating-point comparison in the engine.
pub const EPSILON: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Value kinds and constraints
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueKind {
    NonNegativeInt,
    SignedInt,
    Decimal,
    Fraction,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValueKind::NonNegativeInt => "non-negative integer",
            ValueKind::SignedInt      => "signed integer",
            ValueKind::Decimal        => "decimal",
            ValueKind::Fraction       => "fraction",
        };
        write!(f, "{}", s)
    }
}

/// Inclusive bounds on the distance between the two values of an exercise.
/// `max: None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapSettings {
    pub min: f64,
    pub max: Option<f64>,
}

impl Default for GapSettings {
    fn default() -> Self {
        GapSettings { min: 0.0, max: None }
    }
}

impl GapSettings {
    /// Clamp user input into a valid gap: `min >= 0`, `max >= min`,
    /// non-finite bounds dropped.
    pub fn sanitized(self) -> GapSettings {
        let min = if self.min.is_finite() { self.min.max(0.0) } else { 0.0 };
        let max = self
            .max
            .filter(|m| m.is_finite())
            .map(|m| m.max(min));
        GapSettings { min, max }
    }

    /// The gap both sides of a mixed exercise must respect: the larger
    /// minimum and the tighter maximum.
    pub fn combine(&self, other: &GapSettings) -> GapSettings {
        let min = self.min.max(other.min);
        let max = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None)    => Some(a),
            (None, Some(b))    => Some(b),
            (None, None)       => None,
        };
        GapSettings { min, max: max.map(|m| m.max(min)) }
    }

    /// Does an absolute difference fall inside the bounds (with tolerance)?
    pub fn admits(&self, diff: f64) -> bool {
        let d = diff.abs();
        if d + EPSILON < self.min {
            return false;
        }
        match self.max {
            Some(max) => d - EPSILON <= max,
            None => true,
        }
    }
}

// ---------------------------------------------------------------------------
// Prepared (sanitized) generator configuration
// ---------------------------------------------------------------------------

/// Sanitized numeric domain of one value type. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "domain", rename_all = "camelCase")]
pub enum PreparedDomain {
    Integer { min: i64, max: i64 },
    Decimal { min: f64, max: f64, precisions: Vec<u32> },
    Fraction { numerator: (i64, i64), denominator: (i64, i64) },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedType {
    pub kind: ValueKind,
    pub weight: f64,
    pub gap: GapSettings,
    pub domain: PreparedDomain,
}

/// Validated configuration for one session. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedGenerator {
    pub types: Vec<PreparedType>,
    pub equal_ratio: f64,
}

// ---------------------------------------------------------------------------
// Generated values and exercises
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numerator: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denominator: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedValue {
    pub kind: ValueKind,
    pub value: f64,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ValueMeta>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    #[serde(rename = "<")]
    Less,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "=")]
    Equal,
}

impl Relation {
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Less    => "<",
            Relation::Greater => ">",
            Relation::Equal   => "=",
        }
    }

    pub const ALL: [Relation; 3] = [Relation::Less, Relation::Equal, Relation::Greater];
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedExercise {
    pub left: GeneratedValue,
    pub right: GeneratedValue,
    pub correct_relation: Relation,
}

// ---------------------------------------------------------------------------
// Arithmetic and rounding tasks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add      => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide   => "÷",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithmeticTask {
    pub left: i64,
    pub right: i64,
    pub operation: Operation,
    pub answer: i64,
}

/// Places a whole number can be rounded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingPlace {
    Tens,
    Hundreds,
    Thousands,
}

impl RoundingPlace {
    pub const ALL: [RoundingPlace; 3] =
        [RoundingPlace::Tens, RoundingPlace::Hundreds, RoundingPlace::Thousands];

    pub fn as_u32(self) -> u32 {
        match self {
            RoundingPlace::Tens      => 10,
            RoundingPlace::Hundreds  => 100,
            RoundingPlace::Thousands => 1000,
        }
    }

    pub fn factor(self) -> f64 {
        self.as_u32() as f64
    }

    /// The neighbouring place a careless student might round to instead.
    pub fn neighbour(self) -> RoundingPlace {
        match self {
            RoundingPlace::Tens      => RoundingPlace::Hundreds,
            RoundingPlace::Hundreds  => RoundingPlace::Thousands,
            RoundingPlace::Thousands => RoundingPlace::Hundreds,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RoundingPlace::Tens      => "ten",
            RoundingPlace::Hundreds  => "hundred",
            RoundingPlace::Thousands => "thousand",
        }
    }
}

impl TryFrom<u32> for RoundingPlace {
    type Error = crate::error::DrillError;

    fn try_from(place: u32) -> Result<Self, Self::Error> {
        match place {
            10   => Ok(RoundingPlace::Tens),
            100  => Ok(RoundingPlace::Hundreds),
            1000 => Ok(RoundingPlace::Thousands),
            other => Err(crate::error::DrillError::UnsupportedPlace(other)),
        }
    }
}

impl fmt::Display for RoundingPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundingTask {
    pub number: i64,
    pub place: RoundingPlace,
    pub answer: i64,
}

// ---------------------------------------------------------------------------
// Training request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingTopic {
    CompareNumbers,
    Arithmetic,
    Rounding,
}

impl fmt::Display for TrainingTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrainingTopic::CompareNumbers => "Compare Numbers",
            TrainingTopic::Arithmetic     => "Arithmetic",
            TrainingTopic::Rounding       => "Rounding",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DifficultyLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyLevel::Beginner     => write!(f, "Beginner"),
            DifficultyLevel::Intermediate => write!(f, "Intermediate"),
            DifficultyLevel::Advanced     => write!(f, "Advanced"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingRequest {
    pub topic: TrainingTopic,
    pub difficulty: DifficultyLevel,
    pub rng_seed: Option<u64>,
}

impl TrainingRequest {
    /// Beginner difficulty, fresh entropy.
    pub fn new(topic: TrainingTopic) -> Self {
        TrainingRequest { topic, difficulty: DifficultyLevel::default(), rng_seed: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
    pub explanation: String,
}

/// The typed task behind a scenario's question text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrillPayload {
    Compare(GeneratedExercise),
    Arithmetic(ArithmeticTask),
    Rounding(RoundingTask),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingScenario {
    pub scenario_id: String,
    pub topic: TrainingTopic,
    /// Identifies the logical branch of the drill, stable across seeds.
    /// Examples: "Compare:decimal:decimal:<", "Arithmetic:Add", "Rounding:100:Up"
    pub branch_key: String,
    pub question: String,
    pub answers: Vec<AnswerOption>,
    pub payload: DrillPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_gap_takes_larger_min_and_tighter_max() {
        let a = GapSettings { min: 1.0, max: Some(10.0) };
        let b = GapSettings { min: 3.0, max: None };
        assert_eq!(a.combine(&b), GapSettings { min: 3.0, max: Some(10.0) });

        let c = GapSettings { min: 0.0, max: Some(4.0) };
        assert_eq!(a.combine(&c), GapSettings { min: 1.0, max: Some(4.0) });

        let unbounded = GapSettings::default();
        assert_eq!(unbounded.combine(&unbounded).max, None);
    }

    #[test]
    fn combined_gap_clamps_inverted_bounds() {
        let a = GapSettings { min: 5.0, max: None };
        let b = GapSettings { min: 0.0, max: Some(2.0) };
        let g = a.combine(&b);
        assert_eq!(g.min, 5.0);
        assert_eq!(g.max, Some(5.0));
    }

    #[test]
    fn gap_admits_with_tolerance() {
        let g = GapSettings { min: 0.1, max: Some(0.3) };
        assert!(g.admits(0.1 - 1e-12));
        assert!(g.admits(-0.3));
        assert!(!g.admits(0.05));
        assert!(!g.admits(0.31));
    }

    #[test]
    fn sanitized_gap_repairs_bad_input() {
        let g = GapSettings { min: -2.0, max: Some(-1.0) }.sanitized();
        assert_eq!(g, GapSettings { min: 0.0, max: Some(0.0) });
        let g = GapSettings { min: f64::NAN, max: Some(f64::INFINITY) }.sanitized();
        assert_eq!(g, GapSettings::default());
    }

    #[test]
    fn rounding_place_from_u32() {
        assert_eq!(RoundingPlace::try_from(100).ok(), Some(RoundingPlace::Hundreds));
        assert!(RoundingPlace::try_from(50).is_err());
    }

    #[test]
    fn relation_serializes_as_symbol() {
        let json = serde_json::to_string(&Relation::Greater).unwrap();
        assert_eq!(json, "\">\"");
    }
}
