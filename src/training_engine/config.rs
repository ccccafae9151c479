//! Raw, user-supplied generator configuration.
//!
//! These structs mirror what the setup screen hands over: loose numbers that
//! may be out of range, inverted or non-finite. Nothing here is trusted;
//! [`crate::training_engine::domain::prepare_generator`] turns a `RawConfig`
//! into a sanitized [`PreparedGenerator`](crate::training_engine::models::PreparedGenerator).
//!
//! Every field has a serde default so a partial JSON document is accepted.

use serde::{Deserialize, Serialize};

use crate::error::{DrillError, Result};
use crate::training_engine::models::{DifficultyLevel, GapSettings};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntegerConfig {
    pub enabled: bool,
    pub weight: f64,
    pub min: f64,
    pub max: f64,
    pub gap: GapSettings,
}

impl Default for IntegerConfig {
    fn default() -> Self {
        IntegerConfig { enabled: false, weight: 100.0, min: 0.0, max: 99.0, gap: GapSettings::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrecisionMode {
    #[default]
    Exact,
    UpTo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecimalConfig {
    pub enabled: bool,
    pub weight: f64,
    pub min: f64,
    pub max: f64,
    pub precision_mode: PrecisionMode,
    pub precision: u32,
    pub max_precision: u32,
    pub gap: GapSettings,
}

impl Default for DecimalConfig {
    fn default() -> Self {
        DecimalConfig {
            enabled: false,
            weight: 100.0,
            min: 0.0,
            max: 10.0,
            precision_mode: PrecisionMode::Exact,
            precision: 1,
            max_precision: 2,
            gap: GapSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FractionPreset {
    #[default]
    Preset12,
    Preset20,
    Custom,
}

impl FractionPreset {
    /// `(numerator, denominator)` bounds of the preset, `None` for custom.
    pub fn bounds(self) -> Option<((i64, i64), (i64, i64))> {
        match self {
            FractionPreset::Preset12 => Some(((1, 12), (2, 12))),
            FractionPreset::Preset20 => Some(((1, 20), (2, 20))),
            FractionPreset::Custom   => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FractionConfig {
    pub enabled: bool,
    pub weight: f64,
    pub preset: FractionPreset,
    pub numerator_min: f64,
    pub numerator_max: f64,
    pub denominator_min: f64,
    pub denominator_max: f64,
    pub gap: GapSettings,
}

impl Default for FractionConfig {
    fn default() -> Self {
        FractionConfig {
            enabled: false,
            weight: 100.0,
            preset: FractionPreset::Preset12,
            numerator_min: 1.0,
            numerator_max: 12.0,
            denominator_min: 2.0,
            denominator_max: 12.0,
            gap: GapSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawConfig {
    pub non_negative_int: IntegerConfig,
    pub signed_int: IntegerConfig,
    pub decimal: DecimalConfig,
    pub fraction: FractionConfig,
    pub equal_ratio: f64,
}

impl Default for RawConfig {
    /// The setup screen's initial state: non-negative integers only.
    fn default() -> Self {
        RawConfig {
            non_negative_int: IntegerConfig { enabled: true, ..IntegerConfig::default() },
            signed_int: IntegerConfig { min: -99.0, ..IntegerConfig::default() },
            decimal: DecimalConfig::default(),
            fraction: FractionConfig::default(),
            equal_ratio: 0.1,
        }
    }
}

impl RawConfig {
    /// Parse a (possibly partial) JSON document.
    pub fn from_json(json: &str) -> Result<RawConfig> {
        serde_json::from_str(json).map_err(|e| DrillError::invalid_config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Canned setups used by the compare drill when no explicit config is given.
    pub fn for_difficulty(difficulty: DifficultyLevel) -> RawConfig {
        match difficulty {
            DifficultyLevel::Beginner => RawConfig {
                non_negative_int: IntegerConfig { enabled: true, max: 20.0, ..IntegerConfig::default() },
                equal_ratio: 0.2,
                ..RawConfig::default()
            },
            DifficultyLevel::Intermediate => RawConfig {
                non_negative_int: IntegerConfig { enabled: true, max: 999.0, ..IntegerConfig::default() },
                decimal: DecimalConfig { enabled: true, weight: 60.0, ..DecimalConfig::default() },
                fraction: FractionConfig { enabled: true, weight: 40.0, ..FractionConfig::default() },
                equal_ratio: 0.15,
                ..RawConfig::default()
            },
            DifficultyLevel::Advanced => RawConfig {
                non_negative_int: IntegerConfig::default(),
                signed_int: IntegerConfig {
                    enabled: true,
                    min: -999.0,
                    max: 999.0,
                    weight: 30.0,
                    gap: GapSettings { min: 0.0, max: Some(50.0) },
                },
                decimal: DecimalConfig {
                    enabled: true,
                    weight: 50.0,
                    min: -20.0,
                    max: 20.0,
                    precision_mode: PrecisionMode::UpTo,
                    max_precision: 3,
                    ..DecimalConfig::default()
                },
                fraction: FractionConfig {
                    enabled: true,
                    weight: 20.0,
                    preset: FractionPreset::Preset20,
                    ..FractionConfig::default()
                },
                equal_ratio: 0.1,
            },
        }
    }
}
