//! Fusion Weights & Thresholds
//!
//! KHÔNG chứa logic fusion - chỉ constants và config.
//! Weights must sum to 1.0; the risk bands must be ordered. Both are
//! validated once when a config is constructed from untrusted input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("fusion weights sum to {0}, expected 1.0")]
    WeightsNotNormalized(f32),
    #[error("risk thresholds out of order: medium {medium} must be below high {high}, both within [0,1]")]
    ThresholdsOutOfOrder { medium: f32, high: f32 },
}

// ============================================================================
// WEIGHTS
// ============================================================================

/// How much each signal contributes to the fused score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionWeights {
    pub address: f32,
    pub satellite: f32,
    pub compatibility: f32,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            address: constants::DEFAULT_ADDRESS_WEIGHT,
            satellite: constants::DEFAULT_SATELLITE_WEIGHT,
            compatibility: constants::DEFAULT_COMPATIBILITY_WEIGHT,
        }
    }
}

impl FusionWeights {
    pub fn sum(&self) -> f32 {
        self.address + self.satellite + self.compatibility
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-4 {
            return Err(ConfigError::WeightsNotNormalized(sum));
        }
        Ok(())
    }
}

// ============================================================================
// RISK THRESHOLDS
// ============================================================================

/// Ordered classification bands. Scores at or above `high` are HIGH, at or
/// above `medium` are MEDIUM, everything below is LOW — boundaries are
/// inclusive on the higher band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub medium: f32,
    pub high: f32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            medium: constants::DEFAULT_MEDIUM_RISK_THRESHOLD,
            high: constants::DEFAULT_HIGH_RISK_THRESHOLD,
        }
    }
}

impl RiskThresholds {
    /// Thresholds from environment overrides, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            medium: constants::get_medium_risk_threshold(),
            high: constants::get_high_risk_threshold(),
        }
    }

    /// Lower bands: more applications go to review/block
    pub fn strict() -> Self {
        Self {
            medium: 0.3,
            high: 0.6,
        }
    }

    /// Higher bands: fewer alerts
    pub fn lenient() -> Self {
        Self {
            medium: 0.5,
            high: 0.8,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered =
            0.0 <= self.medium && self.medium < self.high && self.high <= 1.0;
        if !ordered {
            return Err(ConfigError::ThresholdsOutOfOrder {
                medium: self.medium,
                high: self.high,
            });
        }
        Ok(())
    }
}

// ============================================================================
// FUSION CONFIG
// ============================================================================

/// Full fusion configuration (can be loaded from a config file)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionConfig {
    pub weights: FusionWeights,
    pub thresholds: RiskThresholds,
    /// Risk added when AI contextual confidence is below the floor
    pub low_confidence_penalty: f32,
    /// AI contextual confidence floor
    pub confidence_floor: f32,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            weights: FusionWeights::default(),
            thresholds: RiskThresholds::default(),
            low_confidence_penalty: constants::DEFAULT_LOW_CONFIDENCE_PENALTY,
            confidence_floor: constants::DEFAULT_CONFIDENCE_FLOOR,
        }
    }
}

impl FusionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.thresholds.validate()
    }
}

impl FusionWeights {
    pub fn new(address: f32, satellite: f32, compatibility: f32) -> Self {
        Self {
            address,
            satellite,
            compatibility,
        }
    }
}
