//! Fusion Types
//!
//! KHÔNG chứa logic - chỉ data structures.

use serde::{Deserialize, Serialize};

use crate::logic::context::BusinessType;
use crate::logic::signals::SignalScore;

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Final risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Plausibly legitimate, safe to approve automatically
    Low,
    /// Some risk indicators, needs a human
    Medium,
    /// Probable shell company, block
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RECOMMENDATION
// ============================================================================

/// Onboarding action paired with each risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    AutoApprove,
    ManualReview,
    Block,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::AutoApprove => "AUTO_APPROVE",
            Recommendation::ManualReview => "MANUAL_REVIEW",
            Recommendation::Block => "BLOCK",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SIGNAL BREAKDOWN
// ============================================================================

/// Per-signal detail carried alongside the fused score.
///
/// Serializes as a map keyed `address_risk` / `satellite_risk` /
/// `compatibility_risk`, which is the contract the orchestrator reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalBreakdown {
    pub address_risk: SignalScore,
    pub satellite_risk: SignalScore,
    pub compatibility_risk: SignalScore,
}

// ============================================================================
// RISK ASSESSMENT
// ============================================================================

/// Complete fused assessment for one request.
///
/// Produced once, immutable, never persisted by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub overall_risk_score: f32,
    pub risk_level: RiskLevel,
    pub recommendation: Recommendation,
    /// Confidence in the assessment itself, in [0,1]
    pub confidence_level: f32,
    /// Top risk factors across all signals, deduplicated, max 5
    pub risk_factors: Vec<String>,
    /// Top positive factors across all signals, deduplicated, max 5
    pub positive_factors: Vec<String>,
    pub recommendation_text: String,
    pub business_type: BusinessType,
    /// Carried for the envelope; not scored by this core
    pub declared_activity: String,
    pub detailed_assessment: SignalBreakdown,
}

impl RiskAssessment {
    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "overall_risk_score": self.overall_risk_score,
            "risk_level": self.risk_level.as_str(),
            "recommendation": self.recommendation.as_str(),
            "confidence_level": self.confidence_level,
            "business_type": self.business_type.as_str(),
            "risk_factors": self.risk_factors,
            "positive_factors": self.positive_factors,
        })
    }
}
