//! Fusion Engine
//!
//! CHỈ chứa logic fusion - không có types, không có explain text.
//! Input: three SignalScores + AI contextual confidence
//! Output: FusionSummary
//!
//! CORE LOGIC - Deterministic and Explainable

use crate::logic::signals::SignalScore;

use super::types::{Recommendation, RiskLevel};
use super::weights::{FusionConfig, RiskThresholds};

/// How many factors of each kind the final assessment surfaces
pub const MAX_SURFACED_FACTORS: usize = 5;

/// Fused result before the recommendation text is rendered
#[derive(Debug, Clone)]
pub struct FusionSummary {
    pub overall_risk_score: f32,
    pub risk_level: RiskLevel,
    pub recommendation: Recommendation,
    pub confidence_level: f32,
    pub risk_factors: Vec<String>,
    pub positive_factors: Vec<String>,
}

/// Fuse the three partial signals with default configuration
pub fn fuse(
    address: &SignalScore,
    satellite: &SignalScore,
    compatibility: &SignalScore,
    satellite_confidence: f32,
    address_valid: bool,
    analysis_completed: bool,
) -> FusionSummary {
    fuse_with_config(
        address,
        satellite,
        compatibility,
        satellite_confidence,
        address_valid,
        analysis_completed,
        &FusionConfig::default(),
    )
}

/// Fuse with custom weights/thresholds
#[allow(clippy::too_many_arguments)]
pub fn fuse_with_config(
    address: &SignalScore,
    satellite: &SignalScore,
    compatibility: &SignalScore,
    satellite_confidence: f32,
    address_valid: bool,
    analysis_completed: bool,
    config: &FusionConfig,
) -> FusionSummary {
    // Weighted combination, clamped after every additive step
    let weighted = address.risk_score * config.weights.address
        + satellite.risk_score * config.weights.satellite
        + compatibility.risk_score * config.weights.compatibility;
    let mut overall = weighted.clamp(0.0, 1.0);

    // Low AI confidence makes the whole assessment riskier
    if satellite_confidence < config.confidence_floor {
        overall = (overall + config.low_confidence_penalty).clamp(0.0, 1.0);
    }

    let (risk_level, recommendation) = classify(overall, &config.thresholds);

    // Fixed signal order, order-preserving dedup, cap at 5
    let risk_factors = collect_factors([
        &address.risk_factors,
        &satellite.risk_factors,
        &compatibility.risk_factors,
    ]);
    let positive_factors = collect_factors([
        &address.positive_factors,
        &satellite.positive_factors,
        &compatibility.positive_factors,
    ]);

    let confidence_level =
        confidence(address_valid, satellite_confidence, analysis_completed);

    FusionSummary {
        overall_risk_score: overall,
        risk_level,
        recommendation,
        confidence_level,
        risk_factors,
        positive_factors,
    }
}

/// Classify against the ordered bands; boundaries are inclusive on the
/// higher band.
pub fn classify(score: f32, thresholds: &RiskThresholds) -> (RiskLevel, Recommendation) {
    if score >= thresholds.high {
        (RiskLevel::High, Recommendation::Block)
    } else if score >= thresholds.medium {
        (RiskLevel::Medium, Recommendation::ManualReview)
    } else {
        (RiskLevel::Low, Recommendation::AutoApprove)
    }
}

fn collect_factors(lists: [&Vec<String>; 3]) -> Vec<String> {
    let mut seen = Vec::new();
    for list in lists {
        for factor in list {
            if !seen.contains(factor) {
                seen.push(factor.clone());
            }
            if seen.len() == MAX_SURFACED_FACTORS {
                return seen;
            }
        }
    }
    seen
}

/// Mean of the address-validity, AI-confidence and completeness terms
fn confidence(address_valid: bool, satellite_confidence: f32, analysis_completed: bool) -> f32 {
    let address_term = if address_valid { 0.8 } else { 0.3 };
    let completeness_term = if analysis_completed { 0.9 } else { 0.4 };
    (address_term + satellite_confidence + completeness_term) / 3.0
}

// ============================================================================
// TESTS
// ============================================================================
