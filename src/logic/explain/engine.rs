//! Recommendation Text Engine
//!
//! Template selection keyed by risk level, composed only from the factor
//! lists the fusion engine already produced. Same inputs, same bytes out.

use crate::logic::fusion::types::RiskLevel;

/// How many positive factors the medium/low templates quote
const QUOTED_POSITIVES: usize = 2;

pub fn recommendation_text(
    risk_level: RiskLevel,
    score: f32,
    risk_factors: &[String],
    positive_factors: &[String],
) -> String {
    match risk_level {
        RiskLevel::High => high_risk_text(score, risk_factors),
        RiskLevel::Medium => medium_risk_text(score, positive_factors),
        RiskLevel::Low => low_risk_text(score, positive_factors),
    }
}

fn high_risk_text(score: f32, risk_factors: &[String]) -> String {
    let mut text = format!("🚨 HIGH RISK (Score: {:.2}): ", score);
    if contains_keyword(risk_factors, "residential") {
        text.push_str("ALERT: Registered address is residential. ");
    }
    if contains_keyword(risk_factors, "no buildings") {
        text.push_str("No commercial infrastructure visible. ");
    }
    text.push_str("High probability of shell company. Block registration and forward for manual review.");
    text
}

fn medium_risk_text(score: f32, positive_factors: &[String]) -> String {
    let mut text = format!("⚠️ MEDIUM RISK (Score: {:.2}): ", score);
    text.push_str("The company may be legitimate, but shows some risk indicators. ");
    if !positive_factors.is_empty() {
        text.push_str(&format!(
            "Positive points: {}. ",
            quote_factors(positive_factors)
        ));
    }
    text.push_str("Additional document verification recommended.");
    text
}

fn low_risk_text(score: f32, positive_factors: &[String]) -> String {
    let mut text = format!("✅ LOW RISK (Score: {:.2}): ", score);
    text.push_str("Address validated. ");
    if !positive_factors.is_empty() {
        text.push_str(&format!(
            "Adequate infrastructure identified: {}. ",
            quote_factors(positive_factors)
        ));
    }
    text.push_str("Automatic approval recommended.");
    text
}

fn contains_keyword(factors: &[String], keyword: &str) -> bool {
    factors.iter().any(|f| f.to_lowercase().contains(keyword))
}

fn quote_factors(factors: &[String]) -> String {
    factors
        .iter()
        .take(QUOTED_POSITIVES)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// TESTS
// ============================================================================
