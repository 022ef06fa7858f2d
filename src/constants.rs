//! Central Configuration Constants
//!
//! Single source of truth for all scoring defaults.
//! To retune the risk bands for a deployment, only edit this file (or set the
//! corresponding environment variables).

/// Scores at or above this value classify as HIGH risk
pub const DEFAULT_HIGH_RISK_THRESHOLD: f32 = 0.7;

/// Scores at or above this value (and below high) classify as MEDIUM risk
pub const DEFAULT_MEDIUM_RISK_THRESHOLD: f32 = 0.4;

/// Weight of the address-context signal in the fused score
pub const DEFAULT_ADDRESS_WEIGHT: f32 = 0.3;

/// Weight of the satellite-imagery signal in the fused score
pub const DEFAULT_SATELLITE_WEIGHT: f32 = 0.4;

/// Weight of the business-compatibility signal in the fused score
pub const DEFAULT_COMPATIBILITY_WEIGHT: f32 = 0.3;

/// Risk added when the AI contextual confidence falls below the floor
pub const DEFAULT_LOW_CONFIDENCE_PENALTY: f32 = 0.1;

/// AI contextual confidence below this value triggers the penalty
pub const DEFAULT_CONFIDENCE_FLOOR: f32 = 0.3;

/// Crate version
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// Helper functions to read from env with fallback
// ============================================

fn env_f32(key: &str, default: f32) -> f32 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Get high-risk threshold from environment or use default
pub fn get_high_risk_threshold() -> f32 {
    env_f32("GEOKYC_HIGH_RISK_THRESHOLD", DEFAULT_HIGH_RISK_THRESHOLD)
}

/// Get medium-risk threshold from environment or use default
pub fn get_medium_risk_threshold() -> f32 {
    env_f32("GEOKYC_MEDIUM_RISK_THRESHOLD", DEFAULT_MEDIUM_RISK_THRESHOLD)
}
