//! Fusion Module - Weighted Risk Combination
//!
//! CHỈ chứa logic hợp nhất ba signal thành một đánh giá cuối.
//! Input: three SignalScores + AI contextual confidence
//! Output: RiskAssessment

pub mod types;
pub mod weights;
pub mod engine;

pub use types::{Recommendation, RiskAssessment, RiskLevel, SignalBreakdown};
pub use weights::{FusionConfig, FusionWeights, RiskThresholds};
