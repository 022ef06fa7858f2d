//! Signals Module - Partial Risk Scorers
//!
//! Ba scorer độc lập, mỗi cái trả về một SignalScore hợp lệ trong mọi
//! trường hợp (degraded input cho điểm fallback, không bao giờ abort):
//! - `address` - geocoded address context
//! - `satellite` - image features + AI contextual assessment
//! - `compatibility` - declared business vs observed location/scale

pub mod types;
pub mod rules;
pub mod address;
pub mod satellite;
pub mod compatibility;

pub use types::{QualityRating, ScoreCard, SignalScore};
