//! Explain Module - Recommendation Text
//!
//! Renders the fused assessment into deterministic analyst-facing text.
//! No scoring happens here; templates only read already-computed factors.

pub mod engine;

pub use engine::recommendation_text;
