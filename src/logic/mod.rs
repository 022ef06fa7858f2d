//! Logic Module - Scoring Engines
//!
//! Chứa các engines xử lý: Imagery, Signals, Fusion, Explain.
//!
//! ## Architecture
//! - `imagery/` - Raster feature extraction (buildings, vehicles, lines, terrain)
//! - `signals/` - The three partial risk scorers (address, satellite, compatibility)
//! - `fusion/` - Weighted fusion + risk classification
//! - `explain/` - Deterministic recommendation text
//! - `pipeline` - End-to-end assessment entry point

pub mod context;
pub mod imagery;
pub mod indicators;
pub mod signals;
pub mod fusion;
pub mod explain;
pub mod pipeline;
