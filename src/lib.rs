//! GeoKYC Location Intelligence Core
//!
//! Assesses whether a declared business location is plausibly legitimate by
//! fusing three independent risk signals (address context, satellite imagery,
//! business/infrastructure compatibility) into one calibrated score, a risk
//! level and a recommendation.
//!
//! The crate is a pure core: no network I/O, no persistence, no retries.
//! Collaborators (geocoder, imagery downloader, AI contextual analysis) run
//! outside and hand their results in as plain values. Every call is
//! synchronous, deterministic and request-scoped, so concurrent invocation
//! needs no locking.
//!
//! ```no_run
//! use geokyc_core::logic::context::{BusinessType, ContextualAssessment, GeoContext};
//! use geokyc_core::logic::pipeline;
//!
//! let geo = GeoContext::invalid("address not found");
//! let ai = ContextualAssessment::default();
//! let assessment = pipeline::assess(&geo, None, &ai, BusinessType::Logistics, "");
//! println!("{}", assessment.recommendation_text);
//! ```

pub mod constants;
pub mod logic;

pub use logic::context::{BusinessType, ContextualAssessment, GeoContext};
pub use logic::fusion::types::{Recommendation, RiskAssessment, RiskLevel};
pub use logic::imagery::types::ImageFeatureSet;
pub use logic::pipeline::assess;
