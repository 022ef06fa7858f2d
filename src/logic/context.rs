//! Input Contracts
//!
//! KHÔNG chứa logic scoring - chỉ data structures.
//! These are the in-memory values the upstream collaborators (geocoder,
//! AI contextual analysis, request metadata) hand to the core.

use serde::{Deserialize, Serialize};

// ============================================================================
// LOCATION CONTEXT (from address-validation collaborator)
// ============================================================================

/// Dominant land-use class around the geocoded address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Residential,
    Commercial,
    Industrial,
    Mixed,
    Unknown,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Residential => "residential",
            LocationType::Commercial => "commercial",
            LocationType::Industrial => "industrial",
            LocationType::Mixed => "mixed",
            LocationType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for LocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Neighborhood density class around the geocoded address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborhoodContext {
    Urban,
    Remote,
    Rural,
    Unknown,
}

impl NeighborhoodContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            NeighborhoodContext::Urban => "urban",
            NeighborhoodContext::Remote => "remote",
            NeighborhoodContext::Rural => "rural",
            NeighborhoodContext::Unknown => "unknown",
        }
    }

    /// Remote and rural count as isolated for the address rules
    pub fn is_isolated(&self) -> bool {
        matches!(self, NeighborhoodContext::Remote | NeighborhoodContext::Rural)
    }
}

/// Geocoded address context, produced by the address-validation collaborator.
///
/// Invariant: `coordinates` is `Some` exactly when `is_valid` is true. The
/// constructors below maintain it; deserialized values are taken as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoContext {
    pub is_valid: bool,
    /// (lat, lon) - present iff is_valid
    pub coordinates: Option<(f64, f64)>,
    pub location_type: LocationType,
    pub neighborhood_context: NeighborhoodContext,
    /// OSM-style amenity tags observed near the address
    pub nearby_amenities: Vec<String>,
    pub error: Option<String>,
}

impl GeoContext {
    /// A successfully geocoded address
    pub fn valid(lat: f64, lon: f64) -> Self {
        Self {
            is_valid: true,
            coordinates: Some((lat, lon)),
            location_type: LocationType::Unknown,
            neighborhood_context: NeighborhoodContext::Unknown,
            nearby_amenities: Vec::new(),
            error: None,
        }
    }

    /// An address the geocoder could not resolve
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            coordinates: None,
            location_type: LocationType::Unknown,
            neighborhood_context: NeighborhoodContext::Unknown,
            nearby_amenities: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn with_location_type(mut self, location_type: LocationType) -> Self {
        self.location_type = location_type;
        self
    }

    pub fn with_neighborhood(mut self, neighborhood: NeighborhoodContext) -> Self {
        self.neighborhood_context = neighborhood;
        self
    }

    pub fn with_amenities(mut self, amenities: Vec<String>) -> Self {
        self.nearby_amenities = amenities;
        self
    }
}

impl Default for GeoContext {
    fn default() -> Self {
        Self::invalid("no address data")
    }
}

// ============================================================================
// AI CONTEXTUAL ASSESSMENT (from AI collaborator)
// ============================================================================

/// Structured result of the AI contextual analysis of the satellite image.
///
/// Produced outside the core (the collaborator may use the keyword classifier
/// in [`crate::logic::indicators`] to build one from free text). Consumed as
/// opaque ordered lists plus a confidence in [0,1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextualAssessment {
    /// Whether the upstream analysis ran at all
    pub analysis_completed: bool,
    pub positive_indicators: Vec<String>,
    pub risk_indicators: Vec<String>,
    /// Confidence in [0,1], derived deterministically upstream
    pub confidence: f32,
}

impl Default for ContextualAssessment {
    fn default() -> Self {
        Self {
            analysis_completed: false,
            positive_indicators: Vec::new(),
            risk_indicators: Vec::new(),
            confidence: 0.0,
        }
    }
}

// ============================================================================
// BUSINESS TYPE (from request metadata)
// ============================================================================

/// Normalized declared business category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Logistics,
    Transport,
    Manufacturing,
    Technology,
    Consulting,
    Retail,
    Restaurant,
    Construction,
    Other,
}

impl BusinessType {
    /// Normalize a free-form business type string
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "logistics" => BusinessType::Logistics,
            "transport" => BusinessType::Transport,
            "manufacturing" => BusinessType::Manufacturing,
            "technology" => BusinessType::Technology,
            "consulting" => BusinessType::Consulting,
            "retail" => BusinessType::Retail,
            "restaurant" => BusinessType::Restaurant,
            "construction" => BusinessType::Construction,
            _ => BusinessType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::Logistics => "logistics",
            BusinessType::Transport => "transport",
            BusinessType::Manufacturing => "manufacturing",
            BusinessType::Technology => "technology",
            BusinessType::Consulting => "consulting",
            BusinessType::Retail => "retail",
            BusinessType::Restaurant => "restaurant",
            BusinessType::Construction => "construction",
            BusinessType::Other => "other",
        }
    }

    /// Office-style businesses: plausible in commercial areas without
    /// heavy infrastructure
    pub fn is_office_style(&self) -> bool {
        matches!(self, BusinessType::Technology | BusinessType::Consulting)
    }

    /// Businesses that need industrial-scale buildings
    pub fn is_industrial_scale(&self) -> bool {
        matches!(self, BusinessType::Logistics | BusinessType::Manufacturing)
    }

    /// Businesses where a visible vehicle fleet is expected
    pub fn expects_fleet(&self) -> bool {
        matches!(self, BusinessType::Logistics | BusinessType::Transport)
    }
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_context_invariant() {
        let valid = GeoContext::valid(-23.55, -46.63);
        assert!(valid.is_valid && valid.coordinates.is_some());

        let invalid = GeoContext::invalid("not found");
        assert!(!invalid.is_valid && invalid.coordinates.is_none());
        assert_eq!(invalid.error.as_deref(), Some("not found"));
    }

    #[test]
    fn test_business_type_normalization() {
        assert_eq!(BusinessType::from_key("  Logistics "), BusinessType::Logistics);
        assert_eq!(BusinessType::from_key("TECHNOLOGY"), BusinessType::Technology);
        assert_eq!(BusinessType::from_key("florist"), BusinessType::Other);
    }

    #[test]
    fn test_business_type_groups() {
        assert!(BusinessType::Technology.is_office_style());
        assert!(BusinessType::Logistics.is_industrial_scale());
        assert!(BusinessType::Transport.expects_fleet());
        assert!(!BusinessType::Retail.expects_fleet());
    }

    #[test]
    fn test_isolated_neighborhood() {
        assert!(NeighborhoodContext::Remote.is_isolated());
        assert!(NeighborhoodContext::Rural.is_isolated());
        assert!(!NeighborhoodContext::Urban.is_isolated());
    }
}
