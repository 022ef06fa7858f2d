//! Signal Rules & Lookup Tables
//!
//! KHÔNG chứa logic scoring - chỉ constants và lookup tables.
//! Operators retune these without touching the scorers.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::logic::context::{BusinessType, LocationType};

// ============================================================================
// CONTRIBUTION AMOUNTS
// ============================================================================

/// Score assigned when the address could not be validated at all
pub const INVALID_ADDRESS_SCORE: f32 = 0.9;

/// Business registered at a residential address
pub const RESIDENTIAL_ADDRESS_PENALTY: f32 = 0.4;

/// Commercial location for a business type that does not expect one
pub const LOCATION_MISMATCH_PENALTY: f32 = 0.1;

/// Office-style business in a remote/rural neighborhood
pub const ISOLATED_OFFICE_PENALTY: f32 = 0.3;

/// Fallback score when the satellite analysis never ran
pub const ANALYSIS_UNAVAILABLE_SCORE: f32 = 0.3;

/// No buildings detected at the registered address
pub const NO_BUILDINGS_PENALTY: f32 = 0.5;

/// No vehicles visible for a fleet-dependent business
pub const NO_FLEET_PENALTY: f32 = 0.3;

/// No positive AI indicators at all
pub const NO_INDICATORS_PENALTY: f32 = 0.2;

/// Per AI risk indicator, capped
pub const AI_RISK_INDICATOR_STEP: f32 = 0.1;
pub const AI_RISK_INDICATOR_CAP: f32 = 0.4;
/// How many AI risk indicators are surfaced as factors
pub const AI_RISK_INDICATOR_FACTORS: usize = 3;

/// Industrial-scale business at a residential location
pub const INDUSTRIAL_AT_RESIDENTIAL_PENALTY: f32 = 0.6;

/// Office-style business in an industrial area
pub const OFFICE_AT_INDUSTRIAL_PENALTY: f32 = 0.2;

/// Industrial-scale business with too little built area
pub const SMALL_INFRASTRUCTURE_PENALTY: f32 = 0.3;
pub const MIN_INDUSTRIAL_BUILDING_AREA: f32 = 1000.0;

/// Fleet business with almost no visible vehicles
pub const LOW_FLEET_ACTIVITY_PENALTY: f32 = 0.2;
pub const MIN_FLEET_VEHICLES: usize = 2;

/// Building area above which infrastructure counts as substantial
pub const SUBSTANTIAL_BUILDING_AREA: f32 = 5000.0;

/// Vehicle count above which the site shows clear activity
pub const ACTIVE_VEHICLE_COUNT: usize = 5;

/// Positive-indicator count that counts as strong AI support
pub const STRONG_AI_INDICATOR_COUNT: usize = 3;

// ============================================================================
// LOOKUP TABLES
// ============================================================================

/// Acceptable location types per business type. Types absent from the table
/// fall back to [`DEFAULT_EXPECTED_LOCATIONS`].
pub static EXPECTED_LOCATIONS: Lazy<HashMap<BusinessType, Vec<LocationType>>> = Lazy::new(|| {
    use BusinessType::*;
    use LocationType::*;
    HashMap::from([
        (Logistics, vec![Industrial, Commercial]),
        (Manufacturing, vec![Industrial]),
        (Technology, vec![Commercial]),
        (Consulting, vec![Commercial]),
        (Retail, vec![Commercial]),
        (Restaurant, vec![Commercial]),
    ])
});

pub static DEFAULT_EXPECTED_LOCATIONS: &[LocationType] = &[LocationType::Commercial];

/// Amenity tags that support business legitimacy
pub static SUPPORTING_AMENITIES: &[&str] = &["bank", "office", "commercial", "industrial"];

/// Location types acceptable for the given business type
pub fn expected_locations(business: BusinessType) -> &'static [LocationType] {
    EXPECTED_LOCATIONS
        .get(&business)
        .map(|v| v.as_slice())
        .unwrap_or(DEFAULT_EXPECTED_LOCATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_locations_table() {
        assert_eq!(
            expected_locations(BusinessType::Manufacturing),
            &[LocationType::Industrial]
        );
        assert!(expected_locations(BusinessType::Logistics).contains(&LocationType::Commercial));
    }

    #[test]
    fn test_unrecognized_type_defaults_to_commercial() {
        assert_eq!(
            expected_locations(BusinessType::Other),
            &[LocationType::Commercial]
        );
        // Transport and construction are recognized but fall to the default
        assert_eq!(
            expected_locations(BusinessType::Transport),
            &[LocationType::Commercial]
        );
        assert_eq!(
            expected_locations(BusinessType::Construction),
            &[LocationType::Commercial]
        );
    }

    #[test]
    fn test_supporting_amenities() {
        assert!(SUPPORTING_AMENITIES.contains(&"bank"));
        assert!(!SUPPORTING_AMENITIES.contains(&"playground"));
    }
}
