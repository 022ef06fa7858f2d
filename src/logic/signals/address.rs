//! Address Signal Scorer
//!
//! Ordered additive rules over the geocoded address context. An invalid
//! address short-circuits to the degraded fallback score; everything else
//! accumulates bounded contributions on a [`ScoreCard`].

use crate::logic::context::{BusinessType, GeoContext, LocationType};

use super::rules;
use super::types::{QualityRating, ScoreCard, SignalScore};

pub fn score(geo: &GeoContext, business: BusinessType) -> SignalScore {
    // Rule 1: unvalidated address dominates everything else
    if !geo.is_valid {
        let mut card = ScoreCard::new();
        card.penalty(rules::INVALID_ADDRESS_SCORE, "Address not found or invalid");
        return card.finish(QualityRating::Invalid);
    }

    let mut card = ScoreCard::new();
    let expected = rules::expected_locations(business);

    // Rules 2-4 are mutually exclusive readings of the location type
    if geo.location_type == LocationType::Residential {
        card.penalty(
            rules::RESIDENTIAL_ADDRESS_PENALTY,
            "Business registered at residential address",
        );
    } else if expected.contains(&geo.location_type) {
        card.positive(format!(
            "Address in appropriate {} area",
            geo.location_type
        ));
    } else if geo.location_type == LocationType::Commercial && !business.is_office_style() {
        card.penalty(
            rules::LOCATION_MISMATCH_PENALTY,
            "Business type may not match commercial location",
        );
    }

    // Rule 5: office-style business far from everything
    if geo.neighborhood_context.is_isolated() && business.is_office_style() {
        card.penalty(
            rules::ISOLATED_OFFICE_PENALTY,
            "Tech/consulting business in remote location",
        );
    }

    // Rule 6: supporting amenities nearby
    let has_support = geo
        .nearby_amenities
        .iter()
        .any(|a| rules::SUPPORTING_AMENITIES.contains(&a.as_str()));
    if has_support {
        card.positive("Business-supporting amenities nearby");
    }

    let quality = quality_band(card.total());
    card.finish(quality)
}

fn quality_band(score: f32) -> QualityRating {
    if score < 0.2 {
        QualityRating::Excellent
    } else if score < 0.4 {
        QualityRating::Good
    } else {
        QualityRating::Poor
    }
}
