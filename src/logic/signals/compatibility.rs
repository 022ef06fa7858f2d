//! Compatibility Signal Scorer
//!
//! Cross-checks the declared business type against the observed location
//! type and infrastructure scale. The declared-activity text is accepted for
//! the envelope but not scored here.

use crate::logic::context::{BusinessType, LocationType};
use crate::logic::imagery::ImageFeatureSet;

use super::rules;
use super::types::{QualityRating, ScoreCard, SignalScore};

pub fn score(
    location_type: LocationType,
    features: &ImageFeatureSet,
    business: BusinessType,
    _declared_activity: &str,
) -> SignalScore {
    let mut card = ScoreCard::new();

    // Rule 1: heavy business at a house
    if business.is_industrial_scale() && location_type == LocationType::Residential {
        card.penalty(
            rules::INDUSTRIAL_AT_RESIDENTIAL_PENALTY,
            format!("Industrial {} business at residential location", business),
        );
    }

    // Rule 2: office business on an industrial estate
    if business.is_office_style() && location_type == LocationType::Industrial {
        card.penalty(
            rules::OFFICE_AT_INDUSTRIAL_PENALTY,
            format!("{} business in industrial area (unusual but possible)", business),
        );
    }

    // Rule 3: infrastructure scale for industrial business types
    if business.is_industrial_scale() {
        if features.total_building_area() < rules::MIN_INDUSTRIAL_BUILDING_AREA {
            card.penalty(
                rules::SMALL_INFRASTRUCTURE_PENALTY,
                "Small infrastructure for industrial business type",
            );
        } else {
            card.positive("Adequate infrastructure size for business type");
        }
    }

    // Rule 4: fleet presence
    if business.expects_fleet() && features.vehicle_count() < rules::MIN_FLEET_VEHICLES {
        card.penalty(
            rules::LOW_FLEET_ACTIVITY_PENALTY,
            "Low vehicle activity for transport/logistics business",
        );
    }

    let quality = quality_band(card.total());
    card.finish(quality)
}

fn quality_band(score: f32) -> QualityRating {
    if score < 0.15 {
        QualityRating::Excellent
    } else if score < 0.35 {
        QualityRating::Good
    } else if score < 0.55 {
        QualityRating::Questionable
    } else {
        QualityRating::Poor
    }
}
