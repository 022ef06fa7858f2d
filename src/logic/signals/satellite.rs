//! Satellite Signal Scorer
//!
//! Combines the raster feature measurements with the AI contextual
//! assessment. If either upstream step never completed, the signal degrades
//! to the fixed fallback score instead of failing the pipeline.

use crate::logic::context::{BusinessType, ContextualAssessment};
use crate::logic::imagery::ImageFeatureSet;

use super::rules;
use super::types::{QualityRating, ScoreCard, SignalScore};

pub fn score(
    features: &ImageFeatureSet,
    ai: &ContextualAssessment,
    business: BusinessType,
) -> SignalScore {
    // Rule 1: nothing to look at
    let completed = features.extraction_ok() && ai.analysis_completed;
    if !completed {
        let mut card = ScoreCard::new();
        card.penalty(rules::ANALYSIS_UNAVAILABLE_SCORE, "Satellite analysis unavailable");
        return card.finish(QualityRating::Unknown);
    }

    let mut card = ScoreCard::new();

    // Rules 2-3: building presence and scale
    if features.building_count() == 0 {
        card.penalty(
            rules::NO_BUILDINGS_PENALTY,
            "No buildings detected at registered address",
        );
    } else if features.largest_building_area() > rules::SUBSTANTIAL_BUILDING_AREA {
        card.positive("Substantial building infrastructure present");
    }

    // Rules 4-5: vehicle activity
    if features.vehicle_count() > rules::ACTIVE_VEHICLE_COUNT {
        card.positive("Multiple vehicles present - signs of activity");
    } else if features.vehicle_count() == 0 && business.expects_fleet() {
        card.penalty(
            rules::NO_FLEET_PENALTY,
            "No vehicles visible for logistics/transport business",
        );
    }

    // Rule 6: AI positive indicator volume
    let positive_count = ai.positive_indicators.len();
    if positive_count >= rules::STRONG_AI_INDICATOR_COUNT {
        card.positive("Strong infrastructure indicators from AI analysis");
    } else if positive_count == 0 {
        card.penalty(rules::NO_INDICATORS_PENALTY, "Limited infrastructure indicators");
    }

    // Rule 7: AI risk indicators, capped, top few surfaced as factors
    if !ai.risk_indicators.is_empty() {
        let amount = rules::AI_RISK_INDICATOR_CAP
            .min(ai.risk_indicators.len() as f32 * rules::AI_RISK_INDICATOR_STEP);
        // One contribution carries the cap; the indicator texts ride along
        let mut surfaced = ai.risk_indicators.iter().take(rules::AI_RISK_INDICATOR_FACTORS);
        if let Some(first) = surfaced.next() {
            card.penalty(amount, first.clone());
        }
        for indicator in surfaced {
            card.penalty(0.0, indicator.clone());
        }
    }

    let quality = quality_band(card.total(), positive_count);
    card.finish(quality)
}

fn quality_band(score: f32, positive_indicators: usize) -> QualityRating {
    if score < 0.2 && positive_indicators >= 2 {
        QualityRating::Excellent
    } else if score < 0.4 {
        QualityRating::Adequate
    } else {
        QualityRating::Poor
    }
}
