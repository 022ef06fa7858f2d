//! Assessment Pipeline
//!
//! CHỈ chứa orchestration - không có scoring rules.
//! One synchronous pass: extract image features, run the three signal
//! scorers, fuse, render the recommendation text. Pure function of its
//! inputs; degraded inputs degrade the relevant signal instead of failing.

use image::RgbImage;

use super::context::{BusinessType, ContextualAssessment, GeoContext};
use super::explain;
use super::fusion::engine;
use super::fusion::types::{RiskAssessment, SignalBreakdown};
use super::fusion::weights::FusionConfig;
use super::imagery::{self, ExtractionConfig, ImageFeatureSet};
use super::signals::{address, compatibility, satellite};

/// Assess one business location with default configuration.
///
/// `image` is the decoded satellite raster when the imagery collaborator
/// produced one; `None` degrades the satellite signal to its fallback score.
pub fn assess(
    geo: &GeoContext,
    image: Option<&RgbImage>,
    ai: &ContextualAssessment,
    business: BusinessType,
    declared_activity: &str,
) -> RiskAssessment {
    assess_with_config(
        geo,
        image,
        ai,
        business,
        declared_activity,
        &ExtractionConfig::default(),
        &FusionConfig::default(),
    )
}

/// Assess with explicit extraction and fusion configuration.
pub fn assess_with_config(
    geo: &GeoContext,
    image: Option<&RgbImage>,
    ai: &ContextualAssessment,
    business: BusinessType,
    declared_activity: &str,
    extraction: &ExtractionConfig,
    fusion: &FusionConfig,
) -> RiskAssessment {
    let features = match image {
        Some(img) => imagery::extract(img, extraction),
        None => ImageFeatureSet::empty_with_error("no satellite image available"),
    };
    assess_features(geo, &features, ai, business, declared_activity, fusion)
}

/// Assess from an already-extracted feature set.
///
/// Entry point for callers that ran extraction separately (batch jobs,
/// cached features).
pub fn assess_features(
    geo: &GeoContext,
    features: &ImageFeatureSet,
    ai: &ContextualAssessment,
    business: BusinessType,
    declared_activity: &str,
    fusion: &FusionConfig,
) -> RiskAssessment {
    let address_risk = address::score(geo, business);
    let satellite_risk = satellite::score(features, ai, business);
    let compatibility_risk =
        compatibility::score(geo.location_type, features, business, declared_activity);

    let analysis_completed = features.extraction_ok() && ai.analysis_completed;
    let summary = engine::fuse_with_config(
        &address_risk,
        &satellite_risk,
        &compatibility_risk,
        ai.confidence,
        geo.is_valid,
        analysis_completed,
        fusion,
    );

    let recommendation_text = explain::recommendation_text(
        summary.risk_level,
        summary.overall_risk_score,
        &summary.risk_factors,
        &summary.positive_factors,
    );

    let assessment = RiskAssessment {
        overall_risk_score: summary.overall_risk_score,
        risk_level: summary.risk_level,
        recommendation: summary.recommendation,
        confidence_level: summary.confidence_level,
        risk_factors: summary.risk_factors,
        positive_factors: summary.positive_factors,
        recommendation_text,
        business_type: business,
        declared_activity: declared_activity.to_string(),
        detailed_assessment: SignalBreakdown {
            address_risk,
            satellite_risk,
            compatibility_risk,
        },
    };

    log::info!("assessment complete: {}", assessment.to_log_entry());
    assessment
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::context::{LocationType, NeighborhoodContext};
    use crate::logic::fusion::types::{Recommendation, RiskLevel};
    use crate::logic::imagery::types::{BuildingReport, VehicleReport};

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn features_with(
        buildings: usize,
        largest: f32,
        total: f32,
        vehicles: usize,
    ) -> ImageFeatureSet {
        let mut set = ImageFeatureSet::default();
        set.buildings = BuildingReport {
            building_count: buildings,
            total_building_area: total,
            largest_building_area: largest,
            buildings: vec![],
        };
        set.vehicles = VehicleReport {
            vehicle_count: vehicles,
            vehicles: vec![],
        };
        set
    }

    fn ai_with(positives: usize, risks: usize, confidence: f32) -> ContextualAssessment {
        ContextualAssessment {
            analysis_completed: true,
            positive_indicators: (0..positives)
                .map(|i| format!("positive indicator {}", i))
                .collect(),
            risk_indicators: (0..risks).map(|i| format!("risk indicator {}", i)).collect(),
            confidence,
        }
    }

    #[test]
    fn test_unresolvable_address_goes_to_review() {
        init_logs();
        let geo = GeoContext::invalid("address not found");
        let ai = ContextualAssessment::default();
        let result = assess(&geo, None, &ai, BusinessType::Logistics, "freight");

        // address 0.9, satellite fallback 0.3, compatibility 0.5
        // (small infrastructure + low fleet), plus the low-confidence penalty:
        // 0.9*0.3 + 0.3*0.4 + 0.5*0.3 + 0.1 = 0.64
        assert!((result.overall_risk_score - 0.64).abs() < 1e-6);
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.recommendation, Recommendation::ManualReview);
        assert!(result
            .risk_factors
            .iter()
            .any(|f| f.contains("not found or invalid")));
        // Degraded on every term: (0.3 + 0.0 + 0.4) / 3
        assert!((result.confidence_level - 0.7 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_clean_logistics_site_auto_approves() {
        init_logs();
        let geo = GeoContext::valid(-23.55, -46.63)
            .with_location_type(LocationType::Industrial)
            .with_neighborhood(NeighborhoodContext::Urban)
            .with_amenities(vec!["bank".into()]);
        let features = features_with(3, 6000.0, 9000.0, 6);
        let ai = ai_with(3, 0, 0.8);

        let result = assess_features(
            &geo,
            &features,
            &ai,
            BusinessType::Logistics,
            "freight and warehousing",
            &FusionConfig::default(),
        );

        assert_eq!(result.overall_risk_score, 0.0);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.recommendation, Recommendation::AutoApprove);
        assert!(result.risk_factors.is_empty());
        assert!(result.recommendation_text.starts_with("✅ LOW RISK"));
        assert!(result.recommendation_text.contains("Adequate infrastructure identified:"));
        assert!((result.confidence_level - (0.8 + 0.8 + 0.9) / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_address_with_bare_site_blocks() {
        init_logs();
        let geo = GeoContext::invalid("address not found");
        // Extraction ran and found a bare lot
        let features = features_with(0, 0.0, 0.0, 0);
        let ai = ai_with(0, 0, 0.5);

        let result = assess_features(
            &geo,
            &features,
            &ai,
            BusinessType::Logistics,
            "freight",
            &FusionConfig::default(),
        );

        // address 0.9; satellite 0.5 + 0.3 (no fleet) + 0.2 (no indicators)
        // clamps to 1.0; compatibility 0.5; no penalty at confidence 0.5:
        // 0.9*0.3 + 1.0*0.4 + 0.5*0.3 = 0.82
        assert!((result.overall_risk_score - 0.82).abs() < 1e-6);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.recommendation, Recommendation::Block);
        assert!(result.recommendation_text.starts_with("🚨 HIGH RISK"));
    }

    #[test]
    fn test_residential_technology_with_weak_ai_needs_review() {
        init_logs();
        let geo = GeoContext::valid(0.0, 0.0)
            .with_location_type(LocationType::Residential)
            .with_neighborhood(NeighborhoodContext::Urban);
        let features = features_with(1, 500.0, 500.0, 0);
        // No positive indicators, four risk indicators, confidence below floor
        let ai = ai_with(0, 4, 0.2);

        let result = assess_features(
            &geo,
            &features,
            &ai,
            BusinessType::Technology,
            "software development",
            &FusionConfig::default(),
        );

        // address 0.4; satellite 0.2 (no indicators) + 0.4 (capped) = 0.6;
        // an office-style business has no scale/fleet requirement, so the
        // compatibility signal stays clean; weighted 0.36, +0.1 penalty
        assert_eq!(result.detailed_assessment.compatibility_risk.risk_score, 0.0);
        assert!((result.overall_risk_score - 0.46).abs() < 1e-6);
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.recommendation, Recommendation::ManualReview);
        assert!(result.recommendation_text.starts_with("⚠️ MEDIUM RISK"));
    }

    #[test]
    fn test_shell_company_pattern_blocks() {
        init_logs();
        let geo = GeoContext::valid(0.0, 0.0)
            .with_location_type(LocationType::Residential)
            .with_neighborhood(NeighborhoodContext::Urban);
        // Extraction ran but found nothing at all
        let features = features_with(0, 0.0, 0.0, 0);
        let ai = ai_with(0, 5, 0.1);

        let result = assess_features(
            &geo,
            &features,
            &ai,
            BusinessType::Logistics,
            "international freight",
            &FusionConfig::default(),
        );

        // address 0.4; satellite clamps to 1.0; compatibility clamps to 1.0;
        // 0.4*0.3 + 1.0*0.4 + 1.0*0.3 + 0.1 = 0.92
        assert!((result.overall_risk_score - 0.92).abs() < 1e-6);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.recommendation, Recommendation::Block);
        assert!(result
            .recommendation_text
            .contains("ALERT: Registered address is residential."));
        assert!(result
            .recommendation_text
            .contains("No commercial infrastructure visible."));
        // Factor lists never exceed the surfaced cap
        assert!(result.risk_factors.len() <= engine::MAX_SURFACED_FACTORS);
        assert_eq!(result.risk_factors.len(), 5);
    }

    #[test]
    fn test_confidence_floor_adds_exactly_one_step() {
        let geo = GeoContext::valid(0.0, 0.0).with_location_type(LocationType::Commercial);
        let features = features_with(1, 500.0, 500.0, 0);
        let config = FusionConfig::default();

        let confident = assess_features(
            &geo,
            &features,
            &ai_with(1, 1, 0.5),
            BusinessType::Retail,
            "",
            &config,
        );
        let doubtful = assess_features(
            &geo,
            &features,
            &ai_with(1, 1, 0.2),
            BusinessType::Retail,
            "",
            &config,
        );

        let delta = doubtful.overall_risk_score - confident.overall_risk_score;
        assert!((delta - 0.1).abs() < 1e-6, "penalty was {}", delta);
    }

    #[test]
    fn test_assessment_is_byte_deterministic() {
        let geo = GeoContext::valid(10.5, 20.25)
            .with_location_type(LocationType::Industrial)
            .with_amenities(vec!["office".into(), "bank".into()]);
        let features = features_with(2, 3000.0, 4500.0, 3);
        let ai = ai_with(2, 1, 0.65);

        let first = assess_features(
            &geo,
            &features,
            &ai,
            BusinessType::Manufacturing,
            "metal fabrication",
            &FusionConfig::default(),
        );
        let second = assess_features(
            &geo,
            &features,
            &ai,
            BusinessType::Manufacturing,
            "metal fabrication",
            &FusionConfig::default(),
        );

        let a = serde_json::to_string(&first).unwrap();
        let b = serde_json::to_string(&second).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_breakdown_carries_all_three_signals() {
        let geo = GeoContext::valid(0.0, 0.0).with_location_type(LocationType::Commercial);
        let result = assess(&geo, None, &ai_with(1, 0, 0.9), BusinessType::Retail, "shop");

        // No image: only the satellite signal degrades
        assert!((result.detailed_assessment.satellite_risk.risk_score - 0.3).abs() < 1e-6);
        assert_eq!(result.detailed_assessment.address_risk.risk_score, 0.0);
        assert_eq!(result.detailed_assessment.compatibility_risk.risk_score, 0.0);
        assert_eq!(result.declared_activity, "shop");
        assert_eq!(result.business_type, BusinessType::Retail);
    }
}
