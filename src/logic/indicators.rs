//! Indicator Classification
//!
//! Turns the free-text output of the AI contextual collaborator into the
//! ordered indicator lists of a [`ContextualAssessment`]. The keyword table
//! is an explicit ordered rule set so operators can retune it and tests can
//! pin each rule independently; nothing here talks to the upstream model.

use once_cell::sync::Lazy;

use super::context::ContextualAssessment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorCategory {
    Risk,
    Positive,
}

/// Ordered (keyword, category) rules applied per line of analysis text
pub static KEYWORD_RULES: Lazy<Vec<(&'static str, IndicatorCategory)>> = Lazy::new(|| {
    vec![
        ("empty", IndicatorCategory::Risk),
        ("residential", IndicatorCategory::Risk),
        ("inappropriate", IndicatorCategory::Risk),
        ("facade", IndicatorCategory::Risk),
        ("shell", IndicatorCategory::Risk),
        ("suspicious", IndicatorCategory::Risk),
        ("warehouse", IndicatorCategory::Positive),
        ("office", IndicatorCategory::Positive),
        ("industrial", IndicatorCategory::Positive),
        ("commercial", IndicatorCategory::Positive),
        ("loading", IndicatorCategory::Positive),
        ("vehicles", IndicatorCategory::Positive),
    ]
});

/// Categories a single line of text matches, in rule order
pub fn classify_line(line: &str) -> Vec<IndicatorCategory> {
    let lower = line.to_lowercase();
    let mut matched = Vec::new();
    for &(keyword, category) in KEYWORD_RULES.iter() {
        if lower.contains(keyword) && !matched.contains(&category) {
            matched.push(category);
        }
    }
    matched
}

/// Parse a free-text AI analysis into a structured assessment.
///
/// Line order is preserved in both indicator lists; confidence is a pure
/// function of the indicator counts, so identical text always yields an
/// identical assessment.
pub fn parse_analysis_text(text: &str) -> ContextualAssessment {
    let mut positive_indicators = Vec::new();
    let mut risk_indicators = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        for category in classify_line(trimmed) {
            match category {
                IndicatorCategory::Risk => risk_indicators.push(trimmed.to_lowercase()),
                IndicatorCategory::Positive => positive_indicators.push(trimmed.to_lowercase()),
            }
        }
    }

    let confidence = derive_confidence(positive_indicators.len(), !risk_indicators.is_empty());

    ContextualAssessment {
        analysis_completed: true,
        positive_indicators,
        risk_indicators,
        confidence,
    }
}

/// Base 0.5 plus 0.2 per positive indicator, capped at 1.0, reduced by 30%
/// when any risk indicator is present.
pub fn derive_confidence(positive_count: usize, has_risk: bool) -> f32 {
    let mut confidence = (positive_count as f32 * 0.2 + 0.5).min(1.0);
    if has_risk {
        confidence *= 0.7;
    }
    confidence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_line_risk() {
        assert_eq!(classify_line("the lot appears empty"), vec![IndicatorCategory::Risk]);
        assert_eq!(classify_line("Residential area only"), vec![IndicatorCategory::Risk]);
    }

    #[test]
    fn test_classify_line_positive() {
        assert_eq!(
            classify_line("large warehouse with loading docks"),
            vec![IndicatorCategory::Positive]
        );
    }

    #[test]
    fn test_classify_line_both_categories() {
        // "suspicious" (risk) and "office" (positive) in one line
        let matched = classify_line("suspicious office placement");
        assert_eq!(matched, vec![IndicatorCategory::Risk, IndicatorCategory::Positive]);
    }

    #[test]
    fn test_classify_line_neutral() {
        assert!(classify_line("clear skies over the site").is_empty());
    }

    #[test]
    fn test_parse_preserves_order() {
        let text = "Warehouse visible in the north.\n\
                    The southern lot is empty.\n\
                    Several vehicles parked near the office.";
        let assessment = parse_analysis_text(text);
        assert!(assessment.analysis_completed);
        assert_eq!(assessment.risk_indicators.len(), 1);
        assert_eq!(assessment.positive_indicators.len(), 2);
        assert!(assessment.positive_indicators[0].contains("warehouse"));
        assert!(assessment.positive_indicators[1].contains("vehicles"));
    }

    #[test]
    fn test_confidence_formula() {
        assert!((derive_confidence(0, false) - 0.5).abs() < 1e-6);
        assert!((derive_confidence(2, false) - 0.9).abs() < 1e-6);
        // Capped at 1.0 before the risk reduction
        assert!((derive_confidence(5, false) - 1.0).abs() < 1e-6);
        assert!((derive_confidence(5, true) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "empty lot\nwarehouse";
        let a = parse_analysis_text(text);
        let b = parse_analysis_text(text);
        assert_eq!(a.positive_indicators, b.positive_indicators);
        assert_eq!(a.risk_indicators, b.risk_indicators);
        assert_eq!(a.confidence, b.confidence);
    }
}
