//! Signal Types
//!
//! KHÔNG chứa logic scoring - chỉ data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// QUALITY RATING
// ============================================================================

/// Per-signal quality band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityRating {
    Excellent,
    Good,
    Adequate,
    Questionable,
    Poor,
    Invalid,
    Unknown,
}

impl QualityRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityRating::Excellent => "EXCELLENT",
            QualityRating::Good => "GOOD",
            QualityRating::Adequate => "ADEQUATE",
            QualityRating::Questionable => "QUESTIONABLE",
            QualityRating::Poor => "POOR",
            QualityRating::Invalid => "INVALID",
            QualityRating::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for QualityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SIGNAL SCORE
// ============================================================================

/// One independently computed partial risk estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalScore {
    /// Risk in [0,1], clamped once after all contributions
    pub risk_score: f32,
    pub risk_factors: Vec<String>,
    pub positive_factors: Vec<String>,
    pub quality: QualityRating,
}

impl Default for SignalScore {
    fn default() -> Self {
        Self {
            risk_score: 0.0,
            risk_factors: vec![],
            positive_factors: vec![],
            quality: QualityRating::Unknown,
        }
    }
}

// ============================================================================
// SCORE CARD (contribution ledger)
// ============================================================================

/// One additive rule contribution
#[derive(Debug, Clone)]
pub struct Contribution {
    pub amount: f32,
    pub reason: String,
}

/// Collects (amount, reason) contributions from the ordered rules of one
/// scorer and sums + clamps exactly once at the end. Keeps every rule's
/// contribution independently assertable and removes order dependence from
/// the arithmetic.
#[derive(Debug, Clone, Default)]
pub struct ScoreCard {
    contributions: Vec<Contribution>,
    positives: Vec<String>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a risk contribution with its reason
    pub fn penalty(&mut self, amount: f32, reason: impl Into<String>) {
        self.contributions.push(Contribution {
            amount,
            reason: reason.into(),
        });
    }

    /// Record a positive factor (no score effect)
    pub fn positive(&mut self, reason: impl Into<String>) {
        self.positives.push(reason.into());
    }

    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    /// Sum of all contributions clamped to [0,1]
    pub fn total(&self) -> f32 {
        self.contributions
            .iter()
            .map(|c| c.amount)
            .sum::<f32>()
            .clamp(0.0, 1.0)
    }

    /// Seal the card into a SignalScore with the quality the scorer derived
    pub fn finish(self, quality: QualityRating) -> SignalScore {
        let risk_score = self.total();
        SignalScore {
            risk_score,
            risk_factors: self.contributions.into_iter().map(|c| c.reason).collect(),
            positive_factors: self.positives,
            quality,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorecard_sums_and_clamps_once() {
        let mut card = ScoreCard::new();
        card.penalty(0.6, "a");
        card.penalty(0.5, "b");
        card.penalty(0.4, "c");
        assert_eq!(card.total(), 1.0);

        let score = card.finish(QualityRating::Poor);
        assert_eq!(score.risk_score, 1.0);
        assert_eq!(score.risk_factors, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_scorecard_order_independent_total() {
        let mut a = ScoreCard::new();
        a.penalty(0.3, "x");
        a.penalty(0.2, "y");

        let mut b = ScoreCard::new();
        b.penalty(0.2, "y");
        b.penalty(0.3, "x");

        assert_eq!(a.total(), b.total());
    }

    #[test]
    fn test_positives_do_not_affect_score() {
        let mut card = ScoreCard::new();
        card.positive("looks fine");
        assert_eq!(card.total(), 0.0);
        let score = card.finish(QualityRating::Excellent);
        assert_eq!(score.positive_factors, vec!["looks fine"]);
        assert!(score.risk_factors.is_empty());
    }
}
