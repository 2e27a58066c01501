//! Risk banding and result presentation
//!
//! Pure functions of the churn probability: a 3-tier band with fixed
//! messages, a rendered result panel, and ASCII importance bars. This is
//! the whole UI surface; there is no state here.

use crate::features::FEATURE_COLUMNS;
use crate::oracle::PredictionResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk tier derived from the churn probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    /// probability < 0.4
    Low,
    /// 0.4 <= probability < 0.7
    Medium,
    /// probability >= 0.7
    High,
}

impl RiskBand {
    /// Band for a churn probability. The upper tier is inclusive at 0.7.
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.7 {
            Self::High
        } else if probability >= 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Fixed headline for the band.
    #[must_use]
    pub const fn headline(&self) -> &'static str {
        match self {
            Self::Low => "Low churn risk: this customer is likely to stay.",
            Self::Medium => "Moderate churn risk: this customer may leave.",
            Self::High => "High churn risk: this customer is likely to leave.",
        }
    }

    /// Fixed guidance line for the band.
    #[must_use]
    pub const fn guidance(&self) -> &'static str {
        match self {
            Self::Low => "No action needed.",
            Self::Medium => "Consider a retention offer.",
            Self::High => "Escalate to the retention team.",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{name}")
    }
}

/// Render the result panel for one prediction.
#[must_use]
pub fn render_report(result: &PredictionResult) -> String {
    let band = RiskBand::from_probability(result.probability);
    format!(
        "{}\n  churn probability: {:.1}%\n  risk band:         {}\n  {}",
        band.headline(),
        result.probability * 100.0,
        band,
        band.guidance(),
    )
}

/// Width of the importance bar at weight 1.0.
const BAR_WIDTH: usize = 40;

/// Render ASCII feature-importance bars, one line per serving feature.
///
/// `importances` are expected normalized (sum 1); anything longer than the
/// serving schema is truncated.
#[must_use]
pub fn render_importance_bars(importances: &[f64]) -> String {
    let mut out = String::from("Feature importance:\n");
    for (name, &weight) in FEATURE_COLUMNS.iter().zip(importances.iter()) {
        let filled = (weight.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
        out.push_str(&format!(
            "  {name:<10} {:<BAR_WIDTH$} {weight:.3}\n",
            "#".repeat(filled),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RiskBand::from_probability(0.0), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(0.39), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(0.40), RiskBand::Medium);
        assert_eq!(RiskBand::from_probability(0.69), RiskBand::Medium);
        assert_eq!(RiskBand::from_probability(0.70), RiskBand::High);
        assert_eq!(RiskBand::from_probability(1.0), RiskBand::High);
    }

    #[test]
    fn test_band_messages_are_fixed() {
        assert!(RiskBand::Low.headline().contains("likely to stay"));
        assert!(RiskBand::High.headline().contains("likely to leave"));
        assert_eq!(RiskBand::Medium.to_string(), "medium");
    }

    #[test]
    fn test_report_contains_probability_and_band() {
        let result = PredictionResult::from_probability(0.82);
        let report = render_report(&result);
        assert!(report.contains("82.0%"));
        assert!(report.contains("high"));
        assert!(report.contains("likely to leave"));
    }

    #[test]
    fn test_importance_bars_render_each_feature() {
        let bars = render_importance_bars(&[0.5, 0.3, 0.2]);
        assert!(bars.contains("Feature1"));
        assert!(bars.contains("Feature2"));
        assert!(bars.contains("Feature3"));
        assert!(bars.contains("0.500"));
        // half-weight bar is half the full width
        assert!(bars.contains(&"#".repeat(20)));
        assert!(!bars.contains(&"#".repeat(21)));
    }
}
