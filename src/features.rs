//! Feature derivation: raw attributes to the fixed 3-feature vector
//!
//! The trained classifiers are fit on exactly three composite features in a
//! fixed column order. This module is the single source of truth for that
//! schema: training derives features through the same code path that serving
//! does, so the two can never diverge.
//!
//! Each composite is a weighted blend of normalized attribute scores, pushed
//! through a steep logistic squash so the output lands in (0, 1) with most
//! mass away from the center:
//!
//! - `Feature1`: dissatisfaction/short-tenure composite
//! - `Feature2`: low-engagement composite (orders, coupon dependence)
//! - `Feature3`: low-cashback composite plus complaint offset

use crate::record::CustomerRecord;
use serde::{Deserialize, Serialize};

/// Ordered column names the classifiers are fit on. Persisted in every
/// artifact and verified at load time.
pub const FEATURE_COLUMNS: [&str; 3] = ["Feature1", "Feature2", "Feature3"];

/// Number of features the oracle consumes.
pub const N_FEATURES: usize = FEATURE_COLUMNS.len();

/// Tenure normalization horizon, months.
const TENURE_HORIZON: f64 = 72.0;

/// Logistic squash steepness.
const SQUASH_STEEPNESS: f64 = 10.0;

/// The derived feature vector, fields in `FEATURE_COLUMNS` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    #[serde(rename = "Feature1")]
    pub feature1: f64,
    #[serde(rename = "Feature2")]
    pub feature2: f64,
    #[serde(rename = "Feature3")]
    pub feature3: f64,
}

impl FeatureVector {
    /// Neutral vector used when derivation degrades (non-finite inputs).
    pub const NEUTRAL: Self = Self {
        feature1: 0.5,
        feature2: 0.5,
        feature3: 0.5,
    };

    /// Derive the feature vector from a customer record.
    ///
    /// Inputs are clamped into their documented ranges first. If any raw
    /// field or intermediate is non-finite the whole vector degrades to
    /// [`FeatureVector::NEUTRAL`] rather than propagating an error.
    #[must_use]
    pub fn derive(record: &CustomerRecord) -> Self {
        // Records built through `CustomerRecord::new` are always finite;
        // this guards struct literals and deserialized records.
        let raw = [
            record.tenure_months,
            record.satisfaction,
            record.order_count,
            record.coupons_used,
            record.cashback_amount,
        ];
        if raw.iter().any(|v| !v.is_finite()) {
            return Self::NEUTRAL;
        }

        let r = record.clamped();

        let tenure_score = (1.0 + r.tenure_months).ln() / (1.0 + TENURE_HORIZON).ln();
        let sat_score = (r.satisfaction / 5.0).powi(2);
        let feature1 = 0.6 * (1.0 - sat_score) + 0.4 * (1.0 - tenure_score);

        let order_score = (r.order_count / 50.0).min(2.0);
        // +1 denominator guards order_count == 0
        let coupon_ratio = (r.coupons_used / (r.order_count + 1.0)).min(1.0);
        let feature2 = 0.7 * (1.0 - order_score / 2.0) + 0.3 * coupon_ratio;

        let cashback_score = 1.0 - (r.cashback_amount / 300.0).min(1.0);
        let complain = if r.complained { 1.0 } else { 0.0 };
        let feature3 = cashback_score + 0.5 * complain;

        let squashed = Self {
            feature1: squash(feature1),
            feature2: squash(feature2),
            feature3: squash(feature3),
        };

        if squashed.is_finite() {
            squashed
        } else {
            Self::NEUTRAL
        }
    }

    /// Fields as an array in exactly `FEATURE_COLUMNS` order.
    #[must_use]
    pub const fn as_array(&self) -> [f64; N_FEATURES] {
        [self.feature1, self.feature2, self.feature3]
    }

    /// True when every field is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|v| v.is_finite())
    }
}

/// Logistic squash centered at 0.5: `sigmoid(steepness * (f - 0.5))`.
fn squash(f: f64) -> f64 {
    sigmoid(SQUASH_STEEPNESS * (f - 0.5))
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
