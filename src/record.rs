//! Raw customer attributes as collected from the input surface
//!
//! A `CustomerRecord` is transient: constructed per prediction request,
//! consumed by the feature deriver, then discarded. Missing fields take
//! documented defaults and every field is clamped into its valid range at
//! construction, so downstream arithmetic never sees out-of-range values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default satisfaction score when the field is absent (mid-scale).
pub const DEFAULT_SATISFACTION: f64 = 3.0;

/// A single customer's raw attributes.
///
/// Field names on the wire match the training CSV header
/// (`Tenure`, `SatisfactionScore`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Months as a customer (>= 0)
    #[serde(rename = "Tenure", default)]
    pub tenure_months: f64,

    /// Satisfaction score on a 1-5 scale
    #[serde(rename = "SatisfactionScore", default = "default_satisfaction")]
    pub satisfaction: f64,

    /// Lifetime order count (>= 0)
    #[serde(rename = "OrderCount", default)]
    pub order_count: f64,

    /// Coupons redeemed (>= 0)
    #[serde(rename = "CouponUsed", default)]
    pub coupons_used: f64,

    /// Cashback received, currency units (>= 0)
    #[serde(rename = "CashbackAmount", default)]
    pub cashback_amount: f64,

    /// Whether the customer has filed a complaint
    #[serde(
        rename = "Complain",
        default,
        serialize_with = "bool_as_int",
        deserialize_with = "int_as_bool"
    )]
    pub complained: bool,
}

fn default_satisfaction() -> f64 {
    DEFAULT_SATISFACTION
}

/// Serialize the complaint flag as 0/1, matching the CSV encoding.
fn bool_as_int<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}

/// Accept 0/1 integers for the complaint flag (CSV has no booleans).
fn int_as_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = u8::deserialize(deserializer)?;
    match v {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "expected 0 or 1 for Complain, got {other}"
        ))),
    }
}

impl Default for CustomerRecord {
    fn default() -> Self {
        Self {
            tenure_months: 0.0,
            satisfaction: DEFAULT_SATISFACTION,
            order_count: 0.0,
            coupons_used: 0.0,
            cashback_amount: 0.0,
            complained: false,
        }
    }
}

impl CustomerRecord {
    /// Create a record, clamping every field into its documented range.
    /// Non-finite values are treated as missing and take the defaults.
    pub fn new(
        tenure_months: f64,
        satisfaction: f64,
        order_count: f64,
        coupons_used: f64,
        cashback_amount: f64,
        complained: bool,
    ) -> Self {
        Self {
            tenure_months: clamp_non_negative(tenure_months),
            satisfaction: clamp_or(satisfaction, 1.0, 5.0, DEFAULT_SATISFACTION),
            order_count: clamp_non_negative(order_count),
            coupons_used: clamp_non_negative(coupons_used),
            cashback_amount: clamp_non_negative(cashback_amount),
            complained,
        }
    }

    /// Build a record from a loose field mapping.
    ///
    /// Missing keys take the documented defaults (tenure 0, satisfaction 3,
    /// all others 0). Never errors: this is the intake path for partially
    /// filled forms.
    pub fn from_fields(fields: &HashMap<String, f64>) -> Self {
        let get = |key: &str, default: f64| fields.get(key).copied().unwrap_or(default);
        Self::new(
            get("Tenure", 0.0),
            get("SatisfactionScore", DEFAULT_SATISFACTION),
            get("OrderCount", 0.0),
            get("CouponUsed", 0.0),
            get("CashbackAmount", 0.0),
            get("Complain", 0.0) != 0.0,
        )
    }

    /// Re-clamp all fields. Used after serde deserialization, which bypasses
    /// `new`.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self::new(
            self.tenure_months,
            self.satisfaction,
            self.order_count,
            self.coupons_used,
            self.cashback_amount,
            self.complained,
        )
    }
}

/// Clamp to [0, inf); non-finite values are treated as missing and fall
/// back to 0.
fn clamp_non_negative(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// Clamp to [lo, hi]; non-finite values are treated as missing and fall
/// back to `default`.
fn clamp_or(v: f64, lo: f64, hi: f64, default: f64) -> f64 {
    if v.is_finite() {
        v.clamp(lo, hi)
    } else {
        default
    }
}
