//! Labeled dataset loading and splitting
//!
//! Training data is a flat CSV whose header carries the raw attribute
//! columns (`Tenure`, `SatisfactionScore`, `OrderCount`, `CouponUsed`,
//! `CashbackAmount`, `Complain`) plus the binary `Churn` target. Optional
//! attribute columns fall back to the record defaults; a missing or
//! non-binary target is a typed error.

use crate::error::{Error, Result};
use crate::features::FeatureVector;
use crate::record::CustomerRecord;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;
use std::path::Path;

/// One CSV row: customer attributes plus the churn target.
///
/// Spelled out field by field because the csv deserializer does not
/// support `#[serde(flatten)]` for numeric columns.
#[derive(Debug, Deserialize)]
struct LabeledRow {
    #[serde(rename = "Tenure", default)]
    tenure: f64,
    #[serde(rename = "SatisfactionScore", default = "mid_satisfaction")]
    satisfaction: f64,
    #[serde(rename = "OrderCount", default)]
    orders: f64,
    #[serde(rename = "CouponUsed", default)]
    coupons: f64,
    #[serde(rename = "CashbackAmount", default)]
    cashback: f64,
    #[serde(rename = "Complain", default)]
    complain: u8,
    #[serde(rename = "Churn")]
    churn: u8,
}

fn mid_satisfaction() -> f64 {
    crate::record::DEFAULT_SATISFACTION
}

impl LabeledRow {
    fn into_record(self) -> CustomerRecord {
        CustomerRecord::new(
            self.tenure,
            self.satisfaction,
            self.orders,
            self.coupons,
            self.cashback,
            self.complain != 0,
        )
    }
}

/// An in-memory labeled dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Raw customer records, one per row.
    pub records: Vec<CustomerRecord>,
    /// Binary churn labels aligned with `records`.
    pub labels: Vec<usize>,
}

impl Dataset {
    /// Load a labeled dataset from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Data` on an unreadable file, a malformed row, a
    /// non-binary `Churn` value, or an empty dataset.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| Error::Data(format!("cannot read {}: {e}", path.display())))?;

        let mut records = Vec::new();
        let mut labels = Vec::new();
        for (i, row) in reader.deserialize::<LabeledRow>().enumerate() {
            let row = row.map_err(|e| Error::Data(format!("row {}: {e}", i + 1)))?;
            if row.churn > 1 {
                return Err(Error::Data(format!(
                    "row {}: Churn must be 0 or 1, got {}",
                    i + 1,
                    row.churn
                )));
            }
            labels.push(usize::from(row.churn));
            records.push(row.into_record());
        }

        if records.is_empty() {
            return Err(Error::Data(format!(
                "{} contains no data rows",
                path.display()
            )));
        }

        Ok(Self { records, labels })
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Derive the feature matrix for every record, serving-schema order.
    #[must_use]
    pub fn feature_matrix(&self) -> Vec<Vec<f64>> {
        self.records
            .iter()
            .map(|r| FeatureVector::derive(r).as_array().to_vec())
            .collect()
    }

    /// Split into (train, test) with a seeded shuffle.
    ///
    /// `test_ratio` is the fraction held out; the test side keeps at least
    /// one row when the ratio is positive and the dataset has two or more.
    ///
    /// # Errors
    ///
    /// Returns `Error::Data` when `test_ratio` is outside (0, 1).
    pub fn train_test_split(&self, test_ratio: f64, seed: u64) -> Result<(Self, Self)> {
        if !(0.0..1.0).contains(&test_ratio) || test_ratio == 0.0 {
            return Err(Error::Data(format!(
                "test_ratio must be in (0, 1), got {test_ratio}"
            )));
        }

        let mut order: Vec<usize> = (0..self.len()).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        order.shuffle(&mut rng);

        let mut n_test = (self.len() as f64 * test_ratio).round() as usize;
        if self.len() >= 2 {
            n_test = n_test.clamp(1, self.len() - 1);
        }

        let pick = |indices: &[usize]| Self {
            records: indices.iter().map(|&i| self.records[i].clone()).collect(),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
        };

        let (test_idx, train_idx) = order.split_at(n_test);
        Ok((pick(train_idx), pick(test_idx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Tenure,SatisfactionScore,OrderCount,CouponUsed,CashbackAmount,Complain,Churn";

    fn csv_file(rows: &[&str]) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_labeled_csv() {
        let file = csv_file(&[
            "12,3,10,5,50,0,0",
            "1,1,0,0,0,1,1",
            "48,5,30,2,250,0,0",
        ]);
        let ds = Dataset::from_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.labels, vec![0, 1, 0]);
        assert_eq!(ds.records[1].satisfaction, 1.0);
        assert!(ds.records[1].complained);
    }

    #[test]
    fn test_empty_csv_is_error() {
        let file = csv_file(&[]);
        let err = Dataset::from_csv(file.path()).unwrap_err();
        assert!(matches!(err, Error::Data(_)));
    }

    #[test]
    fn test_non_binary_target_is_error() {
        let file = csv_file(&["12,3,10,5,50,0,2"]);
        let err = Dataset::from_csv(file.path()).unwrap_err();
        assert!(matches!(err, Error::Data(_)));
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(Dataset::from_csv("does_not_exist.csv").is_err());
    }

    #[test]
    fn test_split_is_seeded_and_partitions() {
        let rows: Vec<String> = (0..10)
            .map(|i| format!("{i},3,{i},0,{},{},{}", i * 10, i % 2, i % 2))
            .collect();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let file = csv_file(&refs);
        let ds = Dataset::from_csv(file.path()).unwrap();

        let (train_a, test_a) = ds.train_test_split(0.2, 42).unwrap();
        let (train_b, test_b) = ds.train_test_split(0.2, 42).unwrap();
        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
        assert_eq!(train_a.len() + test_a.len(), ds.len());
        assert_eq!(test_a.len(), 2);
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let file = csv_file(&["12,3,10,5,50,0,0", "1,1,0,0,0,1,1"]);
        let ds = Dataset::from_csv(file.path()).unwrap();
        assert!(ds.train_test_split(0.0, 42).is_err());
        assert!(ds.train_test_split(1.0, 42).is_err());
        assert!(ds.train_test_split(-0.5, 42).is_err());
    }

    #[test]
    fn test_feature_matrix_shape() {
        let file = csv_file(&["12,3,10,5,50,0,0", "1,1,0,0,0,1,1"]);
        let ds = Dataset::from_csv(file.path()).unwrap();
        let x = ds.feature_matrix();
        assert_eq!(x.len(), 2);
        assert!(x.iter().all(|row| row.len() == 3));
    }
}
