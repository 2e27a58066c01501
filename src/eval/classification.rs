//! Classification metrics for churn model evaluation
//!
//! Confusion matrix plus per-class precision/recall/F1 and an
//! sklearn-style classification report. Binary churn is the primary
//! consumer but the matrix stays n-class.

use std::fmt;

/// Confusion matrix for multi-class classification
///
/// Element [i][j] counts samples with true label i predicted as j.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfusionMatrix {
    matrix: Vec<Vec<usize>>,
    n_classes: usize,
}

impl ConfusionMatrix {
    /// Create an empty matrix with the given number of classes.
    #[must_use]
    pub fn new(n_classes: usize) -> Self {
        Self {
            matrix: vec![vec![0; n_classes]; n_classes],
            n_classes,
        }
    }

    /// Build from parallel prediction/truth slices.
    ///
    /// # Panics
    ///
    /// Panics when the slices differ in length.
    #[must_use]
    pub fn from_predictions(y_pred: &[usize], y_true: &[usize]) -> Self {
        assert_eq!(
            y_pred.len(),
            y_true.len(),
            "predictions and targets must have same length"
        );

        // At least binary even when one class never occurs
        let n_classes = y_pred
            .iter()
            .chain(y_true.iter())
            .max()
            .map_or(0, |&m| m + 1)
            .max(2);

        let mut cm = Self::new(n_classes);
        for (&pred, &truth) in y_pred.iter().zip(y_true.iter()) {
            cm.matrix[truth][pred] += 1;
        }
        cm
    }

    /// Number of classes.
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Count at [true_label][predicted_label].
    #[must_use]
    pub fn get(&self, true_label: usize, predicted_label: usize) -> usize {
        self.matrix[true_label][predicted_label]
    }

    /// True positives for a class.
    #[must_use]
    pub fn true_positives(&self, class: usize) -> usize {
        self.matrix[class][class]
    }

    /// False positives for a class (predicted as class but wasn't).
    #[must_use]
    pub fn false_positives(&self, class: usize) -> usize {
        (0..self.n_classes)
            .filter(|&i| i != class)
            .map(|i| self.matrix[i][class])
            .sum()
    }

    /// False negatives for a class (was class but predicted differently).
    #[must_use]
    pub fn false_negatives(&self, class: usize) -> usize {
        (0..self.n_classes)
            .filter(|&j| j != class)
            .map(|j| self.matrix[class][j])
            .sum()
    }

    /// Support (total true instances) for a class.
    #[must_use]
    pub fn support(&self, class: usize) -> usize {
        self.matrix[class].iter().sum()
    }

    /// Total number of samples.
    #[must_use]
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    /// Overall accuracy.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct: usize = (0..self.n_classes).map(|i| self.matrix[i][i]).sum();
        correct as f64 / total as f64
    }

    /// Precision for a class; 0 when the class was never predicted.
    #[must_use]
    pub fn precision(&self, class: usize) -> f64 {
        let tp = self.true_positives(class);
        let denom = tp + self.false_positives(class);
        ratio(tp, denom)
    }

    /// Recall for a class; 0 when the class never occurs.
    #[must_use]
    pub fn recall(&self, class: usize) -> f64 {
        let tp = self.true_positives(class);
        let denom = tp + self.false_negatives(class);
        ratio(tp, denom)
    }

    /// F1 for a class; 0 when precision + recall is 0.
    #[must_use]
    pub fn f1(&self, class: usize) -> f64 {
        let p = self.precision(class);
        let r = self.recall(class);
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }
}

fn ratio(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix (rows: actual, cols: predicted):")?;
        write!(f, "        ")?;
        for j in 0..self.n_classes {
            write!(f, "{j:>8}")?;
        }
        writeln!(f)?;
        for (i, row) in self.matrix.iter().enumerate() {
            write!(f, "{i:>8}")?;
            for &count in row {
                write!(f, "{count:>8}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Per-class metric bundle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// sklearn-style classification report.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationReport {
    per_class: Vec<ClassMetrics>,
    accuracy: f64,
    total: usize,
}

impl ClassificationReport {
    /// Compute the report from parallel prediction/truth slices.
    #[must_use]
    pub fn from_predictions(y_pred: &[usize], y_true: &[usize]) -> Self {
        let cm = ConfusionMatrix::from_predictions(y_pred, y_true);
        Self::from_confusion_matrix(&cm)
    }

    /// Compute the report from an existing confusion matrix.
    #[must_use]
    pub fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let per_class = (0..cm.n_classes())
            .map(|c| ClassMetrics {
                precision: cm.precision(c),
                recall: cm.recall(c),
                f1: cm.f1(c),
                support: cm.support(c),
            })
            .collect();
        Self {
            per_class,
            accuracy: cm.accuracy(),
            total: cm.total(),
        }
    }

    /// Metrics for one class.
    #[must_use]
    pub fn class(&self, class: usize) -> Option<&ClassMetrics> {
        self.per_class.get(class)
    }

    /// Overall accuracy.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Total evaluated samples.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>12} {:>10} {:>10} {:>10} {:>10}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        for (class, m) in self.per_class.iter().enumerate() {
            writeln!(
                f,
                "{class:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                m.precision, m.recall, m.f1, m.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>12} {:>10} {:>10} {:>10.2} {:>10}",
            "accuracy", "", "", self.accuracy, self.total
        )
    }
}
