//! Accuracy, fold-score summaries, and the confusion matrix.

use ndarray::{Array2, Axis};
use statrs::statistics::Statistics;

use crate::error::TrainError;

/// Fraction of predictions matching the truth. Empty input counts as 0.
pub fn accuracy(truth: &[usize], pred: &[usize]) -> f64 {
    if truth.is_empty() || truth.len() != pred.len() {
        return 0.0;
    }
    let hits = truth
        .iter()
        .zip(pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    hits as f64 / truth.len() as f64
}

/// Mean and spread of per-fold accuracy scores.
///
/// `spread` is two population standard deviations, the conventional
/// "accuracy: mean (+/- 2*std)" report line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    pub mean: f64,
    pub spread: f64,
}

impl ScoreSummary {
    pub fn from_scores(scores: &[f64]) -> ScoreSummary {
        if scores.is_empty() {
            return ScoreSummary {
                mean: 0.0,
                spread: 0.0,
            };
        }
        let mean = scores.iter().mean();
        let spread = 2.0 * scores.iter().population_std_dev();
        ScoreSummary { mean, spread }
    }
}

/// Square table counting predicted vs. true class for all examples.
///
/// `counts[(i, j)]` is the number of examples of true class `i` predicted as
/// class `j`, so each row sums to that class's support.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix {
    counts: Array2<u64>,
}

impl ConfusionMatrix {
    /// Tally a confusion matrix from row-aligned truth and predictions.
    pub fn from_predictions(
        truth: &[usize],
        pred: &[usize],
        n_classes: usize,
    ) -> Result<ConfusionMatrix, TrainError> {
        if truth.len() != pred.len() {
            return Err(TrainError::LengthMismatch {
                left: truth.len(),
                right: pred.len(),
            });
        }
        let mut counts = Array2::zeros((n_classes, n_classes));
        for (&t, &p) in truth.iter().zip(pred.iter()) {
            if t >= n_classes {
                return Err(TrainError::UnknownClass(t));
            }
            if p >= n_classes {
                return Err(TrainError::UnknownClass(p));
            }
            counts[(t, p)] += 1;
        }
        Ok(ConfusionMatrix { counts })
    }

    pub fn n_classes(&self) -> usize {
        self.counts.nrows()
    }

    /// Raw counts.
    pub fn counts(&self) -> &Array2<u64> {
        &self.counts
    }

    /// Counts as floats, for plotting.
    pub fn counts_f64(&self) -> Array2<f64> {
        self.counts.mapv(|v| v as f64)
    }

    /// Row-normalized matrix; each row with support sums to 1, rows of an
    /// absent class stay zero.
    pub fn normalized(&self) -> Array2<f64> {
        let mut out = self.counts_f64();
        for mut row in out.axis_iter_mut(Axis(0)) {
            let sum: f64 = row.iter().sum();
            if sum > 0.0 {
                row.mapv_inplace(|v| v / sum);
            }
        }
        out
    }

    /// Overall accuracy: the diagonal over the total.
    pub fn accuracy(&self) -> f64 {
        let total: u64 = self.counts.iter().sum();
        if total == 0 {
            return 0.0;
        }
        let diagonal: u64 = (0..self.n_classes()).map(|i| self.counts[(i, i)]).sum();
        diagonal as f64 / total as f64
    }
}
