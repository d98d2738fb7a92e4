//! Multiclass linear-kernel SVM built on `linfa-svm`.
//!
//! `linfa-svm` solves binary problems, so multiclass prediction is one-vs-rest:
//! one Platt-calibrated machine per class, trained on `code == class` targets,
//! with prediction by argmax over the per-class probabilities. The per-class
//! fits are independent and run in parallel; that parallelism is internal to
//! the classifier, the surrounding pipeline stays sequential.

use linfa::dataset::Pr;
use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_svm::Svm;
use ndarray::{Array1, Array2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::SvmConfig;
use crate::error::TrainError;

/// One-vs-rest linear SVM over encoded class labels.
#[derive(Debug, Serialize, Deserialize)]
pub struct SvmClassifier {
    machines: Vec<Svm<f64, Pr>>,
}

impl SvmClassifier {
    /// Train on scaled features and encoded labels.
    ///
    /// `y` holds class codes in `[0, n_classes)`, row-aligned with `x`.
    pub fn fit(
        x: &Array2<f64>,
        y: &[usize],
        n_classes: usize,
        config: &SvmConfig,
    ) -> Result<SvmClassifier, TrainError> {
        if n_classes < 2 {
            return Err(TrainError::TooFewClasses(n_classes));
        }
        if x.nrows() != y.len() {
            return Err(TrainError::LengthMismatch {
                left: x.nrows(),
                right: y.len(),
            });
        }
        if x.nrows() == 0 {
            return Err(TrainError::EmptyDataset);
        }

        let machines = (0..n_classes)
            .into_par_iter()
            .map(|class| {
                let targets: Array1<bool> =
                    y.iter().map(|&code| code == class).collect();
                let dataset = Dataset::new(x.to_owned(), targets);
                Svm::<f64, Pr>::params()
                    .eps(config.eps)
                    .pos_neg_weights(config.c, config.c)
                    .linear_kernel()
                    .fit(&dataset)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SvmClassifier { machines })
    }

    /// Number of classes this classifier separates.
    pub fn n_classes(&self) -> usize {
        self.machines.len()
    }

    /// Per-class calibrated probabilities, one row per sample.
    pub fn decision_values(&self, x: &Array2<f64>) -> Array2<f64> {
        let mut scores = Array2::zeros((x.nrows(), self.machines.len()));
        for (class, machine) in self.machines.iter().enumerate() {
            let probs: Array1<Pr> = machine.predict(x);
            for (row, p) in probs.iter().enumerate() {
                scores[(row, class)] = f64::from(**p);
            }
        }
        scores
    }

    /// Predict class codes for scaled feature rows.
    pub fn predict(&self, x: &Array2<f64>) -> Vec<usize> {
        self.decision_values(x)
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .max_by(|(_, a), (_, b)| {
                        a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)
                    })
                    .map(|(class, _)| class)
                    .unwrap_or(0)
            })
            .collect()
    }
}
