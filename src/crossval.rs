//! Seeded k-fold cross-validation.
//!
//! Indices are shuffled once with a fixed seed and chunked into k disjoint
//! folds covering every sample exactly once. Each fold is held out in turn:
//! the model trains on the complement and predicts the held-out fold, giving
//! per-fold accuracies plus one out-of-fold prediction per example.

use ndarray::{Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::TrainConfig;
use crate::error::TrainError;
use crate::models::SvmClassifier;
use crate::stats;

/// A fixed partition of `0..n` into k shuffled folds.
#[derive(Debug, Clone)]
pub struct KFold {
    folds: Vec<Vec<usize>>,
}

impl KFold {
    /// Shuffle `0..n` with the given seed and split into k folds.
    ///
    /// Fold sizes differ by at most one; the first `n % k` folds take the
    /// extra index.
    pub fn new(n: usize, k: usize, seed: u64) -> Result<KFold, TrainError> {
        if k < 2 || n < k {
            return Err(TrainError::BadFoldCount {
                samples: n,
                folds: k,
            });
        }

        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let base = n / k;
        let extra = n % k;
        let mut folds = Vec::with_capacity(k);
        let mut start = 0;
        for i in 0..k {
            let len = base + usize::from(i < extra);
            folds.push(indices[start..start + len].to_vec());
            start += len;
        }
        Ok(KFold { folds })
    }

    pub fn k(&self) -> usize {
        self.folds.len()
    }

    pub fn folds(&self) -> &[Vec<usize>] {
        &self.folds
    }

    /// Iterate (train indices, held-out fold) pairs, one per fold.
    pub fn splits(&self) -> impl Iterator<Item = (Vec<usize>, &[usize])> + '_ {
        self.folds.iter().enumerate().map(move |(held_out, fold)| {
            let train: Vec<usize> = self
                .folds
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != held_out)
                .flat_map(|(_, other)| other.iter().copied())
                .collect();
            (train, fold.as_slice())
        })
    }
}

/// Cross-validation results over the full dataset.
#[derive(Debug, Clone)]
pub struct CrossValidation {
    /// Held-out accuracy per fold, in fold order.
    pub fold_scores: Vec<f64>,
    /// Out-of-fold prediction for every example, row-aligned with the input.
    pub predictions: Vec<usize>,
}

/// Run k-fold cross-validation of the SVM on scaled features and encoded
/// labels.
pub fn cross_validate(
    x: &Array2<f64>,
    y: &[usize],
    n_classes: usize,
    config: &TrainConfig,
) -> Result<CrossValidation, TrainError> {
    if x.nrows() != y.len() {
        return Err(TrainError::LengthMismatch {
            left: x.nrows(),
            right: y.len(),
        });
    }

    let kfold = KFold::new(y.len(), config.folds, config.seed)?;
    let mut predictions = vec![0usize; y.len()];
    let mut fold_scores = Vec::with_capacity(kfold.k());

    for (train_idx, held_out) in kfold.splits() {
        let x_train = x.select(Axis(0), &train_idx);
        let y_train: Vec<usize> = train_idx.iter().map(|&i| y[i]).collect();
        let model = SvmClassifier::fit(&x_train, &y_train, n_classes, &config.svm)?;

        let x_test = x.select(Axis(0), held_out);
        let pred = model.predict(&x_test);
        let truth: Vec<usize> = held_out.iter().map(|&i| y[i]).collect();

        fold_scores.push(stats::accuracy(&truth, &pred));
        for (&i, &p) in held_out.iter().zip(pred.iter()) {
            predictions[i] = p;
        }
    }

    Ok(CrossValidation {
        fold_scores,
        predictions,
    })
}
