//! Feature standardization.
//!
//! Provides a simple `Scaler` for per-column mean/std standardization. The
//! scaler is fitted once on the full retained feature matrix and applied to
//! every vector that reaches the classifier, at training time and again at
//! inference time through the persisted bundle.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::TrainError;

/// Simple standard scaler (per-column mean/std).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl Scaler {
    /// Minimum stddev to avoid division by zero when transforming.
    const MIN_STD: f64 = 1e-6;

    /// Fit a `Scaler` from a matrix where rows are samples and columns are
    /// features. Mean and population standard deviation, one-shot.
    pub fn fit(x: &Array2<f64>) -> Result<Scaler, TrainError> {
        let (nrows, ncols) = x.dim();
        if nrows == 0 || ncols == 0 {
            return Err(TrainError::EmptyDataset);
        }

        let nrows_f = nrows as f64;
        let mut mean = vec![0.0f64; ncols];
        for row in x.rows() {
            for (c, v) in row.iter().enumerate() {
                mean[c] += v;
            }
        }
        for v in mean.iter_mut() {
            *v /= nrows_f;
        }

        let mut std = vec![0.0f64; ncols];
        for row in x.rows() {
            for (c, v) in row.iter().enumerate() {
                let d = v - mean[c];
                std[c] += d * d;
            }
        }
        for v in std.iter_mut() {
            *v = (*v / nrows_f).sqrt().max(Scaler::MIN_STD);
        }

        Ok(Scaler { mean, std })
    }

    /// Number of feature columns the scaler was fitted on.
    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    /// Transform all rows, returning a new matrix.
    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, TrainError> {
        let (nrows, ncols) = x.dim();
        if ncols != self.dim() {
            return Err(TrainError::DimensionMismatch {
                row: 0,
                expected: self.dim(),
                found: ncols,
            });
        }

        let mut out = x.clone();
        for mut row in out.rows_mut() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = (*v - self.mean[c]) / self.std[c];
            }
        }
        debug_assert_eq!(out.dim(), (nrows, ncols));
        Ok(out)
    }

    /// Fit and transform in one call.
    pub fn fit_transform(x: &Array2<f64>) -> Result<(Scaler, Array2<f64>), TrainError> {
        let scaler = Scaler::fit(x)?;
        let transformed = scaler.transform(x)?;
        Ok((scaler, transformed))
    }
}
