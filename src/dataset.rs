//! Loading and sanitizing training sets of (feature vector, label) pairs.
//!
//! A training set is read once from disk, cleaned of NaN-bearing examples,
//! and is immutable from then on. Two on-disk formats are supported,
//! dispatched on the file extension: bincode (the persisted native format)
//! and headerless CSV where every column but the last is a feature and the
//! last column is the label string.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::TrainError;

/// One training example: a fixed-dimensionality feature vector and its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub features: Vec<f64>,
    pub label: String,
}

/// Counts reported by the sanitizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeReport {
    /// Examples in the raw dataset.
    pub total: usize,
    /// Examples dropped for containing a NaN feature.
    pub invalid: usize,
}

/// An ordered, immutable collection of training examples.
#[derive(Debug, Clone, Default)]
pub struct TrainingSet {
    examples: Vec<TrainingExample>,
}

impl TrainingSet {
    pub fn new(examples: Vec<TrainingExample>) -> Self {
        TrainingSet { examples }
    }

    /// Read a training set from disk, `.csv` or bincode depending on extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<TrainingSet> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("csv") => Self::from_csv(path),
            _ => Self::from_bincode(path),
        }
    }

    fn from_bincode(path: &Path) -> Result<TrainingSet> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read training set: {}", path.display()))?;
        let examples: Vec<TrainingExample> = bincode::deserialize(&bytes)
            .with_context(|| format!("Failed to decode training set: {}", path.display()))?;
        Ok(TrainingSet { examples })
    }

    fn from_csv(path: &Path) -> Result<TrainingSet> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .with_context(|| format!("Failed to open training set: {}", path.display()))?;

        let mut examples = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
            if record.len() < 2 {
                return Err(anyhow!(
                    "Row {} has {} columns, need at least one feature and a label",
                    row_idx + 1,
                    record.len()
                ));
            }
            let label = record
                .get(record.len() - 1)
                .unwrap_or_default()
                .trim()
                .to_string();
            // Unparseable feature fields become NaN and fall to the sanitizer.
            let features = record
                .iter()
                .take(record.len() - 1)
                .map(|field| field.trim().parse::<f64>().unwrap_or(f64::NAN))
                .collect();
            examples.push(TrainingExample { features, label });
        }
        Ok(TrainingSet { examples })
    }

    /// Write the training set as bincode.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = bincode::serialize(&self.examples)
            .context("Failed to encode training set")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write training set: {}", path.display()))?;
        Ok(())
    }

    /// Drop every example whose feature vector contains a NaN entry.
    ///
    /// Invalid examples are excluded without error, but never silently: the
    /// returned report carries exact counts and a warning is logged whenever
    /// anything was dropped, since NaN-heavy inputs can shrink a dataset to
    /// near zero.
    pub fn sanitize(self) -> (TrainingSet, SanitizeReport) {
        let total = self.examples.len();
        let retained: Vec<TrainingExample> = self
            .examples
            .into_iter()
            .filter(|example| !example.features.iter().any(|v| v.is_nan()))
            .collect();
        let invalid = total - retained.len();
        if invalid > 0 {
            log::warn!(
                "Dropped {} of {} examples containing NaN features",
                invalid,
                total
            );
        }
        (TrainingSet { examples: retained }, SanitizeReport { total, invalid })
    }

    /// Assemble the feature matrix, rows are examples and columns features.
    ///
    /// Fails on an empty set and on ragged dimensionality.
    pub fn feature_matrix(&self) -> Result<Array2<f64>, TrainError> {
        let first = self.examples.first().ok_or(TrainError::EmptyDataset)?;
        let dim = first.features.len();
        if dim == 0 {
            return Err(TrainError::EmptyDataset);
        }

        let mut flat = Vec::with_capacity(self.examples.len() * dim);
        for (row, example) in self.examples.iter().enumerate() {
            if example.features.len() != dim {
                return Err(TrainError::DimensionMismatch {
                    row,
                    expected: dim,
                    found: example.features.len(),
                });
            }
            flat.extend_from_slice(&example.features);
        }

        Array2::from_shape_vec((self.examples.len(), dim), flat)
            .map_err(|_| TrainError::EmptyDataset)
    }

    /// Label strings in example order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.examples.iter().map(|example| example.label.as_str())
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}
