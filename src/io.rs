//! Persistence of the fitted model bundle.

use std::path::Path;

use anyhow::{Context, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::TrainError;
use crate::labels::LabelCodebook;
use crate::models::SvmClassifier;
use crate::preprocessing::Scaler;

/// Everything downstream inference needs, persisted as one artifact.
///
/// Consumers must apply `scaler` before invoking `classifier` and decode
/// predictions through `classes`; `predict_labels` does all three.
#[derive(Serialize, Deserialize)]
pub struct ModelBundle {
    pub classifier: SvmClassifier,
    pub classes: LabelCodebook,
    pub scaler: Scaler,
}

impl ModelBundle {
    /// Serialize the bundle, creating parent directories and overwriting any
    /// existing file at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = bincode::serialize(self).context("Failed to encode model bundle")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write model bundle: {}", path.display()))?;
        Ok(())
    }

    /// Load a previously saved bundle.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ModelBundle> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read model bundle: {}", path.display()))?;
        let bundle: ModelBundle = bincode::deserialize(&bytes)
            .with_context(|| format!("Failed to decode model bundle: {}", path.display()))?;
        Ok(bundle)
    }

    /// Classify raw (unscaled) feature rows, returning decoded label strings.
    pub fn predict_labels(&self, features: &Array2<f64>) -> Result<Vec<String>, TrainError> {
        let scaled = self.scaler.transform(features)?;
        let codes = self.classifier.predict(&scaled);
        codes
            .into_iter()
            .map(|code| self.classes.decode(code).map(str::to_string))
            .collect()
    }
}
