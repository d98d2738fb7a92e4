use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Hyper-parameters for the linear-kernel SVM.
///
/// The kernel is fixed; there is no hyper-parameter search. `c` is applied
/// symmetrically to both sides of each one-vs-rest sub-problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SvmConfig {
    /// Solver stopping tolerance.
    pub eps: f64,
    /// Regularization weight, applied to positive and negative samples alike.
    pub c: f64,
}

impl Default for SvmConfig {
    fn default() -> Self {
        Self { eps: 1e-3, c: 1.0 }
    }
}

/// Central configuration for the training pipeline.
///
/// The defaults reproduce the fixed contract of the original tool: five
/// shuffled folds with seed 1, reading `data/training_set.bin` and
/// overwriting `data/svm_model.bin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub svm: SvmConfig,
    /// Number of cross-validation folds.
    pub folds: usize,
    /// Seed for the one-time fold shuffle, fixed for reproducibility.
    pub seed: u64,
    /// Serialized training set, `.bin` (bincode) or `.csv`.
    pub input: PathBuf,
    /// Destination for the persisted model bundle.
    pub output: PathBuf,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            svm: SvmConfig::default(),
            folds: 5,
            seed: 1,
            input: PathBuf::from("data/training_set.bin"),
            output: PathBuf::from("data/svm_model.bin"),
        }
    }
}

/// Load a training configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TrainConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: TrainConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
