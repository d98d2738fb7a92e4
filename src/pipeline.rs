//! The end-to-end training pipeline.
//!
//! One linear pass: load, sanitize, scale, encode, cross-validate, fit the
//! final classifier on everything, persist the bundle. Synchronous and
//! run-to-completion; the first unrecoverable error propagates out.

use anyhow::{Context, Result};

use crate::config::TrainConfig;
use crate::crossval::cross_validate;
use crate::dataset::TrainingSet;
use crate::error::TrainError;
use crate::io::ModelBundle;
use crate::labels::LabelCodebook;
use crate::models::SvmClassifier;
use crate::preprocessing::Scaler;
use crate::report::TrainingReport;
use crate::stats::{self, ConfusionMatrix, ScoreSummary};

/// The persisted bundle and the report describing how it was evaluated.
pub struct TrainingOutcome {
    pub bundle: ModelBundle,
    pub report: TrainingReport,
}

/// Run the full training pipeline and persist the fitted bundle to
/// `config.output`, overwriting any previous model there.
pub fn train_from_config(config: &TrainConfig) -> Result<TrainingOutcome> {
    let raw = TrainingSet::load(&config.input)?;
    let (set, sanitize) = raw.sanitize();
    log::info!(
        "Loaded {} examples, {} dropped as invalid",
        sanitize.total,
        sanitize.invalid
    );
    if set.is_empty() {
        return Err(TrainError::EmptyDataset.into());
    }

    let x = set.feature_matrix()?;
    let (scaler, x_scaled) = Scaler::fit_transform(&x)?;

    let codebook = LabelCodebook::fit(set.labels());
    if codebook.len() < 2 {
        return Err(TrainError::TooFewClasses(codebook.len()).into());
    }
    let y = codebook.encode_all(set.labels())?;

    log::info!(
        "Cross-validating {} classes over {} folds (seed {})",
        codebook.len(),
        config.folds,
        config.seed
    );
    let cv = cross_validate(&x_scaled, &y, codebook.len(), config)?;
    let summary = ScoreSummary::from_scores(&cv.fold_scores);
    let overall_accuracy = stats::accuracy(&y, &cv.predictions);
    let confusion = ConfusionMatrix::from_predictions(&y, &cv.predictions, codebook.len())?;

    // The persisted classifier is retrained on the entire dataset, not on any
    // cross-validation subset.
    let classifier = SvmClassifier::fit(&x_scaled, &y, codebook.len(), &config.svm)?;

    let report = TrainingReport {
        sanitize,
        fold_scores: cv.fold_scores,
        summary,
        overall_accuracy,
        confusion,
        classes: codebook.classes().to_vec(),
    };

    let bundle = ModelBundle {
        classifier,
        classes: codebook,
        scaler,
    };
    bundle
        .save(&config.output)
        .with_context(|| format!("Failed to persist model to {}", config.output.display()))?;
    log::info!("Saved model bundle to {}", config.output.display());

    Ok(TrainingOutcome { bundle, report })
}
