//! Accuracy reporting: console summary plus two confusion-matrix figures.

pub mod plots;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use plotly::Plot;

use crate::dataset::SanitizeReport;
use crate::stats::{ConfusionMatrix, ScoreSummary};

/// Everything the reporter prints and plots after a training run.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub sanitize: SanitizeReport,
    pub fold_scores: Vec<f64>,
    pub summary: ScoreSummary,
    /// Accuracy of the out-of-fold predictions over the full dataset.
    pub overall_accuracy: f64,
    pub confusion: ConfusionMatrix,
    pub classes: Vec<String>,
}

impl TrainingReport {
    /// Print the dataset and accuracy summary lines.
    pub fn print_summary(&self) {
        println!("Features in Training Set: {}", self.sanitize.total);
        println!("Invalid Features in Training Set: {}", self.sanitize.invalid);
        println!("Scores: {:?}", self.fold_scores);
        println!(
            "Accuracy: {:.2} (+/- {:.2})",
            self.summary.mean, self.summary.spread
        );
        println!("Overall accuracy score: {:.2}", self.overall_accuracy);
    }

    /// Heatmap of raw prediction counts.
    pub fn count_plot(&self) -> Result<Plot> {
        let title = format!(
            "Confusion matrix, without normalization ({})",
            Local::now().format("%Y-%m-%d %H:%M")
        );
        plots::confusion_matrix_heatmap(&self.confusion.counts_f64(), &self.classes, &title, 0)
            .map_err(anyhow::Error::msg)
    }

    /// Heatmap of row-normalized prediction rates.
    pub fn normalized_plot(&self) -> Result<Plot> {
        let title = format!(
            "Normalized confusion matrix ({})",
            Local::now().format("%Y-%m-%d %H:%M")
        );
        plots::confusion_matrix_heatmap(&self.confusion.normalized(), &self.classes, &title, 2)
            .map_err(anyhow::Error::msg)
    }

    /// Write both figures as HTML next to the model output; returns the two
    /// file paths (counts, normalized).
    pub fn write_html(&self, dir: &Path) -> Result<(PathBuf, PathBuf)> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        let counts_path = dir.join("confusion_matrix.html");
        let normalized_path = dir.join("confusion_matrix_normalized.html");
        self.count_plot()?.write_html(&counts_path);
        self.normalized_plot()?.write_html(&normalized_path);
        Ok((counts_path, normalized_path))
    }
}
