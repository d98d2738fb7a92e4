//! Smoke tests for the reporter: figures build and HTML output lands on disk.

use percept_classifiers::dataset::SanitizeReport;
use percept_classifiers::report::TrainingReport;
use percept_classifiers::stats::{ConfusionMatrix, ScoreSummary};

fn sample_report() -> TrainingReport {
    let truth = [0, 0, 0, 1, 1, 1];
    let pred = [0, 0, 1, 1, 1, 1];
    let confusion = ConfusionMatrix::from_predictions(&truth, &pred, 2).unwrap();
    let fold_scores = vec![1.0, 0.5, 1.0, 1.0, 0.5];
    TrainingReport {
        sanitize: SanitizeReport {
            total: 6,
            invalid: 0,
        },
        summary: ScoreSummary::from_scores(&fold_scores),
        fold_scores,
        overall_accuracy: confusion.accuracy(),
        confusion,
        classes: vec!["box".to_string(), "cup".to_string()],
    }
}

#[test]
fn both_figures_build() {
    let report = sample_report();
    assert!(report.count_plot().is_ok());
    assert!(report.normalized_plot().is_ok());
}

#[test]
fn write_html_creates_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let report = sample_report();
    let (counts, normalized) = report.write_html(dir.path()).unwrap();
    assert!(counts.exists());
    assert!(normalized.exists());
    assert!(counts.metadata().unwrap().len() > 0);
    assert!(normalized.metadata().unwrap().len() > 0);
}

#[test]
fn print_summary_does_not_panic() {
    sample_report().print_summary();
}
