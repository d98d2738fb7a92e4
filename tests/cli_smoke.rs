//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `percept-train` binary to verify that
//! argument parsing, logging defaults, and error handling work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

use percept_classifiers::dataset::{TrainingExample, TrainingSet};

fn cmd() -> Command {
    Command::cargo_bin("percept-train").unwrap()
}

/// Two well-separated classes in a 3-dimensional feature space.
fn toy_set() -> TrainingSet {
    let mut examples = Vec::new();
    for i in 0..5 {
        let jitter = i as f64 * 0.1;
        examples.push(TrainingExample {
            features: vec![-2.0 + jitter, -2.0 - jitter, 0.5],
            label: "box".to_string(),
        });
        examples.push(TrainingExample {
            features: vec![2.0 - jitter, 2.0 + jitter, 0.5],
            label: "cup".to_string(),
        });
    }
    TrainingSet::new(examples)
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("train"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("percept-train"));
}

// ---------------------------------------------------------------------------
// Train subcommand
// ---------------------------------------------------------------------------

#[test]
fn train_nonexistent_input_errors() {
    cmd()
        .args(["train", "-i", "/nonexistent/training_set.bin", "--no-show"])
        .env_remove("PERCEPT_LOG")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Training failed"));
}

#[test]
fn train_nonexistent_config_errors() {
    cmd()
        .args(["train", "--config", "/nonexistent/config.json", "--no-show"])
        .env_remove("PERCEPT_LOG")
        .assert()
        .failure();
}

#[test]
fn train_default_logging_reports_progress() {
    // Pipeline progress is logged at info level; the default filter must
    // enable it for this crate's modules without PERCEPT_LOG being set.
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("training_set.bin");
    let output = dir.path().join("svm_model.bin");
    toy_set().save(&input).unwrap();

    cmd()
        .args(["train", "--no-show"])
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .env_remove("PERCEPT_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("Features in Training Set: 10"))
        .stderr(predicate::str::contains("Saved model bundle"));

    assert!(output.exists(), "model bundle should be written");
}
