//! percept-classifiers: linear SVM training for perception feature vectors.
//!
//! This crate trains a linear-kernel support-vector classifier from
//! previously extracted feature vectors, evaluates it with shuffled k-fold
//! cross-validation, and persists the fitted model together with its feature
//! scaler and label codebook as a single bundle for downstream inference.
//!
//! The design favors small, testable modules: dataset loading and
//! sanitization, preprocessing, label encoding, the one-vs-rest SVM wrapper,
//! cross-validation, statistics, and reporting each live in their own module
//! and are wired together by `pipeline`.
pub mod config;
pub mod crossval;
pub mod dataset;
pub mod error;
pub mod io;
pub mod labels;
pub mod models;
pub mod pipeline;
pub mod preprocessing;
pub mod report;
pub mod stats;
