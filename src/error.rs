use std::error::Error;
use std::fmt;

/// Custom error type for training pipeline failures
#[derive(Debug)]
pub enum TrainError {
    /// No usable examples remain (e.g. everything was dropped by the sanitizer).
    EmptyDataset,
    /// A feature vector does not match the dataset's dimensionality.
    DimensionMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Training needs at least two distinct classes.
    TooFewClasses(usize),
    /// A label string is not present in the fitted codebook.
    UnknownLabel(String),
    /// A class code is outside the codebook's range.
    UnknownClass(usize),
    /// Two row-aligned collections have different lengths.
    LengthMismatch { left: usize, right: usize },
    /// Fold count is invalid for the number of samples.
    BadFoldCount { samples: usize, folds: usize },
    /// The underlying SVM solver failed.
    Svm(linfa_svm::SvmError),
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrainError::EmptyDataset => write!(f, "No valid examples in dataset"),
            TrainError::DimensionMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "Feature vector at row {} has {} entries, expected {}",
                row, found, expected
            ),
            TrainError::TooFewClasses(n) => {
                write!(f, "Need at least 2 distinct classes, found {}", n)
            }
            TrainError::UnknownLabel(label) => {
                write!(f, "Label '{}' is not in the codebook", label)
            }
            TrainError::UnknownClass(code) => {
                write!(f, "Class code {} is out of range for the codebook", code)
            }
            TrainError::LengthMismatch { left, right } => write!(
                f,
                "Row-aligned collections must have equal lengths, got {} and {}",
                left, right
            ),
            TrainError::BadFoldCount { samples, folds } => write!(
                f,
                "Cannot split {} samples into {} folds",
                samples, folds
            ),
            TrainError::Svm(err) => write!(f, "SVM training failed: {}", err),
        }
    }
}

impl Error for TrainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TrainError::Svm(err) => Some(err),
            _ => None,
        }
    }
}

impl From<linfa_svm::SvmError> for TrainError {
    fn from(err: linfa_svm::SvmError) -> Self {
        TrainError::Svm(err)
    }
}
