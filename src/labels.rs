//! Label codebook: a bijection between label strings and dense class codes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::TrainError;

/// Bijection between label strings and integer codes in `[0, K)`.
///
/// Codes are assigned in ascending lexicographic label order, so the same set
/// of labels always yields the same codebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCodebook {
    classes: Vec<String>,
}

impl LabelCodebook {
    /// Fit a codebook from the distinct labels present.
    pub fn fit<I, S>(labels: I) -> LabelCodebook
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classes: BTreeSet<String> = labels
            .into_iter()
            .map(|label| label.as_ref().to_string())
            .collect();
        LabelCodebook {
            classes: classes.into_iter().collect(),
        }
    }

    /// Map a label string to its class code.
    pub fn encode(&self, label: &str) -> Result<usize, TrainError> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(label))
            .map_err(|_| TrainError::UnknownLabel(label.to_string()))
    }

    /// Map a class code back to its label string.
    pub fn decode(&self, code: usize) -> Result<&str, TrainError> {
        self.classes
            .get(code)
            .map(|class| class.as_str())
            .ok_or(TrainError::UnknownClass(code))
    }

    /// Encode a whole sequence of labels.
    pub fn encode_all<'a, I>(&self, labels: I) -> Result<Vec<usize>, TrainError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        labels.into_iter().map(|label| self.encode(label)).collect()
    }

    /// Class names in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of distinct classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
