use thiserror::Error;

/// Custom error type for dataset construction and access.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum DataError {
    #[error("feature and label collections differ in length: {features} features, {labels} labels")]
    LengthMismatch { features: usize, labels: usize },

    #[error("feature vector {index} has {actual} entries, expected {expected}")]
    RaggedFeatures {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("index {index} out of bounds for dataset of {len} samples")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("label {label} out of range for {n_classes} classes")]
    LabelOutOfRange { label: usize, n_classes: usize },
}
