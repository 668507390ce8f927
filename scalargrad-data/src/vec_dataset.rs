use crate::dataset::Dataset;
use crate::error::DataError;

/// An in-memory classification dataset: normalized feature vectors with
/// matching integer class labels.
///
/// The i-th feature vector corresponds to the i-th label. All feature
/// vectors share one arity, checked at construction.
#[derive(Debug, Clone)]
pub struct VecDataset {
    features: Vec<Vec<f64>>,
    labels: Vec<usize>,
    n_features: usize,
}

impl VecDataset {
    /// Creates a dataset from parallel feature and label vectors.
    ///
    /// # Errors
    /// * [`DataError::LengthMismatch`] when the vectors differ in length.
    /// * [`DataError::RaggedFeatures`] when feature vectors differ in arity.
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<usize>) -> Result<Self, DataError> {
        if features.len() != labels.len() {
            return Err(DataError::LengthMismatch {
                features: features.len(),
                labels: labels.len(),
            });
        }
        let n_features = features.first().map_or(0, Vec::len);
        for (index, row) in features.iter().enumerate() {
            if row.len() != n_features {
                return Err(DataError::RaggedFeatures {
                    index,
                    expected: n_features,
                    actual: row.len(),
                });
            }
        }
        Ok(VecDataset {
            features,
            labels,
            n_features,
        })
    }

    /// Arity of every feature vector (0 for an empty dataset).
    pub fn n_features(&self) -> usize {
        self.n_features
    }
}

impl Dataset for VecDataset {
    /// A cloned (features, label) pair.
    type Item = (Vec<f64>, usize);

    fn get(&self, index: usize) -> Result<Self::Item, DataError> {
        if index >= self.len() {
            return Err(DataError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok((self.features[index].clone(), self.labels[index]))
    }

    fn len(&self) -> usize {
        self.labels.len()
    }
}

/// One-hot target vector: 1.0 at `label`, 0.0 elsewhere.
///
/// # Errors
/// Returns [`DataError::LabelOutOfRange`] when `label >= n_classes`.
pub fn one_hot(label: usize, n_classes: usize) -> Result<Vec<f64>, DataError> {
    if label >= n_classes {
        return Err(DataError::LabelOutOfRange { label, n_classes });
    }
    let mut target = vec![0.0; n_classes];
    target[label] = 1.0;
    Ok(target)
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_dataset_creation_and_len() {
        let dataset = VecDataset::new(
            vec![vec![0.1, 0.2], vec![0.3, 0.4]],
            vec![0, 1],
        )
        .unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.n_features(), 2);
        assert!(!dataset.is_empty());

        let empty = VecDataset::new(vec![], vec![]).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.n_features(), 0);
    }

    #[test]
    fn test_vec_dataset_length_mismatch() {
        let err = VecDataset::new(vec![vec![0.1]], vec![]).unwrap_err();
        assert_eq!(
            err,
            DataError::LengthMismatch {
                features: 1,
                labels: 0
            }
        );
    }

    #[test]
    fn test_vec_dataset_ragged_features() {
        let err =
            VecDataset::new(vec![vec![0.1, 0.2], vec![0.3]], vec![0, 1]).unwrap_err();
        assert_eq!(
            err,
            DataError::RaggedFeatures {
                index: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_vec_dataset_get() {
        let dataset =
            VecDataset::new(vec![vec![0.5, 0.6], vec![0.7, 0.8]], vec![3, 4]).unwrap();
        let (features, label) = dataset.get(1).unwrap();
        assert_eq!(features, vec![0.7, 0.8]);
        assert_eq!(label, 4);

        let err = dataset.get(2).unwrap_err();
        assert_eq!(err, DataError::IndexOutOfBounds { index: 2, len: 2 });
    }

    #[test]
    fn test_one_hot() {
        assert_eq!(one_hot(2, 4).unwrap(), vec![0.0, 0.0, 1.0, 0.0]);
        assert_eq!(one_hot(0, 1).unwrap(), vec![1.0]);
        assert_eq!(
            one_hot(4, 4).unwrap_err(),
            DataError::LabelOutOfRange {
                label: 4,
                n_classes: 4
            }
        );
    }
}
