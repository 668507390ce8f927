//! Batch iteration over a [`Dataset`].
//!
//! A `DataLoader` asks its [`Sampler`] for one epoch's index order up front,
//! then yields batches of cloned items. Iterating consumes the epoch; call
//! [`DataLoader::reset`] to resample and start the next one.

use crate::dataset::Dataset;
use crate::error::DataError;
use crate::sampler::Sampler;

/// Generic loader for batching and sampling over a dataset.
#[derive(Debug)]
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    /// If true, a trailing batch smaller than `batch_size` is dropped.
    drop_last: bool,
    indices: Vec<usize>,
    position: usize,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a loader and draws the first epoch's index order.
    ///
    /// `batch_size` of zero is normalized to one.
    pub fn new(dataset: D, batch_size: usize, mut sampler: S, drop_last: bool) -> Self {
        let indices = sampler.sample(dataset.len());
        DataLoader {
            dataset,
            batch_size: batch_size.max(1),
            sampler,
            drop_last,
            indices,
            position: 0,
        }
    }

    /// Starts a new epoch: resamples the index order and rewinds the cursor.
    pub fn reset(&mut self) {
        self.indices = self.sampler.sample(self.dataset.len());
        self.position = 0;
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    /// Number of batches one epoch yields.
    pub fn n_batches(&self) -> usize {
        let n = self.indices.len();
        if self.drop_last {
            n / self.batch_size
        } else {
            n.div_ceil(self.batch_size)
        }
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<D::Item>, DataError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.indices.len() {
            return None;
        }
        let end = (self.position + self.batch_size).min(self.indices.len());
        let mut batch = Vec::with_capacity(end - self.position);
        for &index in &self.indices[self.position..end] {
            match self.dataset.get(index) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        self.position = end;
        if self.drop_last && batch.len() < self.batch_size {
            return None;
        }
        Some(Ok(batch))
    }
}
