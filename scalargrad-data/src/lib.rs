//! # scalargrad-data
//!
//! The dataset side of scalargrad: an opaque source of already-decoded,
//! normalized feature vectors and integer class labels, plus batch iteration
//! over it. No file-format parsing lives here or anywhere else in the
//! workspace; data arrives as in-memory vectors.

pub mod dataloader;
pub mod dataset;
pub mod error;
pub mod sampler;
pub mod vec_dataset;

// Re-export main components
pub use dataloader::DataLoader;
pub use dataset::Dataset;
pub use error::DataError;
pub use sampler::{RandomSampler, Sampler, SequentialSampler};
pub use vec_dataset::{one_hot, VecDataset};
