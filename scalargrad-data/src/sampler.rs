use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt::Debug;

/// Strategy for producing the index order a [`DataLoader`](crate::DataLoader)
/// walks a dataset in.
///
/// Sampling takes `&mut self` so a random sampler can advance its own
/// generator between epochs; everything here is single-threaded.
pub trait Sampler: Debug {
    /// Produces one epoch's worth of indices over a dataset of `dataset_len`
    /// items.
    fn sample(&mut self, dataset_len: usize) -> Vec<usize>;
}

/// Samples elements sequentially, always in the same order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSampler;

impl SequentialSampler {
    pub fn new() -> Self {
        SequentialSampler
    }
}

impl Sampler for SequentialSampler {
    fn sample(&mut self, dataset_len: usize) -> Vec<usize> {
        (0..dataset_len).collect()
    }
}

/// Samples a permutation of the dataset, without replacement, from an
/// explicit seeded generator.
///
/// Each call to [`Sampler::sample`] advances the generator, so successive
/// epochs see different permutations while the whole sequence stays
/// reproducible from the seed.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    pub fn seeded(seed: u64) -> Self {
        RandomSampler {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for RandomSampler {
    fn sample(&mut self, dataset_len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        indices.shuffle(&mut self.rng);
        indices
    }
}
