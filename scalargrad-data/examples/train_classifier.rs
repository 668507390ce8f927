//! Trains a small MLP classifier on an in-memory synthetic dataset: three
//! class prototypes with seeded noise, one-hot targets, sum-of-squared-error
//! loss, plain SGD with a fresh forward graph per batch.
//!
//! Run with: `cargo run --example train_classifier`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalargrad_core::autograd::backward;
use scalargrad_core::nn::losses::sum_squared_error;
use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::optim::{Optimizer, Sgd};
use scalargrad_core::Graph;
use scalargrad_data::{one_hot, DataLoader, DataError, RandomSampler, VecDataset};

const N_FEATURES: usize = 8;
const N_CLASSES: usize = 3;
const SAMPLES_PER_CLASS: usize = 20;

/// Noisy copies of three fixed prototype vectors, features kept in [0, 1].
fn synthetic_dataset(rng: &mut StdRng) -> Result<VecDataset, DataError> {
    let prototypes: [[f64; N_FEATURES]; N_CLASSES] = [
        [0.9, 0.9, 0.1, 0.1, 0.1, 0.1, 0.9, 0.9],
        [0.1, 0.9, 0.9, 0.1, 0.1, 0.9, 0.9, 0.1],
        [0.1, 0.1, 0.1, 0.9, 0.9, 0.1, 0.1, 0.1],
    ];
    let mut features = Vec::new();
    let mut labels = Vec::new();
    for (class, proto) in prototypes.iter().enumerate() {
        for _ in 0..SAMPLES_PER_CLASS {
            let row: Vec<f64> = proto
                .iter()
                .map(|&v| (v + rng.gen_range(-0.15..0.15)).clamp(0.0, 1.0))
                .collect();
            features.push(row);
            labels.push(class);
        }
    }
    VecDataset::new(features, labels)
}

fn argmax(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .map(|(i, _)| i)
        .unwrap()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(42);
    let dataset = synthetic_dataset(&mut rng)?;
    let mut loader = DataLoader::new(dataset, 10, RandomSampler::seeded(7), false);

    let mut g = Graph::new();
    let mlp = Mlp::new(&mut g, N_FEATURES, &[16, N_CLASSES], &mut rng);
    let mut opt = Sgd::new(mlp.parameters(), 0.05);
    let checkpoint = g.mark();

    for epoch in 0..20 {
        let mut epoch_loss = 0.0;
        let mut correct = 0usize;
        let mut total = 0usize;

        loader.reset();
        for batch in &mut loader {
            let batch = batch?;

            // Mean per-example loss over the batch, built as one graph.
            let mut batch_loss = None;
            for (features, label) in &batch {
                let inputs: Vec<_> = features.iter().map(|&v| g.leaf(v)).collect();
                let outputs = mlp.forward(&mut g, &inputs)?;
                let target = one_hot(*label, N_CLASSES)?;
                let example_loss = sum_squared_error(&mut g, &outputs, &target)?;
                batch_loss = Some(match batch_loss {
                    None => example_loss,
                    Some(acc) => g.add(acc, example_loss),
                });

                let scores: Vec<f64> = outputs.iter().map(|&id| g.value(id)).collect();
                if argmax(&scores) == *label {
                    correct += 1;
                }
                total += 1;
            }
            let sum = batch_loss.expect("non-empty batch");
            let loss = g.mul(sum, 1.0 / batch.len() as f64);

            opt.zero_grad(&mut g);
            backward(&mut g, loss);
            opt.step(&mut g)?;
            epoch_loss += g.value(loss);
            g.rewind(checkpoint);
        }

        println!(
            "epoch {:>2}: loss {:.4}, accuracy {:.1}%",
            epoch,
            epoch_loss / loader.n_batches() as f64,
            100.0 * correct as f64 / total as f64,
        );
    }

    Ok(())
}
