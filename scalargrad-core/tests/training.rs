//! End-to-end training: fresh graph per step, zero_grad / backward / step,
//! updates applied to the same parameter leaves across steps.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::autograd::backward;
use scalargrad_core::nn::losses::sum_squared_error;
use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::optim::{Optimizer, Sgd};
use scalargrad_core::Graph;

/// The classic four-point toy problem: binary targets in {-1, 1} over
/// three-feature inputs, solvable by a small tanh MLP.
const INPUTS: [[f64; 3]; 4] = [
    [2.0, 3.0, -1.0],
    [3.0, -1.0, 0.5],
    [0.5, 1.0, 1.0],
    [1.0, 1.0, -1.0],
];
const TARGETS: [f64; 4] = [1.0, -1.0, -1.0, 1.0];

#[test]
fn test_mlp_fits_toy_problem() {
    let mut g = Graph::new();
    let mut rng = StdRng::seed_from_u64(1337);
    let mlp = Mlp::new(&mut g, 3, &[4, 4, 1], &mut rng);
    let mut opt = Sgd::new(mlp.parameters(), 0.05);
    let checkpoint = g.mark();

    let mut first_loss = None;
    let mut final_loss = 0.0;
    for _ in 0..100 {
        // Full-batch loss over all four examples.
        let mut per_example = Vec::with_capacity(4);
        for (features, &target) in INPUTS.iter().zip(&TARGETS) {
            let xs: Vec<_> = features.iter().map(|&v| g.leaf(v)).collect();
            let out = mlp.forward_single(&mut g, &xs).unwrap();
            per_example.push((out, target));
        }
        let preds: Vec<_> = per_example.iter().map(|&(out, _)| out).collect();
        let targets: Vec<f64> = per_example.iter().map(|&(_, t)| t).collect();
        let loss = sum_squared_error(&mut g, &preds, &targets).unwrap();

        opt.zero_grad(&mut g);
        backward(&mut g, loss);
        let loss_value = g.value(loss);
        first_loss.get_or_insert(loss_value);
        final_loss = loss_value;

        opt.step(&mut g).unwrap();
        g.rewind(checkpoint);
    }

    let first_loss = first_loss.unwrap();
    assert!(
        final_loss < first_loss * 0.1,
        "loss did not drop enough: {} -> {}",
        first_loss,
        final_loss
    );

    // The fitted network classifies all four examples by sign.
    for (features, &target) in INPUTS.iter().zip(&TARGETS) {
        let xs: Vec<_> = features.iter().map(|&v| g.leaf(v)).collect();
        let out = mlp.forward_single(&mut g, &xs).unwrap();
        assert_eq!(g.value(out).signum(), target.signum());
        g.rewind(checkpoint);
    }
}

#[test]
fn test_graph_size_stays_bounded_across_steps() {
    let mut g = Graph::new();
    let mut rng = StdRng::seed_from_u64(2);
    let mlp = Mlp::new(&mut g, 2, &[3, 1], &mut rng);
    let mut opt = Sgd::new(mlp.parameters(), 0.01);
    let checkpoint = g.mark();
    let parameter_count = g.len();

    for step in 0..10 {
        let xs = vec![g.leaf(0.5), g.leaf(-0.5)];
        let out = mlp.forward_single(&mut g, &xs).unwrap();
        let loss = sum_squared_error(&mut g, &[out], &[1.0]).unwrap();
        opt.zero_grad(&mut g);
        backward(&mut g, loss);
        opt.step(&mut g).unwrap();
        g.rewind(checkpoint);
        assert_eq!(g.len(), parameter_count, "leak at step {}", step);
    }
}

#[test]
fn test_zero_grad_required_between_steps() {
    // Without zero_grad, the second backward pass doubles the parameter
    // gradients; with it, both passes agree.
    let mut g = Graph::new();
    let mut rng = StdRng::seed_from_u64(3);
    let mlp = Mlp::new(&mut g, 2, &[2, 1], &mut rng);
    let params = mlp.parameters();
    let checkpoint = g.mark();

    let run = |g: &mut Graph| {
        let xs = vec![g.leaf(1.0), g.leaf(2.0)];
        let out = mlp.forward_single(g, &xs).unwrap();
        let loss = sum_squared_error(g, &[out], &[0.5]).unwrap();
        backward(g, loss);
    };

    run(&mut g);
    let single: Vec<f64> = params.iter().map(|&p| g.grad(p)).collect();
    g.rewind(checkpoint);

    run(&mut g); // no reset: accumulates on top
    let doubled: Vec<f64> = params.iter().map(|&p| g.grad(p)).collect();
    g.rewind(checkpoint);

    for (s, d) in single.iter().zip(&doubled) {
        approx::assert_relative_eq!(2.0 * s, *d, epsilon = 1e-12);
    }

    mlp.zero_grad(&mut g);
    run(&mut g);
    let after_reset: Vec<f64> = params.iter().map(|&p| g.grad(p)).collect();
    assert_eq!(single, after_reset);
}
