//! Compares the engine's analytical derivative against a numerical slope for
//! f(x) = 3x^2 - 4x + 5, sampled over a small range.
//!
//! Run with: `cargo run --example finite_difference`

use scalargrad_core::autograd::backward;
use scalargrad_core::Graph;

// f(x) = 3x^2 - 4x + 5 as a scalar graph; f'(x) = 6x - 4.
fn build_f(g: &mut Graph, x_value: f64) -> (scalargrad_core::NodeId, scalargrad_core::NodeId) {
    let x = g.labeled_leaf(x_value, "x");
    let x2 = g.powf(x, 2.0);
    let term1 = g.mul(3.0, x2);
    let term2 = g.mul(4.0, x);
    let diff = g.sub(term1, term2);
    let y = g.add(diff, 5.0);
    (x, y)
}

fn eval(x_value: f64) -> f64 {
    let mut g = Graph::new();
    let (_, y) = build_f(&mut g, x_value);
    g.value(y)
}

fn main() {
    let h = 1e-3;

    println!("{:>8} {:>12} {:>14} {:>14}", "x", "f(x)", "analytical", "numerical");
    let mut x_value = -5.0;
    while x_value <= 5.0 {
        let mut g = Graph::new();
        let (x, y) = build_f(&mut g, x_value);
        backward(&mut g, y);
        let numerical = (eval(x_value + h) - eval(x_value)) / h;
        println!(
            "{:>8.2} {:>12.4} {:>14.6} {:>14.6}",
            x_value,
            g.value(y),
            g.grad(x),
            numerical,
        );
        x_value += 1.25;
    }
}
