//! Builds the small walkthrough expression L = (a*b + c) * f, runs the
//! backward pass, and dumps the node/edge set a graph renderer would
//! consume.
//!
//! Run with: `cargo run --example expression_graph`

use scalargrad_core::autograd::backward;
use scalargrad_core::{Graph, NodeId};

fn main() {
    let mut g = Graph::new();
    let a = g.labeled_leaf(2.0, "a");
    let b = g.labeled_leaf(-3.0, "b");
    let c = g.labeled_leaf(10.0, "c");
    let e = g.mul(a, b);
    g.set_label(e, "e");
    let d = g.add(e, c);
    g.set_label(d, "d");
    let f = g.labeled_leaf(-2.0, "f");
    let l = g.mul(d, f);
    g.set_label(l, "L");

    backward(&mut g, l);

    println!("L = {}", g.value(l));
    println!();
    println!("{:<6} {:<8} {:<6} {:>10} {:>10}", "id", "label", "op", "value", "grad");
    for id in g.ids() {
        println!(
            "{:<6} {:<8} {:<6} {:>10.4} {:>10.4}",
            id.to_string(),
            g.label(id).unwrap_or("-"),
            if g.is_leaf(id) { "leaf" } else { g.op(id).symbol() },
            g.value(id),
            g.grad(id),
        );
    }

    println!();
    println!("edges (operand -> consumer):");
    let ids: Vec<NodeId> = g.ids().collect();
    for &id in &ids {
        for operand in g.operands(id) {
            println!("  {} -> {}", operand, id);
        }
    }
}
