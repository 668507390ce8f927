use crate::graph::Graph;
use crate::node::NodeId;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Allocates a parameter leaf with a value drawn uniformly from [-1, 1].
///
/// The generator is threaded in explicitly rather than taken from ambient
/// global state, so initialization is reproducible from a seed (see
/// `init_test.rs`).
pub fn uniform_parameter<R: Rng + ?Sized>(g: &mut Graph, rng: &mut R) -> NodeId {
    let dist = Uniform::new_inclusive(-1.0, 1.0);
    g.leaf(dist.sample(rng))
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
