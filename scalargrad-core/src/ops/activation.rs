//! Activation functions.

use crate::graph::{Graph, Operand};
use crate::node::{Node, NodeId, Op};

/// Hyperbolic tangent. The forward output `t` is cached on the node so the
/// backward rule can apply `(1 - t^2) * grad_out` without recomputing.
pub fn tanh_op(g: &mut Graph, a: impl Into<Operand>) -> NodeId {
    let input = g.promote(a);
    let output = g.value(input).tanh();
    g.push(Node::new(output, Op::Tanh { input, output }))
}

// --- Tests ---
#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
