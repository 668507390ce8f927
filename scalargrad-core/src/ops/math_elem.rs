//! Element-wise transcendental functions.

use crate::graph::{Graph, Operand};
use crate::node::{Node, NodeId, Op};

/// Natural exponential. The forward output `e` is cached on the node; the
/// backward rule is `grad_out * e`.
///
/// The backward rule accumulates into the operand's gradient like every
/// other operation. Assigning instead of accumulating would drop
/// contributions whenever the input feeds more than one consumer; see the
/// fan-out tests in `math_elem_test.rs`.
pub fn exp_op(g: &mut Graph, a: impl Into<Operand>) -> NodeId {
    let input = g.promote(a);
    let output = g.value(input).exp();
    g.push(Node::new(output, Op::Exp { input, output }))
}

// --- Tests ---
#[cfg(test)]
#[path = "math_elem_test.rs"]
mod tests;
