//! Element-wise arithmetic: add, mul, pow, and their sugar (neg, sub, div).

use crate::error::ScalargradError;
use crate::graph::{Graph, Operand};
use crate::node::{Node, NodeId, Op};

/// `a + b`. Backward rule: each operand receives the output gradient
/// unchanged.
pub fn add_op(g: &mut Graph, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
    let a = g.promote(a);
    let b = g.promote(b);
    let value = g.value(a) + g.value(b);
    g.push(Node::new(value, Op::Add(a, b)))
}

/// `a * b`. Backward rule: each operand receives the output gradient scaled
/// by the other operand's value.
pub fn mul_op(g: &mut Graph, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
    let a = g.promote(a);
    let b = g.promote(b);
    let value = g.value(a) * g.value(b);
    g.push(Node::new(value, Op::Mul(a, b)))
}

/// `a^n` for a fixed numeric exponent. Backward rule:
/// `n * a^(n-1) * grad_out`.
///
/// Overflow and `0^negative` follow IEEE semantics (infinities/NaN propagate,
/// nothing raises).
pub fn powf_op(g: &mut Graph, a: impl Into<Operand>, exponent: f64) -> NodeId {
    let base = g.promote(a);
    let value = g.value(base).powf(exponent);
    g.push(Node::new(value, Op::Pow { base, exponent }))
}

/// Power with an [`Operand`] exponent.
///
/// Differentiating through a variable exponent is out of scope, so a
/// node-valued exponent is rejected rather than silently read as a constant.
///
/// # Errors
/// Returns [`ScalargradError::NonConstantExponent`] when `exponent` is a
/// graph node.
pub fn pow_op(
    g: &mut Graph,
    a: impl Into<Operand>,
    exponent: impl Into<Operand>,
) -> Result<NodeId, ScalargradError> {
    match exponent.into() {
        Operand::Scalar(n) => Ok(powf_op(g, a, n)),
        Operand::Node(id) => Err(ScalargradError::NonConstantExponent { node_id: id.index() }),
    }
}

/// `-a`, as `a * -1`.
pub fn neg_op(g: &mut Graph, a: impl Into<Operand>) -> NodeId {
    mul_op(g, a, -1.0)
}

/// `a - b`, as `a + (-b)`.
pub fn sub_op(g: &mut Graph, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
    let neg_b = neg_op(g, b);
    add_op(g, a, neg_b)
}

/// `a / b`, as `a * b^-1`. Division by zero produces IEEE
/// infinities/NaN in the forward value and in downstream gradients; it is
/// not an error condition.
pub fn div_op(g: &mut Graph, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
    let inv_b = powf_op(g, b, -1.0);
    mul_op(g, a, inv_b)
}

// --- Tests ---
#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
