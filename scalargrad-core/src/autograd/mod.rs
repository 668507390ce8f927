//! # Reverse-Mode Autodiff Driver (`autograd`)
//!
//! Walks a computation graph backward from a scalar root, applying each
//! node's local derivative rule in reverse topological order.
//!
//! Correctness relies on that ordering: a node's gradient is fully
//! accumulated (summed over every consumer edge) before its own rule runs and
//! propagates the gradient onward, which is what makes the multivariable
//! chain rule come out right when a node feeds more than one downstream
//! operation.
//!
//! Both traversals are iterative with explicit work stacks. Graphs routinely
//! reach thousands of nodes (a 784-feature input through even a small
//! network), which would overflow the call stack under naive recursion.

pub mod grad_check;
pub mod graph;

pub use grad_check::{check_grad, GradCheckError};
pub use graph::topological_order;

use crate::graph::Graph;
use crate::node::{NodeId, Op};

/// Backward pass rooted at `root`.
///
/// Seeds `root`'s gradient to 1.0 (assignment, not accumulation), then visits
/// the topological order in reverse, dispatching on each node's [`Op`] tag
/// and adding the local contribution into each operand's gradient.
///
/// Gradients of all other reachable nodes are assumed already meaningfully
/// initialized; a training loop resets its parameters with `zero_grad`
/// before every call, since contributions otherwise carry over across steps.
/// Nodes unreachable from `root` are left untouched.
pub fn backward(g: &mut Graph, root: NodeId) {
    let order = topological_order(g, root);
    log::debug!(
        "backward from {}: {} of {} nodes reachable",
        root,
        order.len(),
        g.len()
    );

    g.set_grad(root, 1.0);

    for &id in order.iter().rev() {
        let grad = g.grad(id);
        // Op variants are plain index/float records, cheap to copy out; this
        // releases the borrow so operand gradients can be written.
        match g.op(id).clone() {
            Op::Leaf => {}
            Op::Add(a, b) => {
                g.add_to_grad(a, grad);
                g.add_to_grad(b, grad);
            }
            Op::Mul(a, b) => {
                let (va, vb) = (g.value(a), g.value(b));
                g.add_to_grad(a, grad * vb);
                g.add_to_grad(b, grad * va);
            }
            Op::Pow { base, exponent } => {
                let v = g.value(base);
                g.add_to_grad(base, exponent * v.powf(exponent - 1.0) * grad);
            }
            Op::Tanh { input, output } => {
                g.add_to_grad(input, (1.0 - output * output) * grad);
            }
            Op::Exp { input, output } => {
                // Accumulates like every other rule; assignment would lose
                // contributions when the input has other consumers.
                g.add_to_grad(input, grad * output);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_closed_form_walkthrough_graph() {
        // L = (a*b + c) * f with a=2, b=-3, c=10, f=-2.
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

        assert_eq!(g.value(l), -8.0);

        backward(&mut g, l);
        assert_eq!(g.grad(l), 1.0);
        assert_eq!(g.grad(d), -2.0);
        assert_eq!(g.grad(f), 4.0);
        assert_eq!(g.grad(c), -2.0);
        assert_eq!(g.grad(e), -2.0);
        assert_eq!(g.grad(a), 6.0);
        assert_eq!(g.grad(b), -4.0);
    }

    #[test]
    fn test_multi_consumer_accumulation() {
        // d = a + a: the gradient sums over both consumer edges.
        let mut g = Graph::new();
        let a = g.leaf(3.0);
        let d = g.add(a, a);
        backward(&mut g, d);
        assert_eq!(g.grad(a), 2.0);
    }

    #[test]
    fn test_gradients_accumulate_across_calls_without_reset() {
        let mut g = Graph::new();
        let a = g.leaf(2.0);
        let out = g.mul(a, 5.0);
        backward(&mut g, out);
        assert_eq!(g.grad(a), 5.0);
        // Without a reset, a second pass adds on top.
        backward(&mut g, out);
        assert_eq!(g.grad(a), 10.0);
        g.reset_grad(a);
        backward(&mut g, out);
        assert_eq!(g.grad(a), 5.0);
    }

    #[test]
    fn test_unreachable_nodes_untouched() {
        let mut g = Graph::new();
        let a = g.leaf(1.0);
        let side = g.mul(a, 2.0);
        let b = g.leaf(4.0);
        let out = g.mul(b, b);
        backward(&mut g, out);
        assert_eq!(g.grad(b), 8.0);
        // `side` and its subgraph are outside the reachable set.
        assert_eq!(g.grad(side), 0.0);
        assert_eq!(g.grad(a), 0.0);
    }

    #[test]
    fn test_deep_chain_does_not_overflow_stack() {
        // A chain far deeper than any call stack would tolerate recursively.
        let mut g = Graph::with_capacity(200_002);
        let x = g.leaf(1.0);
        let mut cur = x;
        for _ in 0..100_000 {
            cur = g.add(cur, 0.0);
        }
        backward(&mut g, cur);
        assert_eq!(g.value(cur), 1.0);
        assert_eq!(g.grad(x), 1.0);
    }

    #[test]
    fn test_tanh_neuron_gradients() {
        // o = tanh(x1*w1 + x2*w2 + b), the classic two-input neuron check.
        let mut g = Graph::new();
        let x1 = g.leaf(2.0);
        let x2 = g.leaf(0.0);
        let w1 = g.leaf(-3.0);
        let w2 = g.leaf(1.0);
        let b = g.leaf(6.881_373_587_019_543);
        let x1w1 = g.mul(x1, w1);
        let x2w2 = g.mul(x2, w2);
        let sum = g.add(x1w1, x2w2);
        let act = g.add(sum, b);
        let o = g.tanh(act);

        assert_relative_eq!(g.value(o), 0.707_106_781_186_547_6, epsilon = 1e-9);
        backward(&mut g, o);
        assert_relative_eq!(g.grad(x1), -1.5, epsilon = 1e-6);
        assert_relative_eq!(g.grad(w1), 1.0, epsilon = 1e-6);
        assert_relative_eq!(g.grad(x2), 0.5, epsilon = 1e-6);
        assert_relative_eq!(g.grad(w2), 0.0, epsilon = 1e-6);
    }
}
