//! The engine exposes values, gradients, labels, op tags, and operand ids:
//! enough for an external renderer to rebuild the full node/edge set with no
//! further engine support. These tests play the role of that renderer.

use scalargrad_core::autograd::{backward, topological_order};
use scalargrad_core::{Graph, NodeId, Op};
use std::collections::HashSet;

/// Edge (operand -> consumer), the shape a graph renderer works with.
fn collect_edges(g: &Graph) -> Vec<(NodeId, NodeId)> {
    let mut edges = Vec::new();
    for id in g.ids() {
        for operand in g.operands(id) {
            edges.push((operand, id));
        }
    }
    edges
}

#[test]
fn test_renderer_can_rebuild_node_and_edge_set() {
    let mut g = Graph::new();
    let a = g.labeled_leaf(2.0, "a");
    let b = g.labeled_leaf(-3.0, "b");
    let c = g.labeled_leaf(10.0, "c");
    let e = g.mul(a, b);
    g.set_label(e, "e");
    let d = g.add(e, c);
    let f = g.labeled_leaf(-2.0, "f");
    let l = g.mul(d, f);
    backward(&mut g, l);

    // Node set: every id, with value/grad/label/op accessible.
    let nodes: Vec<NodeId> = g.ids().collect();
    assert_eq!(nodes.len(), 7);
    assert_eq!(g.label(a), Some("a"));
    assert_eq!(g.label(d), None);
    assert_eq!(g.value(l), -8.0);
    assert_eq!(g.grad(a), 6.0);

    // Op tags distinguish leaves from operation nodes.
    assert!(g.op(a).is_leaf());
    assert_eq!(g.op(e).symbol(), "*");
    assert_eq!(g.op(d).symbol(), "+");

    // Edge set: one edge per operand reference.
    let edges = collect_edges(&g);
    let expected: HashSet<(NodeId, NodeId)> =
        [(a, e), (b, e), (e, d), (c, d), (d, l), (f, l)].into();
    assert_eq!(edges.len(), expected.len());
    assert_eq!(edges.into_iter().collect::<HashSet<_>>(), expected);
}

#[test]
fn test_op_variants_expose_cached_data() {
    let mut g = Graph::new();
    let x = g.leaf(0.5);
    let t = g.tanh(x);
    let p = g.powf(x, 3.0);
    let ex = g.exp(x);

    match *g.op(t) {
        Op::Tanh { input, output } => {
            assert_eq!(input, x);
            assert_eq!(output, g.value(t));
        }
        ref other => panic!("unexpected op {:?}", other),
    }
    match *g.op(p) {
        Op::Pow { base, exponent } => {
            assert_eq!(base, x);
            assert_eq!(exponent, 3.0);
        }
        ref other => panic!("unexpected op {:?}", other),
    }
    assert_eq!(g.op(ex).symbol(), "exp");
    assert_eq!(g.op(p).to_string(), "^3");
}

#[test]
fn test_topological_order_usable_for_layout() {
    // A renderer laying out left-to-right can use the topological order
    // directly: operands always land before consumers.
    let mut g = Graph::new();
    let x = g.leaf(1.0);
    let y = g.tanh(x);
    let z = g.exp(y);
    let root = g.mul(y, z);
    let order = topological_order(&g, root);
    let pos = |id: NodeId| order.iter().position(|&n| n == id).unwrap();
    assert!(pos(x) < pos(y));
    assert!(pos(y) < pos(z));
    assert_eq!(order.last(), Some(&root));
}
