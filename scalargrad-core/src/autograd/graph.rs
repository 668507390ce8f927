use crate::graph::Graph;
use crate::node::NodeId;

/// Depth-first post-order over the subgraph reachable from `root`.
///
/// Every node appears strictly after all of its operands and `root` is the
/// final element, so iterating the result in reverse gives the order the
/// backward pass needs. Shared sub-expressions appear exactly once: the
/// visited set is a `Vec<bool>` indexed by arena position, keying on node
/// identity rather than value.
///
/// The traversal uses an explicit work stack instead of recursion; the DAG
/// invariant (nodes reference only strictly older nodes) guarantees
/// termination, and the stack keeps depth bounded on graphs with thousands
/// of chained operations.
pub fn topological_order(g: &Graph, root: NodeId) -> Vec<NodeId> {
    let mut order = Vec::new();
    let mut visited = vec![false; g.len()];
    // Each entry is a node plus a flag: false = first visit (expand
    // operands), true = operands done (emit the node).
    let mut stack: Vec<(NodeId, bool)> = vec![(root, false)];

    while let Some((id, operands_done)) = stack.pop() {
        if operands_done {
            order.push(id);
            continue;
        }
        if visited[id.index()] {
            continue;
        }
        visited[id.index()] = true;
        stack.push((id, true));
        for operand in g.operands(id) {
            if !visited[operand.index()] {
                stack.push((operand, false));
            }
        }
    }

    order
}
