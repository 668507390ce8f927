use std::fmt;

/// Stable handle to a node inside a [`Graph`](crate::graph::Graph) arena.
///
/// Node identity is per-instance, never per-value: two nodes holding the same
/// float are distinct graph elements, and all bookkeeping (visited sets,
/// operand lists) keys on these indices. A `NodeId` is only meaningful for
/// the graph that allocated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The position of the node in its arena. Exposed for external renderers
    /// that need a stable key for the node/edge set.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Tagged record of the operation that produced a node.
///
/// Each variant carries exactly the data its local derivative rule needs
/// (operand ids, the fixed exponent, the cached activation output), so the
/// backward driver can dispatch on the tag instead of invoking a captured
/// closure, and external tools can inspect the graph without executing code.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// A node created directly from a raw value: an input, constant, or
    /// parameter. No operands, no backward contribution.
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// `base` raised to a fixed numeric exponent. A node-valued exponent is
    /// rejected at construction (see `ops::arithmetic::pow_op`).
    Pow { base: NodeId, exponent: f64 },
    /// `output` caches tanh(input), reused by the backward rule as 1 - t^2.
    Tanh { input: NodeId, output: f64 },
    /// `output` caches exp(input); the backward rule is g * output.
    Exp { input: NodeId, output: f64 },
}

impl Op {
    /// Ids of the predecessor nodes, in operand order. Empty for a leaf.
    pub fn operands(&self) -> Vec<NodeId> {
        match *self {
            Op::Leaf => vec![],
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow { base, .. } => vec![base],
            Op::Tanh { input, .. } => vec![input],
            Op::Exp { input, .. } => vec![input],
        }
    }

    /// Short operator symbol, without per-node detail (`"^"` for any power).
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add(..) => "+",
            Op::Mul(..) => "*",
            Op::Pow { .. } => "^",
            Op::Tanh { .. } => "tanh",
            Op::Exp { .. } => "exp",
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }
}

impl fmt::Display for Op {
    /// Renders the full tag, including the exponent for powers (`"^2"`),
    /// matching what a graph renderer would print on an op node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Pow { exponent, .. } => write!(f, "^{}", exponent),
            other => f.write_str(other.symbol()),
        }
    }
}

/// A single scalar node: its value, its gradient accumulator, and its place
/// in the computation graph.
///
/// `value` and `op` are fixed at construction (leaf values may be overwritten
/// between forward passes through [`Graph::set_value`](crate::graph::Graph::set_value));
/// only `grad` is mutated afterwards, by backward propagation or an explicit
/// reset.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) value: f64,
    /// Accumulated (never overwritten, except at the backward seed) gradient.
    pub(crate) grad: f64,
    pub(crate) op: Op,
    /// Cosmetic only; surfaced through introspection for renderers.
    pub(crate) label: Option<String>,
}

impl Node {
    pub(crate) fn new(value: f64, op: Op) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
            label: None,
        }
    }
}
