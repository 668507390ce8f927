use crate::error::ScalargradError;
use crate::node::{Node, NodeId, Op};
use crate::ops::{activation, arithmetic, math_elem};

/// Promotion boundary for binary/unary operations: either an existing node
/// or a raw number that will be turned into an unlabeled leaf on use.
///
/// This is the single conversion helper invoked at every operation boundary,
/// standing in for the implicit numeric coercion a dynamic language would do
/// through operator dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(NodeId),
    Scalar(f64),
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Scalar(v)
    }
}

impl From<f32> for Operand {
    fn from(v: f32) -> Self {
        Operand::Scalar(v as f64)
    }
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Operand::Scalar(v as f64)
    }
}

/// Marker returned by [`Graph::mark`], consumed by [`Graph::rewind`].
///
/// Records the arena length at the time of the mark. Because a node can only
/// reference nodes allocated strictly before it, truncating back to a mark
/// can never leave a retained node pointing at a discarded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Arena owning every node of a computation graph.
///
/// Nodes are appended as operations are evaluated (the forward pass builds
/// the graph implicitly) and referenced by [`NodeId`] index. The arena keeps
/// allocation and traversal local and sidesteps object-identity hashing:
/// visited sets and operand collections are plain index collections.
///
/// A training loop typically allocates its parameter leaves first, takes a
/// [`Checkpoint`], and [`rewind`](Graph::rewind)s to it after each step to
/// release the step's forward graph as a whole.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes currently in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterator over every node id, in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    // --- Construction ---

    /// Creates a leaf node from a raw value. Leaves have no operands and a
    /// no-op backward rule.
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.push(Node::new(value, Op::Leaf))
    }

    /// Creates a labeled leaf. The label is cosmetic, surfaced only through
    /// introspection.
    pub fn labeled_leaf(&mut self, value: f64, label: impl Into<String>) -> NodeId {
        let id = self.leaf(value);
        self.nodes[id.0].label = Some(label.into());
        id
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Resolves an [`Operand`] to a node id, promoting a raw scalar to a
    /// fresh unlabeled leaf.
    pub(crate) fn promote(&mut self, operand: impl Into<Operand>) -> NodeId {
        match operand.into() {
            Operand::Node(id) => id,
            Operand::Scalar(v) => self.leaf(v),
        }
    }

    // --- Accessors / introspection ---

    /// Forward value of a node.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this graph (caller contract).
    pub fn value(&self, id: NodeId) -> f64 {
        self.nodes[id.0].value
    }

    /// Accumulated gradient of a node. Meaningful only after a backward pass
    /// whose reachable set includes the node; otherwise stale or zero.
    pub fn grad(&self, id: NodeId) -> f64 {
        self.nodes[id.0].grad
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].label.as_deref()
    }

    /// The operation record of a node: its tag, its operand ids, and any
    /// cached data its derivative rule needs. Together with [`Graph::value`],
    /// [`Graph::grad`] and [`Graph::label`] this is sufficient for an
    /// external renderer to reconstruct the full node/edge set.
    pub fn op(&self, id: NodeId) -> &Op {
        &self.nodes[id.0].op
    }

    /// Operand ids of a node, in operand order. Empty for a leaf.
    pub fn operands(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes[id.0].op.operands()
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.0].op.is_leaf()
    }

    // --- Mutation ---

    /// Overwrites the value of a leaf node. This is the hook the training
    /// driver uses to apply parameter updates and to feed fresh inputs into a
    /// retained leaf between forward passes.
    ///
    /// # Errors
    /// Returns [`ScalargradError::NonLeafAssignment`] for an operation node:
    /// derived values are fixed at construction.
    pub fn set_value(&mut self, id: NodeId, value: f64) -> Result<(), ScalargradError> {
        let node = &mut self.nodes[id.0];
        if !node.op.is_leaf() {
            return Err(ScalargradError::NonLeafAssignment {
                node_id: id.0,
                op: node.op.to_string(),
            });
        }
        node.value = value;
        Ok(())
    }

    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) {
        self.nodes[id.0].label = Some(label.into());
    }

    /// Resets a single node's gradient to exactly 0.0.
    pub fn reset_grad(&mut self, id: NodeId) {
        self.nodes[id.0].grad = 0.0;
    }

    pub(crate) fn add_to_grad(&mut self, id: NodeId, contribution: f64) {
        self.nodes[id.0].grad += contribution;
    }

    pub(crate) fn set_grad(&mut self, id: NodeId, grad: f64) {
        self.nodes[id.0].grad = grad;
    }

    // --- Lifecycle ---

    /// Records the current arena length so the nodes allocated after this
    /// point can later be discarded with [`Graph::rewind`].
    pub fn mark(&self) -> Checkpoint {
        Checkpoint(self.nodes.len())
    }

    /// Discards every node allocated after `checkpoint`, releasing a step's
    /// forward graph while keeping earlier leaves (typically the parameters)
    /// alive. Ids handed out after the mark are invalidated.
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.nodes.truncate(checkpoint.0);
    }

    // --- Operation conveniences ---
    //
    // Thin delegations to the `ops` functions, so expressions read as
    // `g.add(a, b)` at call sites. Any raw numeric argument is promoted to a
    // leaf through `Operand`.

    pub fn add(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
        arithmetic::add_op(self, a, b)
    }

    pub fn mul(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
        arithmetic::mul_op(self, a, b)
    }

    pub fn neg(&mut self, a: impl Into<Operand>) -> NodeId {
        arithmetic::neg_op(self, a)
    }

    pub fn sub(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
        arithmetic::sub_op(self, a, b)
    }

    pub fn div(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
        arithmetic::div_op(self, a, b)
    }

    /// Power with a fixed numeric exponent; the infallible common path.
    pub fn powf(&mut self, a: impl Into<Operand>, exponent: f64) -> NodeId {
        arithmetic::powf_op(self, a, exponent)
    }

    /// Power with an [`Operand`] exponent, rejecting node-valued exponents.
    pub fn pow(
        &mut self,
        a: impl Into<Operand>,
        exponent: impl Into<Operand>,
    ) -> Result<NodeId, ScalargradError> {
        arithmetic::pow_op(self, a, exponent)
    }

    pub fn tanh(&mut self, a: impl Into<Operand>) -> NodeId {
        activation::tanh_op(self, a)
    }

    pub fn exp(&mut self, a: impl Into<Operand>) -> NodeId {
        math_elem::exp_op(self, a)
    }
}
