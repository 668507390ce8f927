//! # scalargrad-core
//!
//! A scalar reverse-mode automatic-differentiation engine and the minimal
//! feed-forward network built directly on it.
//!
//! Expressions are built against a [`Graph`] arena: each operation appends a
//! node recording its value, its operands, and the tag its derivative rule
//! dispatches on. [`autograd::backward`] then walks the graph in reverse
//! topological order from any scalar root, accumulating gradients into every
//! reachable node. The `nn` module structures parameters as graph leaves and
//! composes tanh neurons into layers and multi-layer perceptrons; `optim`
//! applies gradient-descent updates to those leaves.

// Core graph arena and node types
pub mod graph;
pub mod node;

pub mod autograd;
pub mod ops;

pub mod nn;
pub mod optim;

pub mod error;

// Re-export the types nearly every caller touches.
pub use autograd::{backward, topological_order};
pub use error::ScalargradError;
pub use graph::{Checkpoint, Graph, Operand};
pub use node::{Node, NodeId, Op};
