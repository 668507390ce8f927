use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalargradError {
    /// Raising a node to a node-valued exponent is out of scope: the exponent
    /// of `pow` must be a fixed numeric constant, never a graph node.
    #[error("pow exponent must be a numeric constant, got a graph node (id {node_id})")]
    NonConstantExponent { node_id: usize },

    #[error("Dimension mismatch in {operation}: expected {expected} inputs, got {actual}")]
    DimensionMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    /// Values of operation nodes are fixed at construction; only leaves
    /// (inputs, parameters) may be overwritten between forward passes.
    #[error("cannot overwrite the value of non-leaf node {node_id} (op {op})")]
    NonLeafAssignment { node_id: usize, op: String },

    #[error("Internal error: {0}")]
    InternalError(String),
}
