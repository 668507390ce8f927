use crate::error::ScalargradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// The base trait for all neural network modules (neurons, layers,
/// containers).
///
/// A module does not own its parameters' storage: parameters are leaf nodes
/// living in a shared [`Graph`], and the module holds live [`NodeId`]s into
/// it. External mutation of a parameter's value (an optimizer step) is
/// therefore visible to every subsequent forward pass.
pub trait Module: std::fmt::Debug {
    /// Builds this module's forward graph over `inputs` and returns the
    /// output node ids, one per output.
    ///
    /// # Errors
    /// Returns [`ScalargradError::DimensionMismatch`] when the input length
    /// does not match the module's expected arity.
    fn forward(&self, g: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalargradError>;

    /// All learnable parameter ids, in a stable order (weights before bias
    /// within a neuron, neurons in layer order, layers in network order).
    fn parameters(&self) -> Vec<NodeId>;

    /// Resets every parameter's gradient to exactly 0.0.
    ///
    /// Must be called before every `backward` invocation in a training loop:
    /// gradients accumulate additively and would otherwise carry over across
    /// steps.
    fn zero_grad(&self, g: &mut Graph) {
        for param in self.parameters() {
            g.reset_grad(param);
        }
    }
}
