use crate::error::ScalargradError;
use crate::graph::Graph;

/// Interface for optimizers driving parameter updates.
///
/// An optimizer holds ids of parameter leaves in a shared [`Graph`] and
/// mutates their values from the gradients left by the last backward pass.
/// The training-loop contract is: `zero_grad`, build loss, `backward`, then
/// `step`.
pub trait Optimizer {
    /// Applies one update to every managed parameter from its accumulated
    /// gradient.
    ///
    /// # Errors
    /// Fails if a managed id is not a leaf (parameters are always leaves;
    /// handing an operation node to an optimizer is a caller bug).
    fn step(&mut self, g: &mut Graph) -> Result<(), ScalargradError>;

    /// Resets every managed parameter's gradient to exactly 0.0.
    fn zero_grad(&mut self, g: &mut Graph);
}
