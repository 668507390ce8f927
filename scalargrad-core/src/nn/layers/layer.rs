use crate::error::ScalargradError;
use crate::graph::Graph;
use crate::nn::layers::Neuron;
use crate::nn::module::Module;
use crate::node::NodeId;
use rand::Rng;

/// A fully-connected layer: `n_outputs` independently-initialized neurons
/// sharing the same `n_inputs`-wide input vector.
///
/// Forward always returns one output id per neuron. The dynamic-language
/// convenience of collapsing a single-neuron layer to a bare scalar does not
/// survive static typing; callers that want it use
/// [`Layer::forward_single`], which makes the one-output assumption explicit
/// and checked.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        g: &mut Graph,
        n_inputs: usize,
        n_outputs: usize,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::new(g, n_inputs, rng))
            .collect();
        Layer { neurons }
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }

    /// Forward pass for a layer known to have exactly one neuron.
    ///
    /// # Errors
    /// [`ScalargradError::DimensionMismatch`] if the layer has more than one
    /// output (or the input arity is wrong).
    pub fn forward_single(
        &self,
        g: &mut Graph,
        inputs: &[NodeId],
    ) -> Result<NodeId, ScalargradError> {
        let outputs = self.forward(g, inputs)?;
        if outputs.len() != 1 {
            return Err(ScalargradError::DimensionMismatch {
                operation: "Layer::forward_single".to_string(),
                expected: 1,
                actual: outputs.len(),
            });
        }
        Ok(outputs[0])
    }
}

impl Module for Layer {
    fn forward(&self, g: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalargradError> {
        self.neurons
            .iter()
            .map(|n| n.activate(g, inputs))
            .collect()
    }

    /// Every neuron's parameters, concatenated in neuron order.
    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
