use crate::error::ScalargradError;
use crate::graph::Graph;
use crate::nn::init::uniform_parameter;
use crate::nn::module::Module;
use crate::node::NodeId;
use rand::Rng;

/// A single tanh neuron: `n_inputs` weights and one bias, all parameter
/// leaves in the shared graph, each initialized uniformly from [-1, 1].
///
/// Forward computes `tanh(sum(w_i * x_i) + b)`, one scalar output node.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
}

impl Neuron {
    pub fn new<R: Rng + ?Sized>(g: &mut Graph, n_inputs: usize, rng: &mut R) -> Self {
        let weights = (0..n_inputs).map(|_| uniform_parameter(g, rng)).collect();
        let bias = uniform_parameter(g, rng);
        Neuron { weights, bias }
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    /// Single-output forward pass.
    ///
    /// # Errors
    /// Returns [`ScalargradError::DimensionMismatch`] unless `inputs` has
    /// exactly `n_inputs` elements.
    pub fn activate(&self, g: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, ScalargradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalargradError::DimensionMismatch {
                operation: "Neuron::activate".to_string(),
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        // act = sum(w_i * x_i) + b, accumulated left to right starting from
        // the bias, then squashed through tanh.
        let mut act = self.bias;
        for (&w, &x) in self.weights.iter().zip(inputs) {
            let wx = g.mul(w, x);
            act = g.add(act, wx);
        }
        Ok(g.tanh(act))
    }
}

impl Module for Neuron {
    fn forward(&self, g: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalargradError> {
        Ok(vec![self.activate(g, inputs)?])
    }

    /// Weight ids followed by the bias id, as live references into the
    /// shared graph (not copies).
    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
