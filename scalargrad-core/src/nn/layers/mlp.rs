use crate::error::ScalargradError;
use crate::graph::Graph;
use crate::nn::layers::Layer;
use crate::nn::module::Module;
use crate::node::NodeId;
use rand::Rng;

/// Multi-layer perceptron: a chain of fully-connected tanh layers.
///
/// `layer_sizes` gives the width of each layer in order; the first layer
/// consumes `n_inputs` features and each subsequent layer consumes the
/// previous layer's outputs. Forward threads the outputs through and returns
/// the final layer's output vector.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    pub fn new<R: Rng + ?Sized>(
        g: &mut Graph,
        n_inputs: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Self {
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = n_inputs;
        for &size in layer_sizes {
            layers.push(Layer::new(g, fan_in, size, rng));
            fan_in = size;
        }
        Mlp { layers }
    }

    pub fn n_layers(&self) -> usize {
        self.layers.len()
    }

    /// Width of the final layer, i.e. how many outputs a forward pass yields.
    pub fn n_outputs(&self) -> usize {
        self.layers.last().map_or(0, Layer::n_outputs)
    }

    /// Forward pass for a network whose final layer has exactly one neuron.
    /// See [`Layer::forward_single`] for the rationale.
    pub fn forward_single(
        &self,
        g: &mut Graph,
        inputs: &[NodeId],
    ) -> Result<NodeId, ScalargradError> {
        let outputs = self.forward(g, inputs)?;
        if outputs.len() != 1 {
            return Err(ScalargradError::DimensionMismatch {
                operation: "Mlp::forward_single".to_string(),
                expected: 1,
                actual: outputs.len(),
            });
        }
        Ok(outputs[0])
    }
}

impl Module for Mlp {
    fn forward(&self, g: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalargradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(g, &current)?;
        }
        Ok(current)
    }

    /// Every layer's parameters, concatenated in layer order.
    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
