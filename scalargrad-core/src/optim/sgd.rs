use crate::error::ScalargradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::optim::optimizer::Optimizer;

/// Plain stochastic gradient descent: `value -= lr * grad` per parameter.
///
/// No momentum or weight decay.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<NodeId>,
    lr: f64,
}

impl Sgd {
    pub fn new(params: Vec<NodeId>, lr: f64) -> Self {
        Sgd { params, lr }
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, g: &mut Graph) -> Result<(), ScalargradError> {
        for &param in &self.params {
            let grad = g.grad(param);
            if !grad.is_finite() {
                log::warn!("non-finite gradient {} for parameter {}", grad, param);
            }
            let updated = g.value(param) - self.lr * grad;
            g.set_value(param, updated)?;
        }
        log::trace!("sgd step applied to {} parameters", self.params.len());
        Ok(())
    }

    fn zero_grad(&mut self, g: &mut Graph) {
        for &param in &self.params {
            g.reset_grad(param);
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
