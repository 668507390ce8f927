use crate::autograd::backward;
use crate::error::ScalargradError;
use crate::graph::Graph;
use crate::node::NodeId;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. f(x+h) = {value_plus}, f(x-h) = {value_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Expression construction failed during gradient check: {0}")]
    BuildError(ScalargradError),
}

impl From<ScalargradError> for GradCheckError {
    fn from(err: ScalargradError) -> Self {
        GradCheckError::BuildError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `build` constructs the scalar expression under test from leaf ids on a
/// fresh graph; it is invoked once per perturbation, so it must be a pure
/// function of the graph and inputs it is handed. For each input `i`, the
/// analytical gradient from a backward pass is compared against
/// `(f(x_i + h) - f(x_i - h)) / 2h` with an absolute-or-relative tolerance.
///
/// # Arguments
/// * `build`: expression builder; returns the root node id.
/// * `inputs`: leaf values the expression is evaluated at.
/// * `epsilon`: the step `h` (e.g. `1e-5`).
/// * `tolerance`: mismatch threshold, proportional to `h` in practice.
pub fn check_grad<F>(
    build: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalargradError>,
{
    // --- Analytical pass ---
    let mut g = Graph::new();
    let ids: Vec<NodeId> = inputs.iter().map(|&v| g.leaf(v)).collect();
    let root = build(&mut g, &ids)?;
    backward(&mut g, root);
    let analytical: Vec<f64> = ids.iter().map(|&id| g.grad(id)).collect();

    // Forward-only evaluation at perturbed inputs.
    let eval = |values: &[f64]| -> Result<f64, GradCheckError> {
        let mut g = Graph::new();
        let ids: Vec<NodeId> = values.iter().map(|&v| g.leaf(v)).collect();
        let root = build(&mut g, &ids)?;
        Ok(g.value(root))
    };

    for (i, &analytical_grad) in analytical.iter().enumerate() {
        if analytical_grad.is_nan() || analytical_grad.is_infinite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let mut plus = inputs.to_vec();
        plus[i] += epsilon;
        let mut minus = inputs.to_vec();
        minus[i] -= epsilon;
        let value_plus = eval(&plus)?;
        let value_minus = eval(&minus)?;
        let numerical_grad = (value_plus - value_minus) / (2.0 * epsilon);

        if numerical_grad.is_nan() || numerical_grad.is_infinite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                value_plus,
                value_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance
            && (difference / (analytical_grad.abs() + epsilon)) > tolerance
        {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}
