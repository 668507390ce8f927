use crate::error::ScalargradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Sum of squared errors: `sum((pred_i - target_i)^2)` as a single scalar
/// root node.
///
/// This is the per-example loss of a one-hot classification driver: the
/// prediction vector is the network's class scores and the target vector has
/// 1.0 at the true class, 0.0 elsewhere. Targets are raw numbers, not nodes;
/// gradients are not propagated into them.
///
/// # Errors
/// Returns [`ScalargradError::DimensionMismatch`] when the two slices differ
/// in length. An empty pair is valid and yields a 0.0 leaf.
pub fn sum_squared_error(
    g: &mut Graph,
    predictions: &[NodeId],
    targets: &[f64],
) -> Result<NodeId, ScalargradError> {
    if predictions.len() != targets.len() {
        return Err(ScalargradError::DimensionMismatch {
            operation: "sum_squared_error".to_string(),
            expected: predictions.len(),
            actual: targets.len(),
        });
    }
    let mut total = g.leaf(0.0);
    for (&pred, &target) in predictions.iter().zip(targets) {
        let diff = g.sub(pred, target);
        let sq = g.powf(diff, 2.0);
        total = g.add(total, sq);
    }
    Ok(total)
}
