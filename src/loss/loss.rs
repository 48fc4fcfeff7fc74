use crate::error::{Error, Result};
use crate::math::vector::Vector;

/// Objective comparing a target vector against a produced output vector.
///
/// A network holds exactly one implementation for its whole lifetime.
/// `compute` yields the scalar loss; `gradient` yields the loss gradient
/// with respect to the output, which seeds the backward pass.
pub trait LossFunction {
    fn compute(&self, target: &Vector, output: &Vector) -> Result<f64>;

    fn gradient(&self, target: &Vector, output: &Vector) -> Result<Vector>;
}

/// Shared length check for loss implementations.
pub(crate) fn check_same_length(target: &Vector, output: &Vector) -> Result<usize> {
    if target.len() != output.len() {
        return Err(Error::DimensionMismatch(format!(
            "target length {} vs output length {}",
            target.len(),
            output.len()
        )));
    }

    Ok(target.len())
}
