use crate::error::Result;
use crate::loss::loss::{check_same_length, LossFunction};
use crate::math::vector::Vector;

/// Mean-squared error: mean((target - output)²).
pub struct MeanSquaredError;

impl LossFunction for MeanSquaredError {
    fn compute(&self, target: &Vector, output: &Vector) -> Result<f64> {
        let n = check_same_length(target, output)? as f64;

        let sum: f64 = target
            .as_slice()
            .iter()
            .zip(output.as_slice().iter())
            .map(|(t, o)| (t - o).powi(2))
            .sum();

        Ok(sum / n)
    }

    /// Per-component gradient `2 * (output - target) / n`. Dividing by the
    /// component count keeps the gradient's magnitude independent of the
    /// output layer's width.
    fn gradient(&self, target: &Vector, output: &Vector) -> Result<Vector> {
        let n = check_same_length(target, output)? as f64;

        Ok(Vector::from_data(
            target
                .as_slice()
                .iter()
                .zip(output.as_slice().iter())
                .map(|(t, o)| 2.0 * (o - t) / n)
                .collect(),
        ))
    }
}
