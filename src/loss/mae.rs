use crate::error::Result;
use crate::loss::loss::{check_same_length, LossFunction};
use crate::math::vector::Vector;

/// Mean absolute error: mean(|target - output|).
pub struct MeanAbsoluteError;

impl LossFunction for MeanAbsoluteError {
    fn compute(&self, target: &Vector, output: &Vector) -> Result<f64> {
        let n = check_same_length(target, output)? as f64;

        let sum: f64 = target
            .as_slice()
            .iter()
            .zip(output.as_slice().iter())
            .map(|(t, o)| (t - o).abs())
            .sum();

        Ok(sum / n)
    }

    /// Per-component subgradient `sign(output - target) / n` (0 at equality).
    fn gradient(&self, target: &Vector, output: &Vector) -> Result<Vector> {
        let n = check_same_length(target, output)? as f64;

        Ok(Vector::from_data(
            target
                .as_slice()
                .iter()
                .zip(output.as_slice().iter())
                .map(|(t, o)| {
                    let diff = o - t;
                    if diff > 0.0 {
                        1.0 / n
                    } else if diff < 0.0 {
                        -1.0 / n
                    } else {
                        0.0
                    }
                })
                .collect(),
        ))
    }
}
