use serde::{Deserialize, Serialize};

/// Element-wise nonlinearity applied after a layer's linear transform.
///
/// One variant is associated with each layer transition. All variants are
/// stateless pure functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Sigmoid,
    ReLU,
    Tanh,
    Identity,
}

impl ActivationFunction {
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            ActivationFunction::ReLU => {
                if x > 0.0 {
                    x
                } else {
                    0.0
                }
            }
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::Identity => x,
        }
    }

    /// Derivative expressed in terms of the activation's own output: the
    /// argument is the value `apply` already produced, not the
    /// pre-activation. Every variant's derivative has an exact closed form
    /// in the output, so the backward pass feeds it cached activations.
    pub fn derivative(&self, y: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => y * (1.0 - y),
            ActivationFunction::ReLU => {
                if y > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            ActivationFunction::Tanh => 1.0 - y * y,
            ActivationFunction::Identity => 1.0,
        }
    }
}
