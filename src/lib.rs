//! A minimal dense feed-forward neural network engine: vectors and
//! matrices, pluggable activation and loss functions, and multi-layer
//! perceptrons trained by backpropagation with online gradient descent.
//!
//! Low-level algebra operators (`+`, `-`, `*`) treat shape mismatches as
//! programming errors and panic; fallible operations on the public
//! surface (`new`, `predict`, `train`, element access, loss evaluation)
//! return [`Result`] instead.

pub mod math;
pub mod activation;
pub mod loss;
pub mod network;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use math::vector::Vector;
pub use activation::activation::ActivationFunction;
pub use loss::loss::LossFunction;
pub use loss::mae::MeanAbsoluteError;
pub use loss::mse::MeanSquaredError;
pub use network::perceptron::MultiLayerPerceptron;
pub use error::{Error, Result};
