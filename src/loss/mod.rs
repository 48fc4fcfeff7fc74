pub mod loss;
pub mod mae;
pub mod mse;

pub use loss::LossFunction;
pub use mae::MeanAbsoluteError;
pub use mse::MeanSquaredError;
