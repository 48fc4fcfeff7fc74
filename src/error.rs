use std::fmt;

/// Errors surfaced by the fallible public API.
///
/// All variants are programmer or configuration errors: they are detected
/// eagerly at the point of violation and never retried or recovered
/// internally.
#[derive(Debug, Clone)]
pub enum Error {
    /// Operand lengths/shapes disagree in an arithmetic or construction
    /// operation.
    DimensionMismatch(String),
    /// Element access outside a container's bounds.
    IndexOutOfRange(String),
    /// Network built with fewer than 2 layers, a non-positive learning rate,
    /// or too few activation functions for the number of layer transitions.
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch(msg) => write!(f, "dimension mismatch: {msg}"),
            Error::IndexOutOfRange(msg) => write!(f, "index out of range: {msg}"),
            Error::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
