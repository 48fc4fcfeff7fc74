use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, Mul, Sub};

use crate::math::matrix::Matrix;

/// A fixed-length, dense vector of `f64` scalars.
///
/// The length is set at construction and never changes; every binary
/// elementwise operation requires both operands to have the same length and
/// panics otherwise (see the crate docs for the panic-vs-`Result` contract).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn from_data(data: Vec<f64>) -> Vector {
        Vector { data }
    }

    pub fn filled(value: f64, len: usize) -> Vector {
        Vector {
            data: vec![value; len],
        }
    }

    pub fn zeros(len: usize) -> Vector {
        Vector::filled(0.0, len)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn map<F>(&self, functor: F) -> Vector
    where
        F: Fn(f64) -> f64,
    {
        Vector {
            data: self.data.iter().map(|&x| functor(x)).collect(),
        }
    }

    pub fn scaled(&self, factor: f64) -> Vector {
        self.map(|x| x * factor)
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        if self.len() != other.len() {
            panic!("vector sizes must match: {} vs {}", self.len(), other.len());
        }

        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Outer product: entry (i, j) of the result is `self[i] * other[j]`,
    /// giving a matrix of shape (self.len(), other.len()).
    pub fn outer_product(&self, other: &Vector) -> Matrix {
        Matrix::from_fn(self.len(), other.len(), |row, col| {
            self.data[row] * other.data[col]
        })
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Self) -> Self::Output {
        if self.len() != rhs.len() {
            panic!("vector sizes must match: {} vs {}", self.len(), rhs.len());
        }

        Vector {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.len() != rhs.len() {
            panic!("vector sizes must match: {} vs {}", self.len(), rhs.len());
        }

        Vector {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(a, b)| a - b)
                .collect(),
        }
    }
}

/// Elementwise (Hadamard) product.
impl Mul for Vector {
    type Output = Vector;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.len() != rhs.len() {
            panic!("vector sizes must match: {} vs {}", self.len(), rhs.len());
        }

        Vector {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(a, b)| a * b)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elementwise_operators() {
        let a = Vector::from_data(vec![1.0, 2.0, 3.0]);
        let b = Vector::from_data(vec![4.0, 5.0, 6.0]);

        assert_eq!(
            (a.clone() + b.clone()).as_slice(),
            &[5.0, 7.0, 9.0]
        );
        assert_eq!(
            (b.clone() - a.clone()).as_slice(),
            &[3.0, 3.0, 3.0]
        );
        assert_eq!((a * b).as_slice(), &[4.0, 10.0, 18.0]);
    }

    #[test]
    fn dot_product() {
        let a = Vector::from_data(vec![1.0, 2.0, 3.0]);
        let b = Vector::from_data(vec![4.0, 5.0, 6.0]);
        assert_eq!(a.dot(&b), 32.0);
    }

    #[test]
    fn scaled_and_map() {
        let v = Vector::from_data(vec![1.0, -2.0]);
        assert_eq!(v.scaled(0.5).as_slice(), &[0.5, -1.0]);
        assert_eq!(v.map(|x| x.abs()).as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn filled_and_zeros() {
        let v = Vector::filled(0.25, 4);
        assert_eq!(v.len(), 4);
        assert!(!v.is_empty());
        assert!(v.as_slice().iter().all(|&x| x == 0.25));
        assert_eq!(Vector::zeros(3).as_slice(), &[0.0, 0.0, 0.0]);
        assert!(Vector::from_data(vec![]).is_empty());
    }

    #[test]
    fn serialization_round_trips() {
        let v = Vector::from_data(vec![1.0, -0.5]);
        let json = serde_json::to_string(&v).unwrap();
        let back: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn outer_product_shape_and_entries() {
        let a = Vector::from_data(vec![1.0, 2.0, 3.0]);
        let b = Vector::from_data(vec![4.0, 5.0]);
        let m = a.outer_product(&b);

        assert_eq!((m.rows(), m.cols()), (3, 2));
        assert_eq!(m.get(0, 0).unwrap(), 4.0);
        assert_eq!(m.get(2, 1).unwrap(), 15.0);
    }

    #[test]
    #[should_panic(expected = "vector sizes must match")]
    fn add_rejects_mismatched_lengths() {
        let _ = Vector::zeros(2) + Vector::zeros(3);
    }

    #[test]
    #[should_panic(expected = "vector sizes must match")]
    fn dot_rejects_mismatched_lengths() {
        Vector::zeros(2).dot(&Vector::zeros(4));
    }
}
