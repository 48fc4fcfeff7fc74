use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::{Mul, Sub};

use crate::error::{Error, Result};
use crate::math::vector::Vector;

/// A dense 2-D grid of `f64` scalars with a fixed shape.
///
/// Rows and columns are set at construction; every row holds exactly `cols`
/// entries. One matrix represents one layer transition's weights, shape
/// (layer_size, previous_layer_size).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Builds a matrix by evaluating `fill(row, col)` for every entry.
    pub fn from_fn<F>(rows: usize, cols: usize, fill: F) -> Matrix
    where
        F: Fn(usize, usize) -> f64,
    {
        let data = (0..rows)
            .map(|row| (0..cols).map(|col| fill(row, col)).collect())
            .collect();

        Matrix { rows, cols, data }
    }

    /// Uniform random fill in [-1, 1] from the thread-local generator.
    pub fn random(rows: usize, cols: usize) -> Matrix {
        Matrix::random_with_rng(rows, cols, &mut rand::thread_rng())
    }

    /// Uniform random fill in [-1, 1] from a caller-supplied generator, so
    /// seeded runs are reproducible.
    pub fn random_with_rng<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }

        res
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfRange(format!(
                "({row}, {col}) in a {}x{} matrix",
                self.rows, self.cols
            )));
        }

        Ok(self.data[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfRange(format!(
                "({row}, {col}) in a {}x{} matrix",
                self.rows, self.cols
            )));
        }

        self.data[row][col] = value;
        Ok(())
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[j][i] = self.data[i][j];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    pub fn scaled(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!(
                "matrix shapes must match: {}x{} vs {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            );
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        res
    }
}

/// Matrix-vector product: each output component is the dot product of the
/// corresponding row with the vector.
impl Mul<Vector> for Matrix {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        if self.cols != rhs.len() {
            panic!(
                "matrix columns and vector size must match: {} vs {}",
                self.cols,
                rhs.len()
            );
        }

        let data = self
            .data
            .iter()
            .map(|row| {
                row.iter()
                    .zip(rhs.as_slice().iter())
                    .map(|(w, x)| w * x)
                    .sum()
            })
            .collect();

        Vector::from_data(data)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self.map(|x| x * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_generator() {
        let m = Matrix::from_fn(2, 3, |row, col| (row * 3 + col) as f64);
        assert_eq!((m.rows(), m.cols()), (2, 3));
        assert_eq!(m.get(0, 0).unwrap(), 0.0);
        assert_eq!(m.get(1, 2).unwrap(), 5.0);
    }

    #[test]
    fn get_and_set_validate_bounds() {
        let mut m = Matrix::zeros(2, 2);

        m.set(1, 1, 7.0).unwrap();
        assert_eq!(m.get(1, 1).unwrap(), 7.0);

        assert!(matches!(m.get(2, 0), Err(Error::IndexOutOfRange(_))));
        assert!(matches!(m.get(0, 2), Err(Error::IndexOutOfRange(_))));
        assert!(matches!(m.set(2, 0, 1.0), Err(Error::IndexOutOfRange(_))));
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = Matrix::from_fn(2, 3, |row, col| (row * 3 + col) as f64);
        let t = m.transpose();

        assert_eq!((t.rows(), t.cols()), (3, 2));
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                assert_eq!(t.get(j, i).unwrap(), m.get(i, j).unwrap());
            }
        }
    }

    #[test]
    fn transpose_twice_round_trips() {
        let m = Matrix::from_fn(3, 4, |row, col| (row as f64) - 0.5 * (col as f64));
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn matrix_vector_product() {
        let m = Matrix::from_fn(2, 3, |row, col| (row * 3 + col) as f64);
        let v = Vector::from_data(vec![1.0, 2.0, 3.0]);
        let out = m * v;

        assert_eq!(out.len(), 2);
        assert_eq!(out.as_slice(), &[8.0, 26.0]);
    }

    #[test]
    fn scaling_forms_agree() {
        let m = Matrix::from_fn(2, 2, |row, col| (row + col) as f64);
        assert_eq!(m.clone().scaled(2.0), m * 2.0);
    }

    #[test]
    fn subtraction() {
        let a = Matrix::from_fn(2, 2, |row, col| (row + col) as f64);
        let b = Matrix::from_fn(2, 2, |_, _| 1.0);
        let d = a - b;

        assert_eq!(d.get(0, 0).unwrap(), -1.0);
        assert_eq!(d.get(1, 1).unwrap(), 1.0);
    }

    #[test]
    fn random_fill_stays_in_range() {
        let m = Matrix::random(8, 8);
        for i in 0..8 {
            for j in 0..8 {
                let x = m.get(i, j).unwrap();
                assert!((-1.0..=1.0).contains(&x));
            }
        }
    }

    #[test]
    fn seeded_random_fill_is_reproducible() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let a = Matrix::random_with_rng(3, 3, &mut StdRng::seed_from_u64(42));
        let b = Matrix::random_with_rng(3, 3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn serialization_round_trips() {
        let m = Matrix::from_fn(2, 3, |row, col| (row * 3 + col) as f64);
        let json = serde_json::to_string(&m).unwrap();
        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    #[should_panic(expected = "matrix columns and vector size must match")]
    fn product_rejects_mismatched_shapes() {
        let _ = Matrix::zeros(2, 3) * Vector::zeros(4);
    }

    #[test]
    #[should_panic(expected = "matrix shapes must match")]
    fn subtraction_rejects_mismatched_shapes() {
        let _ = Matrix::zeros(2, 3) - Matrix::zeros(3, 2);
    }
}
