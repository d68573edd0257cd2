//! Conversions between `Matrix` and `ndarray::Array2`.
//!
//! A zero-row `Matrix` converts to a `(0, 0)` array.
use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{MatrixError, Result};
use crate::math::{Matrix, Scalar};

fn to_array<T>(m: &Matrix, values: Vec<T>) -> Result<Array2<T>> {
    let shape = (m.nrows(), m.ncols().unwrap_or(0));
    Array2::from_shape_vec(shape, values).map_err(|_| MatrixError::ElementCountMismatch {
        count: m.len(),
        shape,
    })
}

fn from_array<T, F>(array: &Array2<T>, f: F) -> Matrix
where
    F: Fn(&T) -> Scalar,
{
    let (rows, cols) = array.dim();
    // `iter` walks logical (row-major) order whatever the memory layout.
    Matrix::from_parts(array.iter().map(f).collect(), rows, cols)
}

impl TryFrom<&Matrix> for Array2<f64> {
    type Error = MatrixError;

    fn try_from(m: &Matrix) -> Result<Self> {
        let values = m
            .iter()
            .map(|v| v.as_f64().ok_or(MatrixError::ComplexElement))
            .collect::<Result<Vec<f64>>>()?;
        to_array(m, values)
    }
}

impl TryFrom<&Matrix> for Array2<Complex64> {
    type Error = MatrixError;

    fn try_from(m: &Matrix) -> Result<Self> {
        to_array(m, m.iter().map(Scalar::to_complex).collect())
    }
}

impl From<&Array2<i64>> for Matrix {
    fn from(array: &Array2<i64>) -> Self {
        from_array(array, |v| Scalar::Int(*v))
    }
}

impl From<&Array2<f64>> for Matrix {
    fn from(array: &Array2<f64>) -> Self {
        from_array(array, |v| Scalar::Real(*v))
    }
}

impl From<&Array2<Complex64>> for Matrix {
    fn from(array: &Array2<Complex64>) -> Self {
        from_array(array, |v| Scalar::Complex(*v))
    }
}
