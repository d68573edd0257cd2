//! Constructors for matrices of a requested `(rows, cols)` shape.
//!
//! The random generators draw from `rand::thread_rng()`; the `*_with`
//! variants take any `Rng`, e.g. the seeded generator returned by
//! `LinalgConfig::rng`.
//!
//! # Panics
//!
//! Every generator panics when `rows * cols` overflows `usize`, since no
//! such matrix can be stored.
use num_traits::{One, Zero};
use rand::Rng;

use crate::error::{MatrixError, Result};
use crate::math::matrix::element_count;
use crate::math::{Matrix, Scalar};

fn cell_count(shape: (usize, usize)) -> usize {
    match element_count(shape) {
        Some(count) => count,
        None => panic!("shape {:?} overflows the addressable element count", shape),
    }
}

fn filled(shape: (usize, usize), value: Scalar) -> Matrix {
    let (rows, cols) = shape;
    Matrix::from_parts(vec![value; cell_count(shape)], rows, cols)
}

/// Matrix of `Int(0)`.
pub fn zeros(shape: (usize, usize)) -> Matrix {
    filled(shape, Scalar::zero())
}

/// Matrix of `Int(1)`.
pub fn ones(shape: (usize, usize)) -> Matrix {
    filled(shape, Scalar::one())
}

/// Ones on the main diagonal, zeros elsewhere.
///
/// Rectangular shapes are accepted: the diagonal runs for `min(rows, cols)`
/// cells.
pub fn identity(shape: (usize, usize)) -> Matrix {
    let mut m = zeros(shape);
    for i in 0..shape.0.min(shape.1) {
        m[(i, i)] = Scalar::one();
    }
    m
}

/// Uniform reals in `[0, 1)`.
pub fn rand(shape: (usize, usize)) -> Matrix {
    rand_with(shape, &mut rand::thread_rng())
}

pub fn rand_with<R: Rng + ?Sized>(shape: (usize, usize), rng: &mut R) -> Matrix {
    let (rows, cols) = shape;
    let data = (0..cell_count(shape))
        .map(|_| Scalar::Real(rng.gen::<f64>()))
        .collect();
    Matrix::from_parts(data, rows, cols)
}

/// Uniform integers in `[lower, upper]`, both ends inclusive.
pub fn randi(shape: (usize, usize), lower: i64, upper: i64) -> Result<Matrix> {
    randi_with(shape, lower, upper, &mut rand::thread_rng())
}

pub fn randi_with<R: Rng + ?Sized>(
    shape: (usize, usize),
    lower: i64,
    upper: i64,
    rng: &mut R,
) -> Result<Matrix> {
    if lower > upper {
        return Err(MatrixError::InvalidRange { lower, upper });
    }
    let (rows, cols) = shape;
    let data = (0..cell_count(shape))
        .map(|_| Scalar::Int(rng.gen_range(lower..=upper)))
        .collect();
    log::trace!(
        "randi: generated {}x{} matrix in [{}, {}]",
        rows,
        cols,
        lower,
        upper
    );
    Ok(Matrix::from_parts(data, rows, cols))
}
