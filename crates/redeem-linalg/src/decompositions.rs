//! Operations reserved in the public API but not yet provided.
//!
//! Each entry point fails with `MatrixError::NotImplemented` instead of
//! returning a placeholder value.
use crate::error::{MatrixError, Result};
use crate::math::{Matrix, Vector};

pub fn inverse(_m: &Matrix) -> Result<Matrix> {
    Err(MatrixError::NotImplemented("inverse"))
}

pub fn eigenvalues(_m: &Matrix) -> Result<Vector> {
    Err(MatrixError::NotImplemented("eigenvalues"))
}

pub fn eigenvectors(_m: &Matrix) -> Result<Matrix> {
    Err(MatrixError::NotImplemented("eigenvectors"))
}

pub fn cross(_a: &Matrix, _b: &Matrix) -> Result<Matrix> {
    Err(MatrixError::NotImplemented("cross product"))
}

pub fn kronecker(_a: &Matrix, _b: &Matrix) -> Result<Matrix> {
    Err(MatrixError::NotImplemented("kronecker tensor product"))
}

pub fn normalize(_m: &Matrix) -> Result<Matrix> {
    Err(MatrixError::NotImplemented("normalize"))
}

pub fn rot90(_m: &Matrix) -> Result<Matrix> {
    Err(MatrixError::NotImplemented("rot90"))
}
