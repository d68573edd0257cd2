//! The value types of the crate.
//!
//! `Scalar` is one numeric element (integer, real or complex), `Matrix` a
//! dense rectangular grid of them and `Vector` an owned row or column
//! snapshot taken from a matrix.
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use matrix::Matrix;
pub use scalar::{ElementKind, Scalar};
pub use vector::Vector;
