//! redeem-linalg: dense matrix algebra over mixed numeric elements.
//!
//! This crate provides a small `Matrix` value type whose elements may be
//! integers, reals or complex numbers, together with generators (zeros,
//! ones, identity, random), element-wise arithmetic with scalar broadcast,
//! the matrix product, shape transforms and a cofactor-expansion
//! determinant.
//!
//! Every fallible operation returns `error::Result`; nothing panics on bad
//! input except the `Index` operators, which behave like slice indexing.
pub mod arithmetic;
pub mod config;
pub mod decompositions;
pub mod determinant;
pub mod error;
pub mod generators;
pub mod interop;
pub mod math;
pub mod product;
pub mod transform;
pub mod utils;
pub mod validate;

pub use error::{MatrixError, Result};
pub use math::{Matrix, Scalar, Vector};
