//! Shape-checked dense matrices for adjacency analysis.
//!
//! A deliberately small surface: row-major `f64` storage, exact shape
//! checks on every operation, and errors carried through
//! [`weft_core::WeftError`] like the rest of the workspace.

#![deny(missing_docs)]

pub mod matrix;
pub mod shape;

pub use crate::matrix::Matrix;
pub use crate::shape::{Shape, ShapeClass};
