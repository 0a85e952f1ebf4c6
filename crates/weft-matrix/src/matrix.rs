//! Dense row-major matrix with shape-checked arithmetic.

use serde::{Deserialize, Serialize};
use weft_core::{ErrorInfo, WeftError};

use crate::shape::{Shape, ShapeClass};

/// Dense matrix of `f64` entries stored row-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    shape: Shape,
    entries: Vec<f64>,
}

fn shape_mismatch(op: &str, left: Shape, right: Shape) -> WeftError {
    WeftError::Matrix(
        ErrorInfo::new("shape-mismatch", "operand shapes are incompatible")
            .with_context("op", op)
            .with_context("left", left.to_string())
            .with_context("right", right.to_string()),
    )
}

impl Matrix {
    /// Creates a matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, WeftError> {
        let shape = Shape::new(rows, cols)?;
        Ok(Self {
            entries: vec![0.0; shape.len()],
            shape,
        })
    }

    /// Creates the `n` by `n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, WeftError> {
        let mut matrix = Self::zeros(n, n)?;
        for idx in 0..n {
            matrix.entries[idx * n + idx] = 1.0;
        }
        Ok(matrix)
    }

    /// Builds a matrix from rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, WeftError> {
        let row_count = rows.len();
        let col_count = rows.first().map(Vec::len).unwrap_or(0);
        let shape = Shape::new(row_count, col_count)?;
        let mut entries = Vec::with_capacity(shape.len());
        for row in &rows {
            if row.len() != col_count {
                return Err(WeftError::Matrix(
                    ErrorInfo::new("ragged-rows", "all rows must have the same length")
                        .with_context("expected", col_count.to_string())
                        .with_context("found", row.len().to_string()),
                ));
            }
            entries.extend_from_slice(row);
        }
        Ok(Self { shape, entries })
    }

    /// The matrix shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The coarse shape classification.
    pub fn class(&self) -> ShapeClass {
        self.shape.class()
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, WeftError> {
        if row >= self.shape.rows() || col >= self.shape.cols() {
            return Err(WeftError::Matrix(
                ErrorInfo::new("index-out-of-bounds", "entry index outside the matrix shape")
                    .with_context("row", row.to_string())
                    .with_context("col", col.to_string())
                    .with_context("shape", self.shape.to_string()),
            ));
        }
        Ok(row * self.shape.cols() + col)
    }

    /// Reads the entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, WeftError> {
        Ok(self.entries[self.offset(row, col)?])
    }

    /// Writes the entry at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), WeftError> {
        let offset = self.offset(row, col)?;
        self.entries[offset] = value;
        Ok(())
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Matrix {
        let shape = self.shape.transposed();
        let mut entries = vec![0.0; shape.len()];
        for row in 0..self.shape.rows() {
            for col in 0..self.shape.cols() {
                entries[col * shape.cols() + row] = self.entries[row * self.shape.cols() + col];
            }
        }
        Matrix { shape, entries }
    }

    /// Entry-wise sum. Shapes must match exactly.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, WeftError> {
        if self.shape != other.shape {
            return Err(shape_mismatch("add", self.shape, other.shape));
        }
        let entries = self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(left, right)| left + right)
            .collect();
        Ok(Matrix {
            shape: self.shape,
            entries,
        })
    }

    /// Entry-wise difference. Shapes must match exactly.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, WeftError> {
        if self.shape != other.shape {
            return Err(shape_mismatch("sub", self.shape, other.shape));
        }
        let entries = self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(left, right)| left - right)
            .collect();
        Ok(Matrix {
            shape: self.shape,
            entries,
        })
    }

    /// Matrix product. The left column count must equal the right row count.
    pub fn mult(&self, other: &Matrix) -> Result<Matrix, WeftError> {
        if self.shape.cols() != other.shape.rows() {
            return Err(shape_mismatch("mult", self.shape, other.shape));
        }
        let mut result = Matrix::zeros(self.shape.rows(), other.shape.cols())?;
        for row in 0..self.shape.rows() {
            for inner in 0..self.shape.cols() {
                let left = self.entries[row * self.shape.cols() + inner];
                if left == 0.0 {
                    continue;
                }
                for col in 0..other.shape.cols() {
                    result.entries[row * other.shape.cols() + col] +=
                        left * other.entries[inner * other.shape.cols() + col];
                }
            }
        }
        Ok(result)
    }

    /// Sum of the main diagonal. The matrix must be square.
    pub fn trace(&self) -> Result<f64, WeftError> {
        if self.class() != ShapeClass::Square {
            return Err(WeftError::Matrix(
                ErrorInfo::new("non-square", "trace is only defined for square matrices")
                    .with_context("shape", self.shape.to_string()),
            ));
        }
        let n = self.shape.rows();
        Ok((0..n).map(|idx| self.entries[idx * n + idx]).sum())
    }

    /// Raises a square matrix to a non-negative integer power.
    ///
    /// `pow(0)` is the identity of the same order.
    pub fn pow(&self, exponent: u32) -> Result<Matrix, WeftError> {
        if self.class() != ShapeClass::Square {
            return Err(WeftError::Matrix(
                ErrorInfo::new("non-square", "powers are only defined for square matrices")
                    .with_context("shape", self.shape.to_string()),
            ));
        }
        let mut result = Matrix::identity(self.shape.rows())?;
        for _ in 0..exponent {
            result = result.mult(self)?;
        }
        Ok(result)
    }

    /// Row-major view of the entries.
    pub fn entries(&self) -> &[f64] {
        &self.entries
    }
}
