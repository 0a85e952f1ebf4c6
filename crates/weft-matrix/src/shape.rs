//! Matrix shapes and their classification.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use weft_core::{ErrorInfo, WeftError};

/// Row and column extent of a matrix. Both are always at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

/// Coarse classification of a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeClass {
    /// As many rows as columns.
    Square,
    /// A single row, more than one column.
    Row,
    /// A single column, more than one row.
    Column,
    /// Anything else.
    Rectangular,
}

impl Shape {
    /// Creates a shape, rejecting zero extents.
    pub fn new(rows: usize, cols: usize) -> Result<Self, WeftError> {
        if rows == 0 || cols == 0 {
            return Err(WeftError::Matrix(
                ErrorInfo::new("zero-extent", "matrix shapes need positive row and column counts")
                    .with_context("rows", rows.to_string())
                    .with_context("cols", cols.to_string()),
            ));
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Shapes are never empty; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The shape with rows and columns swapped.
    pub fn transposed(&self) -> Shape {
        Shape {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Classifies the shape.
    pub fn class(&self) -> ShapeClass {
        if self.rows == self.cols {
            ShapeClass::Square
        } else if self.rows == 1 {
            ShapeClass::Row
        } else if self.cols == 1 {
            ShapeClass::Column
        } else {
            ShapeClass::Rectangular
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
