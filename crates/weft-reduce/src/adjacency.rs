//! Adjacency-matrix view of an edge list.

use weft_core::{ErrorInfo, VertexKey, WeftError};
use weft_matrix::Matrix;

use crate::edgelist::KeyPair;

/// Keys of the edge list in first-appearance order.
///
/// Each pair contributes its tail and then its head, so the index is
/// stable for a given list and usable as matrix row and column labels.
pub fn key_index(edges: &[KeyPair]) -> Vec<VertexKey> {
    let mut index = Vec::new();
    for (tail, head) in edges {
        if !index.contains(tail) {
            index.push(tail.clone());
        }
        if !index.contains(head) {
            index.push(head.clone());
        }
    }
    index
}

/// Builds the directed adjacency matrix of `edges` over `index`.
///
/// Entry `(r, c)` counts the edges from `index[r]` to `index[c]`, so
/// parallel edges accumulate. Every key in the list must appear in the
/// index and the index must not be empty.
pub fn adjacency_matrix(edges: &[KeyPair], index: &[VertexKey]) -> Result<Matrix, WeftError> {
    if index.is_empty() {
        return Err(WeftError::Reduce(ErrorInfo::new(
            "empty-index",
            "cannot build an adjacency matrix over an empty key index",
        )));
    }
    let position = |key: &VertexKey| -> Result<usize, WeftError> {
        index.iter().position(|entry| entry == key).ok_or_else(|| {
            WeftError::Reduce(
                ErrorInfo::new("unknown-key", "edge list key missing from the index")
                    .with_context("key", key.to_string()),
            )
        })
    };

    let mut matrix = Matrix::zeros(index.len(), index.len())?;
    for (tail, head) in edges {
        let row = position(tail)?;
        let col = position(head)?;
        let count = matrix.get(row, col)?;
        matrix.set(row, col, count + 1.0)?;
    }
    Ok(matrix)
}

/// Symmetrizes a directed adjacency matrix by adding its transpose.
pub fn symmetrized(matrix: &Matrix) -> Result<Matrix, WeftError> {
    matrix.add(&matrix.transpose())
}

/// Counts triangles in a simple undirected adjacency matrix.
///
/// Uses `trace(A^3) / 6`; each triangle is walked from three starting
/// vertices in two directions.
pub fn triangle_count(adjacency: &Matrix) -> Result<u64, WeftError> {
    let cubed = adjacency.pow(3)?;
    Ok((cubed.trace()? / 6.0).round() as u64)
}
