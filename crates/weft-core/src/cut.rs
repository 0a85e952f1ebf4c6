//! Partitioned ordered sequence used as the uniform storage for edge
//! endpoint sets.
//!
//! A [`Cut`] owns a sequence `S` and a single partition index splitting it
//! into a lower prefix `L` and an upper suffix `U` with `L ++ U == S` at all
//! times. The name comes from the Dedekind cut the original design models:
//! the partition happens on indices, not on the elements themselves. A
//! directed edge keeps its tail in `L` and its head in `U`; an undirected
//! edge stores both endpoints with a degenerate (one sided) partition.

use crate::errors::{ErrorInfo, WeftError};

/// Ordered sequence with a single partition index.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Cut<T> {
    seq: Vec<T>,
    cut: usize,
}

impl<T> Default for Cut<T> {
    fn default() -> Self {
        Self {
            seq: Vec::new(),
            cut: 0,
        }
    }
}

impl<T> Cut<T> {
    /// Creates an empty cut.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cut from a sequence and a partition index.
    ///
    /// The index must lie in `[0, seq.len()]`.
    pub fn with_cut(seq: Vec<T>, cut: usize) -> Result<Self, WeftError> {
        if cut > seq.len() {
            return Err(WeftError::Graph(
                ErrorInfo::new("cut-out-of-bounds", "cut index exceeds sequence length")
                    .with_context("cut", cut.to_string())
                    .with_context("len", seq.len().to_string()),
            ));
        }
        Ok(Self { seq, cut })
    }

    /// Creates a cut from explicit lower and upper parts.
    pub fn from_parts(lower: Vec<T>, upper: Vec<T>) -> Self {
        let cut = lower.len();
        let mut seq = lower;
        seq.extend(upper);
        Self { seq, cut }
    }

    /// Returns the whole backing sequence.
    pub fn seq(&self) -> &[T] {
        &self.seq
    }

    /// Returns the partition index.
    pub fn cut(&self) -> usize {
        self.cut
    }

    /// Returns the lower contiguous sub-sequence `S[0, cut)`.
    pub fn lower(&self) -> &[T] {
        &self.seq[..self.cut]
    }

    /// Returns the upper contiguous sub-sequence `S[cut, len)`.
    pub fn upper(&self) -> &[T] {
        &self.seq[self.cut..]
    }

    /// Replaces the lower part and moves the partition index to its length.
    pub fn set_lower(&mut self, lower: Vec<T>) {
        let upper: Vec<T> = self.seq.split_off(self.cut);
        self.cut = lower.len();
        self.seq = lower;
        self.seq.extend(upper);
    }

    /// Replaces the upper part in place, leaving the partition index alone.
    pub fn set_upper(&mut self, upper: Vec<T>) {
        self.seq.truncate(self.cut);
        self.seq.extend(upper);
    }

    /// Returns the length of the backing sequence.
    pub fn cardinality(&self) -> usize {
        self.seq.len()
    }

    /// Returns whether the partition degenerates to a single side.
    pub fn one_sided(&self) -> bool {
        self.cut == 0 || self.cut == self.seq.len()
    }
}
