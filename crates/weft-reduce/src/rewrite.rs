//! Local rewrites applied by the simplification kernels.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use weft_core::VertexKey;

use crate::edgelist::{next_one, KeyPair};

/// Keys removed from the edge list by rewrites.
///
/// Backed by a `BTreeSet` so reports and hashes see the members in a
/// stable order regardless of elimination order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationSet(BTreeSet<VertexKey>);

impl EliminationSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as eliminated.
    pub fn insert(&mut self, key: VertexKey) {
        self.0.insert(key);
    }

    /// Whether `key` has been eliminated.
    pub fn contains(&self, key: &VertexKey) -> bool {
        self.0.contains(key)
    }

    /// Number of eliminated keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no key has been eliminated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the eliminated keys in key order.
    pub fn iter(&self) -> impl Iterator<Item = &VertexKey> {
        self.0.iter()
    }

    /// Folds another set into this one.
    pub fn absorb(&mut self, other: &EliminationSet) {
        self.0.extend(other.0.iter().cloned());
    }

    /// Consumes the wrapper and returns the underlying set.
    pub fn into_inner(self) -> BTreeSet<VertexKey> {
        self.0
    }
}

/// Merges vertex `j` into vertex `i`.
///
/// Every `(i, j)` edge is dropped and every edge leaving `j` is redirected
/// to leave `i` instead. All other edges pass through untouched, so `j` can
/// only survive in the result if something other than `i` still points at it.
pub fn merge_left(i: &VertexKey, j: &VertexKey, edges: &[KeyPair]) -> Vec<KeyPair> {
    let mut merged = Vec::with_capacity(edges.len());
    for (tail, head) in edges {
        if tail == i && head == j {
            continue;
        }
        if tail == j {
            merged.push((i.clone(), head.clone()));
        } else {
            merged.push((tail.clone(), head.clone()));
        }
    }
    merged
}

/// Re-targets every edge leaving `i` one hop forward.
///
/// Each `(i, j)` edge becomes `(i, next_one(j))`, with the successor looked
/// up in the input list, not the partially rewritten one. An edge whose head
/// has no successor is kept as it is.
pub fn skip_next(i: &VertexKey, edges: &[KeyPair]) -> Vec<KeyPair> {
    edges
        .iter()
        .map(|(tail, head)| {
            if tail == i {
                match next_one(head, edges) {
                    Some(successor) => (tail.clone(), successor.clone()),
                    None => (tail.clone(), head.clone()),
                }
            } else {
                (tail.clone(), head.clone())
            }
        })
        .collect()
}
