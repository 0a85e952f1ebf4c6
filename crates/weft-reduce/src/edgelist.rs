//! Degree and neighbour queries over a plain list of directed key pairs.
//!
//! The simplification kernels work on `(tail, head)` pairs rather than on
//! typed edges so that a run can take its input straight from a query
//! result. [`from_graph`] lifts a typed graph into that shape.

use weft_core::VertexKey;
use weft_graph::{Edge, Graph, Vertex};

/// A directed edge expressed as a `(tail, head)` pair of keys.
pub type KeyPair = (VertexKey, VertexKey);

/// Number of edges leaving `key`.
pub fn out_degree(key: &VertexKey, edges: &[KeyPair]) -> usize {
    edges.iter().filter(|(tail, _)| tail == key).count()
}

/// Number of edges entering `key`.
pub fn in_degree(key: &VertexKey, edges: &[KeyPair]) -> usize {
    edges.iter().filter(|(_, head)| head == key).count()
}

/// Head of the first edge leaving `key`, in list order.
pub fn next_one<'a>(key: &VertexKey, edges: &'a [KeyPair]) -> Option<&'a VertexKey> {
    edges.iter().find(|(tail, _)| tail == key).map(|(_, head)| head)
}

/// Tail of the first edge entering `key`, in list order.
pub fn prev_one<'a>(key: &VertexKey, edges: &'a [KeyPair]) -> Option<&'a VertexKey> {
    edges.iter().find(|(_, head)| head == key).map(|(tail, _)| tail)
}

/// Heads of every edge leaving `key`, in list order, duplicates kept.
pub fn next_set(key: &VertexKey, edges: &[KeyPair]) -> Vec<VertexKey> {
    edges
        .iter()
        .filter(|(tail, _)| tail == key)
        .map(|(_, head)| head.clone())
        .collect()
}

/// Tails of every edge entering `key`, in list order, duplicates kept.
pub fn prev_set(key: &VertexKey, edges: &[KeyPair]) -> Vec<VertexKey> {
    edges
        .iter()
        .filter(|(_, head)| head == key)
        .map(|(tail, _)| tail.clone())
        .collect()
}

/// Flattens the directed edges of a typed graph into key pairs.
///
/// Only plain directed edges are kept. Undirected and hyper edges have no
/// single `(tail, head)` reading, so they are skipped rather than guessed at.
pub fn from_graph<V: Vertex>(graph: &Graph<V>) -> Vec<KeyPair> {
    graph
        .edges()
        .filter_map(|edge| match edge {
            Edge::Directed(directed) => Some((directed.tail().clone(), directed.head().clone())),
            _ => None,
        })
        .collect()
}
