#![deny(missing_docs)]

//! Edge algebra and typed multigraph built on one unifying representation:
//! every edge kind, from undirected pair to directed hyperedge, is a
//! projection of a single partitioned vertex-key sequence.

mod edge;
mod graph;
mod hash;
mod serialization;
mod vertex;

pub use edge::{DirectedEdge, DirectedHyperedge, Edge, EdgeKind, UndirectedEdge, UndirectedHyperedge};
pub use graph::{Graph, GraphConfig, RootedGraph};
pub use hash::canonical_hash;
pub use serialization::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json};
pub use vertex::{DataVertex, KeyVertex, Vertex};
