use sha2::{Digest, Sha256};
use weft_core::VertexKey;

use crate::edge::{Edge, EdgeKind};
use crate::graph::Graph;
use crate::vertex::Vertex;

/// Computes the canonical structural hash for the provided graph.
///
/// The hash covers the configuration, the sorted vertex key set, and the
/// sorted edge signatures, so two graphs with the same structure hash
/// identically regardless of insertion order.
pub fn canonical_hash<V: Vertex>(graph: &Graph<V>) -> String {
    let mut hasher = Sha256::new();
    if graph.config().forbid_loops {
        hasher.update(b"no-loops");
    } else {
        hasher.update(b"loops-ok");
    }
    hasher.update(graph.config().schema_version.major.to_le_bytes());
    hasher.update(graph.config().schema_version.minor.to_le_bytes());
    hasher.update(graph.config().schema_version.patch.to_le_bytes());

    hasher.update((graph.order() as u64).to_le_bytes());
    for key in graph.keys() {
        update_key(key, &mut hasher);
    }

    let mut signatures: Vec<Vec<u8>> = graph.edges().map(edge_signature).collect();
    signatures.sort();
    hasher.update((signatures.len() as u64).to_le_bytes());
    for signature in signatures {
        hasher.update(&signature);
    }

    format!("{:x}", hasher.finalize())
}

fn edge_signature(edge: &Edge) -> Vec<u8> {
    let mut buffer = Vec::new();
    buffer.push(match edge.kind() {
        EdgeKind::Undirected => 0u8,
        EdgeKind::Directed => 1,
        EdgeKind::UndirectedHyperedge => 2,
        EdgeKind::DirectedHyperedge => 3,
    });
    let mut hasher = Sha256::new();
    hasher.update((edge.cut().cut() as u64).to_le_bytes());
    for key in edge.keys() {
        update_key(key, &mut hasher);
    }
    buffer.extend_from_slice(&hasher.finalize());
    buffer
}

pub(crate) fn update_key(key: &VertexKey, hasher: &mut Sha256) {
    match key {
        VertexKey::Int(value) => {
            hasher.update(b"i");
            hasher.update(value.to_le_bytes());
        }
        VertexKey::Text(value) => {
            hasher.update(b"t");
            hasher.update((value.len() as u64).to_le_bytes());
            hasher.update(value.as_bytes());
        }
    }
}
