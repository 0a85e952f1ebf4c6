//! Canonical digest of an edge list.

use sha2::{Digest, Sha256};
use weft_core::VertexKey;

use crate::edgelist::KeyPair;

fn update_key(key: &VertexKey, hasher: &mut Sha256) {
    match key {
        VertexKey::Int(value) => {
            hasher.update(b"i");
            hasher.update(value.to_le_bytes());
        }
        VertexKey::Text(text) => {
            hasher.update(b"t");
            hasher.update((text.len() as u64).to_le_bytes());
            hasher.update(text.as_bytes());
        }
    }
}

/// SHA-256 digest of the edge list, independent of list order.
///
/// Each pair is hashed on its own and the per-pair digests are sorted
/// before folding, so two lists with the same multiset of pairs always
/// produce the same hex string.
pub fn edge_list_hash(edges: &[KeyPair]) -> String {
    let mut signatures: Vec<[u8; 32]> = edges
        .iter()
        .map(|(tail, head)| {
            let mut hasher = Sha256::new();
            update_key(tail, &mut hasher);
            update_key(head, &mut hasher);
            hasher.finalize().into()
        })
        .collect();
    signatures.sort_unstable();

    let mut hasher = Sha256::new();
    hasher.update((edges.len() as u64).to_le_bytes());
    for signature in &signatures {
        hasher.update(signature);
    }
    format!("{:x}", hasher.finalize())
}
