//! Deterministic random edge lists for tests and benchmarks.

use rand::Rng;
use weft_core::{derive_substream_seed, ErrorInfo, RngHandle, WeftError};

use crate::edgelist::KeyPair;

/// Generates a layered DAG as a list of `(tail, head)` key pairs.
///
/// Vertices are numbered layer by layer starting at 1. Every vertex in a
/// layer gets one or two edges into randomly chosen vertices of the next
/// layer, so the result is always acyclic and every non-final vertex has
/// out-degree at least one.
///
/// Each layer draws from its own substream of `master_seed`, so a layer's
/// edges depend only on the seed and the layer number, never on how many
/// draws earlier layers made. Reusing a seed reproduces the exact list,
/// and growing `layers` extends the list without disturbing its prefix.
pub fn gen_layered_dag(
    layers: usize,
    width: usize,
    master_seed: u64,
) -> Result<Vec<KeyPair>, WeftError> {
    if layers < 2 || width == 0 {
        return Err(WeftError::Reduce(
            ErrorInfo::new(
                "degenerate-shape",
                "a layered DAG needs at least two layers and a positive width",
            )
            .with_context("layers", layers.to_string())
            .with_context("width", width.to_string()),
        ));
    }

    let vertex = |layer: usize, slot: usize| -> i64 { (layer * width + slot + 1) as i64 };

    let mut edges = Vec::new();
    for layer in 0..layers - 1 {
        let mut rng = RngHandle::from_seed(derive_substream_seed(master_seed, layer as u64));
        for slot in 0..width {
            let tail = vertex(layer, slot);
            let fan_out = rng.gen_range(1..=2usize);
            for _ in 0..fan_out {
                let target = rng.gen_range(0..width);
                edges.push((tail.into(), vertex(layer + 1, target).into()));
            }
        }
    }
    Ok(edges)
}
