//! Shared layout-graph fixtures used across the engine tests.
#![allow(dead_code)]

use weft_reduce::KeyPair;

/// Builds a key-pair list from integer pairs.
pub fn pairs(raw: &[(i64, i64)]) -> Vec<KeyPair> {
    raw.iter().map(|(i, j)| ((*i).into(), (*j).into())).collect()
}

/// Sorts a list so fixtures can be compared as multisets.
pub fn sorted(mut edges: Vec<KeyPair>) -> Vec<KeyPair> {
    edges.sort();
    edges
}

/// 29-vertex plan graph: two feed chains joining at 8, a third at 12,
/// a two-level fan-out from 12, and four tail chains joining at 29.
pub fn plan_graph() -> Vec<KeyPair> {
    pairs(&[
        (1, 4),
        (2, 5),
        (4, 6),
        (5, 7),
        (6, 8),
        (7, 8),
        (3, 9),
        (8, 10),
        (9, 11),
        (10, 12),
        (11, 12),
        (12, 13),
        (12, 14),
        (13, 15),
        (14, 16),
        (15, 17),
        (15, 18),
        (16, 19),
        (16, 20),
        (17, 21),
        (18, 22),
        (19, 23),
        (20, 24),
        (21, 25),
        (22, 26),
        (23, 27),
        (24, 28),
        (25, 29),
        (26, 29),
        (27, 29),
        (28, 29),
    ])
}

/// `plan_graph` after merging vertex 6 into vertex 4.
pub fn plan_graph_merged_4_6() -> Vec<KeyPair> {
    pairs(&[
        (1, 4),
        (2, 5),
        (5, 7),
        (4, 8),
        (7, 8),
        (3, 9),
        (8, 10),
        (9, 11),
        (10, 12),
        (11, 12),
        (12, 13),
        (12, 14),
        (13, 15),
        (14, 16),
        (15, 17),
        (15, 18),
        (16, 19),
        (16, 20),
        (17, 21),
        (18, 22),
        (19, 23),
        (20, 24),
        (21, 25),
        (22, 26),
        (23, 27),
        (24, 28),
        (25, 29),
        (26, 29),
        (27, 29),
        (28, 29),
    ])
}

/// `plan_graph` after the chain-collapse stage.
pub fn plan_graph_chains_collapsed() -> Vec<KeyPair> {
    pairs(&[
        (1, 8),
        (2, 8),
        (8, 12),
        (3, 12),
        (12, 13),
        (12, 14),
        (13, 17),
        (13, 18),
        (14, 19),
        (14, 20),
        (17, 29),
        (18, 29),
        (19, 29),
        (20, 29),
    ])
}

/// The previous fixture after the pass-through-skip stage drops vertex 8.
pub fn plan_graph_pass_throughs_skipped() -> Vec<KeyPair> {
    pairs(&[
        (1, 12),
        (2, 12),
        (3, 12),
        (12, 13),
        (12, 14),
        (13, 17),
        (13, 18),
        (14, 19),
        (14, 20),
        (17, 29),
        (18, 29),
        (19, 29),
        (20, 29),
    ])
}

/// The fully simplified plan graph, a fixed point of the pipeline.
pub fn plan_graph_simplified() -> Vec<KeyPair> {
    pairs(&[
        (1, 12),
        (2, 12),
        (3, 12),
        (12, 17),
        (12, 18),
        (12, 19),
        (12, 20),
        (17, 29),
        (18, 29),
        (19, 29),
        (20, 29),
    ])
}
