use std::collections::BTreeSet;

use proptest::prelude::*;
use weft_core::VertexKey;
use weft_graph::{DirectedEdge, DirectedHyperedge, Edge, UndirectedEdge, UndirectedHyperedge};

fn keys(raw: &[&str]) -> Vec<VertexKey> {
    raw.iter().map(|key| VertexKey::from(*key)).collect()
}

#[test]
fn undirected_edge_exposes_and_replaces_endpoints() {
    let mut edge = UndirectedEdge::new("A", "B");
    assert_eq!(edge.x(), &VertexKey::from("A"));
    assert_eq!(edge.y(), &VertexKey::from("B"));
    edge.set_x("C");
    assert_eq!(edge.x(), &VertexKey::from("C"));
    edge.set_y("D");
    assert_eq!(edge.y(), &VertexKey::from("D"));
}

#[test]
fn undirected_edge_detects_loops() {
    assert!(UndirectedEdge::new("A", "A").is_loop());
    assert!(UndirectedEdge::new(1, 1).is_loop());
    assert!(!UndirectedEdge::new("A", "B").is_loop());
}

#[test]
fn undirected_edge_orients_to_the_right() {
    let edge = UndirectedEdge::new("A", "B");
    let directed = edge.to_right();
    assert_eq!(directed.tail(), &VertexKey::from("A"));
    assert_eq!(directed.head(), &VertexKey::from("B"));
}

#[test]
fn undirected_edge_orients_to_the_left() {
    let edge = UndirectedEdge::new("A", "B");
    let directed = edge.to_left();
    assert_eq!(directed.tail(), &VertexKey::from("B"));
    assert_eq!(directed.head(), &VertexKey::from("A"));
}

#[test]
fn undirected_edge_lifts_to_oriented_hyperedges() {
    let edge = UndirectedEdge::new("A", "B");
    let right = edge.to_right_hyperedge();
    assert_eq!(right.tails(), keys(&["A"]).as_slice());
    assert_eq!(right.heads(), keys(&["B"]).as_slice());
    let left = edge.to_left_hyperedge();
    assert_eq!(left.tails(), keys(&["B"]).as_slice());
    assert_eq!(left.heads(), keys(&["A"]).as_slice());
}

#[test]
fn undirected_edge_lifts_to_an_undirected_hyperedge() {
    let edge = UndirectedEdge::new("A", "B");
    let hyper = edge.to_undirected_hyperedge();
    assert_eq!(hyper.vertices(), keys(&["A", "B"]).as_slice());
    assert_eq!(hyper.size(), 2);
}

#[test]
fn orientation_round_trip_preserves_the_endpoint_pair() {
    let edge = UndirectedEdge::new("A", "B");
    let round = edge.to_right().to_undirected();
    let mut original = [edge.x().clone(), edge.y().clone()];
    let mut restored = [round.x().clone(), round.y().clone()];
    original.sort();
    restored.sort();
    assert_eq!(original, restored);
}

#[test]
fn conversions_do_not_share_storage() {
    let edge = UndirectedEdge::new("A", "B");
    let mut directed = edge.to_right();
    directed.set_head("Z");
    assert_eq!(edge.y(), &VertexKey::from("B"));
}

#[test]
fn directed_edge_exposes_and_replaces_endpoints() {
    let mut edge = DirectedEdge::new("A", "B");
    assert_eq!(edge.tail(), &VertexKey::from("A"));
    assert_eq!(edge.head(), &VertexKey::from("B"));
    edge.set_tail("C");
    assert_eq!(edge.tail(), &VertexKey::from("C"));
    edge.set_head("D");
    assert_eq!(edge.head(), &VertexKey::from("D"));
}

#[test]
fn directed_edge_detects_loops() {
    assert!(DirectedEdge::new("A", "A").is_loop());
    assert!(!DirectedEdge::new("A", "B").is_loop());
}

#[test]
fn directed_edge_lifts_to_a_directed_hyperedge() {
    let edge = DirectedEdge::new("A", "B");
    let hyper = edge.to_directed_hyperedge();
    assert_eq!(hyper.tails(), keys(&["A"]).as_slice());
    assert_eq!(hyper.heads(), keys(&["B"]).as_slice());
}

#[test]
fn undirected_hyperedge_deduplicates_vertices() {
    let hyper = UndirectedHyperedge::new(keys(&["B", "A", "B"]));
    assert_eq!(hyper.vertices(), keys(&["A", "B"]).as_slice());
    assert_eq!(hyper.size(), 2);
    assert!(!hyper.is_loop());
    assert!(UndirectedHyperedge::new(keys(&["A", "A"])).is_loop());
}

#[test]
fn directed_hyperedge_sizes_both_sides() {
    let hyper = DirectedHyperedge::new(keys(&["A", "B"]), keys(&["C", "D"]));
    assert_eq!(hyper.size(), 4);
    assert_eq!(hyper.tails(), keys(&["A", "B"]).as_slice());
    assert_eq!(hyper.heads(), keys(&["C", "D"]).as_slice());
}

#[test]
fn directed_hyperedge_replaces_sides_independently() {
    let mut hyper = DirectedHyperedge::new(keys(&["A", "B"]), keys(&["C", "D"]));
    hyper.set_heads(keys(&["E", "F"]));
    assert_eq!(hyper.tails(), keys(&["A", "B"]).as_slice());
    assert_eq!(hyper.heads(), keys(&["E", "F"]).as_slice());
    hyper.set_tails(keys(&["G"]));
    assert_eq!(hyper.tails(), keys(&["G"]).as_slice());
    assert_eq!(hyper.heads(), keys(&["E", "F"]).as_slice());
}

#[test]
fn directed_hyperedge_loop_semantics_diverge() {
    let shared = DirectedHyperedge::new(keys(&["A", "B"]), keys(&["A", "B", "C"]));
    assert!(shared.is_loop());
    assert!(!shared.is_loop_strict());

    let equal = DirectedHyperedge::new(keys(&["A", "B"]), keys(&["B", "A"]));
    assert!(equal.is_loop());
    assert!(equal.is_loop_strict());

    let disjoint = DirectedHyperedge::new(keys(&["A"]), keys(&["B"]));
    assert!(!disjoint.is_loop());
    assert!(!disjoint.is_loop_strict());
}

#[test]
fn undirected_adjacency_is_symmetric() {
    let e1: Edge = UndirectedEdge::new("A", "B").into();
    let e2: Edge = UndirectedEdge::new("B", "C").into();
    assert!(e1.connects_to(&e2));
    assert!(e2.connects_to(&e1));

    let e3: Edge = UndirectedEdge::new("C", "D").into();
    assert!(!e1.connects_to(&e3));
    assert!(!e3.connects_to(&e1));
}

#[test]
fn directed_adjacency_is_head_to_tail_only() {
    let ab: Edge = DirectedEdge::new("A", "B").into();
    let bc: Edge = DirectedEdge::new("B", "C").into();
    assert!(ab.connects_to(&bc));
    assert!(!bc.connects_to(&ab));
}

#[test]
fn hyper_adjacency_follows_the_same_projections() {
    let e1: Edge = DirectedHyperedge::new(keys(&["A", "B"]), keys(&["C", "D"])).into();
    let e2: Edge = DirectedHyperedge::new(keys(&["D", "E"]), keys(&["F", "G"])).into();
    assert!(e1.connects_to(&e2));
    assert!(!e2.connects_to(&e1));

    let far: Edge = DirectedHyperedge::new(keys(&["F", "E"]), keys(&["H", "G"])).into();
    assert!(!e1.connects_to(&far));
}

#[test]
fn mixed_kind_adjacency_works_across_variants() {
    let undirected: Edge = UndirectedEdge::new("A", "B").into();
    let directed: Edge = DirectedEdge::new("B", "C").into();
    // The undirected edge exposes its whole key set in both directions.
    assert!(undirected.connects_to(&directed));
    assert!(!directed.connects_to(&undirected));
}

fn key_strategy() -> impl Strategy<Value = VertexKey> {
    prop_oneof![
        any::<i64>().prop_map(VertexKey::from),
        "[a-z]{1,8}".prop_map(VertexKey::from),
    ]
}

proptest! {
    #[test]
    fn any_orientation_round_trip_preserves_the_endpoint_pair(
        x in key_strategy(),
        y in key_strategy(),
    ) {
        let edge = UndirectedEdge::new(x, y);
        for directed in [edge.to_right(), edge.to_left()] {
            let round = directed.to_undirected();
            let mut original = [edge.x().clone(), edge.y().clone()];
            let mut restored = [round.x().clone(), round.y().clone()];
            original.sort();
            restored.sort();
            prop_assert_eq!(original, restored);
        }
    }

    #[test]
    fn undirected_hyperedges_canonicalize_any_key_multiset(
        raw in proptest::collection::vec(key_strategy(), 1..8),
    ) {
        let hyper = UndirectedHyperedge::new(raw.clone());
        let expected: Vec<VertexKey> = raw.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(hyper.vertices(), expected.as_slice());
        prop_assert_eq!(hyper.is_loop(), hyper.size() == 1);
    }

    #[test]
    fn directed_adjacency_always_follows_shared_keys(
        a in key_strategy(),
        b in key_strategy(),
        c in key_strategy(),
    ) {
        let ab: Edge = DirectedEdge::new(a, b.clone()).into();
        let bc: Edge = DirectedEdge::new(b, c).into();
        prop_assert!(ab.connects_to(&bc));
    }
}
