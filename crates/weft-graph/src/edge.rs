use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use weft_core::{Cut, VertexKey};

/// Discriminant for the four edge kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Unordered vertex pair.
    Undirected,
    /// Ordered tail/head pair.
    Directed,
    /// Unordered vertex set.
    UndirectedHyperedge,
    /// Ordered tail-set/head-set pair.
    DirectedHyperedge,
}

/// Unordered pair of vertex keys.
///
/// Both endpoints live in the backing sequence with a degenerate partition,
/// which is how the structure itself distinguishes an undirected edge from a
/// directed one without a separate flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndirectedEdge {
    cut: Cut<VertexKey>,
}

impl UndirectedEdge {
    /// Creates an edge between `x` and `y`.
    pub fn new(x: impl Into<VertexKey>, y: impl Into<VertexKey>) -> Self {
        Self {
            cut: Cut::from_parts(vec![x.into(), y.into()], Vec::new()),
        }
    }

    /// Returns the first endpoint.
    pub fn x(&self) -> &VertexKey {
        &self.cut.seq()[0]
    }

    /// Returns the second endpoint.
    pub fn y(&self) -> &VertexKey {
        &self.cut.seq()[1]
    }

    /// Replaces the first endpoint.
    pub fn set_x(&mut self, x: impl Into<VertexKey>) {
        self.cut.set_lower(vec![x.into(), self.y().clone()]);
    }

    /// Replaces the second endpoint.
    pub fn set_y(&mut self, y: impl Into<VertexKey>) {
        self.cut.set_lower(vec![self.x().clone(), y.into()]);
    }

    /// Returns whether both endpoints coincide.
    pub fn is_loop(&self) -> bool {
        self.x() == self.y()
    }

    /// Returns a right oriented directed edge: x --> y.
    pub fn to_right(&self) -> DirectedEdge {
        DirectedEdge::new(self.x().clone(), self.y().clone())
    }

    /// Returns a left oriented directed edge: x <-- y.
    pub fn to_left(&self) -> DirectedEdge {
        DirectedEdge::new(self.y().clone(), self.x().clone())
    }

    /// Returns a right oriented directed hyperedge: {x} --> {y}.
    pub fn to_right_hyperedge(&self) -> DirectedHyperedge {
        DirectedHyperedge::new(vec![self.x().clone()], vec![self.y().clone()])
    }

    /// Returns a left oriented directed hyperedge: {x} <-- {y}.
    pub fn to_left_hyperedge(&self) -> DirectedHyperedge {
        DirectedHyperedge::new(vec![self.y().clone()], vec![self.x().clone()])
    }

    /// Returns the undirected hyperedge over both endpoints.
    pub fn to_undirected_hyperedge(&self) -> UndirectedHyperedge {
        UndirectedHyperedge::new(vec![self.x().clone(), self.y().clone()])
    }

    pub(crate) fn cut(&self) -> &Cut<VertexKey> {
        &self.cut
    }
}

/// Ordered pair of vertex keys: tail --> head.
///
/// The tail occupies the lower part of the backing sequence and the head the
/// upper part, so the partition index is always 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectedEdge {
    cut: Cut<VertexKey>,
}

impl DirectedEdge {
    /// Creates an edge from `tail` to `head`.
    pub fn new(tail: impl Into<VertexKey>, head: impl Into<VertexKey>) -> Self {
        Self {
            cut: Cut::from_parts(vec![tail.into()], vec![head.into()]),
        }
    }

    /// Returns the tail endpoint.
    pub fn tail(&self) -> &VertexKey {
        &self.cut.lower()[0]
    }

    /// Returns the head endpoint.
    pub fn head(&self) -> &VertexKey {
        &self.cut.upper()[0]
    }

    /// Replaces the tail endpoint.
    pub fn set_tail(&mut self, tail: impl Into<VertexKey>) {
        self.cut.set_lower(vec![tail.into()]);
    }

    /// Replaces the head endpoint.
    pub fn set_head(&mut self, head: impl Into<VertexKey>) {
        self.cut.set_upper(vec![head.into()]);
    }

    /// Returns whether head and tail coincide.
    pub fn is_loop(&self) -> bool {
        self.head() == self.tail()
    }

    /// Returns the singleton directed hyperedge {tail} --> {head}.
    pub fn to_directed_hyperedge(&self) -> DirectedHyperedge {
        DirectedHyperedge::new(vec![self.tail().clone()], vec![self.head().clone()])
    }

    /// Forgets the orientation.
    pub fn to_undirected(&self) -> UndirectedEdge {
        UndirectedEdge::new(self.tail().clone(), self.head().clone())
    }

    pub(crate) fn cut(&self) -> &Cut<VertexKey> {
        &self.cut
    }
}

/// Unordered set of vertex keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndirectedHyperedge {
    cut: Cut<VertexKey>,
}

impl UndirectedHyperedge {
    /// Creates a hyperedge over the given keys. Duplicates are dropped.
    pub fn new(vertices: Vec<VertexKey>) -> Self {
        Self {
            cut: Cut::from_parts(canonicalize(vertices), Vec::new()),
        }
    }

    /// Returns the vertex set.
    pub fn vertices(&self) -> &[VertexKey] {
        self.cut.lower()
    }

    /// Replaces the vertex set. Duplicates are dropped.
    pub fn set_vertices(&mut self, vertices: Vec<VertexKey>) {
        self.cut.set_lower(canonicalize(vertices));
    }

    /// Returns the number of connected vertices.
    pub fn size(&self) -> usize {
        self.cut.cardinality()
    }

    /// Returns whether the edge degenerates to a single vertex.
    pub fn is_loop(&self) -> bool {
        self.size() == 1
    }

    pub(crate) fn cut(&self) -> &Cut<VertexKey> {
        &self.cut
    }
}

/// Ordered pair of vertex sets: tails --> heads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectedHyperedge {
    cut: Cut<VertexKey>,
}

impl DirectedHyperedge {
    /// Creates a hyperedge from the tail set to the head set. Each side is
    /// de-duplicated independently.
    pub fn new(tails: Vec<VertexKey>, heads: Vec<VertexKey>) -> Self {
        Self {
            cut: Cut::from_parts(canonicalize(tails), canonicalize(heads)),
        }
    }

    /// Returns the tail set.
    pub fn tails(&self) -> &[VertexKey] {
        self.cut.lower()
    }

    /// Returns the head set.
    pub fn heads(&self) -> &[VertexKey] {
        self.cut.upper()
    }

    /// Replaces the tail set.
    pub fn set_tails(&mut self, tails: Vec<VertexKey>) {
        self.cut.set_lower(canonicalize(tails));
    }

    /// Replaces the head set.
    pub fn set_heads(&mut self, heads: Vec<VertexKey>) {
        self.cut.set_upper(canonicalize(heads));
    }

    /// Returns the combined number of tail and head vertices.
    pub fn size(&self) -> usize {
        self.cut.cardinality()
    }

    /// Lenient loop test: any vertex shared between tails and heads.
    pub fn is_loop(&self) -> bool {
        let heads: BTreeSet<&VertexKey> = self.heads().iter().collect();
        self.tails().iter().any(|tail| heads.contains(tail))
    }

    /// Strict loop test: tail and head sets are set-equal.
    pub fn is_loop_strict(&self) -> bool {
        self.tails() == self.heads()
    }

    pub(crate) fn cut(&self) -> &Cut<VertexKey> {
        &self.cut
    }
}

/// Closed algebra over the four edge kinds.
///
/// Every variant is backed by the same physical structure, a single
/// partitioned key sequence, which is what lets [`Edge::connects_to`] be
/// written once for all kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    /// Unordered vertex pair.
    Undirected(UndirectedEdge),
    /// Ordered tail/head pair.
    Directed(DirectedEdge),
    /// Unordered vertex set.
    UndirectedHyperedge(UndirectedHyperedge),
    /// Ordered tail-set/head-set pair.
    DirectedHyperedge(DirectedHyperedge),
}

impl Edge {
    /// Returns the discriminant for this edge.
    pub fn kind(&self) -> EdgeKind {
        match self {
            Edge::Undirected(_) => EdgeKind::Undirected,
            Edge::Directed(_) => EdgeKind::Directed,
            Edge::UndirectedHyperedge(_) => EdgeKind::UndirectedHyperedge,
            Edge::DirectedHyperedge(_) => EdgeKind::DirectedHyperedge,
        }
    }

    /// Returns whether the edge is a loop under its own kind's semantics.
    ///
    /// Directed hyperedges use the lenient reading (any shared vertex); the
    /// strict set-equality test is [`DirectedHyperedge::is_loop_strict`].
    pub fn is_loop(&self) -> bool {
        match self {
            Edge::Undirected(edge) => edge.is_loop(),
            Edge::Directed(edge) => edge.is_loop(),
            Edge::UndirectedHyperedge(edge) => edge.is_loop(),
            Edge::DirectedHyperedge(edge) => edge.is_loop(),
        }
    }

    /// Returns every vertex key the edge touches.
    pub fn keys(&self) -> &[VertexKey] {
        self.cut().seq()
    }

    /// Returns whether `self` can reach `next` through a shared vertex.
    ///
    /// The outgoing projection of `self` (its upper part, or the whole
    /// sequence when one sided) must intersect the incoming projection of
    /// `next` (its lower part, or the whole sequence when one sided).
    /// Undirected edges therefore connect symmetrically while directed
    /// edges connect head to tail only.
    pub fn connects_to(&self, next: &Edge) -> bool {
        let incoming: BTreeSet<&VertexKey> = incoming_projection(next.cut()).iter().collect();
        outgoing_projection(self.cut())
            .iter()
            .any(|key| incoming.contains(key))
    }

    pub(crate) fn cut(&self) -> &Cut<VertexKey> {
        match self {
            Edge::Undirected(edge) => edge.cut(),
            Edge::Directed(edge) => edge.cut(),
            Edge::UndirectedHyperedge(edge) => edge.cut(),
            Edge::DirectedHyperedge(edge) => edge.cut(),
        }
    }
}

fn outgoing_projection(cut: &Cut<VertexKey>) -> &[VertexKey] {
    if cut.one_sided() {
        cut.seq()
    } else {
        cut.upper()
    }
}

fn incoming_projection(cut: &Cut<VertexKey>) -> &[VertexKey] {
    if cut.one_sided() {
        cut.seq()
    } else {
        cut.lower()
    }
}

fn canonicalize(keys: Vec<VertexKey>) -> Vec<VertexKey> {
    let set: BTreeSet<VertexKey> = keys.into_iter().collect();
    set.into_iter().collect()
}

impl From<UndirectedEdge> for Edge {
    fn from(edge: UndirectedEdge) -> Self {
        Edge::Undirected(edge)
    }
}

impl From<DirectedEdge> for Edge {
    fn from(edge: DirectedEdge) -> Self {
        Edge::Directed(edge)
    }
}

impl From<UndirectedHyperedge> for Edge {
    fn from(edge: UndirectedHyperedge) -> Self {
        Edge::UndirectedHyperedge(edge)
    }
}

impl From<DirectedHyperedge> for Edge {
    fn from(edge: DirectedHyperedge) -> Self {
        Edge::DirectedHyperedge(edge)
    }
}
