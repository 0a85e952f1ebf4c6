use std::collections::BTreeMap;

use weft_core::errors::{ErrorInfo, WeftError};
use weft_core::{SchemaVersion, VertexKey};

use crate::edge::{Edge, EdgeKind};
use crate::vertex::Vertex;

/// Configuration options that control the behaviour of [`Graph`].
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Whether loop edges are rejected on insertion.
    pub forbid_loops: bool,
    /// Schema version stored alongside serialized payloads.
    pub schema_version: SchemaVersion,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            forbid_loops: false,
            schema_version: SchemaVersion::new(1, 0, 0),
        }
    }
}

impl GraphConfig {
    /// Returns a configuration that rejects loop edges.
    pub fn without_loops() -> Self {
        Self {
            forbid_loops: true,
            ..Self::default()
        }
    }
}

/// Typed multigraph: a key-to-vertex map plus an ordered edge list.
///
/// Vertex addition is idempotent by key; edge addition preserves insertion
/// order and permits duplicates between the same endpoints. Adjacency
/// queries are linear scans over the edge list, which is acceptable at the
/// graph sizes this engine targets.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    config: GraphConfig,
    vertices: BTreeMap<VertexKey, V>,
    edges: Vec<Edge>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl<V: Vertex> Graph<V> {
    /// Creates an empty graph with the provided configuration.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            vertices: BTreeMap::new(),
            edges: Vec::new(),
        }
    }

    /// Returns the configuration used by this graph.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Adds a vertex, keeping the existing one when the key is present.
    pub fn add_vertex(&mut self, vertex: V) -> &mut Self {
        self.vertices.entry(vertex.key()).or_insert(vertex);
        self
    }

    /// Adds every vertex from the iterator.
    pub fn add_vertices(&mut self, vertices: impl IntoIterator<Item = V>) -> &mut Self {
        for vertex in vertices {
            self.add_vertex(vertex);
        }
        self
    }

    /// Returns whether a vertex with the given key exists.
    pub fn has_vertex(&self, key: &VertexKey) -> bool {
        self.vertices.contains_key(key)
    }

    /// Returns the vertex stored under the given key.
    pub fn vertex(&self, key: &VertexKey) -> Option<&V> {
        self.vertices.get(key)
    }

    /// Removes and returns the vertex stored under the given key.
    ///
    /// Edges referencing the key are left in place; dangling endpoints are
    /// accepted input everywhere in the engine.
    pub fn drop_vertex(&mut self, key: &VertexKey) -> Option<V> {
        self.vertices.remove(key)
    }

    /// Appends an edge to the graph.
    ///
    /// When the configuration forbids loops, a loop edge is rejected and
    /// the graph is left unmodified.
    pub fn add_edge(&mut self, edge: impl Into<Edge>) -> Result<(), WeftError> {
        let edge = edge.into();
        if self.config.forbid_loops && edge.is_loop() {
            return Err(WeftError::Graph(
                ErrorInfo::new("loop-detected", "graph disallows loop edges")
                    .with_context("kind", format!("{:?}", edge.kind())),
            ));
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Appends every edge from the iterator, stopping at the first
    /// rejection. Edges appended before the rejection remain.
    pub fn add_edges(
        &mut self,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<(), WeftError> {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    /// Returns every edge whose endpoint set contains the given key.
    pub fn vertex_edges(&self, key: &VertexKey) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|edge| edge.keys().contains(key))
            .collect()
    }

    /// Returns an iterator over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Returns an iterator over all vertex keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = &VertexKey> {
        self.vertices.keys()
    }

    /// Returns the vertex count.
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the edge count across all kinds.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of edges of the given kind.
    pub fn size_of_kind(&self, kind: EdgeKind) -> usize {
        self.edges.iter().filter(|edge| edge.kind() == kind).count()
    }
}

/// Rooted graph: a [`Graph`] composed with a distinguished root list.
///
/// Roots must reference vertices already present in the inner graph;
/// unknown roots are rejected rather than silently recorded.
#[derive(Debug, Clone)]
pub struct RootedGraph<V> {
    graph: Graph<V>,
    roots: Vec<VertexKey>,
}

impl<V: Vertex> RootedGraph<V> {
    /// Wraps an existing graph with an empty root list.
    pub fn new(graph: Graph<V>) -> Self {
        Self {
            graph,
            roots: Vec::new(),
        }
    }

    /// Records a root vertex by key.
    pub fn add_root(&mut self, key: impl Into<VertexKey>) -> Result<(), WeftError> {
        let key = key.into();
        if !self.graph.has_vertex(&key) {
            return Err(WeftError::Graph(
                ErrorInfo::new("unknown-root", "root does not reference a graph vertex")
                    .with_context("key", key.to_string()),
            ));
        }
        self.roots.push(key);
        Ok(())
    }

    /// Returns the recorded roots in insertion order.
    pub fn roots(&self) -> &[VertexKey] {
        &self.roots
    }

    /// Returns the inner graph.
    pub fn graph(&self) -> &Graph<V> {
        &self.graph
    }

    /// Returns the inner graph mutably.
    pub fn graph_mut(&mut self) -> &mut Graph<V> {
        &mut self.graph
    }

    /// Unwraps the inner graph, discarding the roots.
    pub fn into_inner(self) -> Graph<V> {
        self.graph
    }
}
