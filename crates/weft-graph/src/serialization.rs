use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use weft_core::errors::{ErrorInfo, WeftError};
use weft_core::{SchemaVersion, VertexKey};

use crate::edge::{
    DirectedEdge, DirectedHyperedge, Edge, EdgeKind, UndirectedEdge, UndirectedHyperedge,
};
use crate::graph::{Graph, GraphConfig};
use crate::vertex::Vertex;

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes<V>(graph: &Graph<V>) -> Result<Vec<u8>, WeftError>
where
    V: Vertex + Serialize + Clone,
{
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| WeftError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes<V>(bytes: &[u8]) -> Result<Graph<V>, WeftError>
where
    V: Vertex + DeserializeOwned,
{
    let serializable: SerializableGraph<V> = bincode::deserialize(bytes)
        .map_err(|err| WeftError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json<V>(graph: &Graph<V>) -> Result<String, WeftError>
where
    V: Vertex + Serialize + Clone,
{
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| WeftError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json<V>(json: &str) -> Result<Graph<V>, WeftError>
where
    V: Vertex + DeserializeOwned,
{
    let serializable: SerializableGraph<V> = serde_json::from_str(json)
        .map_err(|err| WeftError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "V: Serialize", deserialize = "V: DeserializeOwned"))]
struct SerializableGraph<V> {
    schema_version: SchemaVersion,
    forbid_loops: bool,
    vertices: Vec<V>,
    edges: Vec<SerializableEdge>,
}

impl<V: Vertex> SerializableGraph<V> {
    fn from_graph(graph: &Graph<V>) -> Self
    where
        V: Serialize + Clone,
    {
        Self {
            schema_version: graph.config().schema_version,
            forbid_loops: graph.config().forbid_loops,
            vertices: graph
                .keys()
                .filter_map(|key| graph.vertex(key).cloned())
                .collect(),
            edges: graph.edges().map(SerializableEdge::from_edge).collect(),
        }
    }

    fn into_graph(self) -> Result<Graph<V>, WeftError> {
        let config = GraphConfig {
            forbid_loops: self.forbid_loops,
            schema_version: self.schema_version,
        };
        let mut graph = Graph::new(config);
        graph.add_vertices(self.vertices);
        for edge in self.edges {
            graph.add_edge(edge.into_edge()?)?;
        }
        Ok(graph)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SerializableEdge {
    kind: EdgeKind,
    lower: Vec<VertexKey>,
    upper: Vec<VertexKey>,
}

impl SerializableEdge {
    fn from_edge(edge: &Edge) -> Self {
        let cut = edge.cut();
        Self {
            kind: edge.kind(),
            lower: cut.lower().to_vec(),
            upper: cut.upper().to_vec(),
        }
    }

    fn into_edge(self) -> Result<Edge, WeftError> {
        match self.kind {
            EdgeKind::Undirected => match (self.lower.as_slice(), self.upper.as_slice()) {
                ([x, y], []) => Ok(UndirectedEdge::new(x.clone(), y.clone()).into()),
                _ => Err(malformed("undirected edges carry exactly two lower keys")),
            },
            EdgeKind::Directed => match (self.lower.as_slice(), self.upper.as_slice()) {
                ([tail], [head]) => Ok(DirectedEdge::new(tail.clone(), head.clone()).into()),
                _ => Err(malformed("directed edges carry one tail and one head")),
            },
            EdgeKind::UndirectedHyperedge => {
                if self.upper.is_empty() {
                    Ok(UndirectedHyperedge::new(self.lower).into())
                } else {
                    Err(malformed("undirected hyperedges carry no upper keys"))
                }
            }
            EdgeKind::DirectedHyperedge => {
                Ok(DirectedHyperedge::new(self.lower, self.upper).into())
            }
        }
    }
}

fn malformed(message: &str) -> WeftError {
    WeftError::Serde(ErrorInfo::new("malformed-edge", message))
}
