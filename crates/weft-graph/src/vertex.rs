use serde::{Deserialize, Serialize};
use weft_core::VertexKey;

/// Accessor contract for anything that can live in a graph's vertex map.
///
/// Graphs only ever compare vertices by key, so heterogeneous payload types
/// can coexist along a traversal as long as each one yields a unique key.
pub trait Vertex {
    /// Returns the key identifying this vertex across the dataset.
    fn key(&self) -> VertexKey;
}

impl Vertex for VertexKey {
    fn key(&self) -> VertexKey {
        self.clone()
    }
}

/// Vertex whose payload is the key itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyVertex(VertexKey);

impl KeyVertex {
    /// Creates a vertex from anything convertible into a key.
    pub fn new(key: impl Into<VertexKey>) -> Self {
        Self(key.into())
    }
}

impl Vertex for KeyVertex {
    fn key(&self) -> VertexKey {
        self.0.clone()
    }
}

/// Vertex carrying an arbitrary payload under an explicit key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataVertex<T> {
    key: VertexKey,
    data: T,
}

impl<T> DataVertex<T> {
    /// Creates a vertex from a key and its payload.
    pub fn new(key: impl Into<VertexKey>, data: T) -> Self {
        Self {
            key: key.into(),
            data,
        }
    }

    /// Returns the payload.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns the payload mutably.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Consumes the vertex and returns the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> Vertex for DataVertex<T> {
    fn key(&self) -> VertexKey {
        self.key.clone()
    }
}
