//! Paths returned by the path searches.

use std::ops::Deref;

use serde::Serialize;

/// An ordered, non-empty walk through the graph, start vertex first.
///
/// A path holding only the start vertex is the zero-hop path found when
/// start and destination coincide. "No path" is expressed as `None` by the
/// searches, never as an empty `Path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path<V> {
    vertices: Vec<V>,
}

impl<V> Path<V> {
    /// A path consisting of the single vertex `start`.
    pub fn start(start: V) -> Self {
        Self {
            vertices: vec![start],
        }
    }

    /// The vertex this path ends at.
    ///
    /// Unlike the slice `last()` reached through `Deref`, this cannot fail.
    pub fn destination(&self) -> &V {
        // A path is never empty: every constructor seeds one vertex.
        &self.vertices[self.vertices.len() - 1]
    }

    /// The vertex this path starts at.
    pub fn origin(&self) -> &V {
        &self.vertices[0]
    }

    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.vertices.len() - 1
    }

    /// The vertices in walk order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Consume the path, returning its vertices.
    pub fn into_vec(self) -> Vec<V> {
        self.vertices
    }
}

impl<V: Clone> Path<V> {
    /// A copy of this path extended by one more vertex.
    pub fn extended(&self, next: V) -> Self {
        let mut vertices = Vec::with_capacity(self.vertices.len() + 1);
        vertices.extend_from_slice(&self.vertices);
        vertices.push(next);
        Self { vertices }
    }
}

impl<V> Deref for Path<V> {
    type Target = [V];

    fn deref(&self) -> &[V] {
        &self.vertices
    }
}

impl<V: PartialEq, const N: usize> PartialEq<[V; N]> for Path<V> {
    fn eq(&self, other: &[V; N]) -> bool {
        self.vertices == other
    }
}

impl<V: std::fmt::Display> std::fmt::Display for Path<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}
