//! Fluent API for building Graph instances.

use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{GraphResult, SAMPLE_EDGES, SAMPLE_VERTICES};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Vertices and edges are recorded in call order and applied on `build`, so
/// an edge may be declared before its endpoints.
pub struct GraphBuilder<V> {
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: Eq + Hash + Clone + Debug> GraphBuilder<V> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex.
    pub fn vertex(&mut self, vertex_id: V) -> &mut Self {
        self.vertices.push(vertex_id);
        self
    }

    /// Add several vertices.
    pub fn vertices<I: IntoIterator<Item = V>>(&mut self, vertex_ids: I) -> &mut Self {
        self.vertices.extend(vertex_ids);
        self
    }

    /// Add a directed edge between two vertices.
    pub fn edge(&mut self, source: V, target: V) -> &mut Self {
        self.edges.push((source, target));
        self
    }

    /// Add several directed edges.
    pub fn edges<I: IntoIterator<Item = (V, V)>>(&mut self, edges: I) -> &mut Self {
        self.edges.extend(edges);
        self
    }

    /// Build the graph. Edges whose endpoints were never declared are dropped.
    pub fn build(self) -> Graph<V> {
        let mut graph = Graph::with_capacity(self.vertices.len());
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for (source, target) in self.edges {
            if !graph.contains_vertex(&source) || !graph.contains_vertex(&target) {
                log::debug!("Dropping edge {:?} -> {:?}: endpoint not declared", source, target);
                continue;
            }
            graph.add_edge(source, target);
        }
        graph
    }

    /// Build the graph, failing on the first edge with an undeclared endpoint.
    pub fn build_strict(self) -> GraphResult<Graph<V>> {
        let mut graph = Graph::with_capacity(self.vertices.len());
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for (source, target) in self.edges {
            graph.try_add_edge(source, target)?;
        }
        Ok(graph)
    }
}

impl<V: Eq + Hash + Clone + Debug> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// The seven-vertex sample graph used by the demo and the CLI.
///
/// ```text
/// {1: {2}, 2: {3, 4}, 3: {5}, 4: {6, 7}, 5: {3}, 6: {3}, 7: {1, 6}}
/// ```
pub fn sample_graph() -> Graph<u64> {
    let mut builder = GraphBuilder::new();
    builder.vertices(SAMPLE_VERTICES).edges(SAMPLE_EDGES);
    builder.build()
}
