//! Core graph structure — vertices mapped to their outgoing neighbor sets.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::types::{GraphError, GraphResult};

/// A directed graph stored as an adjacency map: vertex -> set of neighbors.
///
/// Vertices are opaque identifiers. Neighbor sets are unordered, so any
/// traversal order among siblings is unspecified.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// Adjacency map: vertex -> outgoing neighbors.
    vertices: HashMap<V, HashSet<V>>,
    /// Number of directed edges across all neighbor sets.
    edge_count: usize,
    /// Returned by `get_neighbors` for vertices that were never added.
    no_neighbors: HashSet<V>,
}

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            edge_count: 0,
            no_neighbors: HashSet::new(),
        }
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity(capacity),
            edge_count: 0,
            no_neighbors: HashSet::new(),
        }
    }

    /// Add a vertex. Re-adding an existing vertex keeps its edges.
    pub fn add_vertex(&mut self, vertex_id: V) {
        self.vertices.entry(vertex_id).or_default();
    }

    /// Add a directed edge `v1 -> v2`.
    ///
    /// Both endpoints must already be vertices; otherwise the call does
    /// nothing. Use [`Graph::try_add_edge`] to be told about the missing one.
    pub fn add_edge(&mut self, v1: V, v2: V) {
        if !self.vertices.contains_key(&v2) {
            log::debug!("add_edge: destination is not a vertex, edge dropped");
            return;
        }
        match self.vertices.get_mut(&v1) {
            Some(neighbors) => {
                if neighbors.insert(v2) {
                    self.edge_count += 1;
                }
            }
            None => log::debug!("add_edge: source is not a vertex, edge dropped"),
        }
    }

    /// Strict variant of [`Graph::add_edge`].
    ///
    /// Returns `Ok(true)` if the edge was inserted, `Ok(false)` if it was
    /// already present, and `GraphError::VertexNotFound` if an endpoint is
    /// missing (the destination is checked first).
    pub fn try_add_edge(&mut self, v1: V, v2: V) -> GraphResult<bool>
    where
        V: fmt::Debug,
    {
        if !self.vertices.contains_key(&v2) {
            return Err(GraphError::VertexNotFound(format!("{:?}", v2)));
        }
        let neighbors = self
            .vertices
            .get_mut(&v1)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", v1)))?;
        let inserted = neighbors.insert(v2);
        if inserted {
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    /// Outgoing neighbors of `vertex_id`; empty for an unknown vertex.
    pub fn get_neighbors(&self, vertex_id: &V) -> &HashSet<V> {
        self.vertices.get(vertex_id).unwrap_or(&self.no_neighbors)
    }

    /// Whether `vertex_id` has been added.
    pub fn contains_vertex(&self, vertex_id: &V) -> bool {
        self.vertices.contains_key(vertex_id)
    }

    /// Whether the directed edge `v1 -> v2` exists.
    pub fn has_edge(&self, v1: &V, v2: &V) -> bool {
        self.get_neighbors(v1).contains(v2)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.keys()
    }

    /// All directed edges as `(source, target)` pairs, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.vertices
            .iter()
            .flat_map(|(source, targets)| targets.iter().map(move |target| (source, target)))
    }
}

impl<V: Eq + Hash + Clone> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Adds both endpoints of each pair as vertices, then the edge.
impl<V: Eq + Hash + Clone> Extend<(V, V)> for Graph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        for (source, target) in iter {
            self.add_vertex(source.clone());
            self.add_vertex(target.clone());
            self.add_edge(source, target);
        }
    }
}

impl<V: Eq + Hash + Clone> FromIterator<(V, V)> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

/// Renders the adjacency map as `{1: {2}, 2: {3, 4}}`, sorted for stable output.
impl<V: Hash + Ord + fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&V> = self.vertices.keys().collect();
        keys.sort();

        write!(f, "{{")?;
        for (i, vertex) in keys.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: ", vertex)?;

            let mut neighbors: Vec<&V> = self.vertices[vertex].iter().collect();
            neighbors.sort();
            write!(f, "{{")?;
            for (j, neighbor) in neighbors.into_iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", neighbor)?;
            }
            write!(f, "}}")?;
        }
        write!(f, "}}")
    }
}
