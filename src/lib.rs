//! digraph-walk — an in-memory directed graph with classical traversals.
//!
//! Vertices map to unordered sets of outgoing neighbors. The graph offers
//! breadth-first and depth-first traversal (iterative and recursive) and
//! path search in the same three flavours.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{sample_graph, Bft, Dft, DftRecursive, Graph, GraphBuilder};
pub use types::{
    parse_vertex, EdgeSpec, GraphError, GraphResult, Path, DEFAULT_VERTEX_CAPACITY, SAMPLE_EDGES,
    SAMPLE_VERTICES,
};
