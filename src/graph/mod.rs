//! In-memory directed graph and its traversal algorithms.

pub mod builder;
pub mod digraph;
pub mod search;
pub mod traversal;

pub use builder::{sample_graph, GraphBuilder};
pub use digraph::Graph;
pub use traversal::{Bft, Dft, DftRecursive};
