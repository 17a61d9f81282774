//! Shared types for the digraph-walk library.

pub mod edge;
pub mod error;
pub mod path;

pub use edge::{parse_vertex, EdgeSpec};
pub use error::{GraphError, GraphResult};
pub use path::Path;

/// Initial capacity of the vertex map for graphs built through the CLI.
pub const DEFAULT_VERTEX_CAPACITY: usize = 16;

/// Directed edges of the sample graph over vertices 1..=7.
pub const SAMPLE_EDGES: [(u64, u64); 10] = [
    (5, 3),
    (6, 3),
    (7, 1),
    (4, 7),
    (1, 2),
    (7, 6),
    (2, 4),
    (3, 5),
    (2, 3),
    (4, 6),
];

/// Vertices of the sample graph.
pub const SAMPLE_VERTICES: std::ops::RangeInclusive<u64> = 1..=7;
