//! Textual edge specifications, as accepted by the `dgw` CLI.

use std::str::FromStr;

use super::error::GraphError;

/// Separators accepted between the two endpoints of an edge spec.
const SEPARATORS: [&str; 3] = ["->", ":", ","];

/// A directed edge `source -> target` between two integer vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeSpec {
    /// Origin of the edge.
    pub source: u64,
    /// Destination of the edge.
    pub target: u64,
}

impl EdgeSpec {
    /// Create a new edge spec.
    pub fn new(source: u64, target: u64) -> Self {
        Self { source, target }
    }

    /// The edge as a `(source, target)` pair.
    pub fn pair(&self) -> (u64, u64) {
        (self.source, self.target)
    }
}

impl FromStr for EdgeSpec {
    type Err = GraphError;

    /// Parse `U:V`, `U,V` or `U->V`. Whitespace around either endpoint is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (left, right) = SEPARATORS
            .iter()
            .find_map(|sep| s.split_once(sep))
            .ok_or_else(|| GraphError::InvalidEdgeSpec(s.to_string()))?;

        let source = left
            .trim()
            .parse()
            .map_err(|_| GraphError::InvalidEdgeSpec(s.to_string()))?;
        let target = right
            .trim()
            .parse()
            .map_err(|_| GraphError::InvalidEdgeSpec(s.to_string()))?;

        Ok(Self { source, target })
    }
}

/// Parse a vertex id given on the command line.
pub fn parse_vertex(s: &str) -> Result<u64, GraphError> {
    s.trim()
        .parse()
        .map_err(|_| GraphError::InvalidVertex(s.to_string()))
}
