//! CLI command implementations.
//!
//! Every command renders to the given writer, either as plain text or as
//! pretty-printed JSON.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::graph::{sample_graph, Graph, GraphBuilder};
use crate::types::{EdgeSpec, GraphResult, Path, DEFAULT_VERTEX_CAPACITY};

/// Vertex-order traversals exposed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Breadth-first traversal.
    Bft,
    /// Iterative depth-first traversal.
    Dft,
    /// Recursive depth-first traversal.
    DftRecursive,
}

impl Traversal {
    /// Return a human-readable name for this traversal.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bft => "bft",
            Self::Dft => "dft",
            Self::DftRecursive => "dft_recursive",
        }
    }
}

/// Path searches exposed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Search {
    /// Breadth-first (shortest) path search.
    Bfs,
    /// Iterative depth-first path search.
    Dfs,
    /// Recursive depth-first path search.
    DfsRecursive,
}

impl Search {
    /// Return a human-readable name for this search.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::DfsRecursive => "dfs_recursive",
        }
    }
}

/// JSON shape of a traversal.
#[derive(Debug, Serialize)]
pub struct TraversalReport {
    pub strategy: Traversal,
    pub start: u64,
    pub order: Vec<u64>,
}

/// JSON shape of a path search. `path` and `hops` are null when no path exists.
#[derive(Debug, Serialize)]
pub struct PathReport {
    pub strategy: Search,
    pub start: u64,
    pub destination: u64,
    pub path: Option<Path<u64>>,
    pub hops: Option<usize>,
}

/// JSON shape of the `show` command.
#[derive(Debug, Serialize)]
pub struct GraphReport {
    pub vertices: usize,
    pub edges: usize,
    pub adjacency: BTreeMap<u64, Vec<u64>>,
}

/// Build the graph described on the command line.
///
/// With neither edges nor vertices given, the sample graph is returned.
/// Otherwise each edge adds both of its endpoints as vertices, unless
/// `strict` is set: then every endpoint must be listed in `vertices` and the
/// first undeclared one fails with `GraphError::VertexNotFound`.
pub fn build_graph(
    edges: &[EdgeSpec],
    vertices: &[u64],
    strict: bool,
) -> GraphResult<Graph<u64>> {
    if edges.is_empty() && vertices.is_empty() {
        log::debug!("No graph given, using the sample graph");
        return Ok(sample_graph());
    }

    let graph = if strict {
        let mut builder = GraphBuilder::new();
        builder
            .vertices(vertices.iter().copied())
            .edges(edges.iter().map(EdgeSpec::pair));
        builder.build_strict()?
    } else {
        let mut graph = Graph::with_capacity(DEFAULT_VERTEX_CAPACITY.max(vertices.len()));
        for &vertex in vertices {
            graph.add_vertex(vertex);
        }
        graph.extend(edges.iter().map(EdgeSpec::pair));
        graph
    };
    log::debug!(
        "Built graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Print the adjacency map with vertex and edge counts.
pub fn cmd_show<W: Write>(graph: &Graph<u64>, json: bool, out: &mut W) -> GraphResult<()> {
    if json {
        let adjacency = graph
            .vertices()
            .map(|&vertex| {
                let mut neighbors: Vec<u64> =
                    graph.get_neighbors(&vertex).iter().copied().collect();
                neighbors.sort_unstable();
                (vertex, neighbors)
            })
            .collect();
        let report = GraphReport {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            adjacency,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "{}", graph)?;
        writeln!(out, "Vertices: {}", graph.vertex_count())?;
        writeln!(out, "Edges: {}", graph.edge_count())?;
    }
    Ok(())
}

/// Run one of the vertex-order traversals.
pub fn cmd_traverse<W: Write>(
    graph: &Graph<u64>,
    strategy: Traversal,
    start: u64,
    json: bool,
    out: &mut W,
) -> GraphResult<()> {
    let order: Vec<u64> = match strategy {
        Traversal::Bft => graph.bft(start).collect(),
        Traversal::Dft => graph.dft(start).collect(),
        Traversal::DftRecursive => graph.dft_recursive(start).collect(),
    };

    if json {
        let report = TraversalReport {
            strategy,
            start,
            order,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        for vertex in order {
            writeln!(out, "{}", vertex)?;
        }
    }
    Ok(())
}

/// Run one of the path searches.
pub fn cmd_search<W: Write>(
    graph: &Graph<u64>,
    strategy: Search,
    start: u64,
    destination: u64,
    json: bool,
    out: &mut W,
) -> GraphResult<()> {
    let path = match strategy {
        Search::Bfs => graph.bfs(start, destination),
        Search::Dfs => graph.dfs(start, destination),
        Search::DfsRecursive => graph.dfs_recursive(start, destination),
    };

    if json {
        let report = PathReport {
            strategy,
            start,
            destination,
            hops: path.as_ref().map(Path::hops),
            path,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        match path {
            Some(path) => writeln!(out, "{}", path)?,
            None => writeln!(out, "no path from {} to {}", start, destination)?,
        }
    }
    Ok(())
}

/// Run every operation against `graph`, labelling each section.
pub fn cmd_demo<W: Write>(
    graph: &Graph<u64>,
    start: u64,
    destination: u64,
    json: bool,
    out: &mut W,
) -> GraphResult<()> {
    if !json {
        writeln!(out, "== graph")?;
    }
    cmd_show(graph, json, out)?;

    for strategy in [Traversal::Bft, Traversal::Dft, Traversal::DftRecursive] {
        if !json {
            writeln!(out, "== {} from {}", strategy.name(), start)?;
        }
        cmd_traverse(graph, strategy, start, json, out)?;
    }

    for strategy in [Search::Bfs, Search::Dfs, Search::DfsRecursive] {
        if !json {
            writeln!(
                out,
                "== {} from {} to {}",
                strategy.name(),
                start,
                destination
            )?;
        }
        cmd_search(graph, strategy, start, destination, json, out)?;
    }
    Ok(())
}
