//! Build the sample graph and run every traversal and search on it.

use digraph_walk::*;

fn main() -> GraphResult<()> {
    // Create a new graph
    let mut builder = GraphBuilder::new();
    builder.vertices(1..=7u64);

    // Link them
    builder
        .edge(5, 3)
        .edge(6, 3)
        .edge(7, 1)
        .edge(4, 7)
        .edge(1, 2)
        .edge(7, 6)
        .edge(2, 4)
        .edge(3, 5)
        .edge(2, 3)
        .edge(4, 6);

    // Build the graph, failing loudly on a typo in the edge list
    let mut graph = builder.build_strict()?;

    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    println!("{}", graph);

    let bft: Vec<u64> = graph.bft(1).collect();
    println!("\nBreadth-first from 1: {:?}", bft);

    let dft: Vec<u64> = graph.dft(1).collect();
    println!("Depth-first from 1: {:?}", dft);

    let dft_recursive: Vec<u64> = graph.dft_recursive(1).collect();
    println!("Depth-first (recursive) from 1: {:?}", dft_recursive);

    for (name, path) in [
        ("bfs", graph.bfs(1, 6)),
        ("dfs", graph.dfs(1, 6)),
        ("dfs_recursive", graph.dfs_recursive(1, 6)),
    ] {
        match path {
            Some(path) => println!("{} 1 -> 6: {} ({} hops)", name, path, path.hops()),
            None => println!("{} 1 -> 6: no path", name),
        }
    }

    // Edges to unknown vertices are ignored
    graph.add_edge(1, 99);
    println!("\nNeighbors of 1 after add_edge(1, 99): {:?}", graph.get_neighbors(&1));
    println!("Neighbors of 99: {:?}", graph.get_neighbors(&99));

    Ok(())
}
