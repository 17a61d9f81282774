//! CLI entry point for the `dgw` command-line tool.

use std::io::{self, Write};
use std::process;

use clap::{Parser, Subcommand};

use digraph_walk::cli::commands::{self, Search, Traversal};
use digraph_walk::types::{parse_vertex, EdgeSpec, GraphError, GraphResult};

#[derive(Parser)]
#[command(
    name = "dgw",
    about = "digraph-walk CLI — breadth-first and depth-first walks over a directed graph"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Directed edge as U:V (repeatable). Both endpoints become vertices.
    #[arg(long = "edge", global = true)]
    edges: Vec<String>,

    /// Isolated vertex to add (repeatable)
    #[arg(long = "vertex", global = true)]
    vertices: Vec<String>,

    /// Reject edges whose endpoints were not given with --vertex
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency map of the graph
    Show,
    /// Breadth-first traversal from a vertex
    Bft {
        /// Starting vertex
        start: u64,
    },
    /// Depth-first traversal from a vertex
    Dft {
        /// Starting vertex
        start: u64,
        /// Use the recursive implementation
        #[arg(long)]
        recursive: bool,
    },
    /// Shortest path between two vertices
    Bfs {
        /// Starting vertex
        start: u64,
        /// Destination vertex
        destination: u64,
    },
    /// Depth-first path between two vertices
    Dfs {
        /// Starting vertex
        start: u64,
        /// Destination vertex
        destination: u64,
        /// Use the recursive implementation
        #[arg(long)]
        recursive: bool,
    },
    /// Run every traversal and search on the graph
    Demo {
        /// Starting vertex
        #[arg(long, default_value = "1")]
        start: u64,
        /// Destination vertex for the searches
        #[arg(long, default_value = "6")]
        destination: u64,
    },
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn parse_graph_args(
    edges: &[String],
    vertices: &[String],
) -> GraphResult<(Vec<EdgeSpec>, Vec<u64>)> {
    let edges = edges
        .iter()
        .map(|s| s.parse::<EdgeSpec>())
        .collect::<GraphResult<Vec<_>>>()?;
    let vertices = vertices
        .iter()
        .map(|s| parse_vertex(s))
        .collect::<GraphResult<Vec<_>>>()?;
    Ok((edges, vertices))
}

fn run(cli: Cli) -> GraphResult<()> {
    let json = cli.format == "json";
    let (edges, vertices) = parse_graph_args(&cli.edges, &cli.vertices)?;
    let graph = commands::build_graph(&edges, &vertices, cli.strict)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Show => commands::cmd_show(&graph, json, &mut out)?,
        Commands::Bft { start } => {
            commands::cmd_traverse(&graph, Traversal::Bft, start, json, &mut out)?
        }
        Commands::Dft { start, recursive } => {
            let strategy = if recursive {
                Traversal::DftRecursive
            } else {
                Traversal::Dft
            };
            commands::cmd_traverse(&graph, strategy, start, json, &mut out)?
        }
        Commands::Bfs { start, destination } => {
            commands::cmd_search(&graph, Search::Bfs, start, destination, json, &mut out)?
        }
        Commands::Dfs {
            start,
            destination,
            recursive,
        } => {
            let strategy = if recursive {
                Search::DfsRecursive
            } else {
                Search::Dfs
            };
            commands::cmd_search(&graph, strategy, start, destination, json, &mut out)?
        }
        Commands::Demo { start, destination } => {
            commands::cmd_demo(&graph, start, destination, json, &mut out)?
        }
    }

    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) | GraphError::Json(_) => 1,
            GraphError::InvalidEdgeSpec(_) | GraphError::InvalidVertex(_) => 3,
            GraphError::VertexNotFound(_) => 4,
        };
        process::exit(code);
    }
}
