//! Phase 3 tests: Breadth-first and depth-first path searches.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use digraph_walk::graph::{sample_graph, Graph};
use digraph_walk::types::Path;

// ==================== Helper ====================

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_graph(seed: u64, n: u64, degree: usize) -> Graph<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for _ in 0..(n as usize * degree) {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        graph.add_edge(u, v);
    }
    graph
}

/// Hop distance from `start` to every reachable vertex.
fn distances(graph: &Graph<u64>, start: u64) -> HashMap<u64, usize> {
    let mut dist = HashMap::from([(start, 0)]);
    let mut frontier = VecDeque::from([start]);
    while let Some(u) = frontier.pop_front() {
        let d = dist[&u];
        for &v in graph.get_neighbors(&u) {
            if !dist.contains_key(&v) {
                dist.insert(v, d + 1);
                frontier.push_back(v);
            }
        }
    }
    dist
}

/// Assert the path starts and ends where asked and walks only real edges.
fn assert_valid_path(graph: &Graph<u64>, path: &Path<u64>, start: u64, destination: u64) {
    assert_eq!(path.origin(), &start);
    assert_eq!(path.destination(), &destination);
    for pair in path.windows(2) {
        assert!(
            graph.has_edge(&pair[0], &pair[1]),
            "Path {} uses missing edge {} -> {}",
            path,
            pair[0],
            pair[1]
        );
    }
}

/// Vertex that records its id every time it is cloned.
struct Tracked {
    id: u64,
    clones: Rc<RefCell<Vec<u64>>>,
}

impl Tracked {
    fn new(id: u64, clones: &Rc<RefCell<Vec<u64>>>) -> Self {
        Self {
            id,
            clones: Rc::clone(clones),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.clones.borrow_mut().push(self.id);
        Self::new(self.id, &self.clones)
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tracked {}

impl Hash for Tracked {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.id)
    }
}

// ==================== Breadth-First Search Tests ====================

#[test]
fn test_bfs_sample_shortest_path() {
    init_logger();
    let graph = sample_graph();
    let path = graph.bfs(1, 6).unwrap();
    assert_eq!(path, [1, 2, 4, 6]);
    assert_eq!(path.hops(), 3);
}

#[test]
fn test_bfs_same_start_and_destination() {
    let graph = sample_graph();
    let path = graph.bfs(3, 3).unwrap();
    assert_eq!(path, [3]);
}

#[test]
fn test_bfs_not_found() {
    let mut graph = sample_graph();
    graph.add_vertex(8);
    assert!(graph.bfs(1, 8).is_none());
    assert!(graph.bfs(3, 1).is_none());
}

#[test]
fn test_bfs_unknown_vertices() {
    let graph = sample_graph();
    assert!(graph.bfs(99, 1).is_none());
    assert!(graph.bfs(1, 99).is_none());
    assert_eq!(graph.bfs(99, 99).map(Path::into_vec), Some(vec![99]));
}

#[test]
fn test_bfs_prefers_fewer_hops() {
    // Long way round: 0 -> 1 -> 2 -> 3 -> 4, shortcut 0 -> 5 -> 4.
    let graph: Graph<u64> = [(0, 1), (1, 2), (2, 3), (3, 4), (0, 5), (5, 4)]
        .into_iter()
        .collect();
    assert_eq!(graph.bfs(0, 4).map(Path::into_vec), Some(vec![0, 5, 4]));
}

#[test]
fn test_bfs_random_graphs_shortest() {
    for seed in 0..20 {
        let graph = random_graph(seed, 30, 2);
        let dist = distances(&graph, 0);
        for destination in 0..30 {
            match (graph.bfs(0, destination), dist.get(&destination)) {
                (Some(path), Some(&d)) => {
                    assert_valid_path(&graph, &path, 0, destination);
                    assert_eq!(path.hops(), d, "Seed {}: bfs not shortest", seed);
                }
                (None, None) => {}
                (found, expected) => panic!(
                    "Seed {}: bfs(0, {}) returned {:?}, expected distance {:?}",
                    seed, destination, found, expected
                ),
            }
        }
    }
}

// ==================== Depth-First Search Tests ====================

#[test]
fn test_dfs_sample_path() {
    let graph = sample_graph();
    let path = graph.dfs(1, 6).unwrap();
    assert!(
        path == [1, 2, 4, 6] || path == [1, 2, 4, 7, 6],
        "Unexpected dfs path {:?}",
        path
    );
}

#[test]
fn test_dfs_recursive_sample_path() {
    let graph = sample_graph();
    let path = graph.dfs_recursive(1, 6).unwrap();
    assert!(
        path == [1, 2, 4, 6] || path == [1, 2, 4, 7, 6],
        "Unexpected dfs_recursive path {:?}",
        path
    );
}

#[test]
fn test_dfs_same_start_and_destination() {
    let graph = sample_graph();
    assert_eq!(graph.dfs(5, 5).map(Path::into_vec), Some(vec![5]));
    assert_eq!(graph.dfs_recursive(5, 5).map(Path::into_vec), Some(vec![5]));
}

#[test]
fn test_dfs_not_found() {
    let graph = sample_graph();
    assert!(graph.dfs(6, 1).is_none());
    assert!(graph.dfs_recursive(6, 1).is_none());
    assert!(graph.dfs(99, 1).is_none());
    assert!(graph.dfs_recursive(99, 1).is_none());
}

#[test]
fn test_dfs_recursive_unknown_start_is_destination() {
    let graph = sample_graph();
    assert_eq!(
        graph.dfs_recursive(99, 99).map(Path::into_vec),
        Some(vec![99])
    );
}

#[test]
fn test_dfs_cycle_terminates() {
    let mut graph: Graph<u64> = [(1, 2), (2, 3), (3, 1)].into_iter().collect();
    graph.add_vertex(4);

    assert!(graph.dfs(1, 4).is_none());
    assert!(graph.dfs_recursive(1, 4).is_none());
    assert_eq!(graph.dfs(1, 3).map(Path::into_vec), Some(vec![1, 2, 3]));
    assert_eq!(
        graph.dfs_recursive(1, 3).map(Path::into_vec),
        Some(vec![1, 2, 3])
    );
}

#[test]
fn test_dfs_recursive_stops_at_first_found_branch() {
    // Diamond 0 -> {1, 2} -> 3: whichever branch is tried first reaches 3,
    // so the other one must never be entered.
    let clones = Rc::new(RefCell::new(Vec::new()));
    let v = |id| Tracked::new(id, &clones);
    let mut graph = Graph::new();
    for id in 0..4 {
        graph.add_vertex(v(id));
    }
    graph.add_edge(v(0), v(1));
    graph.add_edge(v(0), v(2));
    graph.add_edge(v(1), v(3));
    graph.add_edge(v(2), v(3));
    clones.borrow_mut().clear();

    let path = graph.dfs_recursive(v(0), v(3)).unwrap();
    assert_eq!(path.hops(), 2);

    let touched = clones.borrow();
    let entered: Vec<u64> = [1, 2]
        .into_iter()
        .filter(|id| touched.contains(id))
        .collect();
    assert_eq!(entered.len(), 1, "Both branches visited: {:?}", touched);
    assert_eq!(path.vertices()[1].id, entered[0]);
}

#[test]
fn test_dfs_random_graphs_valid_paths() {
    init_logger();
    for seed in 0..20 {
        let graph = random_graph(seed, 30, 2);
        let dist = distances(&graph, 0);
        for destination in 0..30 {
            let reachable = dist.contains_key(&destination);

            let path = graph.dfs(0, destination);
            assert_eq!(path.is_some(), reachable, "Seed {}: dfs", seed);
            if let Some(path) = path {
                assert_valid_path(&graph, &path, 0, destination);
            }

            let path = graph.dfs_recursive(0, destination);
            assert_eq!(path.is_some(), reachable, "Seed {}: dfs_recursive", seed);
            if let Some(path) = path {
                assert_valid_path(&graph, &path, 0, destination);
            }
        }
    }
}

// ==================== Repeatability Tests ====================

#[test]
fn test_bfs_repeatable_length() {
    let graph = random_graph(11, 40, 3);
    for destination in 0..40 {
        let first = graph.bfs(0, destination).map(|p| p.hops());
        let second = graph.bfs(0, destination).map(|p| p.hops());
        assert_eq!(first, second);
    }
}

#[test]
fn test_generic_vertices() {
    let mut graph = Graph::new();
    for city in ["oslo", "bergen", "tromso"] {
        graph.add_vertex(city);
    }
    graph.add_edge("oslo", "bergen");
    graph.add_edge("bergen", "tromso");

    assert_eq!(
        graph.bfs("oslo", "tromso").map(Path::into_vec),
        Some(vec!["oslo", "bergen", "tromso"])
    );
    assert!(graph.dfs("tromso", "oslo").is_none());
}
