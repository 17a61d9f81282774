//! Path searches: breadth-first, depth-first and recursive depth-first.
//!
//! All three return `None` when the destination is unreachable, and
//! `Some` of the one-vertex path when start and destination are equal.

use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::Path;

use super::Graph;

impl<V: Eq + Hash + Clone + Debug> Graph<V> {
    /// Shortest path by hop count from `starting_vertex` to `destination_vertex`.
    ///
    /// The work queue holds whole paths. Since paths leave the queue in order
    /// of increasing length, the first one ending at the destination is a
    /// shortest one.
    pub fn bfs(&self, starting_vertex: V, destination_vertex: V) -> Option<Path<V>> {
        let mut queue = VecDeque::from([Path::start(starting_vertex)]);
        let mut visited: HashSet<V> = HashSet::new();

        while let Some(current_path) = queue.pop_front() {
            let current = current_path.destination();
            log::trace!("bfs: current path {:?}", current_path.vertices());
            if *current == destination_vertex {
                log::debug!("bfs: found path of {} hops", current_path.hops());
                return Some(current_path);
            }
            if visited.insert(current.clone()) {
                for neighbor in self.get_neighbors(current) {
                    queue.push_back(current_path.extended(neighbor.clone()));
                }
            }
        }

        log::debug!("bfs: {:?} not reachable", destination_vertex);
        None
    }

    /// Some path from `starting_vertex` to `destination_vertex`, found depth-first.
    ///
    /// Not necessarily the shortest.
    pub fn dfs(&self, starting_vertex: V, destination_vertex: V) -> Option<Path<V>> {
        let mut stack = vec![Path::start(starting_vertex)];
        let mut discovered: HashSet<V> = HashSet::new();

        while let Some(current_path) = stack.pop() {
            let current = current_path.destination();
            log::trace!("dfs: current path {:?}", current_path.vertices());
            if *current == destination_vertex {
                log::debug!("dfs: found path of {} hops", current_path.hops());
                return Some(current_path);
            }
            if discovered.insert(current.clone()) {
                for neighbor in self.get_neighbors(current) {
                    stack.push(current_path.extended(neighbor.clone()));
                }
            }
        }

        log::debug!("dfs: {:?} not reachable", destination_vertex);
        None
    }

    /// Some path from `starting_vertex` to `destination_vertex`, found by
    /// recursive descent.
    ///
    /// Stops at the first neighbor whose sub-search succeeds: remaining
    /// siblings are never visited, since `find_map` ends the neighbor loop
    /// on the first `Some`. Recursion depth
    /// is bounded by the length of the explored branch, with the same stack
    /// limit as [`Graph::dft_recursive`].
    pub fn dfs_recursive(&self, starting_vertex: V, destination_vertex: V) -> Option<Path<V>> {
        let mut discovered = HashSet::new();
        let found = dfs_visit(
            self,
            Path::start(starting_vertex),
            &destination_vertex,
            &mut discovered,
        );
        match &found {
            Some(path) => log::debug!("dfs_recursive: found path of {} hops", path.hops()),
            None => log::debug!("dfs_recursive: {:?} not reachable", destination_vertex),
        }
        found
    }
}

fn dfs_visit<V: Eq + Hash + Clone>(
    graph: &Graph<V>,
    path: Path<V>,
    destination: &V,
    discovered: &mut HashSet<V>,
) -> Option<Path<V>> {
    let last = path.destination();
    if !discovered.insert(last.clone()) {
        return None;
    }
    if last == destination {
        return Some(path);
    }

    graph.get_neighbors(last).iter().find_map(|neighbor| {
        dfs_visit(
            graph,
            path.extended(neighbor.clone()),
            destination,
            discovered,
        )
    })
}
