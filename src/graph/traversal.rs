//! Vertex-order traversals: breadth-first, depth-first and recursive depth-first.
//!
//! Each traversal yields every vertex reachable from the start exactly once.
//! Deduplication happens when a vertex is taken off the work list, not when
//! it is pushed, so a vertex may sit on the work list more than once.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;
use std::iter::FusedIterator;

use super::Graph;

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Breadth-first traversal from `starting_vertex`.
    ///
    /// Every vertex at distance `d` from the start is yielded before any
    /// vertex first reached at distance `d + 1`. An unknown start yields
    /// just itself.
    pub fn bft(&self, starting_vertex: V) -> Bft<'_, V> {
        Bft {
            graph: self,
            queue: VecDeque::from([starting_vertex]),
            discovered: HashSet::new(),
        }
    }

    /// Iterative depth-first traversal from `starting_vertex`.
    ///
    /// Uses a LIFO stack, so the neighbor pushed last is explored first.
    pub fn dft(&self, starting_vertex: V) -> Dft<'_, V> {
        Dft {
            graph: self,
            stack: vec![starting_vertex],
            discovered: HashSet::new(),
        }
    }

    /// Recursive depth-first traversal from `starting_vertex`.
    ///
    /// Each branch is walked to its end before backtracking to siblings.
    /// The order is computed up front by call-stack recursion whose depth is
    /// the longest undiscovered path from the start; on long chains (tens of
    /// thousands of vertices) this can overflow the thread stack. Use
    /// [`Graph::dft`] for graphs of that shape.
    pub fn dft_recursive(&self, starting_vertex: V) -> DftRecursive<V> {
        let mut discovered = HashSet::new();
        let mut order = Vec::new();
        dft_visit(self, starting_vertex, &mut discovered, &mut order);
        log::debug!("dft_recursive visited {} vertices", order.len());
        DftRecursive {
            order: order.into_iter(),
        }
    }
}

fn dft_visit<V: Eq + Hash + Clone>(
    graph: &Graph<V>,
    vertex: V,
    discovered: &mut HashSet<V>,
    order: &mut Vec<V>,
) {
    if !discovered.insert(vertex.clone()) {
        return;
    }
    order.push(vertex.clone());
    for neighbor in graph.get_neighbors(&vertex) {
        dft_visit(graph, neighbor.clone(), discovered, order);
    }
}

/// Lazy breadth-first traversal. Created by [`Graph::bft`].
#[derive(Debug, Clone)]
pub struct Bft<'g, V> {
    graph: &'g Graph<V>,
    queue: VecDeque<V>,
    discovered: HashSet<V>,
}

impl<V: Eq + Hash + Clone> Iterator for Bft<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        while let Some(current) = self.queue.pop_front() {
            if !self.discovered.insert(current.clone()) {
                continue;
            }
            self.queue
                .extend(self.graph.get_neighbors(&current).iter().cloned());
            return Some(current);
        }
        None
    }
}

impl<V: Eq + Hash + Clone> FusedIterator for Bft<'_, V> {}

/// Lazy iterative depth-first traversal. Created by [`Graph::dft`].
#[derive(Debug, Clone)]
pub struct Dft<'g, V> {
    graph: &'g Graph<V>,
    stack: Vec<V>,
    discovered: HashSet<V>,
}

impl<V: Eq + Hash + Clone> Iterator for Dft<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        while let Some(current) = self.stack.pop() {
            if !self.discovered.insert(current.clone()) {
                continue;
            }
            self.stack
                .extend(self.graph.get_neighbors(&current).iter().cloned());
            return Some(current);
        }
        None
    }
}

impl<V: Eq + Hash + Clone> FusedIterator for Dft<'_, V> {}

/// Recursive depth-first traversal order. Created by [`Graph::dft_recursive`].
#[derive(Debug, Clone)]
pub struct DftRecursive<V> {
    order: std::vec::IntoIter<V>,
}

impl<V> Iterator for DftRecursive<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.order.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<V> ExactSizeIterator for DftRecursive<V> {}

impl<V> FusedIterator for DftRecursive<V> {}
