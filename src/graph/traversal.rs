//! Iterative depth-first traversal over a [`Graph`].
//!
//! The traversal keeps an explicit work stack and a [`VisitedSet`] sized to
//! the vertex count, so deep graphs cannot exhaust the call stack and
//! membership checks stay \(O(1)\) per resolved vertex.

use crate::graph::access::VisitedSet;
use crate::graph::Graph;

/// A lazy depth-first iterator over the vertices reachable from a start vertex.
///
/// Yields `start` first, then every other reachable vertex exactly once, in
/// the order it is first visited. Neighbors are pushed in insertion order and
/// popped last-in first-out, so at each level the most recently added
/// neighbor is visited first.
///
/// The first item is the caller's `start` reference itself. In a keyed graph
/// whose comparator treats distinct values as equal, that can differ from the
/// stored vertex value: starting from `"oslo"` yields `"oslo"`, not `"Oslo"`.
/// Every later item is borrowed from the graph's adjacency lists.
///
/// Expansion follows [`Graph::get_dfs_stack`] order, but a neighbor is
/// skipped when it is already discovered (visited bitset, or the set of
/// values outside the vertex set) rather than when it is already on the
/// stack. A vertex can therefore sit on the stack more than once and is
/// skipped when popped again.
///
/// Edge targets that are not vertices of the graph are yielded once when
/// first popped and never expanded, since they own no adjacency list.
pub struct Dfs<'a, T> {
    graph: &'a Graph<T>,
    visited: VisitedSet,
    /// Discovered values that do not resolve to a vertex position.
    strays: Vec<&'a T>,
    stack: Vec<&'a T>,
    pending_start: Option<&'a T>,
}

impl<'a, T> Dfs<'a, T> {
    /// Starts a traversal at `start`.
    ///
    /// If `start` is not a vertex of `graph` the iterator is empty.
    pub fn new(graph: &'a Graph<T>, start: &'a T) -> Self {
        let mut dfs = Self {
            graph,
            visited: VisitedSet::new(graph.vertex_count()),
            strays: Vec::new(),
            stack: Vec::new(),
            pending_start: None,
        };
        debug_assert_eq!(dfs.visited.len(), graph.vertex_count());

        if let Some(position) = graph.position_of(start) {
            dfs.visited.try_visit(position);
            dfs.pending_start = Some(start);
            dfs.push_unvisited_neighbors(position);
        }
        dfs
    }

    /// Number of vertices discovered so far, including ones still queued for yielding.
    pub fn visited_count(&self) -> usize {
        self.visited.count() + self.strays.len()
    }

    fn push_unvisited_neighbors(&mut self, position: usize) {
        let graph = self.graph;
        for neighbor in graph.neighbors(position) {
            if !self.is_discovered(neighbor) {
                self.stack.push(neighbor);
            }
        }
    }

    fn is_discovered(&self, value: &T) -> bool {
        match self.graph.position_of(value) {
            Some(position) => self.visited.is_visited(position),
            None => {
                let equality = self.graph.comparator();
                self.strays.iter().any(|stray| equality.eq(stray, value))
            }
        }
    }
}

impl<'a, T> Iterator for Dfs<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.pending_start.take() {
            return Some(start);
        }

        while let Some(value) = self.stack.pop() {
            match self.graph.position_of(value) {
                Some(position) => {
                    if !self.visited.try_visit(position) {
                        continue;
                    }
                    #[cfg(feature = "tracing")]
                    tracing::trace!(position, "dfs visit");
                    self.push_unvisited_neighbors(position);
                }
                None => {
                    if self.is_discovered(value) {
                        continue;
                    }
                    #[cfg(feature = "tracing")]
                    tracing::trace!("dfs reached a value outside the vertex set");
                    self.strays.push(value);
                }
            }
            return Some(value);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Values outside the vertex set make the upper bound depend on unexpanded lists.
        (usize::from(self.pending_start.is_some()), None)
    }
}

impl<T> core::iter::FusedIterator for Dfs<'_, T> {}
