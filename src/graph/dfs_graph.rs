//! An adjacency-list graph with depth-first search.
//!
//! Every vertex owns one [`SinglyLinkedList`] of neighbor values. Vertices are
//! named either by position (`Graph::new(n)`, neighbors are numeric) or by
//! explicit values (`Graph::from_vertices`, neighbors are compared with a
//! caller-supplied [`Comparator`]).
//!
//! Edges are directed as stored: `add_edge(src, dest)` appends `dest` to the
//! list at position `src`. Undirected graphs add both directions.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_edge` | \(O(\text{out-degree})\) | Appends at the list tail |
//! | `position_of` | \(O(1)\) indexed, \(O(n)\) keyed | Keyed mode scans the vertex values |
//! | `get_dfs_stack` | \(O(d \cdot s)\) | `d` neighbors checked against a stack of `s` |
//! | `dfs` | \(O((n + m) \cdot c)\) | `c` is the cost of `position_of` |
//! | `edge_count` | \(O(n)\) | Lists track their own length |

use crate::collections::{Comparator, SinglyLinkedList};
use crate::graph::error::GraphError;
use crate::graph::traversal::Dfs;
use crate::graph::vertices::{VertexLabels, VertexSet};
use core::fmt;
use num_traits::ToPrimitive;
use serde::ser::{Serialize, Serializer};

/// A directed graph backed by one adjacency list per vertex.
#[derive(Clone)]
pub struct Graph<T> {
    vertices: VertexSet<T>,
    adjacency: Vec<SinglyLinkedList<T>>,
    equality: Comparator<T>,
}

impl<T> Graph<T>
where
    T: ToPrimitive + PartialEq + 'static,
{
    /// Creates a graph with `vertex_count` vertices named `0..vertex_count`.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyVertexSet`] if `vertex_count` is zero.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyVertexSet);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(vertex_count, "creating indexed graph");

        let equality = Comparator::by_value();
        Ok(Self {
            vertices: VertexSet::Indexed {
                count: vertex_count,
                index_of: integral_position::<T>,
            },
            adjacency: empty_lists(vertex_count, &equality),
            equality,
        })
    }
}

impl<T> Graph<T> {
    /// Creates a graph whose vertices are `vertices`, in input order.
    ///
    /// `equality` decides vertex identity for lookups and is shared with every
    /// adjacency list. Duplicate vertex values are kept; lookups resolve to the
    /// first one.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingComparator`] if `equality` is `None`.
    pub fn from_vertices<I>(vertices: I, equality: Option<Comparator<T>>) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = T>,
    {
        let equality = equality.ok_or(GraphError::MissingComparator)?;
        let values: Vec<T> = vertices.into_iter().collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(vertex_count = values.len(), "creating keyed graph");

        Ok(Self {
            adjacency: empty_lists(values.len(), &equality),
            vertices: VertexSet::Keyed { values },
            equality,
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of stored directed edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(SinglyLinkedList::len).sum()
    }

    /// Returns `true` if vertices are named by position.
    #[inline]
    pub fn is_indexed(&self) -> bool {
        matches!(self.vertices, VertexSet::Indexed { .. })
    }

    /// Returns the explicit vertex values, or `None` for an indexed graph.
    pub fn vertex_values(&self) -> Option<&[T]> {
        match &self.vertices {
            VertexSet::Indexed { .. } => None,
            VertexSet::Keyed { values } => Some(values),
        }
    }

    /// Returns the equality predicate shared by the graph and its lists.
    #[inline]
    pub fn comparator(&self) -> &Comparator<T> {
        &self.equality
    }

    /// Returns every adjacency list, indexed by vertex position.
    #[inline]
    pub fn adjacency_lists(&self) -> &[SinglyLinkedList<T>] {
        &self.adjacency
    }

    /// Resolves a vertex value to its position.
    #[inline]
    pub fn position_of(&self, vertex: &T) -> Option<usize> {
        self.vertices.position_of(vertex, &self.equality)
    }

    /// Appends `dest` to the adjacency list at position `src_index`.
    ///
    /// `src_index` is always a position, in both modes. `dest` is stored as
    /// given, even if it is not one of the graph's vertices.
    ///
    /// # Panics
    /// Panics if `src_index >= self.vertex_count()`.
    pub fn add_edge(&mut self, src_index: usize, dest: T) {
        let n = self.vertex_count();
        assert!(src_index < n, "source vertex {src_index} out of bounds for n={n}");
        self.adjacency[src_index].append(dest);
    }

    /// Returns `true` if the list at `src_index` holds `dest`.
    ///
    /// # Panics
    /// Panics if `src_index >= self.vertex_count()`.
    pub fn has_edge(&self, src_index: usize, dest: &T) -> bool {
        self.list_at(src_index).contains(dest)
    }

    /// Returns the out-degree of the vertex at `position`.
    ///
    /// # Panics
    /// Panics if `position >= self.vertex_count()`.
    pub fn out_degree(&self, position: usize) -> usize {
        self.list_at(position).len()
    }

    /// Iterates over the neighbors of the vertex at `position`, in insertion order.
    ///
    /// # Panics
    /// Panics if `position >= self.vertex_count()`.
    pub fn neighbors(&self, position: usize) -> impl Iterator<Item = &T> + '_ {
        self.list_at(position).iter()
    }

    /// Finds the adjacency list belonging to `src`.
    ///
    /// Returns `None` only when `src` is not a vertex of this graph; an isolated
    /// vertex yields its (empty) list.
    pub fn get_adjacency_list_from_source(&self, src: &T) -> Option<&SinglyLinkedList<T>> {
        self.position_of(src).map(|position| &self.adjacency[position])
    }

    /// Pushes every neighbor of `src` that is not already on `stack`.
    ///
    /// Neighbors are pushed in insertion order and existing entries are left
    /// untouched. An unknown `src` returns `stack` unchanged.
    ///
    /// [`Dfs`] expands vertices in the same order but filters against its
    /// visited set instead of the stack contents. When `start` has no repeated
    /// neighbors the two agree: the traversal's seed is
    /// `get_dfs_stack(start, Vec::new())` minus `start` itself.
    pub fn get_dfs_stack(&self, src: &T, mut stack: Vec<T>) -> Vec<T>
    where
        T: Clone,
    {
        let Some(list) = self.get_adjacency_list_from_source(src) else {
            return stack;
        };
        for neighbor in list {
            if !stack.iter().any(|queued| self.equality.eq(queued, neighbor)) {
                stack.push(neighbor.clone());
            }
        }
        stack
    }

    /// Lazily walks the vertices reachable from `start`, depth first.
    ///
    /// The first item is the caller's `start` reference, not the stored vertex
    /// value it resolves to. See [`Dfs`] for the visiting order.
    pub fn dfs_iter<'a>(&'a self, start: &'a T) -> Dfs<'a, T> {
        Dfs::new(self, start)
    }

    /// Returns every vertex reachable from `start`, each once, in visiting order.
    ///
    /// An isolated `start` yields `[start]`; a `start` that is not a vertex of
    /// this graph yields an empty result. The first element is a clone of
    /// `start` as passed in, so a keyed graph with a case-insensitive
    /// comparator returns `"oslo"` for a vertex stored as `"Oslo"`.
    pub fn dfs(&self, start: &T) -> Vec<T>
    where
        T: Clone,
    {
        let visited: Vec<T> = self.dfs_iter(start).cloned().collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(visited = visited.len(), vertex_count = self.vertex_count(), "dfs complete");

        visited
    }

    /// Returns `true` if `to` is reachable from `from` along directed edges.
    ///
    /// Every vertex reaches itself.
    pub fn is_reachable(&self, from: &T, to: &T) -> bool {
        self.dfs_iter(from).any(|v| self.equality.eq(v, to))
    }

    #[inline]
    fn list_at(&self, position: usize) -> &SinglyLinkedList<T> {
        let n = self.vertex_count();
        assert!(position < n, "vertex {position} out of bounds for n={n}");
        &self.adjacency[position]
    }
}

/// Converts `value` to a position only when it is exactly integral.
///
/// `to_usize` truncates floats, so `1.5` would otherwise name vertex 1.
fn integral_position<T: ToPrimitive>(value: &T) -> Option<usize> {
    value
        .to_usize()
        .filter(|&position| value.to_f64() == position.to_f64())
}

fn empty_lists<T>(count: usize, equality: &Comparator<T>) -> Vec<SinglyLinkedList<T>> {
    (0..count)
        .map(|_| SinglyLinkedList::new(equality.clone()))
        .collect()
}

impl<T: fmt::Debug> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Graph");
        match &self.vertices {
            VertexSet::Indexed { count, .. } => s.field("vertex_count", count),
            VertexSet::Keyed { values } => s.field("vertices", values),
        };
        s.field("adjacency", &self.adjacency).finish()
    }
}

#[derive(serde::Serialize)]
struct GraphSnapshot<'a, T> {
    vertices: VertexLabels<'a, T>,
    adjacency: &'a [SinglyLinkedList<T>],
}

impl<T: Serialize> Serialize for Graph<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GraphSnapshot {
            vertices: self.vertices.labels(),
            adjacency: &self.adjacency,
        }
        .serialize(serializer)
    }
}
