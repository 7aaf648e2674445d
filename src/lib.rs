//! # `dfs_graph` - Adjacency-List Graphs with Depth-First Search
//!
//! A small toolkit built from two layers:
//!
//! 1. **Singly linked lists** (`SinglyLinkedList<T>`):
//!    - Owned node chains, acyclic by construction
//!    - Lookups and removals through an injected equality predicate
//!    - Iterative drop, so long chains never overflow the stack
//!
//! 2. **Graphs** (`Graph<T>`):
//!    - One adjacency list per vertex, edges directed as stored
//!    - Vertices named by position (`Graph::new(n)`) or by value
//!      (`Graph::from_vertices(values, Some(comparator))`)
//!    - Iterative depth-first search with a bitset visited set
//!
//! ## Vertex identity
//!
//! An indexed graph resolves a vertex value by converting it to a position
//! (`num_traits::ToPrimitive`). A keyed graph resolves it through the vertex
//! values captured at construction, compared with the graph's `Comparator`.
//! Either way an isolated vertex (no outgoing edges) stays locatable, and
//! `dfs` from it returns just that vertex. Values that are not vertices of the
//! graph resolve to `None`, and `dfs` from them returns nothing.
//!
//! ## Example
//!
//! ```rust
//! use dfs_graph::Graph;
//!
//! let mut graph = Graph::new(4).unwrap();
//! for (src, dest) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
//!     graph.add_edge(src, dest);
//! }
//!
//! // The most recently added neighbor is explored first.
//! assert_eq!(graph.dfs(&0), vec![0, 2, 3, 1]);
//! assert!(graph.dfs(&7).is_empty());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emits `debug!` events on graph construction and traversal
//!   completion, and `trace!` events per visited vertex.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod graph;

pub use collections::{Comparator, Node, SinglyLinkedList};
pub use graph::{Dfs, Graph, GraphError};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // `Option<Box<_>>` uses the null niche, so a link is one pointer.
    assert!(mem::size_of::<Option<Box<Node<u64>>>>() == mem::size_of::<usize>());

    // A node is its payload plus one link, with no tag word.
    assert!(mem::size_of::<Node<usize>>() == 2 * mem::size_of::<usize>());

    // A comparator is a single fat pointer.
    assert!(mem::size_of::<Comparator<u64>>() == 2 * mem::size_of::<usize>());
};
