//! Adjacency-list graphs and their traversals.
//!
//! - `dfs_graph`: the graph type, edge insertion and lookups
//! - `traversal`: the lazy depth-first iterator
//! - `vertices`: vertex identity modes (by position or by value)
//! - `error`: construction errors

pub mod dfs_graph;
pub mod error;
pub mod traversal;
pub(crate) mod access;
pub(crate) mod vertices;

pub use dfs_graph::Graph;
pub use error::GraphError;
pub use traversal::Dfs;
