//! Collections backing the graph layer.
//!
//! - `comparator`: shared equality predicates
//! - `singly_linked_list`: the per-vertex adjacency storage

pub mod comparator;
pub mod singly_linked_list;

// Re-export commonly used types from submodules
pub use comparator::Comparator;
pub use singly_linked_list::{Node, SinglyLinkedList};
