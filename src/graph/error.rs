//! Construction errors for [`Graph`](crate::Graph).

use core::fmt;

/// The error type for graph construction failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A graph built from explicit vertex values was given no equality comparator.
    MissingComparator,
    /// A graph built from a vertex count was asked for zero vertices.
    EmptyVertexSet,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingComparator => {
                f.write_str("equality comparator must be provided if vertices is an array")
            }
            Self::EmptyVertexSet => f.write_str("vertex count must be greater than zero"),
        }
    }
}

impl std::error::Error for GraphError {}
