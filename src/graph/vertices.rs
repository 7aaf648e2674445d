//! Vertex identity for [`Graph`](crate::Graph).
//!
//! A graph identifies its vertices either by dense position (`0..count`) or by
//! caller-supplied values compared through a `Comparator`. The mode is fixed
//! at construction, and every lookup dispatches on it here.

use crate::collections::Comparator;
use serde::Serialize;

/// How a graph names its vertices.
#[derive(Clone)]
pub(crate) enum VertexSet<T> {
    /// Vertices are the positions `0..count`; values are converted numerically.
    Indexed {
        count: usize,
        index_of: fn(&T) -> Option<usize>,
    },
    /// Vertices are explicit values; position is their index in `values`.
    Keyed { values: Vec<T> },
}

impl<T> VertexSet<T> {
    #[inline]
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Indexed { count, .. } => *count,
            Self::Keyed { values } => values.len(),
        }
    }

    /// Resolves a vertex value to its adjacency-list position.
    pub(crate) fn position_of(&self, vertex: &T, equality: &Comparator<T>) -> Option<usize> {
        match self {
            Self::Indexed { count, index_of } => index_of(vertex).filter(|&i| i < *count),
            Self::Keyed { values } => values.iter().position(|v| equality.eq(v, vertex)),
        }
    }

    pub(crate) fn labels(&self) -> VertexLabels<'_, T> {
        match self {
            Self::Indexed { count, .. } => VertexLabels::Count(*count),
            Self::Keyed { values } => VertexLabels::Values(values),
        }
    }
}

/// Serialized form of a vertex set.
#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum VertexLabels<'a, T> {
    Count(usize),
    Values(&'a [T]),
}
