//! Shared equality predicates.
//!
//! A `Comparator<T>` decides when two values are "the same" for lookup and
//! deduplication. Graphs hand one comparator to every adjacency list they
//! own, so the predicate is reference-counted and cloning only bumps a count.

use core::fmt;
use std::sync::Arc;

type Predicate<T> = dyn Fn(&T, &T) -> bool + Send + Sync;

/// A cloneable, thread-safe equality predicate over `T`.
pub struct Comparator<T> {
    predicate: Arc<Predicate<T>>,
}

impl<T> Comparator<T> {
    /// Wraps an arbitrary equality predicate.
    ///
    /// The predicate should behave like an equivalence relation; the
    /// collections in this crate only ever call it as `eq(stored, probe)`.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Uses `PartialEq` as the predicate.
    pub fn by_value() -> Self
    where
        T: PartialEq + 'static,
    {
        Self::new(|a: &T, b: &T| a == b)
    }

    /// Evaluates the predicate.
    #[inline]
    pub fn eq(&self, a: &T, b: &T) -> bool {
        (self.predicate)(a, b)
    }

    /// Returns `true` if both comparators share the same predicate allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.predicate, &other.predicate)
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T: PartialEq + 'static> Default for Comparator<T> {
    fn default() -> Self {
        Self::by_value()
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").finish_non_exhaustive()
    }
}
