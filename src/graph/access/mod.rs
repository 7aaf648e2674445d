//! Internal graph accessors and low-level building blocks.
//!
//! Kept `pub(crate)` so traversals can share scratch structures without
//! exposing them as part of the public API surface.

pub(crate) mod visited;

pub(crate) use visited::VisitedSet;
