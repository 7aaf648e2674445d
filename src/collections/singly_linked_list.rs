//! `SinglyLinkedList`: an owned, singly linked chain with injected equality.
//!
//! Each node exclusively owns its successor (`Option<Box<Node<T>>>`), so the
//! chain is acyclic by construction and traversal from `head` always
//! terminates. Lookups and removals do not use `PartialEq`; they go through
//! the list's `Comparator`, which lets callers choose value or identity
//! semantics per list.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `append` | \(O(n)\) | Walks to the tail |
//! | `delete` | \(O(n)\) | First match only |
//! | `search` | \(O(n)\) | First match only |
//! | `get_all_nodes` | \(O(n)\) | Allocates one `Vec` of node references |
//! | `len` | \(O(1)\) | Tracked on every mutation |

use crate::collections::Comparator;
use core::fmt;
use serde::ser::{Serialize, Serializer};

/// A single element of a [`SinglyLinkedList`].
pub struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    #[inline]
    fn new(data: T) -> Self {
        Self { data, next: None }
    }

    /// Returns the element stored in this node.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns the successor, or `None` for the tail.
    #[inline]
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// An ordered singly linked list whose lookups use a caller-supplied predicate.
pub struct SinglyLinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
    equality: Comparator<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list that compares elements with `equality`.
    pub fn new(equality: Comparator<T>) -> Self {
        Self {
            head: None,
            len: 0,
            equality,
        }
    }

    /// Creates a list whose head already holds `data`.
    pub fn with_head(equality: Comparator<T>, data: T) -> Self {
        Self {
            head: Some(Box::new(Node::new(data))),
            len: 1,
            equality,
        }
    }

    /// Returns the predicate this list deduplicates and searches with.
    #[inline]
    pub fn equality_comparator(&self) -> &Comparator<T> {
        &self.equality
    }

    /// Returns the first node, or `None` if the list is empty.
    #[inline]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no head.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends `data` as the new tail.
    pub fn append(&mut self, data: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node::new(data)));
        self.len += 1;
    }

    /// Removes the first node equal to `data` and returns its element.
    ///
    /// Later duplicates stay in place. Returns `None` and leaves the list
    /// untouched when nothing matches.
    pub fn delete(&mut self, data: &T) -> Option<T> {
        let equality = &self.equality;
        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .is_some_and(|node| !equality.eq(&node.data, data))
        {
            cursor = &mut cursor.as_mut()?.next;
        }

        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        self.len -= 1;
        Some(removed.data)
    }

    /// Returns the first node equal to `data`.
    pub fn search(&self, data: &T) -> Option<&Node<T>> {
        self.nodes().find(|node| self.equality.eq(&node.data, data))
    }

    /// Returns `true` if some node equals `data`.
    #[inline]
    pub fn contains(&self, data: &T) -> bool {
        self.search(data).is_some()
    }

    /// Materializes every node, head to tail.
    pub fn get_all_nodes(&self) -> Vec<&Node<T>> {
        let mut nodes = Vec::with_capacity(self.len);
        nodes.extend(self.nodes());
        nodes
    }

    /// Iterates over the elements, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.as_deref(),
            remaining: self.len,
        }
    }

    fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        core::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
    }

    fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.len -= 1;
            node.data
        })
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively; the default drop would recurse once per node.
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for data in iter {
            let node = cursor.insert(Box::new(Node::new(data)));
            cursor = &mut node.next;
            self.len += 1;
        }
    }
}

impl<T: PartialEq + 'static> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new(Comparator::by_value());
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::new(self.equality.clone());
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for SinglyLinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Borrowing iterator over the elements of a [`SinglyLinkedList`].
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> core::iter::FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over the elements of a [`SinglyLinkedList`].
pub struct IntoIter<T>(SinglyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(head: &str) -> SinglyLinkedList<String> {
        SinglyLinkedList::with_head(Comparator::by_value(), head.to_string())
    }

    fn contents(list: &SinglyLinkedList<String>) -> Vec<&str> {
        list.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_append_links_after_head() {
        let mut list = strings("foo");
        list.append("bar".into());
        list.append("baz".into());

        let head = list.head().unwrap();
        assert_eq!(head.data(), "foo");
        assert_eq!(head.next().unwrap().data(), "bar");
        assert_eq!(head.next().unwrap().next().unwrap().data(), "baz");
        assert!(head.next().unwrap().next().unwrap().next().is_none());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_append_to_empty_sets_head() {
        let mut list = SinglyLinkedList::new(Comparator::by_value());
        assert!(list.is_empty());
        list.append(7);
        assert_eq!(list.head().map(Node::data), Some(&7));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_delete_middle_relinks_chain() {
        let mut list = strings("foo");
        list.extend(["bar".to_string(), "baz".to_string()]);

        assert_eq!(list.delete(&"bar".to_string()).as_deref(), Some("bar"));
        assert_eq!(list.head().unwrap().next().unwrap().data(), "baz");
        assert_eq!(contents(&list), ["foo", "baz"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_delete_tail() {
        let mut list = strings("foo");
        list.append("bar".into());
        assert!(list.delete(&"bar".to_string()).is_some());
        assert_eq!(contents(&list), ["foo"]);
        assert!(list.head().unwrap().next().is_none());
    }

    #[test]
    fn test_delete_head_promotes_second() {
        let mut list = strings("foo");
        list.extend(["bar".to_string(), "baz".to_string()]);
        list.delete(&"foo".to_string());
        assert_eq!(list.head().unwrap().data(), "bar");
        assert_eq!(contents(&list), ["bar", "baz"]);
    }

    #[test]
    fn test_delete_sole_node_empties_list() {
        let mut list = strings("foo");
        list.delete(&"foo".to_string());
        assert!(list.head().is_none());
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut list = strings("foo");
        list.extend(["bar".to_string(), "baz".to_string()]);
        assert!(list.delete(&"test".to_string()).is_none());
        assert_eq!(contents(&list), ["foo", "bar", "baz"]);

        let mut empty = SinglyLinkedList::<u8>::new(Comparator::by_value());
        assert!(empty.delete(&1).is_none());
    }

    #[test]
    fn test_delete_only_first_duplicate() {
        let mut list: SinglyLinkedList<u32> = [1, 2, 1, 3, 1].into_iter().collect();
        list.delete(&1);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 1, 3, 1]);
        list.delete(&1);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 3, 1]);
    }

    #[test]
    fn test_search_uses_injected_predicate() {
        let eq = Comparator::new(|a: &String, b: &String| a.eq_ignore_ascii_case(b));
        let mut list = SinglyLinkedList::new(eq);
        list.append("Alpha".to_string());
        list.append("Beta".to_string());

        assert_eq!(list.search(&"BETA".to_string()).unwrap().data(), "Beta");
        assert!(list.search(&"gamma".to_string()).is_none());
        assert!(list.equality_comparator().eq(&"x".to_string(), &"X".to_string()));
    }

    #[test]
    fn test_get_all_nodes_in_order() {
        let list: SinglyLinkedList<i32> = (0..5).collect();
        let nodes = list.get_all_nodes();
        assert_eq!(nodes.len(), 5);
        let data: Vec<i32> = nodes.iter().map(|n| *n.data()).collect();
        assert_eq!(data, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_owned_iteration_and_clone() {
        let list: SinglyLinkedList<i32> = (0..4).collect();
        let copy = list.clone();
        assert!(copy.equality_comparator().ptr_eq(list.equality_comparator()));
        assert_eq!(list.into_iter().collect::<Vec<_>>(), [0, 1, 2, 3]);
        assert_eq!(copy.iter().len(), 4);
    }

    #[test]
    fn test_long_list_drops_without_recursion() {
        let list: SinglyLinkedList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[test]
    fn test_debug_lists_values() {
        let list: SinglyLinkedList<i32> = [3, 1].into_iter().collect();
        assert_eq!(format!("{list:?}"), "[3, 1]");
    }
}
