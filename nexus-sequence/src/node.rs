//! Singly-linked node shared by [`LinkedList`](crate::LinkedList) and
//! [`LinkedStack`](crate::LinkedStack).

use crate::Index;

/// A node in a singly-linked chain.
///
/// Wraps one element with the index of its successor. Users only ever see
/// `&T` / `&mut T` through the owning structure; the node itself is an
/// implementation detail that shows up in storage type signatures.
#[derive(Debug, Clone)]
pub struct Node<T, K: Index = usize> {
    pub(crate) element: T,
    pub(crate) next: K,
}

impl<T, K: Index> Node<T, K> {
    /// Creates a node with no successor.
    #[inline]
    pub fn new(element: T) -> Self {
        Self {
            element,
            next: K::NONE,
        }
    }

    /// Creates a node whose successor is `next`.
    #[inline]
    pub(crate) fn with_next(element: T, next: K) -> Self {
        Self { element, next }
    }

    /// Returns a reference to the element.
    #[inline]
    pub fn element(&self) -> &T {
        &self.element
    }

    /// Returns the successor's index, or `None` for the last node.
    #[inline]
    pub fn next(&self) -> Option<K> {
        self.next.to_option()
    }
}
