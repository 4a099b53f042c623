//! LIFO stack of singly-linked nodes.
//!
//! Same node arena as [`LinkedList`](crate::LinkedList), but only the top
//! is tracked: push prepends, pop unlinks the top. No tail, no shifting,
//! no indexed access.
//!
//! # Example
//!
//! ```
//! use nexus_sequence::{LinkedStack, SequenceError};
//!
//! let mut stack = LinkedStack::new();
//! stack.push(1);
//! stack.push(2);
//! stack.push(3);
//!
//! assert_eq!(stack.pop(), Ok(3));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.pop(), Ok(1));
//! assert_eq!(stack.pop(), Err(SequenceError::Empty));
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::node::Node;
use crate::storage::{NodeSlab, Storage};
use crate::{Index, Sequence, SequenceError, Stack};

/// A LIFO stack that owns its node storage.
pub struct LinkedStack<T, S = NodeSlab<T>, K: Index = usize>
where
    S: Storage<Node<T, K>, Index = K>,
{
    top: K,
    len: usize,
    storage: S,
    _marker: PhantomData<T>,
}

impl<T> LinkedStack<T> {
    /// Creates an empty stack backed by a [`slab::Slab`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            top: usize::NONE,
            len: 0,
            storage: slab::Slab::new(),
            _marker: PhantomData,
        }
    }

    /// Creates an empty stack with room for `capacity` nodes before the
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_storage(slab::Slab::with_capacity(capacity))
    }

    /// Creates a stack by pushing `elements` in iteration order, so the
    /// last element ends up on top.
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut stack = Self::new();
        stack.extend(elements);
        stack
    }
}

impl<T, S, K: Index> LinkedStack<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    /// Creates an empty stack over caller-provided storage.
    ///
    /// Any values already in `storage` are dropped.
    pub fn with_storage(mut storage: S) -> Self {
        storage.clear();
        Self {
            top: K::NONE,
            len: 0,
            storage,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes an element onto the top. O(1).
    #[inline]
    pub fn push(&mut self, element: T) {
        self.top = self.storage.insert(Node::with_next(element, self.top));
        self.len += 1;
    }

    /// Pushes `element` if present.
    ///
    /// # Errors
    ///
    /// [`SequenceError::MissingElement`] if `element` is `None`; the stack
    /// is left unchanged.
    #[inline]
    pub fn try_push(&mut self, element: Option<T>) -> Result<(), SequenceError> {
        match element {
            Some(element) => {
                self.push(element);
                Ok(())
            }
            None => Err(SequenceError::MissingElement),
        }
    }

    /// Removes and returns the top element. O(1).
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T, SequenceError> {
        if self.top.is_none() {
            return Err(SequenceError::Empty);
        }

        // Safety: top is valid when is_some()
        let node = unsafe { self.storage.remove_unchecked(self.top) };
        self.top = node.next;
        self.len -= 1;

        Ok(node.element)
    }

    /// Returns a reference to the top element. O(1).
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T, SequenceError> {
        if self.top.is_none() {
            return Err(SequenceError::Empty);
        }
        // Safety: top is valid when is_some()
        Ok(unsafe { &self.storage.get_unchecked(self.top).element })
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.top = K::NONE;
        self.len = 0;
    }

    /// Returns an iterator over the elements, top to bottom.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, S, K> {
        Iter {
            storage: &self.storage,
            current: self.top,
            remaining: self.len,
            _marker: PhantomData,
        }
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<T, S, K: Index> Sequence for LinkedStack<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, S, K: Index> Stack<T> for LinkedStack<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    fn push(&mut self, element: T) {
        LinkedStack::push(self, element);
    }

    fn try_push(&mut self, element: Option<T>) -> Result<(), SequenceError> {
        LinkedStack::try_push(self, element)
    }

    fn pop(&mut self) -> Result<T, SequenceError> {
        LinkedStack::pop(self)
    }

    fn peek(&self) -> Result<&T, SequenceError> {
        LinkedStack::peek(self)
    }
}

impl<T, S, K: Index> Default for LinkedStack<T, S, K>
where
    S: Storage<Node<T, K>, Index = K> + Default,
{
    fn default() -> Self {
        Self::with_storage(S::default())
    }
}

impl<T: Clone, S, K: Index> Clone for LinkedStack<T, S, K>
where
    S: Storage<Node<T, K>, Index = K> + Default,
{
    fn clone(&self) -> Self {
        // iter() runs top to bottom; push bottom first to keep the order
        let elements: Vec<&T> = self.iter().collect();
        let mut copy = Self::default();
        copy.extend(elements.into_iter().rev().cloned());
        copy
    }
}

impl<T: fmt::Debug, S, K: Index> fmt::Debug for LinkedStack<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, S, K: Index> PartialEq for LinkedStack<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, S, K: Index> Eq for LinkedStack<T, S, K> where S: Storage<Node<T, K>, Index = K> {}

impl<T, S, K: Index> Extend<T> for LinkedStack<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T, S, K: Index> FromIterator<T> for LinkedStack<T, S, K>
where
    S: Storage<Node<T, K>, Index = K> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::default();
        stack.extend(iter);
        stack
    }
}

impl<'a, T, S, K: Index> IntoIterator for &'a LinkedStack<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over stack elements, top to bottom.
pub struct Iter<'a, T, S, K: Index> {
    storage: &'a S,
    current: K,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: 'a, S, K: Index + 'a> Iterator for Iter<'a, T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // Safety: current is a live node while elements remain
        let node = unsafe { self.storage.get_unchecked(self.current) };
        self.current = node.next;
        self.remaining -= 1;

        Some(&node.element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, K: Index + 'a> ExactSizeIterator for Iter<'a, T, S, K> where
    S: Storage<Node<T, K>, Index = K>
{
}

impl<'a, T: 'a, S, K: Index + 'a> FusedIterator for Iter<'a, T, S, K> where
    S: Storage<Node<T, K>, Index = K>
{
}
