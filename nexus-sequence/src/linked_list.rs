//! Singly-linked list over an owned node arena.
//!
//! Nodes live in the list's own [`Storage`] (a [`slab::Slab`] by default),
//! and the chain is threaded through them by index. The list tracks the
//! head, the tail and the length:
//!
//! ```text
//! head ──► [43|•]──► [233|•]──► [54|NONE] ◄── tail
//! ```
//!
//! The tail index only makes appends O(1); ownership of every node is the
//! arena's. Unlinking a node removes its slot in the same step, so a node
//! is never reachable from the chain after it has been released.
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `add`, `push_front`, `first`, `last` | O(1) |
//! | `insert(0, _)`, `insert(len, _)`, `remove(0)` | O(1) |
//! | `get`, `set`, `insert`, `remove` at `i` | O(i) |
//! | `remove(len - 1)` | O(len), no backward links |
//! | `contains` | O(len) |
//!
//! # Example
//!
//! ```
//! use nexus_sequence::{LinkedList, SequenceError};
//!
//! let mut list = LinkedList::of([43, 233, 54]);
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(0), Ok(&43));
//!
//! assert_eq!(list.remove(1), Ok(233));
//! assert_eq!(list.get(1), Ok(&54));
//!
//! assert_eq!(
//!     list.get(2),
//!     Err(SequenceError::IndexOutOfBounds { index: 2, len: 2 })
//! );
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem;

use crate::node::Node;
use crate::storage::{NodeSlab, Storage};
use crate::{Index, List, Sequence, SequenceError};

/// A singly-linked list that owns its node storage.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Node storage (default [`NodeSlab<T>`])
/// - `K`: Index type of the storage (default `usize`)
///
/// # Example
///
/// ```
/// use nexus_sequence::LinkedList;
///
/// let mut list: LinkedList<String> = LinkedList::new();
/// list.add("world".into());
/// list.insert(0, "hello".into()).unwrap();
///
/// let words: Vec<_> = list.iter().map(String::as_str).collect();
/// assert_eq!(words, ["hello", "world"]);
/// ```
pub struct LinkedList<T, S = NodeSlab<T>, K: Index = usize>
where
    S: Storage<Node<T, K>, Index = K>,
{
    head: K,
    tail: K,
    len: usize,
    storage: S,
    _marker: PhantomData<T>,
}

// =============================================================================
// Default storage
// =============================================================================

impl<T> LinkedList<T> {
    /// Creates an empty list backed by a [`slab::Slab`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: usize::NONE,
            tail: usize::NONE,
            len: 0,
            storage: slab::Slab::new(),
            _marker: PhantomData,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before the
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_storage(slab::Slab::with_capacity(capacity))
    }

    /// Creates a list holding `elements` in iteration order.
    ///
    /// Equivalent to one [`add`](Self::add) per element.
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut list = Self::new();
        list.extend(elements);
        list
    }
}

// =============================================================================
// Any storage
// =============================================================================

impl<T, S, K: Index> LinkedList<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    /// Creates an empty list over caller-provided storage.
    ///
    /// Any values already in `storage` are dropped.
    pub fn with_storage(mut storage: S) -> Self {
        storage.clear();
        Self {
            head: K::NONE,
            tail: K::NONE,
            len: 0,
            storage,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ========================================================================
    // Insert operations
    // ========================================================================

    /// Appends an element to the back of the list. O(1).
    #[inline]
    pub fn add(&mut self, element: T) {
        let key = self.storage.insert(Node::new(element));

        if self.tail.is_some() {
            // Safety: tail is valid when is_some()
            unsafe { self.storage.get_unchecked_mut(self.tail) }.next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
    }

    /// Prepends an element to the front of the list. O(1).
    #[inline]
    pub fn push_front(&mut self, element: T) {
        let key = self.storage.insert(Node::with_next(element, self.head));

        if self.head.is_none() {
            self.tail = key;
        }

        self.head = key;
        self.len += 1;
    }

    /// Inserts an element before position `index`.
    ///
    /// `index == 0` and `index == len` are O(1); anything in between walks
    /// to the predecessor.
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfBounds`] if `index > len`.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), SequenceError> {
        if index > self.len {
            return Err(SequenceError::out_of_bounds(index, self.len));
        }

        if index == 0 {
            self.push_front(element);
        } else if index == self.len {
            self.add(element);
        } else {
            let prev = self.key_at(index - 1);
            // Safety: key_at returns a live node for index - 1 < len
            let next = unsafe { self.storage.get_unchecked(prev) }.next;
            let key = self.storage.insert(Node::with_next(element, next));
            // Safety: insertion keeps existing keys valid
            unsafe { self.storage.get_unchecked_mut(prev) }.next = key;
            self.len += 1;
        }

        Ok(())
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the element at `index`. O(index).
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        self.check_index(index)?;
        let key = self.key_at(index);
        // Safety: key_at returns a live node for index < len
        Ok(unsafe { &self.storage.get_unchecked(key).element })
    }

    /// Returns a mutable reference to the element at `index`. O(index).
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, SequenceError> {
        self.check_index(index)?;
        let key = self.key_at(index);
        // Safety: key_at returns a live node for index < len
        Ok(unsafe { &mut self.storage.get_unchecked_mut(key).element })
    }

    /// Replaces the element at `index`, returning the old one. O(index).
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, SequenceError> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, element))
    }

    /// Returns a reference to the first element. O(1).
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the list is empty.
    #[inline]
    pub fn first(&self) -> Result<&T, SequenceError> {
        if self.head.is_none() {
            return Err(SequenceError::Empty);
        }
        // Safety: head is valid when is_some()
        Ok(unsafe { &self.storage.get_unchecked(self.head).element })
    }

    /// Returns a reference to the last element. O(1).
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the list is empty.
    #[inline]
    pub fn last(&self) -> Result<&T, SequenceError> {
        if self.tail.is_none() {
            return Err(SequenceError::Empty);
        }
        // Safety: tail is valid when is_some()
        Ok(unsafe { &self.storage.get_unchecked(self.tail).element })
    }

    /// Returns `true` if any element equals `element`. O(len).
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == element)
    }

    // ========================================================================
    // Remove operations
    // ========================================================================

    /// Removes and returns the element at `index`.
    ///
    /// Removing the head is O(1). Any other position walks to the
    /// predecessor, which for the tail means O(len).
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T, SequenceError> {
        self.check_index(index)?;

        if index == 0 {
            return Ok(self.unlink_front());
        }

        let prev = self.key_at(index - 1);
        // Safety: index < len, so the predecessor has a live successor
        let key = unsafe { self.storage.get_unchecked(prev) }.next;
        let node = unsafe { self.storage.remove_unchecked(key) };
        unsafe { self.storage.get_unchecked_mut(prev) }.next = node.next;

        if key == self.tail {
            self.tail = prev;
        }

        self.len -= 1;
        Ok(node.element)
    }

    /// Removes and returns the front element, or `None` if empty. O(1).
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_none() {
            return None;
        }
        Some(self.unlink_front())
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, S, K> {
        Iter {
            storage: &self.storage,
            current: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over mutable references to elements, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, S, K> {
        IterMut {
            current: self.head,
            remaining: self.len,
            storage: &mut self.storage,
            _marker: PhantomData,
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), SequenceError> {
        if index < self.len {
            Ok(())
        } else {
            Err(SequenceError::out_of_bounds(index, self.len))
        }
    }

    /// Walks `index` links from the head.
    ///
    /// Caller guarantees `index < len`.
    fn key_at(&self, index: usize) -> K {
        debug_assert!(index < self.len);

        let mut key = self.head;
        for _ in 0..index {
            // Safety: fewer than len hops from the head stay on live nodes
            key = unsafe { self.storage.get_unchecked(key) }.next;
        }
        key
    }

    /// Caller guarantees the list is non-empty.
    fn unlink_front(&mut self) -> T {
        debug_assert!(self.head.is_some());

        // Safety: head is valid when the list is non-empty
        let node = unsafe { self.storage.remove_unchecked(self.head) };
        self.head = node.next;

        if self.head.is_none() {
            self.tail = K::NONE;
        }

        self.len -= 1;
        node.element
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.head.is_none(), self.len == 0);
        assert_eq!(self.tail.is_none(), self.len == 0);
        assert_eq!(self.storage.len(), self.len);

        let mut count = 0;
        let mut last = K::NONE;
        let mut key = self.head;
        while key.is_some() {
            count += 1;
            assert!(count <= self.len, "chain longer than len");
            last = key;
            key = self.storage.get(key).expect("dangling link").next;
        }

        assert_eq!(count, self.len);
        assert!(last == self.tail, "tail is not the last reachable node");
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<T, S, K: Index> Sequence for LinkedList<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, S, K: Index> List<T> for LinkedList<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    fn add(&mut self, element: T) {
        LinkedList::add(self, element);
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), SequenceError> {
        LinkedList::insert(self, index, element)
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, SequenceError> {
        LinkedList::set(self, index, element)
    }

    fn get(&self, index: usize) -> Result<&T, SequenceError> {
        LinkedList::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, SequenceError> {
        LinkedList::get_mut(self, index)
    }

    fn first(&self) -> Result<&T, SequenceError> {
        LinkedList::first(self)
    }

    fn last(&self) -> Result<&T, SequenceError> {
        LinkedList::last(self)
    }

    fn remove(&mut self, index: usize) -> Result<T, SequenceError> {
        LinkedList::remove(self, index)
    }

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        LinkedList::contains(self, element)
    }

    fn clear(&mut self) {
        LinkedList::clear(self);
    }
}

impl<T, S, K: Index> Default for LinkedList<T, S, K>
where
    S: Storage<Node<T, K>, Index = K> + Default,
{
    fn default() -> Self {
        Self::with_storage(S::default())
    }
}

impl<T: Clone, S, K: Index> Clone for LinkedList<T, S, K>
where
    S: Storage<Node<T, K>, Index = K> + Default,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug, S, K: Index> fmt::Debug for LinkedList<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, S, K: Index> PartialEq for LinkedList<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, S, K: Index> Eq for LinkedList<T, S, K> where S: Storage<Node<T, K>, Index = K> {}

impl<T, S, K: Index> Extend<T> for LinkedList<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T, S, K: Index> FromIterator<T> for LinkedList<T, S, K>
where
    S: Storage<Node<T, K>, Index = K> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

impl<'a, T, S, K: Index> IntoIterator for &'a LinkedList<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, S, K: Index> IntoIterator for &'a mut LinkedList<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, S, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, S, K: Index> IntoIterator for LinkedList<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    type Item = T;
    type IntoIter = IntoIter<T, S, K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements.
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

/// Iterator over mutable references to list elements.
pub struct IterMut<'a, T, S, K: Index> {
    storage: &'a mut S,
    current: K,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T: 'a, S, K: Index + 'a> Iterator for IterMut<'a, T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // Safety: current is a live node while elements remain
        let node = unsafe { self.storage.get_unchecked_mut(self.current) };
        self.current = node.next;
        self.remaining -= 1;

        // Extend lifetime - safe because we visit each node exactly once
        Some(unsafe { &mut *((&mut node.element) as *mut T) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, K: Index + 'a> ExactSizeIterator for IterMut<'a, T, S, K> where
    S: Storage<Node<T, K>, Index = K>
{
}

/// Owning iterator that removes elements front to back.
pub struct IntoIter<T, S, K: Index>
where
    S: Storage<Node<T, K>, Index = K>,
{
    list: LinkedList<T, S, K>,
}

impl<T, S, K: Index> Iterator for IntoIter<T, S, K>
where
    S: Storage<Node<T, K>, Index = K>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T, S, K: Index> ExactSizeIterator for IntoIter<T, S, K> where
    S: Storage<Node<T, K>, Index = K>
{
}
