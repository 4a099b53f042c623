//! The sequence contract shared by every collection in this crate.
//!
//! ```text
//! Sequence             - len, is_empty
//!     │
//!     ├── List<T>      - indexed add/insert/get/set/remove (LinkedList, ArrayList)
//!     │
//!     └── Stack<T>     - push/pop at the top (LinkedStack)
//! ```
//!
//! Each collection also exposes the same operations as inherent methods, so
//! the traits only need to be imported for code that is generic over the
//! implementation.

use crate::SequenceError;

/// A finite, ordered collection of elements.
pub trait Sequence {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An index-addressed sequence.
///
/// Valid indices for lookups, updates and removals are `[0, len)`;
/// [`insert`](List::insert) additionally accepts `len` (append). Indices
/// outside the range fail with [`SequenceError::IndexOutOfBounds`] and leave
/// the list unchanged.
///
/// # Example
///
/// ```
/// use nexus_sequence::{ArrayList, LinkedList, List, SequenceError};
///
/// fn rotate_left<L: List<u32>>(list: &mut L) -> Result<(), SequenceError> {
///     if !list.is_empty() {
///         let head = list.remove(0)?;
///         list.add(head);
///     }
///     Ok(())
/// }
///
/// let mut linked = LinkedList::of([1, 2, 3]);
/// let mut array = ArrayList::of([1, 2, 3]);
/// rotate_left(&mut linked).unwrap();
/// rotate_left(&mut array).unwrap();
///
/// assert_eq!(linked.get(0), Ok(&2));
/// assert_eq!(array.last(), Ok(&1));
/// ```
pub trait List<T>: Sequence {
    /// Appends an element to the end.
    fn add(&mut self, element: T);

    /// Inserts an element before position `index`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfBounds`] if `index > len`.
    fn insert(&mut self, index: usize, element: T) -> Result<(), SequenceError>;

    /// Replaces the element at `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len`.
    fn set(&mut self, index: usize, element: T) -> Result<T, SequenceError>;

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len`.
    fn get(&self, index: usize) -> Result<&T, SequenceError>;

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len`.
    fn get_mut(&mut self, index: usize) -> Result<&mut T, SequenceError>;

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the list is empty.
    fn first(&self) -> Result<&T, SequenceError>;

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the list is empty.
    fn last(&self) -> Result<&T, SequenceError>;

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len`.
    fn remove(&mut self, index: usize) -> Result<T, SequenceError>;

    /// Returns `true` if any element equals `element`.
    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq;

    /// Removes every element.
    fn clear(&mut self);
}

/// A last-in-first-out sequence.
pub trait Stack<T>: Sequence {
    /// Pushes an element onto the top.
    fn push(&mut self, element: T);

    /// Pushes an element that the caller may not have.
    ///
    /// # Errors
    ///
    /// [`SequenceError::MissingElement`] if `element` is `None`; the stack
    /// is left unchanged.
    fn try_push(&mut self, element: Option<T>) -> Result<(), SequenceError> {
        let element = element.ok_or(SequenceError::MissingElement)?;
        self.push(element);
        Ok(())
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the stack is empty.
    fn pop(&mut self) -> Result<T, SequenceError>;

    /// Returns a reference to the top element.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the stack is empty.
    fn peek(&self) -> Result<&T, SequenceError>;
}
