//! Resizable list over one contiguous buffer.
//!
//! The buffer is a boxed slice of `MaybeUninit<T>` whose length is the
//! capacity. Slots `[0, len)` hold the elements in order; the rest are
//! uninitialised.
//!
//! ```text
//!  capacity = 8
//! ┌────┬────┬────┬────┬────┬────┬────┬────┐
//! │ 43 │233 │ 54 │ 12 │ ?? │ ?? │ ?? │ ?? │
//! └────┴────┴────┴────┴────┴────┴────┴────┘
//!  ◄──────── len = 4 ──────►
//! ```
//!
//! # Growth
//!
//! An insertion into a full buffer first reallocates to twice the capacity
//! and moves the elements across, so a run of appends is amortized O(1).
//!
//! # Shrinking
//!
//! What happens to spare capacity after a removal is chosen per list with
//! [`ShrinkPolicy`]. The default, [`ShrinkPolicy::Exact`], compacts the
//! buffer to the remaining length on every removal.
//!
//! # Example
//!
//! ```
//! use nexus_sequence::{ArrayList, ShrinkPolicy};
//!
//! let mut list = ArrayList::builder()
//!     .capacity(2)
//!     .shrink_policy(ShrinkPolicy::Amortized)
//!     .build()
//!     .unwrap();
//!
//! for value in [10, 20, 30, 40, 50] {
//!     list.add(value);
//! }
//! assert_eq!(list.as_slice(), &[10, 20, 30, 40, 50]);
//! assert!(list.capacity() >= 5);
//!
//! list.insert(1, 15).unwrap();
//! assert_eq!(list.remove(0), Ok(10));
//! assert_eq!(list.first(), Ok(&15));
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ptr;
use core::slice;

use crate::{List, Sequence, SequenceError};

/// Capacity of a list created with [`ArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 5;

/// What the buffer does with spare capacity after a removal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShrinkPolicy {
    /// Reallocate to exactly `len` slots (never below one) after every
    /// removal. Keeps memory tight; repeated removals pay O(len) each.
    #[default]
    Exact,
    /// Halve the capacity once `len` drops to a quarter of it. Removals
    /// stay amortized O(1) apart from the element shift.
    Amortized,
    /// Never give capacity back.
    Retain,
}

impl ShrinkPolicy {
    /// Capacity to reallocate to, or `None` to keep the current buffer.
    fn target_capacity(self, len: usize, capacity: usize) -> Option<usize> {
        match self {
            ShrinkPolicy::Exact => {
                let target = len.max(1);
                (target < capacity).then_some(target)
            }
            ShrinkPolicy::Amortized => {
                (capacity > 1 && len <= capacity / 4).then(|| (capacity / 2).max(1))
            }
            ShrinkPolicy::Retain => None,
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`ArrayList`].
///
/// The element type is carried by the builder, so it is usually inferred
/// from how the built list is used.
///
/// ```
/// use nexus_sequence::{ArrayList, ArrayListBuilder, SequenceError, ShrinkPolicy};
///
/// let mut list = ArrayList::builder()
///     .capacity(64)
///     .shrink_policy(ShrinkPolicy::Retain)
///     .build()
///     .unwrap();
/// list.add(7u64);
/// assert_eq!(list.capacity(), 64);
///
/// let err = ArrayListBuilder::<u64>::default().capacity(0).build();
/// assert_eq!(err.unwrap_err(), SequenceError::ZeroCapacity);
/// ```
pub struct ArrayListBuilder<T> {
    capacity: usize,
    shrink_policy: ShrinkPolicy,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Default for ArrayListBuilder<T> {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            shrink_policy: ShrinkPolicy::default(),
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for ArrayListBuilder<T> {
    fn clone(&self) -> Self {
        Self {
            capacity: self.capacity,
            shrink_policy: self.shrink_policy,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ArrayListBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayListBuilder")
            .field("capacity", &self.capacity)
            .field("shrink_policy", &self.shrink_policy)
            .finish()
    }
}

impl<T> ArrayListBuilder<T> {
    /// Initial number of slots. Must be positive. Default: 5.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Spare-capacity handling after removals. Default: [`ShrinkPolicy::Exact`].
    pub fn shrink_policy(mut self, policy: ShrinkPolicy) -> Self {
        self.shrink_policy = policy;
        self
    }

    /// Builds an empty list.
    ///
    /// # Errors
    ///
    /// [`SequenceError::ZeroCapacity`] if the capacity is zero.
    pub fn build(self) -> Result<ArrayList<T>, SequenceError> {
        if self.capacity == 0 {
            log::debug!("rejecting array list with zero capacity");
            return Err(SequenceError::ZeroCapacity);
        }

        Ok(ArrayList::allocate(self.capacity, self.shrink_policy))
    }
}

// =============================================================================
// ArrayList
// =============================================================================

/// A list backed by a contiguous buffer that doubles when full.
///
/// Capacity is always at least one and never below `len`.
pub struct ArrayList<T> {
    buffer: Box<[MaybeUninit<T>]>,
    len: usize,
    shrink_policy: ShrinkPolicy,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::allocate(DEFAULT_CAPACITY, ShrinkPolicy::default())
    }

    /// Creates an empty list with `capacity` slots.
    ///
    /// # Errors
    ///
    /// [`SequenceError::ZeroCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, SequenceError> {
        ArrayListBuilder::default().capacity(capacity).build()
    }

    /// Returns a builder for configuring capacity and shrink policy.
    pub fn builder() -> ArrayListBuilder<T> {
        ArrayListBuilder::default()
    }

    /// Creates a list holding `elements` in iteration order.
    ///
    /// Equivalent to one [`add`](Self::add) per element on a new list.
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut list = Self::new();
        list.extend(elements);
        list
    }

    fn allocate(capacity: usize, shrink_policy: ShrinkPolicy) -> Self {
        debug_assert!(capacity > 0);
        Self {
            buffer: Box::<[T]>::new_uninit_slice(capacity),
            len: 0,
            shrink_policy,
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

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the list's shrink policy.
    #[inline]
    pub fn shrink_policy(&self) -> ShrinkPolicy {
        self.shrink_policy
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: slots [0, len) are initialised
        unsafe { slice::from_raw_parts(self.buffer.as_ptr().cast::<T>(), self.len) }
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: slots [0, len) are initialised
        unsafe { slice::from_raw_parts_mut(self.buffer.as_mut_ptr().cast::<T>(), self.len) }
    }

    // ========================================================================
    // Insert operations
    // ========================================================================

    /// Appends an element. Amortized O(1).
    #[inline]
    pub fn add(&mut self, element: T) {
        self.grow_if_full();
        self.buffer[self.len].write(element);
        self.len += 1;
    }

    /// Inserts an element before position `index`, shifting later
    /// elements one slot toward the end. O(len - index).
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfBounds`] if `index > len`.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), SequenceError> {
        if index > self.len {
            return Err(SequenceError::out_of_bounds(index, self.len));
        }

        self.grow_if_full();

        // Safety: the buffer has room for len + 1 elements after growing,
        // and ptr::copy handles the overlapping ranges
        unsafe {
            let base = self.buffer.as_mut_ptr();
            ptr::copy(base.add(index), base.add(index + 1), self.len - index);
        }
        self.buffer[index].write(element);
        self.len += 1;

        Ok(())
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the element at `index`. O(1).
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        self.as_slice()
            .get(index)
            .ok_or(SequenceError::out_of_bounds(index, self.len))
    }

    /// Returns a mutable reference to the element at `index`. O(1).
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, SequenceError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(SequenceError::out_of_bounds(index, len))
    }

    /// Replaces the element at `index`, returning the old one. O(1).
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, SequenceError> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, element))
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the list is empty.
    #[inline]
    pub fn first(&self) -> Result<&T, SequenceError> {
        self.as_slice().first().ok_or(SequenceError::Empty)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the list is empty.
    #[inline]
    pub fn last(&self) -> Result<&T, SequenceError> {
        self.as_slice().last().ok_or(SequenceError::Empty)
    }

    /// Returns `true` if any element equals `element`. O(len).
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(element)
    }

    // ========================================================================
    // Remove operations
    // ========================================================================

    /// Removes and returns the element at `index`, shifting later elements
    /// one slot toward the start, then applies the shrink policy.
    /// O(len - index) plus any reallocation.
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T, SequenceError> {
        if index >= self.len {
            return Err(SequenceError::out_of_bounds(index, self.len));
        }

        // Safety: index < len so the slot is initialised; after the read it
        // is treated as uninitialised and overwritten by the shift
        let element = unsafe {
            let base = self.buffer.as_mut_ptr();
            let element = base.add(index).read().assume_init();
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            element
        };
        self.len -= 1;

        self.apply_shrink_policy();
        Ok(element)
    }

    /// Drops every element, then applies the shrink policy once.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);

        // Safety: slots [0, len) were initialised; len is already zero so a
        // panicking destructor cannot cause a double drop
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buffer.as_mut_ptr().cast::<T>(),
                len,
            ));
        }

        self.apply_shrink_policy();
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to elements, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    // ========================================================================
    // Capacity management
    // ========================================================================

    #[inline]
    fn grow_if_full(&mut self) {
        if self.len == self.capacity() {
            let capacity = self.capacity().saturating_mul(2);
            log::trace!("array list grow: {} -> {} slots", self.capacity(), capacity);
            self.reallocate(capacity);
        }
    }

    fn apply_shrink_policy(&mut self) {
        if let Some(capacity) = self.shrink_policy.target_capacity(self.len, self.capacity()) {
            log::trace!(
                "array list shrink ({:?}): {} -> {} slots",
                self.shrink_policy,
                self.capacity(),
                capacity
            );
            self.reallocate(capacity);
        }
    }

    /// Moves the elements into a fresh buffer of `capacity` slots.
    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity > 0 && capacity >= self.len);

        let mut buffer = Box::<[T]>::new_uninit_slice(capacity);
        // Safety: both buffers hold at least len slots and do not overlap.
        // The old buffer is MaybeUninit, so dropping it does not drop the
        // moved elements.
        unsafe {
            ptr::copy_nonoverlapping(self.buffer.as_ptr(), buffer.as_mut_ptr(), self.len);
        }
        self.buffer = buffer;
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert!(self.capacity() >= 1, "capacity dropped to zero");
        assert!(self.len <= self.capacity(), "len exceeds capacity");
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        // Safety: slots [0, len) are initialised and dropped exactly once
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<T> Sequence for ArrayList<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> List<T> for ArrayList<T> {
    fn add(&mut self, element: T) {
        ArrayList::add(self, element);
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), SequenceError> {
        ArrayList::insert(self, index, element)
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, SequenceError> {
        ArrayList::set(self, index, element)
    }

    fn get(&self, index: usize) -> Result<&T, SequenceError> {
        ArrayList::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, SequenceError> {
        ArrayList::get_mut(self, index)
    }

    fn first(&self) -> Result<&T, SequenceError> {
        ArrayList::first(self)
    }

    fn last(&self) -> Result<&T, SequenceError> {
        ArrayList::last(self)
    }

    fn remove(&mut self, index: usize) -> Result<T, SequenceError> {
        ArrayList::remove(self, index)
    }

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        ArrayList::contains(self, element)
    }

    fn clear(&mut self) {
        ArrayList::clear(self);
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::allocate(self.capacity(), self.shrink_policy);
        copy.extend(self.iter().cloned());
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> AsRef<[T]> for ArrayList<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
