//! Node storage for the linked structures.
//!
//! [`LinkedList`](crate::LinkedList) and [`LinkedStack`](crate::LinkedStack)
//! never allocate nodes one at a time. Every node lives in a slab-like arena
//! owned by the structure, and links between nodes are arena indices. A
//! removed node's slot goes back to the arena and is reused by the next
//! insert.
//!
//! The default arena is [`slab::Slab`]. Any container that upholds the
//! [`Storage`] contract can be plugged in through `with_storage`.

use crate::Index;
use crate::node::Node;

/// Default node arena for the linked structures.
pub type NodeSlab<T> = slab::Slab<Node<T>>;

/// Slab-like storage with stable indices.
///
/// # Safety
///
/// The linked structures read nodes through the unchecked accessors using
/// indices previously returned by [`insert`](Storage::insert). Implementors
/// must guarantee:
/// - **Stable indices**: an index returned by `insert` stays valid and
///   refers to the same value until it is passed to `remove`/`remove_unchecked`
///   or the storage is cleared
/// - `insert` never returns [`Index::NONE`]
/// - `len` reports the number of occupied slots
pub unsafe trait Storage<T> {
    /// Index type for this storage.
    type Index: Index;

    /// Inserts a value, returning its stable index.
    fn insert(&mut self, value: T) -> Self::Index;

    /// Removes and returns the value at `index`, if present.
    fn remove(&mut self, index: Self::Index) -> Option<T>;

    /// Returns a reference to the value at `index`, if present.
    fn get(&self, index: Self::Index) -> Option<&T>;

    /// Returns a mutable reference to the value at `index`, if present.
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T>;

    /// Returns a reference without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be valid and occupied.
    unsafe fn get_unchecked(&self, index: Self::Index) -> &T;

    /// Returns a mutable reference without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be valid and occupied.
    unsafe fn get_unchecked_mut(&mut self, index: Self::Index) -> &mut T;

    /// Removes an element without checking occupancy.
    ///
    /// # Safety
    ///
    /// `index` must be valid and occupied.
    unsafe fn remove_unchecked(&mut self, index: Self::Index) -> T;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slots are occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every stored value.
    fn clear(&mut self);
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

// Safety: slab keys are stable until removed, and a key is never usize::MAX
// because the slab would need usize::MAX + 1 slots to hand it out.
unsafe impl<T> Storage<T> for slab::Slab<T> {
    type Index = usize;

    #[inline]
    fn insert(&mut self, value: T) -> Self::Index {
        slab::Slab::insert(self, value)
    }

    #[inline]
    fn remove(&mut self, index: Self::Index) -> Option<T> {
        self.try_remove(index)
    }

    #[inline]
    fn get(&self, index: Self::Index) -> Option<&T> {
        slab::Slab::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T> {
        slab::Slab::get_mut(self, index)
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: Self::Index) -> &T {
        unsafe { slab::Slab::get_unchecked(self, index) }
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, index: Self::Index) -> &mut T {
        unsafe { slab::Slab::get_unchecked_mut(self, index) }
    }

    #[inline]
    unsafe fn remove_unchecked(&mut self, index: Self::Index) -> T {
        // slab checks occupancy itself; the caller guarantees it holds
        slab::Slab::remove(self, index)
    }

    #[inline]
    fn len(&self) -> usize {
        slab::Slab::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        slab::Slab::clear(self);
    }
}
