//! Sentinel-based link index for node chains.
//!
//! A node's `next` link is an index into the owning structure's storage.
//! The last node in a chain carries a reserved sentinel (e.g. `usize::MAX`)
//! instead of wrapping the index in an `Option`, which keeps a node at
//! `size_of::<T>() + size_of::<Idx>()` plus padding.

/// A copyable node index with a sentinel "none" value.
///
/// # Example
///
/// ```
/// use nexus_sequence::Index;
///
/// let idx: usize = 5;
/// let none: usize = usize::NONE;
///
/// assert!(idx.is_some());
/// assert!(none.is_none());
/// ```
pub trait Index: Copy + Eq {
    /// Sentinel value meaning "no node".
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Converts the sentinel into `None`.
    #[inline]
    fn to_option(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

macro_rules! impl_index_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NONE: Self = <$ty>::MAX;
            }
        )*
    };
}

impl_index_for_unsigned!(u8, u16, u32, u64, usize);
