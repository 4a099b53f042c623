//! Index-addressed sequences: linked list, array list, and stack.
//!
//! Three collections behind one small contract. Every fallible operation
//! returns a [`SequenceError`] and leaves the collection exactly as it was.
//!
//! # Design
//!
//! Linked structures don't allocate a box per node. Nodes live in an arena
//! and link to each other by index:
//!
//! ```text
//! Storage (Slab)          - owns nodes, hands out stable indices
//! LinkedList/LinkedStack  - hold head/tail/top indices, walk `next` links
//! ```
//!
//! This keeps nodes close together in memory, reuses freed slots, and makes
//! dropping a long chain iterative rather than recursive. The arena is
//! [`slab::Slab`] by default; anything implementing [`Storage`] can replace
//! it, including storage addressed by narrower indices (`u32`, `u16`).
//!
//! The array list keeps elements in a single contiguous buffer and decides
//! how to grow and shrink it itself. Growth doubles; shrinking follows a
//! [`ShrinkPolicy`].
//!
//! # Quick Start
//!
//! ```
//! use nexus_sequence::{ArrayList, LinkedList, LinkedStack, SequenceError};
//!
//! let mut list = LinkedList::new();
//! list.add("b");
//! list.insert(0, "a").unwrap();
//! assert_eq!(list.get(1), Ok(&"b"));
//! assert_eq!(
//!     list.get(2),
//!     Err(SequenceError::IndexOutOfBounds { index: 2, len: 2 })
//! );
//!
//! let mut array = ArrayList::of([1, 2, 3]);
//! assert_eq!(array.remove(0), Ok(1));
//! assert_eq!(array.as_slice(), &[2, 3]);
//!
//! let mut stack = LinkedStack::new();
//! stack.push('x');
//! assert_eq!(stack.pop(), Ok('x'));
//! assert_eq!(stack.pop(), Err(SequenceError::Empty));
//! ```
//!
//! # Data Structures
//!
//! | Structure | Storage | Append | Insert/remove at i | Get at i |
//! |-----------|---------|--------|--------------------|----------|
//! | [`LinkedList`] | Node arena | O(1) | O(i) | O(i) |
//! | [`ArrayList`] | Contiguous buffer | O(1) amortized | O(n - i) | O(1) |
//! | [`LinkedStack`] | Node arena | O(1) push | - | - |
//!
//! # Traits
//!
//! ```text
//! Sequence        - len, is_empty
//!     │
//!     ├── List<T>     - LinkedList, ArrayList
//!     │
//!     └── Stack<T>    - LinkedStack
//! ```
//!
//! The same operations are available as inherent methods; import the traits
//! only when writing code generic over the collection.

#![warn(missing_docs)]

pub mod array_list;
pub mod error;
pub mod index;
pub mod linked_list;
pub mod node;
pub mod sequence;
pub mod stack;
pub mod storage;

#[cfg(test)]
mod bench_support;

pub use array_list::{ArrayList, ArrayListBuilder, DEFAULT_CAPACITY, ShrinkPolicy};
pub use error::SequenceError;
pub use index::Index;
pub use linked_list::LinkedList;
pub use node::Node;
pub use sequence::{List, Sequence, Stack};
pub use stack::LinkedStack;
pub use storage::{NodeSlab, Storage};
