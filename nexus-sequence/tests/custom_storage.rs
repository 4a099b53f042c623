//! Linked structures over a caller-provided arena with `u32` indices.

use std::cell::Cell;
use std::rc::Rc;

use nexus_sequence::{LinkedList, LinkedStack, Node, SequenceError, Storage};

/// Vec-backed arena with a free list, addressed by `u32`.
///
/// `slots_allocated` is shared with the test so it can watch slot reuse
/// after the arena has moved into a list.
struct FreeListArena<T> {
    slots: Vec<Option<T>>,
    free: Vec<u32>,
    len: usize,
    slots_allocated: Rc<Cell<usize>>,
}

impl<T> Default for FreeListArena<T> {
    fn default() -> Self {
        Self::tracked(Rc::default())
    }
}

impl<T> FreeListArena<T> {
    fn tracked(slots_allocated: Rc<Cell<usize>>) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
            slots_allocated,
        }
    }
}

// Safety: a value keeps its slot until removed or cleared, and the tests
// never come close to u32::MAX slots.
unsafe impl<T> Storage<T> for FreeListArena<T> {
    type Index = u32;

    fn insert(&mut self, value: T) -> u32 {
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                self.slots[index as usize] = Some(value);
                index
            }
            None => {
                self.slots.push(Some(value));
                self.slots_allocated.set(self.slots.len());
                (self.slots.len() - 1) as u32
            }
        }
    }

    fn remove(&mut self, index: u32) -> Option<T> {
        let value = self.slots.get_mut(index as usize)?.take()?;
        self.free.push(index);
        self.len -= 1;
        Some(value)
    }

    fn get(&self, index: u32) -> Option<&T> {
        self.slots.get(index as usize)?.as_ref()
    }

    fn get_mut(&mut self, index: u32) -> Option<&mut T> {
        self.slots.get_mut(index as usize)?.as_mut()
    }

    unsafe fn get_unchecked(&self, index: u32) -> &T {
        self.get(index).unwrap()
    }

    unsafe fn get_unchecked_mut(&mut self, index: u32) -> &mut T {
        self.get_mut(index).unwrap()
    }

    unsafe fn remove_unchecked(&mut self, index: u32) -> T {
        self.remove(index).unwrap()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
        self.slots_allocated.set(0);
    }
}

type U32List<T> = LinkedList<T, FreeListArena<Node<T, u32>>, u32>;
type U32Stack<T> = LinkedStack<T, FreeListArena<Node<T, u32>>, u32>;

#[test]
fn list_over_custom_arena() {
    let mut list: U32List<&str> = LinkedList::with_storage(FreeListArena::default());

    list.add("b");
    list.add("d");
    list.insert(0, "a").unwrap();
    list.insert(2, "c").unwrap();

    assert_eq!(list.len(), 4);
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        ["a", "b", "c", "d"]
    );
    assert_eq!(list.remove(3), Ok("d"));
    assert_eq!(list.last(), Ok(&"c"));
    assert_eq!(
        list.get(3),
        Err(SequenceError::IndexOutOfBounds { index: 3, len: 3 })
    );
}

#[test]
fn removed_slots_are_reused() {
    let slots = Rc::new(Cell::new(0));
    let mut list: U32List<u64> =
        LinkedList::with_storage(FreeListArena::tracked(Rc::clone(&slots)));

    for round in 0..100 {
        list.add(round);
        list.insert(0, round + 1).unwrap();
        assert_eq!(list.remove(1), Ok(round));
        assert_eq!(list.remove(0), Ok(round + 1));
    }

    assert!(list.is_empty());
    assert_eq!(slots.get(), 2);
}

#[test]
fn with_storage_clears_existing_values() {
    let slots = Rc::new(Cell::new(0));
    let mut arena = FreeListArena::tracked(Rc::clone(&slots));
    arena.insert(Node::new(1));
    arena.insert(Node::new(2));
    assert_eq!(slots.get(), 2);

    let mut list: U32List<i32> = LinkedList::with_storage(arena);

    assert!(list.is_empty());
    assert_eq!(slots.get(), 0);

    list.add(3);
    assert_eq!(list.first(), Ok(&3));
}

#[test]
fn stack_over_custom_arena() {
    let mut stack: U32Stack<String> = LinkedStack::with_storage(FreeListArena::default());

    stack.push("one".to_string());
    stack.push("two".to_string());
    assert_eq!(stack.try_push(None), Err(SequenceError::MissingElement));

    assert_eq!(stack.len(), 2);
    assert_eq!(
        stack.iter().map(String::as_str).collect::<Vec<_>>(),
        ["two", "one"]
    );
    assert_eq!(stack.pop().as_deref(), Ok("two"));
    assert_eq!(stack.pop().as_deref(), Ok("one"));
    assert_eq!(stack.pop(), Err(SequenceError::Empty));
}

#[test]
fn detached_node_has_no_successor() {
    let node: Node<char, u32> = Node::new('a');

    assert_eq!(node.element(), &'a');
    assert_eq!(node.next(), None);
}
