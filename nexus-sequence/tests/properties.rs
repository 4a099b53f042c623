use nexus_sequence::{
    ArrayList, LinkedList, LinkedStack, List, Sequence, SequenceError, ShrinkPolicy, Stack,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// =============================================================================
// Shared List contract, run against both implementations
// =============================================================================

fn filled<L: List<i32> + Default>(n: i32) -> L {
    let mut list = L::default();
    for value in 0..n {
        list.add(value);
    }
    list
}

fn snapshot<L: List<i32>>(list: &L) -> Vec<i32> {
    (0..list.len()).map(|i| *list.get(i).unwrap()).collect()
}

fn insert_lands_at_index<L: List<i32> + Default>() {
    const N: i32 = 6;

    for index in 0..=N as usize {
        let mut list: L = filled(N);
        let before = snapshot(&list);

        list.insert(index, 100).unwrap();

        assert_eq!(list.len(), before.len() + 1);
        assert_eq!(list.get(index), Ok(&100));
        if index < before.len() {
            assert_eq!(list.get(index + 1), Ok(&before[index]));
        }
    }
}

fn insert_then_remove_restores<L: List<i32> + Default>() {
    const N: i32 = 5;

    for index in 0..=N as usize {
        let mut list: L = filled(N);
        let before = snapshot(&list);

        list.insert(index, -1).unwrap();
        assert_eq!(list.remove(index), Ok(-1));

        assert_eq!(snapshot(&list), before);
    }
}

fn out_of_range_leaves_list_unchanged<L: List<i32> + Default>() {
    let mut list: L = filled(3);

    assert_eq!(
        list.get(3),
        Err(SequenceError::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert!(list.get_mut(3).is_err());
    assert!(list.set(3, 9).is_err());
    assert!(list.remove(3).is_err());
    assert!(list.insert(4, 9).is_err());
    assert!(list.get(usize::MAX).is_err());

    assert_eq!(snapshot(&list), vec![0, 1, 2]);
}

fn empty_list_errors<L: List<i32> + Default>() {
    let mut list = L::default();

    assert!(list.is_empty());
    assert_eq!(
        list.get(0),
        Err(SequenceError::IndexOutOfBounds { index: 0, len: 0 })
    );
    assert_eq!(list.first(), Err(SequenceError::Empty));
    assert_eq!(list.last(), Err(SequenceError::Empty));
    assert!(list.remove(0).is_err());
    assert!(!list.contains(&0));
}

fn set_and_get_mut<L: List<i32> + Default>() {
    let mut list: L = filled(3);

    assert_eq!(list.set(1, 10), Ok(1));
    *list.get_mut(2).unwrap() += 20;

    assert_eq!(snapshot(&list), vec![0, 10, 22]);
    assert_eq!(list.first(), Ok(&0));
    assert_eq!(list.last(), Ok(&22));
    assert!(list.contains(&10));
    assert!(!list.contains(&1));
}

fn clear_then_reuse<L: List<i32> + Default>() {
    let mut list: L = filled(4);

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);

    list.add(7);
    list.insert(0, 6).unwrap();
    assert_eq!(snapshot(&list), vec![6, 7]);
}

/// Random adds, inserts, removes, sets and clears checked against a `Vec`.
fn matches_vec_model<L: List<i32> + Default>(seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut list = L::default();
    let mut model: Vec<i32> = Vec::new();
    let mut successful_adds = 0usize;
    let mut successful_removes = 0usize;

    for step in 0..5_000 {
        let value = step as i32;
        match rng.gen_range(0..100) {
            0..=29 => {
                list.add(value);
                model.push(value);
                successful_adds += 1;
            }
            30..=54 => {
                // Occasionally one past the valid range
                let index = rng.gen_range(0..=model.len() + 1);
                let result = list.insert(index, value);
                if index <= model.len() {
                    assert_eq!(result, Ok(()));
                    model.insert(index, value);
                    successful_adds += 1;
                } else {
                    assert_eq!(
                        result,
                        Err(SequenceError::IndexOutOfBounds {
                            index,
                            len: model.len()
                        })
                    );
                }
            }
            55..=89 => {
                let index = rng.gen_range(0..=model.len());
                let result = list.remove(index);
                if index < model.len() {
                    assert_eq!(result, Ok(model.remove(index)));
                    successful_removes += 1;
                } else {
                    assert!(result.is_err());
                }
            }
            90..=98 => {
                if !model.is_empty() {
                    let index = rng.gen_range(0..model.len());
                    let old = std::mem::replace(&mut model[index], value);
                    assert_eq!(list.set(index, value), Ok(old));
                }
            }
            _ => {
                successful_removes += model.len();
                list.clear();
                model.clear();
            }
        }

        assert_eq!(list.len(), model.len());
        assert_eq!(list.len(), successful_adds - successful_removes);
        assert_eq!(list.is_empty(), model.is_empty());
        match model.first() {
            Some(first) => assert_eq!(list.first(), Ok(first)),
            None => assert_eq!(list.first(), Err(SequenceError::Empty)),
        }
        match model.last() {
            Some(last) => assert_eq!(list.last(), Ok(last)),
            None => assert_eq!(list.last(), Err(SequenceError::Empty)),
        }
    }

    assert_eq!(snapshot(&list), model);
}

macro_rules! list_contract_tests {
    ($module:ident, $ty:ty) => {
        mod $module {
            use super::*;

            #[test]
            fn insert_lands_at_index() {
                super::insert_lands_at_index::<$ty>();
            }

            #[test]
            fn insert_then_remove_restores() {
                super::insert_then_remove_restores::<$ty>();
            }

            #[test]
            fn out_of_range_leaves_list_unchanged() {
                super::out_of_range_leaves_list_unchanged::<$ty>();
            }

            #[test]
            fn empty_list_errors() {
                super::empty_list_errors::<$ty>();
            }

            #[test]
            fn set_and_get_mut() {
                super::set_and_get_mut::<$ty>();
            }

            #[test]
            fn clear_then_reuse() {
                super::clear_then_reuse::<$ty>();
            }

            #[test]
            fn matches_vec_model() {
                init_logging();
                super::matches_vec_model::<$ty>(12345);
                super::matches_vec_model::<$ty>(67890);
            }
        }
    };
}

list_contract_tests!(linked_list, LinkedList<i32>);
list_contract_tests!(array_list, ArrayList<i32>);

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn linked_list_of_then_remove_middle() {
    let mut list = LinkedList::of([43, 233, 54]);

    assert_eq!(list.len(), 3);
    assert_eq!(list.get(0), Ok(&43));
    assert_eq!(list.get(2), Ok(&54));

    assert_eq!(list.remove(1), Ok(233));
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(1), Ok(&54));
}

#[test]
fn array_list_grows_past_initial_capacity() {
    init_logging();

    let mut list = ArrayList::with_capacity(2).unwrap();
    for value in [15, 69, 58, 78, 100] {
        list.add(value);
    }

    assert_eq!(list.as_slice(), &[15, 69, 58, 78, 100]);
    assert!(list.capacity() > 2);
}

#[test]
fn array_list_rejects_zero_capacity() {
    init_logging();

    assert!(matches!(
        ArrayList::<u8>::with_capacity(0),
        Err(SequenceError::ZeroCapacity)
    ));
    assert!(matches!(
        ArrayList::<u8>::builder().capacity(0).build(),
        Err(SequenceError::ZeroCapacity)
    ));
}

#[test]
fn array_list_capacity_bounds_hold_under_every_policy() {
    init_logging();

    for policy in [
        ShrinkPolicy::Exact,
        ShrinkPolicy::Amortized,
        ShrinkPolicy::Retain,
    ] {
        let mut rng = SmallRng::seed_from_u64(12345);
        let mut list = ArrayList::builder()
            .capacity(3)
            .shrink_policy(policy)
            .build()
            .unwrap();
        let mut model = Vec::new();

        for step in 0..2_000u32 {
            if model.is_empty() || rng.gen_bool(0.55) {
                let index = rng.gen_range(0..=model.len());
                list.insert(index, step).unwrap();
                model.insert(index, step);
            } else {
                let index = rng.gen_range(0..model.len());
                assert_eq!(list.remove(index), Ok(model.remove(index)));
            }

            assert!(list.capacity() >= 1);
            assert!(list.len() <= list.capacity());
            assert_eq!(list.as_slice(), model.as_slice());
        }
    }
}

#[test]
fn stack_pops_in_reverse() {
    let mut stack = LinkedStack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);

    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.pop(), Ok(1));
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(SequenceError::Empty));
}

#[test]
fn stack_len_tracks_pushes_and_pops() {
    let mut rng = SmallRng::seed_from_u64(12345);
    let mut stack: LinkedStack<u32> = LinkedStack::default();
    let mut model = Vec::new();

    for step in 0..5_000u32 {
        if rng.gen_bool(0.5) {
            Stack::push(&mut stack, step);
            model.push(step);
        } else {
            let expected = model.pop().ok_or(SequenceError::Empty);
            assert_eq!(Stack::pop(&mut stack), expected);
        }

        assert_eq!(Sequence::len(&stack), model.len());
        assert_eq!(stack.peek().ok(), model.last());
    }
}

#[test]
fn stack_try_push_through_trait() {
    fn push_all<S: Stack<&'static str>>(stack: &mut S, items: [Option<&'static str>; 3]) -> usize {
        items
            .into_iter()
            .filter(|item| stack.try_push(*item).is_ok())
            .count()
    }

    let mut stack = LinkedStack::new();
    let pushed = push_all(&mut stack, [Some("a"), None, Some("b")]);

    assert_eq!(pushed, 2);
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek(), Ok(&"b"));
}

#[test]
fn errors_format_for_display() {
    let mut list = LinkedList::of(['x']);
    let err = list.remove(5).unwrap_err();
    assert_eq!(err.to_string(), "index 5 out of bounds for length 1");

    let err: Box<dyn std::error::Error> = Box::new(LinkedStack::<u8>::new().pop().unwrap_err());
    assert_eq!(err.to_string(), "sequence is empty");
}

#[test]
fn collections_interoperate_with_iterators() {
    let linked: LinkedList<i32> = (1..=4).collect();
    let array: ArrayList<i32> = linked.iter().map(|v| v * 10).collect();
    let stack: LinkedStack<i32> = array.iter().copied().collect();

    assert_eq!(array.as_slice(), &[10, 20, 30, 40]);
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![40, 30, 20, 10]);

    let drained: Vec<i32> = linked.into_iter().collect();
    assert_eq!(drained, vec![1, 2, 3, 4]);
}
