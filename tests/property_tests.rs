//! Property-based tests using proptest
//!
//! These tests drive the heap with random sequences of operations, mirror
//! them on a plain `Vec`, and check that the heap invariant holds under the
//! current polarity after every step.

use polarity_heap::{HeapError, Polarity, PolarityHeap};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    Pop,
    Remove(i32),
    ReplaceKey(i32, i32),
    Toggle,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-50i32..50).prop_map(Op::Insert),
        2 => Just(Op::Pop),
        2 => (-50i32..50).prop_map(Op::Remove),
        2 => ((-50i32..50), (-50i32..50)).prop_map(|(old, new)| Op::ReplaceKey(old, new)),
        1 => Just(Op::Toggle),
    ]
}

fn polarity_strategy() -> impl Strategy<Value = Polarity> {
    prop_oneof![Just(Polarity::MinFirst), Just(Polarity::MaxFirst)]
}

/// Checks that no parent has lower priority than either of its children.
fn check_invariant(heap: &PolarityHeap<i32>) -> Result<(), TestCaseError> {
    let items = heap.as_slice();
    for child in 1..items.len() {
        let parent = (child - 1) / 2;
        match heap.polarity() {
            Polarity::MinFirst => {
                prop_assert!(items[parent] <= items[child]);
            }
            Polarity::MaxFirst => {
                prop_assert!(items[parent] >= items[child]);
            }
        }
    }
    Ok(())
}

fn expected_top(model: &[i32], polarity: Polarity) -> Option<i32> {
    match polarity {
        Polarity::MinFirst => model.iter().min().copied(),
        Polarity::MaxFirst => model.iter().max().copied(),
    }
}

fn apply(heap: &mut PolarityHeap<i32>, model: &mut Vec<i32>, op: Op) -> Result<(), TestCaseError> {
    match op {
        Op::Insert(item) => {
            heap.insert(item);
            model.push(item);
        }
        Op::Pop => match expected_top(model, heap.polarity()) {
            Some(expected) => {
                prop_assert_eq!(heap.pop(), Ok(expected));
                let pos = model.iter().position(|&x| x == expected).unwrap();
                model.swap_remove(pos);
            }
            None => {
                prop_assert_eq!(heap.pop(), Err(HeapError::EmptyHeap));
            }
        },
        Op::Remove(item) => {
            let before = heap.to_vec();
            if model.is_empty() {
                prop_assert_eq!(heap.remove(&item), Err(HeapError::EmptyHeap));
            } else if let Some(pos) = model.iter().position(|&x| x == item) {
                prop_assert_eq!(heap.remove(&item), Ok(item));
                model.swap_remove(pos);
            } else {
                prop_assert_eq!(heap.remove(&item), Err(HeapError::ElementNotFound));
                prop_assert_eq!(heap.to_vec(), before);
            }
        }
        Op::ReplaceKey(old, new) => {
            if model.is_empty() {
                prop_assert_eq!(heap.replace_key(&old, new), Err(HeapError::EmptyHeap));
            } else if let Some(pos) = model.iter().position(|&x| x == old) {
                prop_assert_eq!(heap.replace_key(&old, new), Ok(Some(old)));
                model[pos] = new;
            } else {
                let before = heap.to_vec();
                prop_assert_eq!(heap.replace_key(&old, new), Ok(None));
                prop_assert_eq!(heap.to_vec(), before);
            }
        }
        Op::Toggle => {
            let polarity = heap.polarity();
            heap.toggle();
            prop_assert_eq!(heap.polarity(), polarity.toggled());
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn invariant_holds_after_every_operation(
        polarity in polarity_strategy(),
        capacity in 0usize..4,
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        let mut heap = PolarityHeap::with_capacity_and_polarity(capacity, polarity);
        let mut model = Vec::new();

        for op in ops {
            apply(&mut heap, &mut model, op)?;
            check_invariant(&heap)?;
            prop_assert_eq!(heap.len(), model.len());
            prop_assert_eq!(heap.is_empty(), model.is_empty());
            prop_assert_eq!(heap.top().ok().copied(), expected_top(&model, heap.polarity()));
        }

        let mut items = heap.into_vec();
        items.sort();
        model.sort();
        prop_assert_eq!(items, model);
    }

    #[test]
    fn pops_follow_polarity(
        polarity in polarity_strategy(),
        items in prop::collection::vec(any::<i32>(), 0..100),
    ) {
        let mut heap = PolarityHeap::with_capacity_and_polarity(1, polarity);
        for &item in &items {
            heap.insert(item);
        }

        let mut expected = items;
        expected.sort();
        if polarity == Polarity::MaxFirst {
            expected.reverse();
        }

        let mut popped = Vec::new();
        while let Ok(item) = heap.pop() {
            popped.push(item);
        }
        prop_assert_eq!(popped, expected);
    }

    #[test]
    fn toggle_twice_restores_pop_order(
        polarity in polarity_strategy(),
        items in prop::collection::vec(-20i32..20, 0..60),
    ) {
        let heap = PolarityHeap::from_vec_and_comparator(items, polarity, compare::natural());
        let mut toggled = heap.clone();
        toggled.toggle();
        toggled.toggle();

        prop_assert_eq!(toggled.polarity(), polarity);
        prop_assert_eq!(toggled.into_sorted_vec(), heap.into_sorted_vec());
    }

    #[test]
    fn growth_keeps_every_item(
        capacity in 1usize..8,
        items in prop::collection::vec(any::<i32>(), 0..64),
    ) {
        let mut heap = PolarityHeap::with_capacity(capacity);
        for (inserted, &item) in items.iter().enumerate() {
            heap.insert(item);
            prop_assert_eq!(heap.len(), inserted + 1);
            prop_assert_eq!(heap.to_vec().len(), heap.len());
            prop_assert!(heap.capacity() >= heap.len());
        }

        let mut stored = heap.to_vec();
        stored.sort();
        let mut expected = items;
        expected.sort();
        prop_assert_eq!(stored, expected);
    }
}
