extern crate std;

use std::vec::Vec;

use core::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::linked_list::LinkedList;

const ROUNDS: usize = 2_000;

/// Applies random operations to a list and to a `Vec` model and checks that both
/// agree and that the chain stays consistent after every step.
fn run_against_model(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut list = LinkedList::new();
    let mut model: Vec<i32> = Vec::new();

    for _ in 0..ROUNDS {
        let value = rng.random_range(0..16);
        match rng.random_range(0..8) {
            0 | 1 => {
                list.add(value);
                model.push(value);
            }
            2 => {
                let expected = (!model.is_empty()).then(|| model.remove(0));
                assert_eq!(list.pop(), expected);
            }
            3 => {
                let position = model.iter().position(|existing| *existing == value);
                assert_eq!(list.remove_where(i32::cmp, &value), position.is_some());
                if let Some(position) = position {
                    model.remove(position);
                }
            }
            4 => {
                let position = model
                    .iter()
                    .position(|existing| value <= *existing)
                    .unwrap_or(model.len());
                list.ordered_insert(i32::cmp, value);
                model.insert(position, value);
            }
            5 => {
                let count = rng.random_range(0..4);
                let mut segment: LinkedList<i32> = (0..count).map(|i| value + i).collect();
                list.transplant(&mut segment);
                model.extend((0..count).map(|i| value + i));
                assert!(segment.is_empty());
                segment.assert_invariants();
            }
            6 => {
                let popped = list.pop_where(|element, arg| element.cmp(arg), &value);
                let position = model.iter().position(|existing| *existing == value);
                assert_eq!(popped.len(), usize::from(position.is_some()));
                if let Some(position) = position {
                    model.remove(position);
                }
            }
            _ => {
                if rng.random_range(0..10) == 0 {
                    list.clear();
                    model.clear();
                } else {
                    assert_eq!(
                        list.matches(|element, arg| element.cmp(arg), &value),
                        model.contains(&value)
                    );
                }
            }
        }

        list.assert_invariants();
        assert_eq!(list.len(), model.len());
        assert_eq!(list.head(), model.first());
        assert_eq!(list.tail(), model.last());
    }

    assert!(list.iter().eq(model.iter()));
}

#[test]
fn test_random_operations_keep_invariants() {
    for seed in 0..8 {
        run_against_model(seed);
    }
}

#[test]
fn test_fifo_order_for_random_batches() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut list = LinkedList::new();

    for _ in 0..50 {
        let batch: Vec<u32> = (0..rng.random_range(0..32)).map(|_| rng.random()).collect();
        for value in &batch {
            list.add(*value);
        }
        for value in &batch {
            assert_eq!(list.pop(), Some(*value));
        }
        assert!(list.is_empty());
        list.assert_invariants();
    }
}

#[test]
fn test_select_matches_filter() {
    let mut rng = StdRng::seed_from_u64(3);
    let list: LinkedList<i32> = (0..256).map(|_| rng.random_range(0..10)).collect();

    for target in 0..10 {
        let selected = list.select(|element, arg| element.cmp(arg), &target);
        selected.assert_invariants();
        assert_eq!(
            selected.len(),
            list.iter().filter(|element| **element == target).count()
        );
        assert!(selected.iter().all(|element| **element == target));
    }
    assert_eq!(list.len(), 256);
}

#[test]
fn test_ordered_insert_sorts() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut list = LinkedList::new();
    let mut expected: Vec<i64> = Vec::new();

    for _ in 0..500 {
        let value = rng.random_range(-1000..1000);
        list.ordered_insert(|a: &i64, b: &i64| a.cmp(b), value);
        expected.push(value);
    }
    expected.sort();

    assert!(list.iter().eq(expected.iter()));
    assert!(
        list.iter()
            .zip(list.iter().skip(1))
            .all(|(a, b)| a.cmp(b) != Ordering::Greater)
    );
    list.assert_invariants();
}
