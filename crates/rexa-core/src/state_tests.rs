use crate::{IdAllocator, StateSet};

#[test]
fn allocator_is_dense_and_monotonic() {
    let mut ids = IdAllocator::new();
    assert_eq!(ids.next_id(), 0);
    assert_eq!(ids.next_id(), 1);
    assert_eq!(ids.next_id(), 2);
    assert_eq!(ids.allocated(), 3);
}

#[test]
fn separate_allocators_do_not_share_counters() {
    let mut a = IdAllocator::new();
    let mut b = IdAllocator::new();
    a.next_id();
    a.next_id();
    assert_eq!(b.next_id(), 0);
}

#[test]
fn key_is_independent_of_insertion_order() {
    let forward: StateSet = [1, 5, 9].into_iter().collect();
    let backward: StateSet = [9, 5, 1].into_iter().collect();

    assert_eq!(forward.key(), backward.key());
    assert_eq!(forward.key().to_string(), "1,5,9");
}

#[test]
fn empty_key_displays_as_empty_string() {
    let set = StateSet::new();
    assert!(set.key().is_empty());
    assert_eq!(set.key().to_string(), "");
}

#[test]
fn union_and_membership() {
    let mut set = StateSet::singleton(3);
    assert!(!set.insert(3));
    assert!(set.insert(1));

    let other: StateSet = [2, 3].into_iter().collect();
    set.union_with(&other);

    assert_eq!(set.len(), 3);
    assert!(set.contains(2));
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
}
