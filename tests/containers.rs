use std::ops::Bound;

use grove::{Map, Set, Stack, Vector};

#[test]
fn map_iterates_in_key_order_regardless_of_insertion_order() {
    let mut map = Map::new();

    map.insert(23, "world");
    map.insert(1, "hello");

    let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(entries, [(1, "hello"), (23, "world")]);

    map.insert(2, "hey");

    let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(entries, [(1, "hello"), (2, "hey"), (23, "world")]);
}

#[test]
fn map_removal_shrinks_the_map() {
    let mut map = Map::new();

    map.insert(1, "hello");
    map.insert(23, "world");

    assert_eq!(map.remove(&23), Some((23, "world")));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&23), None);
    assert_eq!(map.get(&1), Some(&"hello"));
}

#[test]
fn bound_queries_step_over_absent_keys() {
    let mut map = Map::new();

    map.insert(1, "hello");
    map.insert(23, "world");

    assert_eq!(map.succ_or_eq(&22), Some((&23, &"world")));
    assert_eq!(map.succ(&1), Some((&23, &"world")));
    assert_eq!(map.succ(&23), None);
    assert_eq!(map.pred(&23), Some((&1, &"hello")));
    assert_eq!(map.pred_or_eq(&0), None);
}

#[test]
fn mutable_lookups_write_through() {
    let mut map: Map<_, _> = (0..10).map(|i| (i, 0)).collect();

    *map.get_mut(&3).unwrap() = 31;
    *map.succ_mut(&3).unwrap().1 = 41;
    *map.pred_mut(&3).unwrap().1 = 21;
    *map.succ_or_eq_mut(&7).unwrap().1 = 71;
    *map.pred_or_eq_mut(&5).unwrap().1 = 51;
    *map.get_min_mut().unwrap().1 = 1;
    *map.get_max_mut().unwrap().1 = 91;

    for (key, value) in map.iter_mut() {
        *value += *key;
    }

    assert_eq!(map.get(&0), Some(&1));
    assert_eq!(map.get(&2), Some(&23));
    assert_eq!(map.get(&3), Some(&34));
    assert_eq!(map.get(&4), Some(&45));
    assert_eq!(map.get(&5), Some(&56));
    assert_eq!(map.get(&7), Some(&78));
    assert_eq!(map.get(&9), Some(&100));
    assert_eq!(map.get(&6), Some(&6));

    let mut it = map.iter_mut();
    let (key, value) = it.next_back().unwrap();
    assert_eq!((*key, *value), (9, 100));
    *value = 9;
    let (key, value) = it.next().unwrap();
    assert_eq!((*key, *value), (0, 1));
    *value = 0;
    drop(it);

    for (_, value) in map.range_mut(Bound::Included(&6), Bound::Excluded(&8)) {
        *value = 0;
    }

    assert_eq!(map.get(&0), Some(&0));
    assert_eq!(map.get(&6), Some(&0));
    assert_eq!(map.get(&7), Some(&0));
    assert_eq!(map.get(&8), Some(&8));
    assert_eq!(map.get(&9), Some(&9));
}

#[test]
fn map_replaces_values_but_never_keys() {
    let mut map = Map::new();

    assert_eq!(map.insert(1, "a"), None);
    assert_eq!(map.insert(1, "b"), Some("a"));
    assert_eq!(map.len(), 1);
    assert_eq!(map[&1], "b");
}

#[test]
fn map_range_respects_both_bounds() {
    let map: Map<_, _> = (0..10).map(|i| (i, i * i)).collect();

    let keys: Vec<_> = map
        .range(Bound::Excluded(&2), Bound::Included(&6))
        .map(|(k, _)| *k)
        .collect();
    assert_eq!(keys, [3, 4, 5, 6]);
}

#[test]
fn set_deduplicates() {
    let set: Set<_> = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3].iter().copied().collect();

    assert_eq!(set.len(), 7);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 9]);
}

#[test]
fn vector_removal_shifts_the_tail() {
    let mut v = Vector::new();

    v.push(1);
    v.push(2);
    v.push(3);

    assert_eq!(v.remove(1), 2);
    assert_eq!(&v[..], [1, 3]);
}

#[test]
fn vector_growth_moves_every_value() {
    let mut v = Vector::with_capacity(4);
    for i in 0..4 { v.push(i); }

    let before = v.as_ptr();
    v.push(4);

    // The capacity doubled, so the buffer was reallocated and the old
    // addresses are gone.
    assert!(v.capacity() >= 8);
    assert_ne!(v.as_ptr(), before);
    assert_eq!(&v[..], [0, 1, 2, 3, 4]);
}

#[test]
fn stack_sees_only_the_back_of_its_sequence() {
    let mut stack = Stack::from_inner(vec![1, 2, 3]);

    stack.push(4);
    assert_eq!(stack.top(), Some(&4));
    assert_eq!(stack.pop(), Some(4));
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.into_inner(), [1, 2]);
}

#[test]
fn comparators_other_than_natural_order_drive_the_tree() {
    use compare::{natural, Compare};

    let mut map = Map::with_cmp(natural().rev());

    map.insert(1, "a");
    map.insert(2, "b");
    map.insert(3, "c");

    assert_eq!(map.get_min(), Some((&3, &"c")));
    assert_eq!(map.get_max(), Some((&1, &"a")));

    let keys: Vec<_> = map.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, [3, 2, 1]);
}
