use quickcheck_macros::quickcheck;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

use grove::{Map, Set, Stack, Vector};

#[quickcheck]
fn map_lookups_agree_with_model(entries: Vec<(u32, u32)>, absent: u32) -> bool {
    let map: Map<_, _> = entries.iter().cloned().collect();
    let model: BTreeMap<_, _> = entries.iter().cloned().collect();

    map.len() == model.len()
        && map.iter().eq(model.iter())
        && entries.iter().all(|(k, _)| map.get(k) == model.get(k))
        && map.get(&absent) == model.get(&absent)
}

#[quickcheck]
fn map_removals_agree_with_model(entries: Vec<(u32, u32)>, removals: Vec<u32>) -> bool {
    let mut map: Map<_, _> = entries.iter().cloned().collect();
    let mut model: BTreeMap<_, _> = entries.iter().cloned().collect();

    for key in removals {
        if map.remove(&key) != model.remove_entry(&key) { return false; }
    }

    map.len() == model.len() && map.iter().eq(model.iter())
}

#[quickcheck]
fn map_iteration_is_sorted_and_sized(map: Map<u32, u32>) -> bool {
    let entries: Vec<_> = map.iter().collect();

    map.iter().size_hint() == (map.len(), Some(map.len()))
        && entries.windows(2).all(|w| w[0].0 < w[1].0)
        && map.iter().rev().eq(entries.into_iter().rev())
}

#[quickcheck]
fn map_extremes_match_iteration(map: Map<u32, u32>) -> bool {
    map.get_min() == map.iter().next() && map.get_max() == map.iter().next_back()
}

#[quickcheck]
fn remove_min_drains_in_ascending_order(mut map: Map<u32, u32>) -> bool {
    let expected: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();

    let mut drained = Vec::with_capacity(expected.len());
    while let Some(entry) = map.remove_min() { drained.push(entry); }

    drained == expected && map.is_empty()
}

#[quickcheck]
fn range_matches_filtered_iteration(map: Map<u32, u32>, min: u32, max: u32) -> bool {
    map.range(Bound::Included(&min), Bound::Excluded(&max))
        .eq(map.iter().filter(|(k, _)| min <= **k && **k < max))
        && map.range(Bound::Excluded(&min), Bound::<&u32>::Unbounded)
            .eq(map.iter().filter(|(k, _)| **k > min))
        && map.range(Bound::<&u32>::Unbounded, Bound::Included(&max))
            .eq(map.iter().filter(|(k, _)| **k <= max))
}

#[quickcheck]
fn neighbor_queries_agree_with_linear_search(set: Set<u32>, key: u32) -> bool {
    let items: Vec<u32> = set.iter().copied().collect();

    set.pred(&key).copied() == items.iter().copied().filter(|&i| i < key).last()
        && set.pred_or_eq(&key).copied() == items.iter().copied().filter(|&i| i <= key).last()
        && set.succ(&key).copied() == items.iter().copied().find(|&i| i > key)
        && set.succ_or_eq(&key).copied() == items.iter().copied().find(|&i| i >= key)
}

#[quickcheck]
fn entry_counts_like_a_model(keys: Vec<u8>) -> bool {
    let mut map = Map::new();
    let mut model = BTreeMap::new();

    for key in keys {
        *map.entry(key).or_insert(0) += 1;
        *model.entry(key).or_insert(0) += 1;
    }

    map.iter().eq(model.iter())
}

#[quickcheck]
fn set_membership_agrees_with_model(items: Vec<u32>, removals: Vec<u32>) -> bool {
    let mut set: Set<_> = items.iter().copied().collect();
    let mut model: BTreeSet<_> = items.iter().copied().collect();

    for item in removals {
        if set.remove(&item) != model.remove(&item) { return false; }
    }

    set.len() == model.len() && set.iter().eq(model.iter())
}

#[quickcheck]
fn vector_round_trips_through_iteration(values: Vec<u32>) -> bool {
    let vector: Vector<_> = values.iter().copied().collect();

    vector[..] == values[..] && vector.len() == values.len() && vector.into_iter().eq(values)
}

#[quickcheck]
fn vector_insert_then_remove_restores(values: Vec<u32>, index: usize, value: u32) -> bool {
    let index = index % (values.len() + 1);

    let mut vector: Vector<_> = values.iter().copied().collect();
    vector.insert(index, value);

    vector.remove(index) == value && vector[..] == values[..]
}

#[quickcheck]
fn drain_matches_the_std_vec(values: Vec<u32>, a: usize, b: usize) -> bool {
    let mut a = a % (values.len() + 1);
    let mut b = b % (values.len() + 1);
    if a > b { std::mem::swap(&mut a, &mut b); }

    let mut vector: Vector<_> = values.iter().copied().collect();
    let mut model = values;

    vector.drain(a..b).eq(model.drain(a..b)) && vector[..] == model[..]
}

#[quickcheck]
fn stack_pops_in_reverse_push_order(values: Vec<u32>) -> bool {
    let mut stack: Stack<u32> = Stack::new();

    for &value in &values {
        stack.push(value);
        if stack.top() != Some(&value) { return false; }
    }

    let mut popped = Vec::with_capacity(values.len());
    while let Some(value) = stack.pop() { popped.push(value); }

    popped.iter().rev().eq(values.iter()) && stack.is_empty()
}
