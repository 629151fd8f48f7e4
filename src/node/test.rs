use compare::{natural, Natural};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use std::collections::BTreeMap;

use super::*;

fn size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| 1 + size(&node.left) + size(&node.right))
}

// Checks the ordering and red-black structure of a subtree and returns its
// black height.
fn check_node<K: Ord, V>(link: &Link<K, V>, min: Option<&K>, max: Option<&K>) -> usize {
    match *link {
        None => 1,
        Some(ref node) => {
            if let Some(min) = min { assert!(*min < node.key, "unsorted"); }
            if let Some(max) = max { assert!(node.key < *max, "unsorted"); }

            assert!(!is_red(&node.right), "right-leaning red link");
            if node.color == Color::Red {
                assert!(!is_red(&node.left), "red link below a red link");
            }

            let left = check_node(&node.left, min, Some(&node.key));
            let right = check_node(&node.right, Some(&node.key), max);
            assert_eq!(left, right, "unequal black height");

            left + if node.color == Color::Black { 1 } else { 0 }
        }
    }
}

fn check<K: Ord, V>(link: &Link<K, V>, len: usize) {
    assert!(!is_red(link), "red root");
    check_node(link, None, None);
    assert_eq!(size(link), len);
}

#[derive(Clone, Debug)]
enum Op {
    Insert(u32, u32),
    Remove(u32),
    RemoveMin,
    RemoveMax,
}

impl Arbitrary for Op {
    // Keys are drawn from a small space so that removals hit and inserts
    // collide often.
    fn arbitrary(g: &mut Gen) -> Op {
        match u32::arbitrary(g) % 4 {
            0 => Op::Insert(u32::arbitrary(g) % 64, u32::arbitrary(g)),
            1 => Op::Remove(u32::arbitrary(g) % 64),
            2 => Op::RemoveMin,
            _ => Op::RemoveMax,
        }
    }
}

#[quickcheck]
fn ops_agree_with_model_and_preserve_structure(ops: Vec<Op>) -> bool {
    let cmp: Natural<u32> = natural();
    let mut root: Link<u32, u32> = None;
    let mut len = 0;
    let mut model = BTreeMap::new();

    for op in ops {
        match op {
            Op::Insert(key, value) => {
                let old_value = insert(&mut root, &cmp, key, value);
                if old_value.is_none() { len += 1; }
                assert_eq!(old_value, model.insert(key, value));
            }
            Op::Remove(key) => {
                let removed = remove(&mut root, &cmp, &key);
                if removed.is_some() { len -= 1; }
                assert_eq!(removed, model.remove_entry(&key));
            }
            Op::RemoveMin => {
                let removed = remove_min(&mut root);
                if removed.is_some() { len -= 1; }
                let expected = model.keys().next().copied();
                assert_eq!(removed.as_ref().map(|e| e.0), expected);
                if let Some(key) = expected { model.remove(&key); }
            }
            Op::RemoveMax => {
                let removed = remove_max(&mut root);
                if removed.is_some() { len -= 1; }
                let expected = model.keys().next_back().copied();
                assert_eq!(removed.as_ref().map(|e| e.0), expected);
                if let Some(key) = expected { model.remove(&key); }
            }
        }

        blacken(&mut root);
        check(&root, len);
    }

    Iter::new(root.take(), len).eq(model)
}

#[test]
fn ascending_inserts_stay_balanced() {
    let cmp: Natural<u32> = natural();
    let mut root: Link<u32, ()> = None;

    for key in 0..1000 {
        assert_eq!(insert(&mut root, &cmp, key, ()), None);
        blacken(&mut root);
        check(&root, key as usize + 1);
    }
}

#[test]
fn interleaved_removals_stay_balanced() {
    let cmp: Natural<u32> = natural();
    let mut root: Link<u32, ()> = None;
    let mut len = 0;

    for key in 0..500 {
        insert(&mut root, &cmp, key * 2, ());
        blacken(&mut root);
        len += 1;
    }

    for key in 0..500 {
        // Alternate hits and misses.
        let removed = remove(&mut root, &cmp, &(key * 2 + key % 2));
        blacken(&mut root);
        if removed.is_some() { len -= 1; }
        assert_eq!(removed.is_some(), key % 2 == 0);
        check(&root, len);
    }
}

#[test]
fn absent_key_removal_leaves_tree_intact() {
    let cmp: Natural<u32> = natural();
    let mut root: Link<u32, u32> = None;

    for key in [5, 1, 9, 3, 7] {
        insert(&mut root, &cmp, key, key * 10);
        blacken(&mut root);
    }

    assert_eq!(remove(&mut root, &cmp, &4), None);
    blacken(&mut root);
    check(&root, 5);

    let entries: Vec<_> = Iter::new(root.take(), 5).collect();
    assert_eq!(entries, [(1, 10), (3, 30), (5, 50), (7, 70), (9, 90)]);
}
