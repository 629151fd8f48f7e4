use std::cell::Cell;

use super::{ReserveError, Vector};

struct Counted<'a>(&'a Cell<usize>);

impl<'a> Drop for Counted<'a> {
    fn drop(&mut self) { self.0.set(self.0.get() + 1); }
}

#[test]
fn push_pop_round_trip() {
    let mut v = Vector::new();

    v.push(1);
    v.push(2);
    v.push(3);

    assert_eq!(v.len(), 3);
    assert_eq!(v.pop(), Some(3));
    assert_eq!(v.pop(), Some(2));
    assert_eq!(v.pop(), Some(1));
    assert_eq!(v.pop(), None);
    assert!(v.is_empty());
}

#[test]
fn growth_relocates_the_buffer() {
    let mut v = Vector::with_capacity(2);

    v.push(1);
    v.push(2);
    let before = v.as_ptr();

    v.push(3);

    assert!(v.capacity() >= 4);
    assert_ne!(v.as_ptr(), before);
    assert_eq!(&v[..], [1, 2, 3]);
}

#[test]
fn reserved_capacity_keeps_the_buffer_in_place() {
    let mut v = Vector::with_capacity(10);
    let before = v.as_ptr();

    for i in 0..10 { v.push(i); }

    assert_eq!(v.as_ptr(), before);
    assert_eq!(v.capacity(), 10);
}

#[test]
fn insert_shifts_toward_the_back() {
    let mut v: Vector<_> = [1, 2, 4, 5][..].into();

    v.insert(2, 3);
    assert_eq!(&v[..], [1, 2, 3, 4, 5]);

    v.insert(0, 0);
    assert_eq!(&v[..], [0, 1, 2, 3, 4, 5]);

    let len = v.len();
    v.insert(len, 6);
    assert_eq!(&v[..], [0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn remove_shifts_toward_the_front() {
    let mut v: Vector<_> = [1, 2, 3][..].into();

    assert_eq!(v.remove(1), 2);
    assert_eq!(&v[..], [1, 3]);

    assert_eq!(v.remove(0), 1);
    assert_eq!(v.remove(0), 3);
    assert!(v.is_empty());
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn remove_past_the_end_panics() {
    let mut v: Vector<_> = [1][..].into();
    v.remove(1);
}

#[test]
fn insert_slice_splices_in_place() {
    let mut v: Vector<_> = [1, 5][..].into();

    v.insert_slice(1, &[2, 3, 4]);
    assert_eq!(&v[..], [1, 2, 3, 4, 5]);

    v.insert_slice(0, &[0]);
    assert_eq!(&v[..], [0, 1, 2, 3, 4, 5]);

    let len = v.len();
    v.insert_slice(len, &[6]);
    v.insert_slice(len, &[]);
    assert_eq!(&v[..], [0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn truncate_drops_the_tail() {
    let drops = Cell::new(0);
    let mut v: Vector<_> = (0..5).map(|_| Counted(&drops)).collect();

    v.truncate(2);
    assert_eq!(drops.get(), 3);
    assert_eq!(v.len(), 2);

    v.truncate(4);
    assert_eq!(drops.get(), 3);
    assert_eq!(v.len(), 2);

    v.clear();
    assert_eq!(drops.get(), 5);
}

#[test]
fn resize_grows_and_shrinks() {
    let mut v = Vector::new();

    v.resize(3, 7);
    assert_eq!(&v[..], [7, 7, 7]);

    v.resize(5, 8);
    assert_eq!(&v[..], [7, 7, 7, 8, 8]);

    v.resize(1, 0);
    assert_eq!(&v[..], [7]);
}

#[test]
fn drain_removes_the_range_and_closes_the_gap() {
    let mut v: Vector<_> = (1..6).collect();

    let drained: Vec<_> = v.drain(1..4).collect();

    assert_eq!(drained, [2, 3, 4]);
    assert_eq!(&v[..], [1, 5]);
}

#[test]
fn unconsumed_drain_still_drops_and_shifts() {
    let drops = Cell::new(0);
    let mut v: Vector<_> = (0..5).map(|_| Counted(&drops)).collect();

    v.drain(1..3);

    assert_eq!(drops.get(), 2);
    assert_eq!(v.len(), 3);
}

#[test]
fn drain_everything_empties_the_vector() {
    let mut v: Vector<_> = (1..4).collect();

    assert_eq!(v.drain(..).rev().collect::<Vec<_>>(), [3, 2, 1]);
    assert!(v.is_empty());
}

#[test]
#[should_panic(expected = "drain range ends past the end")]
fn drain_past_the_end_panics() {
    let mut v: Vector<_> = (1..4).collect();
    v.drain(1..5);
}

#[test]
#[should_panic(expected = "drain range bound overflows usize")]
fn drain_bound_at_usize_max_panics() {
    use std::ops::Bound;

    let mut v: Vector<_> = (1..4).collect();
    v.drain((Bound::Excluded(usize::MAX), Bound::Unbounded));
}

#[test]
fn into_iter_is_double_ended() {
    let v: Vector<_> = (1..6).collect();
    let mut it = v.into_iter();

    assert_eq!(it.next(), Some(1));
    assert_eq!(it.next_back(), Some(5));
    assert_eq!(it.len(), 3);
    assert_eq!(it.collect::<Vec<_>>(), [2, 3, 4]);
}

#[test]
fn into_iter_drops_the_unconsumed_values() {
    let drops = Cell::new(0);
    let v: Vector<_> = (0..5).map(|_| Counted(&drops)).collect();

    let mut it = v.into_iter();
    it.next();
    it.next_back();
    assert_eq!(drops.get(), 2);

    drop(it);
    assert_eq!(drops.get(), 5);
}

#[test]
fn zero_sized_values_never_allocate() {
    let mut v = Vector::new();
    assert_eq!(v.capacity(), usize::MAX);

    for _ in 0..100 { v.push(()); }
    assert_eq!(v.len(), 100);
    assert_eq!(v.pop(), Some(()));

    assert_eq!(v.drain(10..20).count(), 10);
    assert_eq!(v.len(), 89);
    assert_eq!(v.into_iter().count(), 89);
}

#[test]
fn try_reserve_reports_overflow() {
    let mut v: Vector<u8> = Vector::new();

    assert_eq!(v.try_reserve(usize::MAX), Err(ReserveError::CapacityOverflow));
    assert!(v.try_reserve(10).is_ok());
    assert!(v.capacity() >= 10);
}

#[test]
fn comparisons_and_formatting_see_through_to_the_slice() {
    let a: Vector<_> = [1, 2, 3][..].into();
    let b = a.clone();
    let c: Vector<_> = [1, 2, 4][..].into();

    assert_eq!(a, b);
    assert!(a < c);
    assert_eq!(format!("{:?}", a), "[1, 2, 3]");
}
