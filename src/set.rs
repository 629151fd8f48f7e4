//! An ordered set based on a left-leaning red-black tree.

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter::FromIterator;
use std::ops::Bound;

use crate::map::{self, Map};

/// An ordered set based on a left-leaning red-black tree.
///
/// A thin wrapper around [`Map`] with `()` values: every map operation that
/// does not involve values is re-exposed in terms of the items alone.
///
/// The behavior of this set is undefined if an item's ordering relative to
/// any other item changes while the item is in the set. This is normally
/// only possible through `Cell`, `RefCell`, or unsafe code.
#[derive(Clone)]
pub struct Set<T, C = Natural<T>> where C: Compare<T> {
    map: Map<T, (), C>,
}

impl<T> Set<T> where T: Ord {
    /// Creates an empty set ordered according to the natural order of its
    /// items.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Set;
    ///
    /// let mut set = Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let items: Vec<_> = set.iter().copied().collect();
    /// assert_eq!(items, [1, 2, 3]);
    /// ```
    pub fn new() -> Set<T> { Set::with_cmp(compare::natural()) }
}

impl<T, C> Set<T, C> where C: Compare<T> {
    /// Creates an empty set ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use grove::Set;
    ///
    /// let mut set = Set::with_cmp(natural().rev());
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let items: Vec<_> = set.iter().copied().collect();
    /// assert_eq!(items, [3, 2, 1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Set<T, C> { Set { map: Map::with_cmp(cmp) } }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// Returns the number of items in the set.
    pub fn len(&self) -> usize { self.map.len() }

    /// Returns a reference to the set's comparator.
    pub fn cmp(&self) -> &C { self.map.cmp() }

    /// Removes all items from the set.
    pub fn clear(&mut self) { self.map.clear(); }

    /// Inserts an item into the set, returning `true` if the set did not
    /// already contain the item.
    ///
    /// An item that is already present is left untouched, so references
    /// obtained before the call remain associated with the original item.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> bool {
        self.map.insert(item, ()).is_none()
    }

    /// Removes the given item from the set, returning `true` if the set
    /// contained the item.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Set;
    ///
    /// let mut set = Set::new();
    ///
    /// set.insert(1);
    ///
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> bool where C: Compare<Q, T> {
        self.map.remove(item).is_some()
    }

    /// Checks if the set contains the given item.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(!set.contains(&1));
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        self.map.contains_key(item)
    }

    /// Returns a reference to the set's minimum item, or `None` if the set
    /// is empty.
    ///
    /// Named `get_min` rather than `min` so that the prelude's by-value
    /// [`Ord::min`] cannot capture the call on sets of `Ord` items.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Set;
    ///
    /// let mut set = Set::new();
    /// assert_eq!(set.get_min(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// assert_eq!(set.get_min(), Some(&1));
    /// ```
    pub fn get_min(&self) -> Option<&T> { self.map.get_min().map(|e| e.0) }

    /// Returns a reference to the set's maximum item, or `None` if the set
    /// is empty.
    pub fn get_max(&self) -> Option<&T> { self.map.get_max().map(|e| e.0) }

    /// Removes and returns the set's minimum item, or `None` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Set;
    ///
    /// let mut set = Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// assert_eq!(set.remove_min(), Some(1));
    /// assert_eq!(set.remove_min(), Some(2));
    /// assert_eq!(set.remove_min(), None);
    /// ```
    pub fn remove_min(&mut self) -> Option<T> {
        self.map.remove_min().map(|e| e.0)
    }

    /// Removes and returns the set's maximum item, or `None` if the set is
    /// empty.
    pub fn remove_max(&mut self) -> Option<T> {
        self.map.remove_max().map(|e| e.0)
    }

    /// Returns a reference to the greatest item that is strictly less than
    /// the given item, or `None` if no such item is present in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Set;
    ///
    /// let mut set = Set::new();
    ///
    /// set.insert(1);
    /// set.insert(23);
    ///
    /// assert_eq!(set.pred(&1), None);
    /// assert_eq!(set.pred(&23), Some(&1));
    /// ```
    pub fn pred<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.map.pred(item).map(|e| e.0)
    }

    /// Returns a reference to the greatest item that is less than or equal
    /// to the given item, or `None` if no such item is present in the set.
    pub fn pred_or_eq<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.map.pred_or_eq(item).map(|e| e.0)
    }

    /// Returns a reference to the smallest item that is strictly greater
    /// than the given item, or `None` if no such item is present in the
    /// set.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Set;
    ///
    /// let mut set = Set::new();
    ///
    /// set.insert(1);
    /// set.insert(23);
    ///
    /// assert_eq!(set.succ(&1), Some(&23));
    /// assert_eq!(set.succ(&23), None);
    /// ```
    pub fn succ<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.map.succ(item).map(|e| e.0)
    }

    /// Returns a reference to the smallest item that is greater than or
    /// equal to the given item, or `None` if no such item is present in the
    /// set.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Set;
    ///
    /// let mut set = Set::new();
    ///
    /// set.insert(1);
    /// set.insert(23);
    ///
    /// assert_eq!(set.succ_or_eq(&22), Some(&23));
    /// assert_eq!(set.succ_or_eq(&24), None);
    /// ```
    pub fn succ_or_eq<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.map.succ_or_eq(item).map(|e| e.0)
    }

    /// Returns an iterator over the set's items in ascending order.
    ///
    /// The iterator can be reversed with [`Iterator::rev`].
    pub fn iter(&self) -> Iter<'_, T> { Iter(self.map.iter()) }

    /// Returns an iterator over the set's items that lie in the given range
    /// in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::Bound::{Excluded, Unbounded};
    /// use grove::Set;
    ///
    /// let mut set = Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.range(Excluded(&1), Unbounded).collect::<Vec<_>>(), [&2, &3]);
    /// ```
    pub fn range<Min: ?Sized, Max: ?Sized>(&self, min: Bound<&Min>, max: Bound<&Max>)
        -> Range<'_, T> where C: Compare<Min, T> + Compare<Max, T> {

        Range(self.map.range(min, max))
    }

    /// Returns an iterator that consumes the set, yielding only those items
    /// that lie in the given range.
    pub fn into_range<Min: ?Sized, Max: ?Sized>(self, min: Bound<&Min>, max: Bound<&Max>)
        -> IntoRange<T> where C: Compare<Min, T> + Compare<Max, T> {

        IntoRange(self.map.into_range(min, max))
    }
}

impl<T, C> Debug for Set<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Default for Set<T, C> where C: Compare<T> + Default {
    fn default() -> Set<T, C> { Set { map: Default::default() } }
}

impl<T, C> Extend<T> for Set<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, it: I) {
        for item in it { self.insert(item); }
    }
}

impl<T, C> FromIterator<T> for Set<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item = T>>(it: I) -> Set<T, C> {
        let mut set: Set<T, C> = Default::default();
        set.extend(it);
        set
    }
}

impl<T, C> Hash for Set<T, C> where T: Hash, C: Compare<T> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for item in self.iter() { item.hash(h); }
    }
}

impl<'a, T, C> IntoIterator for &'a Set<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for Set<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Returns an iterator that consumes the set in ascending order.
    fn into_iter(self) -> IntoIter<T> { IntoIter(self.map.into_iter()) }
}

impl<T, C> PartialEq for Set<T, C> where T: PartialEq, C: Compare<T> {
    fn eq(&self, other: &Set<T, C>) -> bool { self.map == other.map }
}

impl<T, C> Eq for Set<T, C> where T: Eq, C: Compare<T> {}

impl<T, C> PartialOrd for Set<T, C> where T: PartialOrd, C: Compare<T> {
    fn partial_cmp(&self, other: &Set<T, C>) -> Option<Ordering> {
        self.map.partial_cmp(&other.map)
    }
}

impl<T, C> Ord for Set<T, C> where T: Ord, C: Compare<T> {
    fn cmp(&self, other: &Set<T, C>) -> Ordering { Ord::cmp(&self.map, &other.map) }
}

/// An iterator that consumes the set.
///
/// Acquire through [`IntoIterator`](struct.Set.html#impl-IntoIterator).
#[derive(Clone)]
pub struct IntoIter<T>(map::IntoIter<T, ()>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back().map(|e| e.0) }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator over the set's items.
///
/// Acquire through [`Set::iter`](struct.Set.html#method.iter) or the
/// `IntoIterator` trait.
pub struct Iter<'a, T>(map::Iter<'a, T, ()>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back().map(|e| e.0) }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// An iterator that consumes the set, yielding only those items that lie
/// in a given range.
///
/// Acquire through [`Set::into_range`](struct.Set.html#method.into_range).
#[derive(Clone)]
pub struct IntoRange<T>(map::IntoRange<T, ()>);

impl<T> Iterator for IntoRange<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoRange<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back().map(|e| e.0) }
}

/// An iterator over the set's items that lie in a given range.
///
/// Acquire through [`Set::range`](struct.Set.html#method.range).
pub struct Range<'a, T>(map::Range<'a, T, ()>);

impl<'a, T> Clone for Range<'a, T> {
    fn clone(&self) -> Range<'a, T> { Range(self.0.clone()) }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Range<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back().map(|e| e.0) }
}
