//! An ordered map based on a left-leaning red-black tree.

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter::FromIterator;
use std::ops::{self, Bound};

use crate::node::{self, Left, LinkExt, Node, Right};

pub use crate::node::{OccupiedEntry, VacantEntry};

/// An ordered map based on a left-leaning red-black tree.
///
/// The tree is kept balanced by the red-black rules, so insertion, removal,
/// and lookup all run in O(log n) time. Iteration visits the entries in
/// ascending key order according to the map's comparator.
///
/// The behavior of this map is undefined if a key's ordering relative to
/// any other key changes while the key is in the map. This is normally only
/// possible through `Cell`, `RefCell`, or unsafe code.
#[derive(Clone)]
pub struct Map<K, V, C = Natural<K>> where C: Compare<K> {
    root: node::Link<K, V>,
    len: usize,
    cmp: C,
}

impl<K, V> Map<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its
    /// keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Map<K, V> { Map::with_cmp(compare::natural()) }
}

impl<K, V, C> Map<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use grove::Map;
    ///
    /// let mut map = Map::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let keys: Vec<_> = map.iter().map(|e| *e.0).collect();
    /// assert_eq!(keys, [3, 2, 1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Map<K, V, C> {
        Map { root: None, len: 0, cmp }
    }

    /// Checks if the map is empty.
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize { self.len }

    /// Returns a reference to the map's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// map.clear();
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts an entry into the map, returning the previous value, if any,
    /// associated with the key.
    ///
    /// The key itself is never overwritten: if it is already present, only
    /// its value is replaced, so the map's ordering cannot be disturbed.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    /// assert_eq!(map.insert(1, "a"), None);
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.insert(1, "b"), Some("a"));
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let old_value = node::insert(&mut self.root, &self.cmp, key, value);
        if old_value.is_none() { self.len += 1; }
        node::blacken(&mut self.root);
        old_value
    }

    /// Removes and returns the entry whose key is equal to the given key,
    /// returning `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(23, "world");
    /// map.insert(1, "hello");
    ///
    /// assert_eq!(map.remove(&23), Some((23, "world")));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get(&23), None);
    /// assert_eq!(map.remove(&23), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
        where C: Compare<Q, K> {

        let key_value = node::remove(&mut self.root, &self.cmp, key);
        if key_value.is_some() { self.len -= 1; }
        node::blacken(&mut self.root);
        key_value
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    /// assert!(!map.contains_key(&1));
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or
    /// `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).key_value().map(|e| e.1)
    }

    /// Returns a mutable reference to the value associated with the given
    /// key, or `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    /// map.insert(1, "a");
    ///
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value = "b";
    /// }
    ///
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
        where C: Compare<Q, K> {

        node::get(&mut self.root, &self.cmp, key).key_value_mut().map(|e| e.1)
    }

    /// Returns the map's entry corresponding to the given key.
    ///
    /// The entry records the descent path, so a vacant entry can be filled
    /// without searching for the key a second time.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert("a", 1);
    ///
    /// *map.entry("a").or_insert(0) += 10;
    /// *map.entry("b").or_insert(0) += 20;
    ///
    /// assert_eq!(map.get(&"a"), Some(&11));
    /// assert_eq!(map.get(&"b"), Some(&20));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        node::entry(&mut self.root, &self.cmp, key, &mut self.len)
    }

    /// Returns a reference to the map's minimum key and a reference to its
    /// associated value, or `None` if the map is empty.
    ///
    /// Named `get_min` rather than `min` so that the prelude's by-value
    /// [`Ord::min`] cannot capture the call on maps whose key and value
    /// types are `Ord`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    /// assert_eq!(map.get_min(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.get_min(), Some((&1, &"a")));
    /// ```
    pub fn get_min(&self) -> Option<(&K, &V)> {
        node::extremum::<_, Left>(&self.root).key_value()
    }

    /// Returns a reference to the map's minimum key and a mutable reference
    /// to its associated value, or `None` if the map is empty.
    pub fn get_min_mut(&mut self) -> Option<(&K, &mut V)> {
        node::extremum::<_, Left>(&mut self.root).key_value_mut()
    }

    /// Returns a reference to the map's maximum key and a reference to its
    /// associated value, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    /// assert_eq!(map.get_max(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.get_max(), Some((&2, &"b")));
    /// ```
    pub fn get_max(&self) -> Option<(&K, &V)> {
        node::extremum::<_, Right>(&self.root).key_value()
    }

    /// Returns a reference to the map's maximum key and a mutable reference
    /// to its associated value, or `None` if the map is empty.
    pub fn get_max_mut(&mut self) -> Option<(&K, &mut V)> {
        node::extremum::<_, Right>(&mut self.root).key_value_mut()
    }

    /// Removes and returns the entry with the map's minimum key, or `None`
    /// if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.remove_min(), Some((1, "a")));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove_min(&mut self) -> Option<(K, V)> {
        let key_value = node::remove_min(&mut self.root);
        if key_value.is_some() { self.len -= 1; }
        node::blacken(&mut self.root);
        key_value
    }

    /// Removes and returns the entry with the map's maximum key, or `None`
    /// if the map is empty.
    pub fn remove_max(&mut self) -> Option<(K, V)> {
        let key_value = node::remove_max(&mut self.root);
        if key_value.is_some() { self.len -= 1; }
        node::blacken(&mut self.root);
        key_value
    }

    /// Returns a reference to the greatest key that is strictly less than
    /// the given key and a reference to its associated value, or `None` if
    /// no such key is present in the map.
    ///
    /// The given key need not itself be present in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(1, "a");
    /// map.insert(23, "w");
    ///
    /// assert_eq!(map.pred(&1), None);
    /// assert_eq!(map.pred(&23), Some((&1, &"a")));
    /// assert_eq!(map.pred(&100), Some((&23, &"w")));
    /// ```
    pub fn pred<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)> where C: Compare<Q, K> {
        node::closest::<_, _, _, Left>(&self.root, &self.cmp, key, false).key_value()
    }

    /// Like [`pred`](#method.pred), with a mutable reference to the value.
    pub fn pred_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<(&K, &mut V)>
        where C: Compare<Q, K> {

        node::closest::<_, _, _, Left>(&mut self.root, &self.cmp, key, false).key_value_mut()
    }

    /// Returns a reference to the greatest key that is less than or equal
    /// to the given key and a reference to its associated value, or `None`
    /// if no such key is present in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(1, "a");
    /// map.insert(23, "w");
    ///
    /// assert_eq!(map.pred_or_eq(&0), None);
    /// assert_eq!(map.pred_or_eq(&1), Some((&1, &"a")));
    /// assert_eq!(map.pred_or_eq(&22), Some((&1, &"a")));
    /// ```
    pub fn pred_or_eq<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)>
        where C: Compare<Q, K> {

        node::closest::<_, _, _, Left>(&self.root, &self.cmp, key, true).key_value()
    }

    /// Like [`pred_or_eq`](#method.pred_or_eq), with a mutable reference to
    /// the value.
    pub fn pred_or_eq_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<(&K, &mut V)>
        where C: Compare<Q, K> {

        node::closest::<_, _, _, Left>(&mut self.root, &self.cmp, key, true).key_value_mut()
    }

    /// Returns a reference to the smallest key that is strictly greater
    /// than the given key and a reference to its associated value, or
    /// `None` if no such key is present in the map.
    ///
    /// This is the upper-bound query: the first entry past the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(1, "a");
    /// map.insert(23, "w");
    ///
    /// assert_eq!(map.succ(&1), Some((&23, &"w")));
    /// assert_eq!(map.succ(&23), None);
    /// ```
    pub fn succ<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)> where C: Compare<Q, K> {
        node::closest::<_, _, _, Right>(&self.root, &self.cmp, key, false).key_value()
    }

    /// Like [`succ`](#method.succ), with a mutable reference to the value.
    pub fn succ_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<(&K, &mut V)>
        where C: Compare<Q, K> {

        node::closest::<_, _, _, Right>(&mut self.root, &self.cmp, key, false).key_value_mut()
    }

    /// Returns a reference to the smallest key that is greater than or
    /// equal to the given key and a reference to its associated value, or
    /// `None` if no such key is present in the map.
    ///
    /// This is the lower-bound query: the first entry not less than the
    /// given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(1, "a");
    /// map.insert(23, "w");
    ///
    /// assert_eq!(map.succ_or_eq(&22), Some((&23, &"w")));
    /// assert_eq!(map.succ_or_eq(&23), Some((&23, &"w")));
    /// assert_eq!(map.succ_or_eq(&24), None);
    /// ```
    pub fn succ_or_eq<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)>
        where C: Compare<Q, K> {

        node::closest::<_, _, _, Right>(&self.root, &self.cmp, key, true).key_value()
    }

    /// Like [`succ_or_eq`](#method.succ_or_eq), with a mutable reference to
    /// the value.
    pub fn succ_or_eq_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<(&K, &mut V)>
        where C: Compare<Q, K> {

        node::closest::<_, _, _, Right>(&mut self.root, &self.cmp, key, true).key_value_mut()
    }

    /// Returns an iterator over the map's entries with immutable references
    /// to the values.
    ///
    /// The iterator yields the entries in ascending key order and can be
    /// reversed with [`Iterator::rev`].
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(23, "world");
    /// map.insert(1, "hello");
    /// map.insert(2, "hey");
    ///
    /// let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
    /// assert_eq!(entries, [(1, "hello"), (2, "hey"), (23, "world")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(node::Iter::new(self.root.as_node_ref(), self.len))
    }

    /// Returns an iterator over the map's entries with mutable references
    /// to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    ///
    /// for (_, value) in map.iter_mut() {
    ///     *value *= 2;
    /// }
    ///
    /// assert_eq!(map.get(&"a"), Some(&2));
    /// assert_eq!(map.get(&"b"), Some(&4));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut(node::IterMut::new(&mut self.root, self.len))
    }

    /// Returns an iterator over the map's entries whose keys lie in the
    /// given range with immutable references to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::Bound::{Excluded, Included, Unbounded};
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    /// map.insert("c", 3);
    ///
    /// assert_eq!(map.range(Excluded(&"a"), Included(&"f")).collect::<Vec<_>>(),
    ///     [(&"b", &2), (&"c", &3)]);
    /// assert_eq!(map.range(Unbounded, Excluded(&"b")).collect::<Vec<_>>(),
    ///     [(&"a", &1)]);
    /// ```
    pub fn range<Min: ?Sized, Max: ?Sized>(&self, min: Bound<&Min>, max: Bound<&Max>)
        -> Range<'_, K, V> where C: Compare<Min, K> + Compare<Max, K> {

        Range(node::Iter::range(self.root.as_node_ref(), self.len, &self.cmp, min, max))
    }

    /// Returns an iterator over the map's entries whose keys lie in the
    /// given range with mutable references to the values.
    pub fn range_mut<Min: ?Sized, Max: ?Sized>(&mut self, min: Bound<&Min>, max: Bound<&Max>)
        -> RangeMut<'_, K, V> where C: Compare<Min, K> + Compare<Max, K> {

        RangeMut(node::IterMut::range(&mut self.root, self.len, &self.cmp, min, max))
    }

    /// Returns an iterator that consumes the map, yielding only those
    /// entries whose keys lie in the given range.
    pub fn into_range<Min: ?Sized, Max: ?Sized>(mut self, min: Bound<&Min>, max: Bound<&Max>)
        -> IntoRange<K, V> where C: Compare<Min, K> + Compare<Max, K> {

        IntoRange(node::Iter::range(self.root.take(), self.len, &self.cmp, min, max))
    }
}

/// An entry in the map: either occupied by an existing key or vacant.
///
/// See [`Map::entry`](struct.Map.html#method.entry) for an example.
pub enum Entry<'a, K, V> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Returns a mutable reference to the entry's value, inserting the
    /// given default if the entry is vacant.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default),
        }
    }

    /// Returns a mutable reference to the entry's value, inserting the
    /// result of the given function if the entry is vacant.
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default()),
        }
    }
}

impl<K, V, C> Debug for Map<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for Map<K, V, C> where C: Compare<K> + Default {
    fn default() -> Map<K, V, C> { Map::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for Map<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C> FromIterator<(K, V)> for Map<K, V, C>
    where C: Compare<K> + Default {

    fn from_iter<I: IntoIterator<Item = (K, V)>>(it: I) -> Map<K, V, C> {
        let mut map: Map<K, V, C> = Default::default();
        map.extend(it);
        map
    }
}

impl<K, V, C> Hash for Map<K, V, C> where K: Hash, V: Hash, C: Compare<K> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for e in self.iter() { e.hash(h); }
    }
}

impl<'q, K, V, C, Q: ?Sized> ops::Index<&'q Q> for Map<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'q, K, V, C, Q: ?Sized> ops::IndexMut<&'q Q> for Map<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    fn index_mut(&mut self, key: &Q) -> &mut V {
        self.get_mut(key).expect("key not found")
    }
}

impl<'a, K, V, C> IntoIterator for &'a Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<'a, K, V, C> IntoIterator for &'a mut Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> { self.iter_mut() }
}

impl<K, V, C> IntoIterator for Map<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Returns an iterator that consumes the map in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Map;
    ///
    /// let mut map = Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// let entries: Vec<_> = map.into_iter().collect();
    /// assert_eq!(entries, [(1, "a"), (2, "b")]);
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter(node::Iter::new(self.root.take(), self.len))
    }
}

impl<K, V, C> PartialEq for Map<K, V, C>
    where K: PartialEq, V: PartialEq, C: Compare<K> {

    fn eq(&self, other: &Map<K, V, C>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, C> Eq for Map<K, V, C> where K: Eq, V: Eq, C: Compare<K> {}

impl<K, V, C> PartialOrd for Map<K, V, C>
    where K: PartialOrd, V: PartialOrd, C: Compare<K> {

    fn partial_cmp(&self, other: &Map<K, V, C>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K, V, C> Ord for Map<K, V, C> where K: Ord, V: Ord, C: Compare<K> {
    fn cmp(&self, other: &Map<K, V, C>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

/// An iterator that consumes the map.
///
/// Acquire through [`IntoIterator`](struct.Map.html#impl-IntoIterator).
#[derive(Clone)]
pub struct IntoIter<K, V>(node::Iter<Box<Node<K, V>>>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> { self.0.next_back() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// An iterator over the map's entries with immutable references to the
/// values.
///
/// Acquire through [`Map::iter`](struct.Map.html#method.iter) or the
/// `IntoIterator` trait.
pub struct Iter<'a, K, V>(node::Iter<&'a Node<K, V>>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.0.next_back() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An iterator over the map's entries with mutable references to the
/// values.
///
/// Acquire through [`Map::iter_mut`](struct.Map.html#method.iter_mut) or
/// the `IntoIterator` trait.
pub struct IterMut<'a, K, V>(node::IterMut<'a, K, V>);

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);
    fn next(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next_back() }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

/// An iterator that consumes the map, yielding only those entries whose
/// keys lie in a given range.
///
/// Acquire through [`Map::into_range`](struct.Map.html#method.into_range).
#[derive(Clone)]
pub struct IntoRange<K, V>(node::Iter<Box<Node<K, V>>>);

impl<K, V> Iterator for IntoRange<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.range_size_hint() }
}

impl<K, V> DoubleEndedIterator for IntoRange<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> { self.0.next_back() }
}

/// An iterator over the map's entries whose keys lie in a given range with
/// immutable references to the values.
///
/// Acquire through [`Map::range`](struct.Map.html#method.range).
pub struct Range<'a, K, V>(node::Iter<&'a Node<K, V>>);

impl<'a, K, V> Clone for Range<'a, K, V> {
    fn clone(&self) -> Range<'a, K, V> { Range(self.0.clone()) }
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.range_size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Range<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.0.next_back() }
}

/// An iterator over the map's entries whose keys lie in a given range with
/// mutable references to the values.
///
/// Acquire through [`Map::range_mut`](struct.Map.html#method.range_mut).
pub struct RangeMut<'a, K, V>(node::IterMut<'a, K, V>);

impl<'a, K, V> Iterator for RangeMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);
    fn next(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.range_size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for RangeMut<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next_back() }
}
