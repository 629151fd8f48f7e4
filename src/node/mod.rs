mod iter;

#[cfg(test)]
mod test;

use compare::Compare;
use std::cmp::Ordering::*;
use std::mem::{replace, swap};
use std::ptr::NonNull;

use crate::map::Entry;

pub use self::iter::{Iter, IterMut};

pub type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Color {
    Red,
    Black,
}

impl Color {
    fn toggle(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A node in a left-leaning red-black tree.
///
/// Red links lean left: a red node is always its parent's left child, and
/// never has a red child of its own. Every path from the root to a null
/// link crosses the same number of black links.
#[derive(Clone)]
pub struct Node<K, V> {
    left: Link<K, V>,
    right: Link<K, V>,
    color: Color,
    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Node { left: None, right: None, color: Color::Red, key, value }
    }
}

pub trait LinkExt: Sized {
    type K;
    type V;
    fn as_node_ref(&self) -> Option<&Node<Self::K, Self::V>>;
    fn key_value(&self) -> Option<(&Self::K, &Self::V)>;
    fn key_value_mut(&mut self) -> Option<(&Self::K, &mut Self::V)>;
}

impl<K, V> LinkExt for Link<K, V> {
    type K = K;
    type V = V;

    fn as_node_ref(&self) -> Option<&Node<K, V>> {
        self.as_deref()
    }

    fn key_value(&self) -> Option<(&K, &V)> {
        self.as_ref().map(|node| (&node.key, &node.value))
    }

    fn key_value_mut(&mut self) -> Option<(&K, &mut V)> {
        self.as_mut().map(|node| {
            let node = &mut **node;
            (&node.key, &mut node.value)
        })
    }
}

fn is_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().map_or(false, |node| node.color == Color::Red)
}

fn is_red_left_left<K, V>(node: &Node<K, V>) -> bool {
    node.left.as_ref().map_or(false, |left| is_red(&left.left))
}

// The rotations exchange the contents of the slot's box rather than moving
// boxes between slots, so the address of every heap node and of every slot
// recorded in an entry path stays valid across rebalancing.

fn rotate_left<K, V>(node: &mut Box<Node<K, V>>) {
    debug_assert!(is_red(&node.right));
    let mut save = node.right.take().unwrap();
    node.right = save.left.take();
    save.color = node.color;
    node.color = Color::Red;
    swap(node, &mut save);
    node.left = Some(save);
}

fn rotate_right<K, V>(node: &mut Box<Node<K, V>>) {
    debug_assert!(is_red(&node.left));
    let mut save = node.left.take().unwrap();
    node.left = save.right.take();
    save.color = node.color;
    node.color = Color::Red;
    swap(node, &mut save);
    node.right = Some(save);
}

// Splits a temporary 4-node by pushing redness towards the root. Both
// children must be present.
fn flip_colors<K, V>(node: &mut Node<K, V>) {
    node.color = node.color.toggle();
    let left = node.left.as_mut().unwrap();
    left.color = left.color.toggle();
    let right = node.right.as_mut().unwrap();
    right.color = right.color.toggle();
}

// Restores the left-leaning invariants at a single node on the way back up
// from an insertion or removal: a lone red right link rotates left, a
// red-red left chain rotates right, and a full red pair flips.
fn fixup<K, V>(node: &mut Box<Node<K, V>>) {
    if is_red(&node.right) && !is_red(&node.left) {
        rotate_left(node);
    }
    if is_red(&node.left) && is_red_left_left(node) {
        rotate_right(node);
    }
    if is_red(&node.left) && is_red(&node.right) {
        flip_colors(node);
    }
}

// Ensures the left child or one of its children is red before a removal
// descends left.
fn move_red_left<K, V>(node: &mut Box<Node<K, V>>) {
    flip_colors(node);
    if node.right.as_ref().map_or(false, |right| is_red(&right.left)) {
        rotate_right(node.right.as_mut().unwrap());
        rotate_left(node);
        flip_colors(node);
    }
}

// Likewise for a rightward descent.
fn move_red_right<K, V>(node: &mut Box<Node<K, V>>) {
    flip_colors(node);
    if is_red_left_left(node) {
        rotate_right(node);
        flip_colors(node);
    }
}

/// Recolors the link's node black, if any. Applied to the root after every
/// structural mutation.
pub fn blacken<K, V>(link: &mut Link<K, V>) {
    if let Some(node) = link.as_mut() {
        node.color = Color::Black;
    }
}

/// Inserts the key and value into the subtree, returning the value the key
/// previously mapped to, if any. The stored key itself is never replaced.
pub fn insert<K, V, C>(link: &mut Link<K, V>, cmp: &C, key: K, value: V) -> Option<V>
    where C: Compare<K> {

    match *link {
        None => {
            *link = Some(Box::new(Node::new(key, value)));
            None
        }
        Some(ref mut node) => {
            let old_value = match cmp.compare(&key, &node.key) {
                Equal => return Some(replace(&mut node.value, value)),
                Less => insert(&mut node.left, cmp, key, value),
                Greater => insert(&mut node.right, cmp, key, value),
            };

            fixup(node);
            old_value
        }
    }
}

/// Removes the entry with the given key from the subtree, if present.
///
/// A node with two children is resolved by successor copy: the minimum of
/// its right subtree moves into the node, and the successor's own node is
/// the one physically unlinked. The caller recolors the root black.
pub fn remove<K, V, C, Q: ?Sized>(link: &mut Link<K, V>, cmp: &C, key: &Q) -> Option<(K, V)>
    where C: Compare<Q, K> {

    enum Step<K, V> {
        Done(Option<(K, V)>),
        Unlink,
    }

    let step = match *link {
        None => return None,
        Some(ref mut node) => {
            if cmp.compares_lt(key, &node.key) {
                if node.left.is_none() {
                    return None;
                }
                if !is_red(&node.left) && !is_red_left_left(node) {
                    move_red_left(node);
                }
                let removed = remove(&mut node.left, cmp, key);
                fixup(node);
                Step::Done(removed)
            } else {
                if is_red(&node.left) {
                    rotate_right(node);
                }

                if node.right.is_none() {
                    // The only possible left sibling of a null right link is
                    // a red left link, and the rotation above consumed it.
                    if cmp.compares_eq(key, &node.key) {
                        debug_assert!(node.left.is_none());
                        Step::Unlink
                    } else {
                        Step::Done(None)
                    }
                } else {
                    if !is_red(&node.right)
                        && !is_red(&node.right.as_ref().unwrap().left) {
                        move_red_right(node);
                    }

                    let removed = if cmp.compares_eq(key, &node.key) {
                        let (succ_key, succ_value) = remove_min(&mut node.right).unwrap();
                        Some((replace(&mut node.key, succ_key),
                              replace(&mut node.value, succ_value)))
                    } else {
                        remove(&mut node.right, cmp, key)
                    };

                    fixup(node);
                    Step::Done(removed)
                }
            }
        }
    };

    match step {
        Step::Done(removed) => removed,
        Step::Unlink => link.take().map(|node| {
            let node = *node;
            (node.key, node.value)
        }),
    }
}

/// Removes the minimum entry of the subtree.
pub fn remove_min<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    match *link {
        None => return None,
        Some(ref mut node) => {
            if node.left.is_some() {
                if !is_red(&node.left) && !is_red_left_left(node) {
                    move_red_left(node);
                }
                let removed = remove_min(&mut node.left);
                fixup(node);
                return removed;
            }
        }
    }

    link.take().map(|node| {
        let node = *node;
        debug_assert!(node.right.is_none());
        (node.key, node.value)
    })
}

/// Removes the maximum entry of the subtree.
pub fn remove_max<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    match *link {
        None => return None,
        Some(ref mut node) => {
            if is_red(&node.left) {
                rotate_right(node);
            }
            if node.right.is_some() {
                if !is_red(&node.right) && !is_red(&node.right.as_ref().unwrap().left) {
                    move_red_right(node);
                }
                let removed = remove_max(&mut node.right);
                fixup(node);
                return removed;
            }
        }
    }

    link.take().map(|node| {
        let node = *node;
        debug_assert!(node.left.is_none());
        (node.key, node.value)
    })
}

/// A reference to a link, shared or mutable, that traversals can thread
/// through without duplicating themselves per mutability.
///
/// The borrow round-trips through a raw pointer: `into_raw` captures the
/// borrow's provenance, the traversal walks raw link pointers, and
/// `from_raw` rebuilds a borrow of the original strength at the link the
/// walk landed on.
pub trait LinkRef<'a>: Sized {
    type K: 'a;
    type V: 'a;

    /// Converts the borrow into a raw link pointer.
    fn into_raw(self) -> NonNull<Link<Self::K, Self::V>>;

    /// Rebuilds the borrow from a raw link pointer.
    ///
    /// Only sound when `raw` was reached by walking the tree from the
    /// pointer `into_raw` produced for this borrow.
    unsafe fn from_raw(raw: NonNull<Link<Self::K, Self::V>>) -> Self;

    fn with<F>(self, f: F) -> Self
        where F: FnOnce(NonNull<Link<Self::K, Self::V>>) -> NonNull<Link<Self::K, Self::V>> {

        let raw = f(self.into_raw());
        unsafe { LinkRef::from_raw(raw) }
    }
}

impl<'a, K: 'a, V: 'a> LinkRef<'a> for &'a Link<K, V> {
    type K = K;
    type V = V;

    fn into_raw(self) -> NonNull<Link<K, V>> { NonNull::from(self) }

    unsafe fn from_raw(raw: NonNull<Link<K, V>>) -> &'a Link<K, V> {
        &*raw.as_ptr()
    }
}

impl<'a, K: 'a, V: 'a> LinkRef<'a> for &'a mut Link<K, V> {
    type K = K;
    type V = V;

    fn into_raw(self) -> NonNull<Link<K, V>> { NonNull::from(self) }

    unsafe fn from_raw(raw: NonNull<Link<K, V>>) -> &'a mut Link<K, V> {
        &mut *raw.as_ptr()
    }
}

/// Locates the link holding the given key, or the null link where it would
/// be inserted.
pub fn get<'a, L, C, Q: ?Sized>(link: L, cmp: &C, key: &Q) -> L
    where L: LinkRef<'a>, C: Compare<Q, L::K> {

    get_f(link, cmp, key, |_| ())
}

// Like `get`, but reports every node passed on the way down to `f`.
fn get_f<'a, L, C, Q: ?Sized, F>(link: L, cmp: &C, key: &Q, mut f: F) -> L
    where L: LinkRef<'a>, C: Compare<Q, L::K>, F: FnMut(NonNull<Box<Node<L::K, L::V>>>) {

    link.with(|mut link| loop {
        match *unsafe { link.as_ref() } {
            None => return link,
            Some(ref node) => {
                match cmp.compare(key, &node.key) {
                    Equal => return link,
                    Less => link = NonNull::from(&node.left),
                    Greater => link = NonNull::from(&node.right),
                }

                f(NonNull::from(node));
            }
        }
    })
}

/// A traversal direction.
pub trait Dir: Sized {
    type Opposite: Dir<Opposite = Self>;

    fn left() -> bool;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V>;
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn left() -> bool { true }

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn left() -> bool { false }

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.right }
}

/// Descends to the extremum of the subtree in the given direction: the
/// minimum for `Left`, the maximum for `Right`.
pub fn extremum<'a, L, D>(link: L) -> L
    where L: LinkRef<'a>, D: Dir {

    link.with(extremum_raw::<_, _, D>)
}

fn extremum_raw<K, V, D>(mut link: NonNull<Link<K, V>>) -> NonNull<Link<K, V>>
    where D: Dir {

    while let Some(ref node) = *unsafe { link.as_ref() } {
        let child = D::forward(node);
        if child.is_none() { break; }
        link = NonNull::from(child);
    }

    link
}

/// Descends to the entry closest to the given key from the given direction:
/// for `Right`, the smallest key greater than (or, if `inclusive`, equal
/// to) the given key; for `Left`, the greatest key less than (or equal to)
/// it.
pub fn closest<'a, L, C, Q: ?Sized, D>(link: L, cmp: &C, key: &Q, inclusive: bool) -> L
    where L: LinkRef<'a>, C: Compare<Q, L::K>, D: Dir {

    link.with(|mut link| {
        let mut closest_ancstr = None;

        while let Some(ref node) = *unsafe { link.as_ref() } {
            match cmp.compare(key, &node.key) {
                Equal => return
                    if inclusive {
                        link
                    } else {
                        let child = D::forward(node);

                        match closest_ancstr {
                            Some(ancstr) if child.is_none() => ancstr,
                            _ => extremum_raw::<_, _, D::Opposite>(NonNull::from(child)),
                        }
                    },
                order => link =
                    if D::left() == (order == Less) {
                        NonNull::from(D::forward(node))
                    } else {
                        closest_ancstr = Some(link);
                        NonNull::from(D::Opposite::forward(node))
                    },
            }
        }

        closest_ancstr.unwrap_or(link)
    })
}

/// Locates the entry for the given key, recording the descent path so that
/// a subsequent insertion can splice into the located slot and rebalance
/// without a second descent.
pub fn entry<'a, K, V, C>(link: &'a mut Link<K, V>, cmp: &C, key: K, len: &'a mut usize)
    -> Entry<'a, K, V> where C: Compare<K> {

    let mut path = vec![];
    let link = get_f(link, cmp, &key, |node| path.push(node));

    if link.is_some() {
        Entry::Occupied(OccupiedEntry { link })
    } else {
        Entry::Vacant(VacantEntry { path, link, len, key })
    }
}

/// An occupied entry.
///
/// See [`Map::entry`](../map/struct.Map.html#method.entry) for an example.
pub struct OccupiedEntry<'a, K, V> {
    link: &'a mut Link<K, V>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Returns a reference to the entry's key.
    pub fn key(&self) -> &K { &self.link.as_ref().unwrap().key }

    /// Returns a reference to the entry's value.
    pub fn get(&self) -> &V { &self.link.as_ref().unwrap().value }

    /// Returns a mutable reference to the entry's value.
    pub fn get_mut(&mut self) -> &mut V { &mut self.link.as_mut().unwrap().value }

    /// Returns a mutable reference to the entry's value with the same
    /// lifetime as the map.
    pub fn into_mut(self) -> &'a mut V { &mut self.link.as_mut().unwrap().value }

    /// Replaces the entry's value with the given value, returning the old
    /// one.
    pub fn insert(&mut self, value: V) -> V { replace(self.get_mut(), value) }
}

unsafe impl<'a, K, V> Send for OccupiedEntry<'a, K, V> where K: Send, V: Send {}
unsafe impl<'a, K, V> Sync for OccupiedEntry<'a, K, V> where K: Sync, V: Sync {}

/// A vacant entry.
///
/// See [`Map::entry`](../map/struct.Map.html#method.entry) for an example.
pub struct VacantEntry<'a, K, V> {
    path: Vec<NonNull<Box<Node<K, V>>>>,
    link: &'a mut Link<K, V>,
    len: &'a mut usize,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Inserts the entry into the map with its key and the given value,
    /// returning a mutable reference to the value with the same lifetime as
    /// the map.
    ///
    /// The new node is spliced into the slot located by `entry` and the
    /// recorded path is rebalanced bottom-up, avoiding a second descent.
    pub fn insert(self, value: V) -> &'a mut V {
        *self.len += 1;

        *self.link = Some(Box::new(Node::new(self.key, value)));

        // Rotations exchange box contents, never heap nodes, so this
        // pointer survives the rebalancing below.
        let value: *mut V = &mut self.link.as_mut().unwrap().value;

        for &node in self.path.iter().rev() {
            unsafe { fixup(&mut *node.as_ptr()); }
        }

        match self.path.first() {
            Some(&root) => unsafe { (*root.as_ptr()).color = Color::Black },
            None => blacken(self.link),
        }

        unsafe { &mut *value }
    }
}

unsafe impl<'a, K, V> Send for VacantEntry<'a, K, V> where K: Send, V: Send {}
unsafe impl<'a, K, V> Sync for VacantEntry<'a, K, V> where K: Sync, V: Sync {}
