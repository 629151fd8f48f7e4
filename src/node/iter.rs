use compare::Compare;
use std::cmp::Ordering::*;
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::ops::Bound;
use std::ptr::NonNull;

use super::{Link, LinkExt, Node};

/// A node reference an in-order traversal can descend through: a shared
/// borrow for `iter`, an owning box for `into_iter`.
pub trait NodeRef {
    type Key;
    type Item;
    fn key(&self) -> &Self::Key;
    fn item(self) -> Self::Item;
    fn left(&mut self) -> Option<Self>
    where
        Self: Sized;
    fn right(&mut self) -> Option<Self>
    where
        Self: Sized;
}

impl<'a, K, V> NodeRef for &'a Node<K, V> {
    type Key = K;
    type Item = (&'a K, &'a V);
    fn key(&self) -> &K { &self.key }
    fn item(self) -> (&'a K, &'a V) { (&self.key, &self.value) }
    fn left(&mut self) -> Option<&'a Node<K, V>> { self.left.as_node_ref() }
    fn right(&mut self) -> Option<&'a Node<K, V>> { self.right.as_node_ref() }
}

impl<K, V> NodeRef for Box<Node<K, V>> {
    type Key = K;
    type Item = (K, V);
    fn key(&self) -> &K { &self.key }
    fn item(self) -> (K, V) {
        let node = *self;
        (node.key, node.value)
    }
    fn left(&mut self) -> Link<K, V> { self.left.take() }
    fn right(&mut self) -> Link<K, V> { self.right.take() }
}

/// Which children of a frame's node the traversal has already committed to.
#[derive(Clone, Copy)]
enum Seen {
    Neither,
    Left,
    Right,
    Both,
}

/// One frame of the traversal stack.
#[derive(Clone)]
struct Frame<N> {
    node: N,
    seen: Seen,
}

impl<N> Frame<N>
where
    N: NodeRef,
{
    fn new(node: N) -> Frame<N> {
        Frame { node, seen: Seen::Neither }
    }

    /// Claims the left child, if it has not been claimed yet.
    fn left(&mut self) -> Option<N> {
        match self.seen {
            Seen::Neither => {
                self.seen = Seen::Left;
                self.node.left()
            }
            Seen::Right => {
                self.seen = Seen::Both;
                self.node.left()
            }
            Seen::Left | Seen::Both => None,
        }
    }

    /// Claims the right child, if it has not been claimed yet.
    fn right(&mut self) -> Option<N> {
        match self.seen {
            Seen::Neither => {
                self.seen = Seen::Right;
                self.node.right()
            }
            Seen::Left => {
                self.seen = Seen::Both;
                self.node.right()
            }
            Seen::Right | Seen::Both => None,
        }
    }

    fn key(&self) -> &N::Key { self.node.key() }

    fn item(self) -> N::Item { self.node.item() }
}

enum Op<T> {
    Push(Option<T>),
    PopPush(Option<T>),
    Pop,
}

/// A bidirectional in-order traversal over an explicit stack of frames.
///
/// The deque's back is the forward frontier and its front the backward one,
/// so one structure serves `next` and `next_back` without parent links.
#[derive(Clone)]
pub struct Iter<N>
where
    N: NodeRef,
{
    frames: VecDeque<Frame<N>>,
    size: usize,
}

impl<N> Iter<N>
where
    N: NodeRef,
{
    pub fn new(root: Option<N>, size: usize) -> Iter<N> {
        Iter { frames: root.into_iter().map(Frame::new).collect(), size }
    }

    /// Builds a traversal restricted to the keys within the given bounds by
    /// trimming the frontier on both sides before any item is yielded.
    pub fn range<C, Min: ?Sized, Max: ?Sized>(
        root: Option<N>,
        size: usize,
        cmp: &C,
        min: Bound<&Min>,
        max: Bound<&Max>,
    ) -> Iter<N>
    where
        C: Compare<Min, N::Key> + Compare<Max, N::Key>,
    {
        fn bound_to_opt<T>(bound: Bound<T>) -> Option<(T, bool)> {
            match bound {
                Bound::Unbounded => None,
                Bound::Included(bound) => Some((bound, true)),
                Bound::Excluded(bound) => Some((bound, false)),
            }
        }

        enum Trim<T> {
            PopPush(Option<T>, bool),
            Push(Option<T>),
        }

        let mut it = Iter::new(root, size);

        if let Some((min, inclusive)) = bound_to_opt(min) {
            loop {
                let op = match it.frames.back_mut() {
                    None => break,
                    Some(frame) => match cmp.compare(min, frame.key()) {
                        Equal =>
                            if inclusive {
                                if frame.left().is_some() { it.size -= 1; }
                                break;
                            } else {
                                Trim::PopPush(frame.right(), true)
                            },
                        Greater => Trim::PopPush(frame.right(), false),
                        Less => Trim::Push(frame.left()),
                    },
                };

                match op {
                    Trim::Push(node) => match node {
                        None => break,
                        Some(node) => it.frames.push_back(Frame::new(node)),
                    },
                    Trim::PopPush(node, done) => {
                        it.frames.pop_back();
                        it.size -= 1;
                        if let Some(node) = node { it.frames.push_back(Frame::new(node)); }
                        if done { break; }
                    }
                }
            }
        }

        if let Some((max, inclusive)) = bound_to_opt(max) {
            loop {
                let op = match it.frames.front_mut() {
                    None => break,
                    Some(frame) => match cmp.compare(max, frame.key()) {
                        Equal =>
                            if inclusive {
                                if frame.right().is_some() { it.size -= 1; }
                                break;
                            } else {
                                Trim::PopPush(frame.left(), true)
                            },
                        Less => Trim::PopPush(frame.left(), false),
                        Greater => Trim::Push(frame.right()),
                    },
                };

                match op {
                    Trim::Push(node) => match node {
                        None => break,
                        Some(node) => it.frames.push_front(Frame::new(node)),
                    },
                    Trim::PopPush(node, done) => {
                        it.frames.pop_front();
                        it.size -= 1;
                        if let Some(node) = node { it.frames.push_front(Frame::new(node)); }
                        if done { break; }
                    }
                }
            }
        }

        it
    }

    // After range trimming, `size` only bounds the item count from above.
    pub fn range_size_hint(&self) -> (usize, Option<usize>) {
        (self.frames.len(), Some(self.size))
    }
}

impl<N> Iterator for Iter<N>
where
    N: NodeRef,
{
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        loop {
            let op = match self.frames.back_mut() {
                None => return None,
                Some(frame) => match frame.seen {
                    Seen::Neither | Seen::Right => Op::Push(frame.left()),
                    Seen::Left => Op::PopPush(frame.right()),
                    Seen::Both => Op::Pop,
                },
            };

            match op {
                Op::Push(node) =>
                    if let Some(node) = node { self.frames.push_back(Frame::new(node)); },
                Op::PopPush(node) => {
                    self.size -= 1;
                    let frame = self.frames.pop_back().unwrap();
                    if let Some(node) = node { self.frames.push_back(Frame::new(node)); }
                    return Some(frame.item());
                }
                Op::Pop => {
                    self.size -= 1;
                    let frame = self.frames.pop_back().unwrap();
                    return Some(frame.item());
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<N> DoubleEndedIterator for Iter<N>
where
    N: NodeRef,
{
    fn next_back(&mut self) -> Option<N::Item> {
        loop {
            let op = match self.frames.front_mut() {
                None => return None,
                Some(frame) => match frame.seen {
                    Seen::Neither | Seen::Left => Op::Push(frame.right()),
                    Seen::Right => Op::PopPush(frame.left()),
                    Seen::Both => Op::Pop,
                },
            };

            match op {
                Op::Push(node) =>
                    if let Some(node) = node { self.frames.push_front(Frame::new(node)); },
                Op::PopPush(node) => {
                    self.size -= 1;
                    let frame = self.frames.pop_front().unwrap();
                    if let Some(node) = node { self.frames.push_front(Frame::new(node)); }
                    return Some(frame.item());
                }
                Op::Pop => {
                    self.size -= 1;
                    let frame = self.frames.pop_front().unwrap();
                    return Some(frame.item());
                }
            }
        }
    }
}

/// A node reference carrying a unique borrow of the tree as a raw pointer,
/// so the traversal can hold a whole path of them at once. The frames of a
/// path point at distinct heap nodes, and each node's item is handed out at
/// most once, so every `(&K, &mut V)` yielded is the only live borrow of
/// that node.
struct MutNode<'a, K, V> {
    node: NonNull<Node<K, V>>,
    _marker: PhantomData<&'a mut Node<K, V>>,
}

impl<'a, K, V> MutNode<'a, K, V> {
    fn new(node: &'a mut Node<K, V>) -> MutNode<'a, K, V> {
        MutNode { node: NonNull::from(node), _marker: PhantomData }
    }
}

impl<'a, K, V> NodeRef for MutNode<'a, K, V> {
    type Key = K;
    type Item = (&'a K, &'a mut V);

    fn key(&self) -> &K { unsafe { &self.node.as_ref().key } }

    fn item(self) -> (&'a K, &'a mut V) {
        let node = unsafe { &mut *self.node.as_ptr() };
        (&node.key, &mut node.value)
    }

    fn left(&mut self) -> Option<MutNode<'a, K, V>> {
        unsafe { self.node.as_mut() }.left.as_deref_mut().map(MutNode::new)
    }

    fn right(&mut self) -> Option<MutNode<'a, K, V>> {
        unsafe { self.node.as_mut() }.right.as_deref_mut().map(MutNode::new)
    }
}

pub struct IterMut<'a, K, V> {
    iter: Iter<MutNode<'a, K, V>>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub fn new(root: &'a mut Link<K, V>, size: usize) -> IterMut<'a, K, V> {
        IterMut { iter: Iter::new(root.as_deref_mut().map(MutNode::new), size) }
    }

    pub fn range<C, Min: ?Sized, Max: ?Sized>(
        root: &'a mut Link<K, V>,
        size: usize,
        cmp: &C,
        min: Bound<&Min>,
        max: Bound<&Max>,
    ) -> IterMut<'a, K, V>
    where
        C: Compare<Min, K> + Compare<Max, K>,
    {
        IterMut { iter: Iter::range(root.as_deref_mut().map(MutNode::new), size, cmp, min, max) }
    }

    pub fn range_size_hint(&self) -> (usize, Option<usize>) { self.iter.range_size_hint() }
}

unsafe impl<'a, K, V> Send for IterMut<'a, K, V> where K: Send, V: Send {}
unsafe impl<'a, K, V> Sync for IterMut<'a, K, V> where K: Sync, V: Sync {}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<(&'a K, &'a mut V)> { self.iter.next() }

    fn size_hint(&self) -> (usize, Option<usize>) { self.iter.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> { self.iter.next_back() }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}
