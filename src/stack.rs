//! A LIFO stack adapter over a back-insertable sequence.

use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::iter::FromIterator;
use std::marker::PhantomData;

use crate::vector::Vector;

/// A sequence a stack can be adapted over: anything with O(1) access to a
/// well-defined back end.
pub trait Sequence<T> {
    fn push_back(&mut self, value: T);
    fn pop_back(&mut self) -> Option<T>;
    fn back(&self) -> Option<&T>;
    fn back_mut(&mut self) -> Option<&mut T>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool { self.len() == 0 }
}

impl<T> Sequence<T> for Vector<T> {
    fn push_back(&mut self, value: T) { self.push(value); }
    fn pop_back(&mut self) -> Option<T> { self.pop() }
    fn back(&self) -> Option<&T> { self.last() }
    fn back_mut(&mut self) -> Option<&mut T> { self.last_mut() }
    fn len(&self) -> usize { Vector::len(self) }
}

impl<T> Sequence<T> for Vec<T> {
    fn push_back(&mut self, value: T) { self.push(value); }
    fn pop_back(&mut self) -> Option<T> { self.pop() }
    fn back(&self) -> Option<&T> { self.last() }
    fn back_mut(&mut self) -> Option<&mut T> { self.last_mut() }
    fn len(&self) -> usize { Vec::len(self) }
}

/// A LIFO stack adapter over a back-insertable sequence.
///
/// The underlying sequence defaults to [`Vector`] and is never touched
/// except at its back, so the stack's push, pop, and top all cost what the
/// sequence's back operations cost.
///
/// # Examples
///
/// ```
/// use grove::Stack;
///
/// let mut stack = Stack::new();
///
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
pub struct Stack<T, S = Vector<T>> where S: Sequence<T> {
    seq: S,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack over a [`Vector`].
    pub fn new() -> Stack<T> { Stack::from_inner(Vector::new()) }
}

impl<T, S> Stack<T, S> where S: Sequence<T> {
    /// Creates a stack over the given sequence, whose back becomes the top
    /// of the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Stack;
    ///
    /// let mut stack = Stack::from_inner(vec![1, 2, 3]);
    /// assert_eq!(stack.pop(), Some(3));
    /// ```
    pub fn from_inner(seq: S) -> Stack<T, S> {
        Stack { seq, _marker: PhantomData }
    }

    /// Consumes the stack, returning the underlying sequence.
    pub fn into_inner(self) -> S { self.seq }

    /// Checks if the stack is empty.
    pub fn is_empty(&self) -> bool { self.seq.is_empty() }

    /// Returns the number of values on the stack.
    pub fn len(&self) -> usize { self.seq.len() }

    /// Pushes a value onto the top of the stack.
    pub fn push(&mut self, value: T) { self.seq.push_back(value); }

    /// Removes and returns the value on top of the stack, or `None` if the
    /// stack is empty.
    pub fn pop(&mut self) -> Option<T> { self.seq.pop_back() }

    /// Returns a reference to the value on top of the stack, or `None` if
    /// the stack is empty.
    pub fn top(&self) -> Option<&T> { self.seq.back() }

    /// Returns a mutable reference to the value on top of the stack, or
    /// `None` if the stack is empty.
    pub fn top_mut(&mut self) -> Option<&mut T> { self.seq.back_mut() }
}

impl<T, S> Clone for Stack<T, S> where S: Sequence<T> + Clone {
    fn clone(&self) -> Stack<T, S> { Stack::from_inner(self.seq.clone()) }
}

impl<T, S> Debug for Stack<T, S> where S: Sequence<T> + Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Stack").field(&self.seq).finish()
    }
}

impl<T, S> Default for Stack<T, S> where S: Sequence<T> + Default {
    fn default() -> Stack<T, S> { Stack::from_inner(Default::default()) }
}

impl<T, S> Extend<T> for Stack<T, S> where S: Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, it: I) {
        for value in it { self.push(value); }
    }
}

impl<T, S> FromIterator<T> for Stack<T, S> where S: Sequence<T> + Default {
    fn from_iter<I: IntoIterator<Item = T>>(it: I) -> Stack<T, S> {
        let mut stack = Stack::from_inner(S::default());
        stack.extend(it);
        stack
    }
}

impl<T, S> PartialEq for Stack<T, S> where S: Sequence<T> + PartialEq {
    fn eq(&self, other: &Stack<T, S>) -> bool { self.seq == other.seq }
}

impl<T, S> Eq for Stack<T, S> where S: Sequence<T> + Eq {}

impl<T, S> PartialOrd for Stack<T, S> where S: Sequence<T> + PartialOrd {
    fn partial_cmp(&self, other: &Stack<T, S>) -> Option<Ordering> {
        self.seq.partial_cmp(&other.seq)
    }
}

impl<T, S> Ord for Stack<T, S> where S: Sequence<T> + Ord {
    fn cmp(&self, other: &Stack<T, S>) -> Ordering { self.seq.cmp(&other.seq) }
}
