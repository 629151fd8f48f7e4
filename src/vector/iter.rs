use std::iter::FusedIterator;
use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

use super::raw::RawVec;
use super::Vector;

/// An iterator that consumes the vector.
///
/// Acquire through [`IntoIterator`](struct.Vector.html#impl-IntoIterator).
pub struct IntoIter<T> {
    // Owns the allocation; never read again, its drop frees the buffer.
    _buf: RawVec<T>,
    start: *const T,
    end: *const T,
}

unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> IntoIter<T> {
    // For zero-sized types the pointers degenerate into counters: the
    // buffer never allocates, so only the distance matters.
    pub(super) fn new(buf: RawVec<T>, len: usize) -> IntoIter<T> {
        let start = buf.ptr() as *const T;
        let end = if mem::size_of::<T>() == 0 {
            (start as usize + len) as *const T
        } else {
            unsafe { start.add(len) }
        };
        IntoIter { _buf: buf, start, end }
    }

    fn remaining(&self) -> usize {
        if mem::size_of::<T>() == 0 {
            self.end as usize - self.start as usize
        } else {
            unsafe { self.end.offset_from(self.start) as usize }
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end { return None; }

        unsafe {
            if mem::size_of::<T>() == 0 {
                self.start = (self.start as usize + 1) as *const T;
                Some(ptr::read(NonNull::dangling().as_ptr()))
            } else {
                let value = ptr::read(self.start);
                self.start = self.start.add(1);
                Some(value)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end { return None; }

        unsafe {
            if mem::size_of::<T>() == 0 {
                self.end = (self.end as usize - 1) as *const T;
                Some(ptr::read(NonNull::dangling().as_ptr()))
            } else {
                self.end = self.end.sub(1);
                Some(ptr::read(self.end))
            }
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Drop the unconsumed values; the buffer frees itself.
        for _ in &mut *self {}
    }
}

/// A draining iterator over a range of the vector.
///
/// Acquire through [`Vector::drain`](struct.Vector.html#method.drain). The
/// values after the drained range shift into place when this iterator is
/// dropped.
pub struct Drain<'a, T> {
    vec: NonNull<Vector<T>>,
    tail_start: usize,
    tail_len: usize,
    iter: slice::Iter<'a, T>,
}

unsafe impl<'a, T: Send> Send for Drain<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Drain<'a, T> {}

impl<'a, T> Drain<'a, T> {
    pub(super) fn new(vec: &'a mut Vector<T>, start: usize, end: usize) -> Drain<'a, T> {
        let old_len = vec.len;

        // Until the drain is dropped only the prefix before the range
        // counts as initialized, so leaking the drain leaks values rather
        // than double-dropping them.
        vec.len = start;

        unsafe {
            let range = slice::from_raw_parts(vec.buf.ptr().add(start), end - start);
            Drain {
                vec: NonNull::from(vec),
                tail_start: end,
                tail_len: old_len - end,
                iter: range.iter(),
            }
        }
    }
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next().map(|value| unsafe { ptr::read(value) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.iter.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Drain<'a, T> {
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back().map(|value| unsafe { ptr::read(value) })
    }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {}

impl<'a, T> FusedIterator for Drain<'a, T> {}

impl<'a, T> Drop for Drain<'a, T> {
    fn drop(&mut self) {
        // Drop whatever the caller did not consume, then close the gap.
        for _ in &mut *self {}

        unsafe {
            let vec = self.vec.as_mut();
            if self.tail_len > 0 {
                let ptr = vec.buf.ptr();
                ptr::copy(ptr.add(self.tail_start), ptr.add(vec.len), self.tail_len);
            }
            vec.len += self.tail_len;
        }
    }
}
