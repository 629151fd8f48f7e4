//! A growable array with amortized O(1) appends.

use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter::FromIterator;
use std::mem::ManuallyDrop;
use std::ops::{self, Bound, RangeBounds};
use std::ptr;
use std::slice;

pub use self::iter::{Drain, IntoIter};
pub use self::raw::ReserveError;

use self::raw::RawVec;

mod iter;
mod raw;

#[cfg(test)]
mod test;

/// A growable array with amortized O(1) appends.
///
/// Values are stored contiguously, so the vector dereferences to a slice
/// and all slice methods apply. Growth at least doubles the capacity, and a
/// reallocation moves every value to a new buffer: any pointer into the
/// vector's storage is invalidated when the capacity changes.
///
/// # Examples
///
/// ```
/// use grove::Vector;
///
/// let mut v = Vector::new();
///
/// v.push(1);
/// v.push(2);
/// v.push(3);
///
/// assert_eq!(v.remove(1), 2);
/// assert_eq!(&v[..], [1, 3]);
/// ```
pub struct Vector<T> {
    buf: RawVec<T>,
    len: usize,
}

fn infallible<T>(result: Result<T, ReserveError>) -> T {
    match result {
        Ok(value) => value,
        Err(ReserveError::CapacityOverflow) => panic!("capacity overflow"),
        Err(ReserveError::AllocError { layout }) => std::alloc::handle_alloc_error(layout),
    }
}

impl<T> Vector<T> {
    /// Creates an empty vector.
    ///
    /// No memory is allocated until the first value is pushed.
    pub const fn new() -> Vector<T> {
        Vector { buf: RawVec::new(), len: 0 }
    }

    /// Creates an empty vector whose buffer can hold at least `capacity`
    /// values before reallocating.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows the maximum object size or the
    /// allocator declines the request.
    pub fn with_capacity(capacity: usize) -> Vector<T> {
        let mut vector = Vector::new();
        if capacity > 0 { infallible(vector.buf.grow_exact(0, capacity)); }
        vector
    }

    /// Returns the number of values in the vector.
    pub fn len(&self) -> usize { self.len }

    /// Checks if the vector is empty.
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the number of values the vector can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize { self.buf.capacity() }

    /// Reserves space for at least `additional` more values, growing by at
    /// least a factor of two so that repeated pushes amortize to O(1).
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows the maximum object size or the
    /// allocator declines the request.
    pub fn reserve(&mut self, additional: usize) {
        infallible(self.buf.grow_amortized(self.len, additional));
    }

    /// Reserves space for exactly `additional` more values.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`reserve`](#method.reserve).
    pub fn reserve_exact(&mut self, additional: usize) {
        infallible(self.buf.grow_exact(self.len, additional));
    }

    /// Fallibly reserves space for at least `additional` more values.
    ///
    /// On error the vector is unchanged: its buffer, length, and contents
    /// are exactly as before the call.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{ReserveError, Vector};
    ///
    /// let mut v: Vector<u8> = Vector::new();
    /// assert_eq!(v.try_reserve(usize::MAX), Err(ReserveError::CapacityOverflow));
    /// assert!(v.try_reserve(10).is_ok());
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), ReserveError> {
        self.buf.grow_amortized(self.len, additional)
    }

    /// Fallibly reserves space for exactly `additional` more values.
    pub fn try_reserve_exact(&mut self, additional: usize) -> Result<(), ReserveError> {
        self.buf.grow_exact(self.len, additional)
    }

    /// Appends a value to the back of the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Vector;
    ///
    /// let mut v = Vector::new();
    ///
    /// v.push(1);
    /// v.push(2);
    ///
    /// assert_eq!(&v[..], [1, 2]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.buf.capacity() { self.reserve(1); }

        unsafe {
            ptr::write(self.buf.ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Removes and returns the value at the back of the vector, or `None`
    /// if the vector is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Vector;
    ///
    /// let mut v = Vector::new();
    ///
    /// v.push(1);
    ///
    /// assert_eq!(v.pop(), Some(1));
    /// assert_eq!(v.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 { return None; }

        self.len -= 1;
        unsafe { Some(ptr::read(self.buf.ptr().add(self.len))) }
    }

    /// Inserts a value at the given index, shifting every value after it
    /// one position toward the back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Vector;
    ///
    /// let mut v = Vector::new();
    ///
    /// v.push(1);
    /// v.push(3);
    /// v.insert(1, 2);
    ///
    /// assert_eq!(&v[..], [1, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(index <= self.len, "index out of bounds");

        if self.len == self.buf.capacity() { self.reserve(1); }

        unsafe {
            let p = self.buf.ptr().add(index);
            ptr::copy(p, p.add(1), self.len - index);
            ptr::write(p, value);
        }
        self.len += 1;
    }

    /// Inserts clones of the given values at the given index, shifting
    /// every value after it toward the back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Vector;
    ///
    /// let mut v = Vector::new();
    ///
    /// v.push(1);
    /// v.push(4);
    /// v.insert_slice(1, &[2, 3]);
    ///
    /// assert_eq!(&v[..], [1, 2, 3, 4]);
    /// ```
    pub fn insert_slice(&mut self, index: usize, values: &[T]) where T: Clone {
        assert!(index <= self.len, "index out of bounds");
        self.reserve(values.len());

        let old_len = self.len;
        unsafe {
            let p = self.buf.ptr().add(index);
            ptr::copy(p, p.add(values.len()), old_len - index);

            // While the gap is open, only the prefix counts as initialized:
            // a panicking clone leaks the moved tail instead of dropping
            // through the gap.
            self.len = index;
            for (i, value) in values.iter().enumerate() {
                ptr::write(p.add(i), value.clone());
            }
            self.len = old_len + values.len();
        }
    }

    /// Removes and returns the value at the given index, shifting every
    /// value after it one position toward the front.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Vector;
    ///
    /// let mut v = Vector::new();
    ///
    /// v.push(1);
    /// v.push(2);
    /// v.push(3);
    ///
    /// assert_eq!(v.remove(1), 2);
    /// assert_eq!(&v[..], [1, 3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "index out of bounds");

        unsafe {
            let p = self.buf.ptr().add(index);
            let value = ptr::read(p);
            self.len -= 1;
            ptr::copy(p.add(1), p, self.len - index);
            value
        }
    }

    /// Removes the values in the given index range, returning an iterator
    /// over them. The values left after the range shift toward the front
    /// when the iterator is dropped.
    ///
    /// If the iterator is leaked, an unspecified number of values in and
    /// after the range leak with it; the vector remains valid.
    ///
    /// # Panics
    ///
    /// Panics if the range starts after it ends or ends past `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Vector;
    ///
    /// let mut v: Vector<_> = (1..6).collect();
    ///
    /// let drained: Vec<_> = v.drain(1..4).collect();
    ///
    /// assert_eq!(drained, [2, 3, 4]);
    /// assert_eq!(&v[..], [1, 5]);
    /// ```
    pub fn drain<R: RangeBounds<usize>>(&mut self, range: R) -> Drain<'_, T> {
        fn exclusive(index: usize) -> usize {
            index.checked_add(1).expect("drain range bound overflows usize")
        }

        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => exclusive(start),
            Bound::Unbounded => 0,
        };

        let end = match range.end_bound() {
            Bound::Included(&end) => exclusive(end),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };

        assert!(start <= end, "drain range starts after it ends");
        assert!(end <= self.len, "drain range ends past the end of the vector");

        Drain::new(self, start, end)
    }

    /// Shortens the vector to the given length, dropping the values past
    /// it. Has no effect if `len` is not below the vector's length.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Vector;
    ///
    /// let mut v: Vector<_> = (1..6).collect();
    ///
    /// v.truncate(2);
    ///
    /// assert_eq!(&v[..], [1, 2]);
    /// ```
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len { return; }

        unsafe {
            let tail = slice::from_raw_parts_mut(self.buf.ptr().add(len), self.len - len);
            // Shorten first so a panicking destructor cannot expose the
            // dropped tail.
            self.len = len;
            ptr::drop_in_place(tail);
        }
    }

    /// Removes all values from the vector. The buffer is retained.
    pub fn clear(&mut self) { self.truncate(0); }

    /// Resizes the vector to the given length, dropping values past it or
    /// appending clones of the given value to reach it.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::Vector;
    ///
    /// let mut v = Vector::new();
    ///
    /// v.resize(3, 7);
    /// assert_eq!(&v[..], [7, 7, 7]);
    ///
    /// v.resize(1, 0);
    /// assert_eq!(&v[..], [7]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) where T: Clone {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        self.reserve(new_len - self.len);
        while self.len < new_len {
            unsafe {
                ptr::write(self.buf.ptr().add(self.len), value.clone());
            }
            self.len += 1;
        }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] { self }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] { self }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Vector<T> {
        let mut vector = Vector::with_capacity(self.len);
        vector.extend(self.iter().cloned());
        vector
    }

    fn clone_from(&mut self, source: &Vector<T>) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Vector<T> { Vector::new() }
}

impl<T> ops::Deref for Vector<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }
}

impl<T> ops::DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(&mut **self);
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, it: I) {
        let it = it.into_iter();
        self.reserve(it.size_hint().0);
        for value in it { self.push(value); }
    }
}

impl<'a, T: Clone> From<&'a [T]> for Vector<T> {
    fn from(values: &[T]) -> Vector<T> {
        let mut vector = Vector::with_capacity(values.len());
        vector.extend(values.iter().cloned());
        vector
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(it: I) -> Vector<T> {
        let mut vector = Vector::new();
        vector.extend(it);
        vector
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) { Hash::hash(&**self, h) }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> slice::Iter<'a, T> { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> slice::IterMut<'a, T> { self.iter_mut() }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Returns an iterator that consumes the vector front to back.
    fn into_iter(self) -> IntoIter<T> {
        let vector = ManuallyDrop::new(self);
        unsafe {
            let buf = ptr::read(&vector.buf);
            IntoIter::new(buf, vector.len)
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Vector<T>) -> bool { **self == **other }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Vector<T>) -> Option<Ordering> {
        PartialOrd::partial_cmp(&**self, &**other)
    }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Vector<T>) -> Ordering { Ord::cmp(&**self, &**other) }
}
