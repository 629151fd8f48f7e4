use std::alloc::{self, Layout};
use std::cmp;
use std::error::Error;
use std::fmt;
use std::mem;
use std::ptr::{self, NonNull};

/// The vector's buffer: a capacity's worth of raw storage with no record of
/// which slots hold live values. The owning vector tracks initialization and
/// drops the live prefix; this type only allocates, grows, and frees.
///
/// Zero-sized element types never allocate and report an infinite capacity.
pub struct RawVec<T> {
    ptr: NonNull<T>,
    cap: usize,
}

unsafe impl<T: Send> Send for RawVec<T> {}
unsafe impl<T: Sync> Sync for RawVec<T> {}

/// The error returned when a vector's buffer cannot be enlarged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReserveError {
    /// The required capacity overflows the maximum object size.
    CapacityOverflow,
    /// The allocator declined the request.
    AllocError {
        /// The layout of the allocation that failed.
        layout: Layout,
    },
}

impl fmt::Display for ReserveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ReserveError::CapacityOverflow =>
                write!(f, "capacity exceeds the maximum object size"),
            ReserveError::AllocError { layout } =>
                write!(f, "allocation of {} bytes failed", layout.size()),
        }
    }
}

impl Error for ReserveError {}

impl<T> RawVec<T> {
    pub const fn new() -> RawVec<T> {
        let cap = if mem::size_of::<T>() == 0 { usize::MAX } else { 0 };
        RawVec { ptr: NonNull::dangling(), cap }
    }

    pub fn ptr(&self) -> *mut T { self.ptr.as_ptr() }

    pub fn capacity(&self) -> usize { self.cap }

    /// Grows the buffer to hold at least `len + additional` values, at least
    /// doubling the capacity so that repeated pushes amortize to O(1). The
    /// first `len` slots must be initialized; they are moved into the new
    /// buffer before the old one is released.
    pub fn grow_amortized(&mut self, len: usize, additional: usize) -> Result<(), ReserveError> {
        let required = match len.checked_add(additional) {
            Some(required) => required,
            None => return Err(ReserveError::CapacityOverflow),
        };

        if required <= self.cap { return Ok(()); }
        self.reallocate(len, cmp::max(self.cap * 2, required))
    }

    /// Grows the buffer to hold exactly `len + additional` values.
    pub fn grow_exact(&mut self, len: usize, additional: usize) -> Result<(), ReserveError> {
        let required = match len.checked_add(additional) {
            Some(required) => required,
            None => return Err(ReserveError::CapacityOverflow),
        };

        if required <= self.cap { return Ok(()); }
        self.reallocate(len, required)
    }

    // Allocate the new buffer first, then move the live prefix, then release
    // the old buffer. A failed allocation leaves the buffer untouched.
    fn reallocate(&mut self, len: usize, cap: usize) -> Result<(), ReserveError> {
        debug_assert!(mem::size_of::<T>() != 0);
        debug_assert!(len <= self.cap && self.cap < cap);

        let layout = match Layout::array::<T>(cap) {
            Ok(layout) if layout.size() <= isize::MAX as usize => layout,
            _ => return Err(ReserveError::CapacityOverflow),
        };

        let new = match NonNull::new(unsafe { alloc::alloc(layout) } as *mut T) {
            Some(new) => new,
            None => return Err(ReserveError::AllocError { layout }),
        };

        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new.as_ptr(), len);
            self.release();
        }

        self.ptr = new;
        self.cap = cap;
        Ok(())
    }

    unsafe fn release(&mut self) {
        if self.cap != 0 && mem::size_of::<T>() != 0 {
            let layout = Layout::from_size_align_unchecked(
                mem::size_of::<T>() * self.cap,
                mem::align_of::<T>(),
            );
            alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout);
        }
    }
}

impl<T> Drop for RawVec<T> {
    fn drop(&mut self) {
        unsafe { self.release(); }
    }
}
