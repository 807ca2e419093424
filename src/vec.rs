// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowVec` type and its inherent API.
//!
//! `GrowVec<T>` is a growable vector stored in a single [`OwnedBuf`]. It tracks
//! a logical length on top of the buffer and replaces the buffer wholesale
//! whenever it runs out of room. Methods mirror slice/`Vec` semantics where they
//! make sense, with checked variants for the positional operations.

mod heap;

// Crate imports
use crate::{buf::OwnedBuf, error::Error};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut},
};

/// A growable, heap-backed vector built on a single-owner buffer.
///
/// `GrowVec<T>` owns one [`OwnedBuf<T>`] of `capacity` slots and tracks a
/// logical length `len ∈ 0..=capacity`.
///
/// # Layout and invariants
///
/// - `buf` holds exactly `capacity` slots; `capacity == 0` means no allocation.
/// - Slots `[0, len)` are the elements. Slots `[len, capacity)` hold valid but
///   logically unused values and are never exposed through slices or
///   iterators.
/// - Only one `GrowVec` owns a given buffer. Moving, [`take`](GrowVec::take)
///   and [`swap`](GrowVec::swap) transfer it and leave the source empty (or
///   holding the other side of the swap).
///
/// # Growth policy
///
/// - A single-element [`push`](GrowVec::push) or [`insert`](GrowVec::insert)
///   on a full vector allocates `(len + 1) * 2`, so an empty vector's first
///   push allocates `2`.
/// - The one exception is `insert` into an unallocated vector, which
///   allocates a single slot.
/// - [`resize`](GrowVec::resize) past the capacity allocates `new_len * 2`.
/// - [`reserve`](GrowVec::reserve) allocates exactly what was asked for.
///
/// Every reallocation moves the live elements into the new buffer in order and
/// drops the old one. Appends are amortized `O(1)`; a single append is `O(len)`
/// when it triggers growth.
///
/// # Element bounds
///
/// The buffer is always fully initialized, so constructors and every
/// operation that may allocate require `T: Default`. Cloning additionally
/// requires `T: Clone`.
///
/// # Checked vs unchecked access
///
/// - `v[i]`, [`pop_back`](GrowVec::pop_back), [`insert`](GrowVec::insert) and
///   [`erase`](GrowVec::erase) treat a bad position as a caller bug and panic
///   (or debug-assert, for `pop_back`).
/// - [`at`](GrowVec::at), [`at_mut`](GrowVec::at_mut),
///   [`try_insert`](GrowVec::try_insert) and [`try_erase`](GrowVec::try_erase)
///   return [`Error::OutOfRange`] and leave the vector unchanged.
///
/// # Examples
///
/// ```rust
/// use grow_vec::GrowVec;
///
/// let mut v: GrowVec<i32> = GrowVec::new();
/// v.push(1);
/// v.push(2);
/// v.push(3);
///
/// let next = v.erase(1);
/// assert_eq!(v.as_slice(), &[1, 3]);
/// v.insert(next, 5);
/// assert_eq!(v.as_slice(), &[1, 5, 3]);
/// assert!(v.at(3).is_err());
/// ```
pub struct GrowVec<T> {
    pub(crate) buf: OwnedBuf<T>,
    pub(crate) len: usize,
    pub(crate) capacity: usize,
}

impl<T> GrowVec<T> {
    /// Returns the number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current logical length.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of pushes that will not reallocate.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Bounds-checked access.
    ///
    /// Returns [`Error::OutOfRange`] when `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.get(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Bounds-checked mutable access.
    ///
    /// Returns [`Error::OutOfRange`] when `index >= len`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }
}

impl<T> GrowVec<T> {
    /// Sets `len = 0`. The buffer and its capacity are kept for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    ///
    /// Never touches the capacity.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Exchanges buffer, length and capacity with `other` in O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Moves the contents out into a new vector and leaves `self` empty
    /// (`len == capacity == 0`, no allocation).
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        let mut out = Self::default();
        self.swap(&mut out);
        out
    }

    /// Returns `true` if the vector contains `x` (linear search over `[0, len)`).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self {
            buf: OwnedBuf::default(),
            len: 0,
            capacity: 0,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for GrowVec<T> {}
impl<T: Ord> Ord for GrowVec<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for GrowVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for GrowVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for GrowVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
