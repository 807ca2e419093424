// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`GrowVec`](crate::GrowVec).
//!
//! - `IntoIter<T>` owns the buffer, yields by value and supports
//!   `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//! - `&GrowVec` and `&mut GrowVec` iterate as slices.
//!
//! An empty vector yields nothing; there is no sentinel position to compare
//! against.

// Crate imports
use crate::{buf::OwnedBuf, vec::GrowVec};

// Core imports
use core::{fmt, iter::FusedIterator, mem};

/// Owned iterator returned by `GrowVec::into_iter()`.
///
/// Each yielded slot is replaced with `T::default()`; the remaining elements
/// and the buffer are dropped with the iterator.
///
/// The iterator impls require `T: Default` only because values are moved out
/// of the buffer with [`mem::take`], which needs something to leave behind.
pub struct IntoIter<T> {
    buf: OwnedBuf<T>,
    front: usize,
    back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf.as_slice()[self.front..self.back]
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            Some(mem::take(&mut self.buf[i]))
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.front = self.back;
            return None;
        }
        let i = self.front + n;
        self.front = i + 1;
        Some(mem::take(&mut self.buf[i]))
    }
}

impl<T: Default> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            Some(mem::take(&mut self.buf[self.back]))
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.front = self.back;
            None
        } else {
            self.back -= n + 1;
            Some(mem::take(&mut self.buf[self.back]))
        }
    }
}
impl<T: Default> FusedIterator for IntoIter<T> {}
impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T: Default> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter {
            buf: self.buf.take(),
            front: 0,
            back: self.len,
        }
    }
}
