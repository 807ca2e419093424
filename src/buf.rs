// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The single-owner heap buffer backing [`GrowVec`](crate::GrowVec).
//!
//! An [`OwnedBuf<T>`] owns exactly one contiguous block of `T` whose length is
//! fixed at construction. It never grows or shrinks in place: a container that
//! needs more room builds a new buffer and [`swap`](OwnedBuf::swap)s it in.
//!
//! - A zero-length buffer owns no allocation.
//! - There is no `Clone`: two buffers never own the same block.
//! - Indexing covers the whole block and knows nothing about any logical
//!   length the owner may track on top of it.

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    fmt, iter, mem,
    ops::{Index, IndexMut},
};

/// Exclusive owner of a fixed-size, heap-allocated block of `T`.
pub struct OwnedBuf<T> {
    items: Box<[T]>,
}

impl<T: Default> OwnedBuf<T> {
    /// Allocates a block of exactly `capacity` default-valued elements.
    ///
    /// `capacity == 0` performs no allocation. Allocation failure is not
    /// reported; it goes through the global allocator's error handler.
    pub fn new(capacity: usize) -> Self {
        if capacity == 0 {
            return Self::default();
        }
        Self {
            items: iter::repeat_with(T::default).take(capacity).collect(),
        }
    }
}

impl<T> OwnedBuf<T> {
    /// Takes ownership of a block the caller already allocated.
    #[inline]
    pub fn from_boxed_slice(items: Box<[T]>) -> Self {
        Self { items }
    }

    /// Number of elements in the block (the capacity it was created with).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this buffer owns no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if this buffer owns a non-empty block.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        !self.items.is_empty()
    }

    /// Gives up ownership of the block and leaves `self` empty.
    ///
    /// Returns `None` if there was nothing to release.
    #[must_use]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        if self.items.is_empty() {
            return None;
        }
        Some(mem::take(&mut self.items))
    }

    /// Moves the block out into a new buffer, leaving `self` empty.
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            items: mem::take(&mut self.items),
        }
    }

    /// Exchanges the owned blocks of two buffers in O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.items, &mut other.items);
    }

    /// The whole block as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The whole block as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T> Default for OwnedBuf<T> {
    fn default() -> Self {
        Self {
            items: Box::default(),
        }
    }
}

impl<T> From<Box<[T]>> for OwnedBuf<T> {
    fn from(items: Box<[T]>) -> Self {
        Self::from_boxed_slice(items)
    }
}

impl<T> Index<usize> for OwnedBuf<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.items[i]
    }
}

impl<T> IndexMut<usize> for OwnedBuf<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.items[i]
    }
}

impl<T: fmt::Debug> fmt::Debug for OwnedBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuf")
            .field("len", &self.items.len())
            .field("items", &&*self.items)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::OwnedBuf;
    use alloc::vec;

    #[test]
    fn test_new_zero_capacity_owns_nothing() {
        let b: OwnedBuf<i32> = OwnedBuf::new(0);
        assert!(!b.is_allocated());
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
    }

    #[test]
    fn test_new_fills_with_default() {
        let b: OwnedBuf<i32> = OwnedBuf::new(4);
        assert!(b.is_allocated());
        assert_eq!(b.len(), 4);
        assert_eq!(b.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_index_reads_and_writes_whole_block() {
        let mut b: OwnedBuf<u8> = OwnedBuf::new(3);
        b[0] = 1;
        b[2] = 3;
        assert_eq!(b[0], 1);
        assert_eq!(b[1], 0);
        assert_eq!(b.as_slice(), &[1, 0, 3]);
    }

    #[test]
    #[should_panic]
    fn test_index_on_empty_panics() {
        let b: OwnedBuf<u8> = OwnedBuf::default();
        let _ = b[0];
    }

    #[test]
    fn test_release_hands_back_block_and_empties() {
        let mut b: OwnedBuf<i32> = OwnedBuf::from_boxed_slice(vec![7, 8].into_boxed_slice());
        let block = b.release().unwrap();
        assert_eq!(&*block, &[7, 8]);
        assert!(!b.is_allocated());
        assert!(b.release().is_none());
    }

    #[test]
    fn test_take_moves_ownership() {
        let mut a: OwnedBuf<i32> = OwnedBuf::new(2);
        a[1] = 5;
        let b = a.take();
        assert!(!a.is_allocated());
        assert_eq!(b.as_slice(), &[0, 5]);
    }

    #[test]
    fn test_swap_exchanges_blocks() {
        let mut a: OwnedBuf<i32> = vec![1, 2, 3].into_boxed_slice().into();
        let mut b: OwnedBuf<i32> = OwnedBuf::default();
        a.swap(&mut b);
        assert!(!a.is_allocated());
        assert_eq!(b.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_drop_releases_elements() {
        use alloc::rc::Rc;

        let marker = Rc::new(());
        {
            let mut b: OwnedBuf<Option<Rc<()>>> = OwnedBuf::new(2);
            b[0] = Some(Rc::clone(&marker));
            b[1] = Some(Rc::clone(&marker));
            assert_eq!(Rc::strong_count(&marker), 3);
        }
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn test_debug_shows_len_and_items() {
        use alloc::format;
        let b: OwnedBuf<i32> = vec![4, 5].into_boxed_slice().into();
        let dbg = format!("{b:?}");
        assert!(dbg.contains("OwnedBuf"));
        assert!(dbg.contains("[4, 5]"));
    }
}
