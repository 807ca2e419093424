// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buf::OwnedBuf, vec::GrowVec};

// Alloc imports
use alloc::boxed::Box;

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(items: [T; N]) -> Self {
        let items: Box<[T]> = Box::new(items);
        items.into()
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    fn from(src: &[T]) -> Self {
        let items: Box<[T]> = src.iter().cloned().collect();
        items.into()
    }
}

impl<T> From<Box<[T]>> for GrowVec<T> {
    /// Adopts `items` as a full vector (`len == capacity == items.len()`).
    fn from(items: Box<[T]>) -> Self {
        let len = items.len();
        Self {
            buf: OwnedBuf::from_boxed_slice(items),
            len,
            capacity: len,
        }
    }
}
