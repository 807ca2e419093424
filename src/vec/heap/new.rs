// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buf::OwnedBuf, hint::ReserveHint, vec::GrowVec};

impl<T> GrowVec<T> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Default> GrowVec<T> {
    /// Constructs a vector of `len` default-valued elements (`capacity == len`).
    pub fn with_len(len: usize) -> Self {
        Self {
            buf: OwnedBuf::new(len),
            len,
            capacity: len,
        }
    }

    /// Constructs an empty vector with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: OwnedBuf::new(capacity),
            len: 0,
            capacity,
        }
    }

    /// Constructs a vector of `len` copies of `value` (`capacity == len`).
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut v = Self::with_len(len);
        v.as_mut_slice().fill(value);
        v
    }
}

impl<T: Default> From<ReserveHint> for GrowVec<T> {
    fn from(hint: ReserveHint) -> Self {
        Self::with_capacity(hint.capacity())
    }
}
