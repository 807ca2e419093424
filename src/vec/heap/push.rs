// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

impl<T: Default> GrowVec<T> {
    /// Appends `value`. A full vector first grows to `(len + 1) * 2` slots,
    /// so pushing onto an empty one allocates two.
    ///
    /// Amortized `O(1)`; `O(len)` when it reallocates.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity {
            self.grow_one();
        }
        self.buf[self.len] = value;
        self.len += 1;
    }
}
