// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::mem;

impl<T> GrowVec<T> {
    /// Drops the last element from the logical contents (`len -= 1`).
    ///
    /// The vector must not be empty. Debug builds assert this; release builds
    /// leave an empty vector untouched.
    #[inline]
    pub fn pop_back(&mut self) {
        debug_assert!(self.len > 0, "pop_back on an empty GrowVec");
        self.len = self.len.saturating_sub(1);
    }
}

impl<T: Default> GrowVec<T> {
    /// Removes and returns the last element, or `None` if empty.
    ///
    /// The vacated slot is reset to `T::default()`.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(mem::take(&mut self.buf[self.len]))
        }
    }
}
