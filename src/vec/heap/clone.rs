// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

impl<T: Clone + Default> Clone for GrowVec<T> {
    /// Deep-copies the elements into a fresh buffer of the same capacity.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.capacity);
        out.buf.as_mut_slice()[..self.len].clone_from_slice(self.as_slice());
        out.len = self.len;
        out
    }

    /// Reuses `self`'s buffer when it is large enough to hold `source`.
    fn clone_from(&mut self, source: &Self) {
        if source.len > self.capacity {
            *self = source.clone();
            return;
        }
        self.buf.as_mut_slice()[..source.len].clone_from_slice(source.as_slice());
        self.len = source.len;
    }
}
