// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{trace::Realloc, vec::GrowVec};

// Local imports
use super::grow::capacity_overflow;

impl<T: Default> GrowVec<T> {
    /// Sets the logical length to `new_len`.
    ///
    /// - Within capacity only `len` changes. Shrinking hides the tail; growing
    ///   exposes slots reset to `T::default()`.
    /// - Past capacity, a buffer of `new_len * 2` slots is allocated and the
    ///   existing elements are moved into it.
    pub fn resize(&mut self, new_len: usize) {
        if new_len <= self.capacity {
            if new_len > self.len {
                let len = self.len;
                self.buf.as_mut_slice()[len..new_len].fill_with(T::default);
            }
            self.len = new_len;
            return;
        }

        let new_capacity = new_len
            .checked_mul(2)
            .unwrap_or_else(|| capacity_overflow());
        let keep = self.len.min(new_len);
        self.reallocate(new_capacity, keep, Realloc::Resize);
        self.len = new_len;
    }

    /// Grows the capacity to exactly `new_capacity` if it is larger than the
    /// current one; otherwise a no-op. `len` is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity {
            self.reallocate(new_capacity, self.len, Realloc::Reserve);
        }
    }
}
