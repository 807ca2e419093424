// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    buf::OwnedBuf,
    trace::{Realloc, trace_realloc},
    vec::GrowVec,
};

#[cold]
#[inline(never)]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl<T: Default> GrowVec<T> {
    /// Replaces the buffer with a fresh one of `new_capacity` slots, moving the
    /// first `keep` elements across in order. `len` is left to the caller.
    pub(crate) fn reallocate(&mut self, new_capacity: usize, keep: usize, reason: Realloc) {
        debug_assert!(keep <= self.len && keep <= new_capacity);

        let mut fresh = OwnedBuf::new(new_capacity);
        fresh.as_mut_slice()[..keep].swap_with_slice(&mut self.buf.as_mut_slice()[..keep]);

        trace_realloc(reason, self.capacity, new_capacity, keep);

        self.buf.swap(&mut fresh);
        self.capacity = new_capacity;
        // `fresh` now holds the old block and is dropped here.
    }

    /// Makes room for one more element by allocating twice the length it will
    /// have once that element is in, `(len + 1) * 2`.
    pub(crate) fn grow_one(&mut self) {
        let new_capacity = self
            .len
            .checked_add(1)
            .and_then(|n| n.checked_mul(2))
            .unwrap_or_else(|| capacity_overflow());
        self.reallocate(new_capacity, self.len, Realloc::Grow);
    }
}
