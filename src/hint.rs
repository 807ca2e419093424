// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity hints for construction.

/// A request for pre-allocated capacity, with no initial elements.
///
/// Converting a hint into a [`GrowVec`](crate::GrowVec) yields `len == 0` and
/// `capacity == hint.capacity()`.
///
/// ```rust
/// use grow_vec::{GrowVec, reserve_hint};
///
/// let v: GrowVec<u32> = reserve_hint(16).into();
/// assert!(v.is_empty());
/// assert_eq!(v.capacity(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveHint {
    capacity: usize,
}

impl ReserveHint {
    /// Wraps a capacity request.
    #[inline]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveHint::new`].
#[inline]
pub const fn reserve_hint(capacity: usize) -> ReserveHint {
    ReserveHint::new(capacity)
}
