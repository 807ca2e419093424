// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reallocation events.
//!
//! With the `tracing` feature enabled, every buffer replacement emits a
//! `TRACE`-level event carrying the old and new capacity, the logical length
//! moved across, and what triggered it. Without the feature this compiles to
//! nothing.

/// What caused a buffer replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Realloc {
    /// A single-element append or insert found the buffer full.
    Grow,
    /// `resize` asked for more than the current capacity.
    Resize,
    /// `reserve` asked for more than the current capacity.
    Reserve,
}

impl Realloc {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Grow => "grow",
            Self::Resize => "resize",
            Self::Reserve => "reserve",
        }
    }
}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_realloc(
    reason: Realloc,
    old_capacity: usize,
    new_capacity: usize,
    len: usize,
) {
    tracing::trace!(
        target: "grow_vec::realloc",
        reason = reason.as_str(),
        old_capacity,
        new_capacity,
        len,
        "buffer reallocated"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn trace_realloc(
    _reason: Realloc,
    _old_capacity: usize,
    _new_capacity: usize,
    _len: usize,
) {
}
