// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `grow-vec`
//!
//! A `no_std` growable vector built on a single-owner heap buffer,
//! **with no `unsafe`**.
//!
//! The crate has two layers:
//!
//! - [`OwnedBuf<T>`]: exclusive owner of one fixed-size, heap-allocated block
//!   of `T`. It can be moved, swapped and released, never cloned.
//! - [`GrowVec<T>`]: a logical length and a capacity on top of an `OwnedBuf`.
//!   When it runs out of room it allocates a bigger buffer, moves its elements
//!   across and drops the old one.
//!
//! ## Growth policy
//!
//! - [`GrowVec::push`] and [`GrowVec::insert`] on a full vector allocate
//!   twice the length it is about to reach, `(len + 1) * 2`. Inserting into
//!   an unallocated vector allocates a single slot.
//! - [`GrowVec::resize`] past the capacity allocates twice the new length.
//! - [`GrowVec::reserve`] allocates exactly what was asked for.
//! - [`GrowVec::clear`], [`GrowVec::truncate`] and [`GrowVec::pop_back`]
//!   never release memory.
//!
//! ## Checked and unchecked positions
//!
//! - Indexing (`v[i]`, `v[a..b]`) and the positional operations
//!   ([`GrowVec::insert`], [`GrowVec::erase`]) panic on a bad position, like
//!   slices and `Vec` do.
//! - [`GrowVec::at`], [`GrowVec::at_mut`], [`GrowVec::try_insert`] and
//!   [`GrowVec::try_erase`] return [`Error::OutOfRange`] instead and leave the
//!   vector unchanged.
//!
//! ## Element bounds
//!
//! Every buffer is fully initialized, so any operation that may allocate
//! requires `T: Default`. Building a vector from an existing array or boxed
//! slice does not.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `GrowVec<T>` as a plain
//!     sequence of its elements.
//! - `tracing`
//!   - Emits a `TRACE` event (target `grow_vec::realloc`) with the old and
//!     new capacity every time a buffer is replaced.
//!
//! ## Example
//!
//! ```rust
//! use grow_vec::GrowVec;
//!
//! let mut v: GrowVec<u8> = GrowVec::new();
//! v.push(1);
//! v.extend_from_slice(&[2, 3]);
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert!(v.capacity() >= v.len());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod buf;
mod error;
mod hint;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod trace;
mod vec;

// Public exports (crate API surface)
pub use buf::OwnedBuf;
pub use error::Error;
pub use hint::{ReserveHint, reserve_hint};
pub use iter::IntoIter;
pub use vec::GrowVec;
