// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `GrowVec`.
//!
//! Only the checked accessors and the `try_*` variants report errors.
//! The error is `Copy` and implements `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by the checked operations of [`GrowVec`](crate::GrowVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A position was not inside the current logical length.
    OutOfRange {
        /// The rejected position.
        index: usize,
        /// The logical length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl CoreError for Error {}
