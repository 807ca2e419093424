// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowVec};

impl<T> GrowVec<T> {
    /// Removes the element at `index`, shifting `(index, len)` one slot left.
    ///
    /// Elements are moved, never cloned. The erased value ends up in the first
    /// unused slot and is dropped when that slot is next overwritten or when
    /// the buffer goes away.
    ///
    /// Returns `index`: the position of the element that followed the erased
    /// one, or the new `len` if the erased element was last.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) -> usize {
        let len = self.len;
        if index >= len {
            panic!("removal index (is {index}) should be < len (is {len})");
        }

        // Shift left: [index+1..len) -> [index..len-1)
        self.buf.as_mut_slice()[index..len].rotate_left(1);

        self.len = len - 1;
        index
    }

    /// Checked variant of [`erase`](GrowVec::erase).
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`, leaving the vector
    /// unchanged.
    #[inline]
    pub fn try_erase(&mut self, index: usize) -> Result<usize, Error> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.erase(index))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, GrowVec};

    #[test]
    fn test_erase_middle_first_last() {
        let mut v: GrowVec<i32> = GrowVec::from([1, 2, 3, 4, 5]);
        assert_eq!(v.erase(2), 2);
        assert_eq!(v.as_slice(), &[1, 2, 4, 5]);
        assert_eq!(v.erase(0), 0);
        assert_eq!(v.as_slice(), &[2, 4, 5]);
        let last = v.len() - 1;
        assert_eq!(v.erase(last), v.len());
        assert_eq!(v.as_slice(), &[2, 4]);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn test_erase_then_insert_restores() {
        let original: GrowVec<i32> = GrowVec::from([4, 8, 15, 16, 23, 42]);
        for i in 0..original.len() {
            let mut v: GrowVec<i32> = GrowVec::from([4, 8, 15, 16, 23, 42]);
            let value = v[i];
            let pos = v.erase(i);
            v.insert(pos, value);
            assert_eq!(v, original);
        }
    }

    #[test]
    fn test_erase_last_remaining() {
        let mut v: GrowVec<i32> = GrowVec::from([7]);
        assert_eq!(v.erase(0), 0);
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    #[should_panic(expected = "removal index")]
    fn test_erase_oob_panics() {
        let mut v: GrowVec<i32> = GrowVec::from([1, 2]);
        v.erase(2);
    }

    #[test]
    fn test_try_erase_err_is_noop() {
        let mut v: GrowVec<i32> = GrowVec::from([1, 2]);
        assert_eq!(v.try_erase(5), Err(Error::OutOfRange { index: 5, len: 2 }));
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.try_erase(1), Ok(1));
        assert_eq!(v.as_slice(), &[1]);
    }
}
