// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, trace::Realloc, vec::GrowVec};

impl<T: Default> GrowVec<T> {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Returns `index`, the position now holding `value`.
    ///
    /// - An unallocated vector gets a single slot for `value`.
    /// - `index == len` is a plain [`push`](GrowVec::push).
    /// - If the vector is full the capacity grows to `(len + 1) * 2` first;
    ///   otherwise the shift happens in place.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        let len = self.len;
        if index > len {
            panic!("insertion index (is {index}) should be <= len (is {len})");
        }
        if self.capacity == 0 {
            self.reallocate(1, 0, Realloc::Grow);
            self.buf[0] = value;
            self.len = 1;
            return 0;
        }
        if index == len {
            self.push(value);
            return index;
        }
        if len == self.capacity {
            self.grow_one();
        }

        // Park the value in the first unused slot, then rotate it down:
        // [index..=len) shifts right by one, back to front.
        self.buf[len] = value;
        self.buf.as_mut_slice()[index..=len].rotate_right(1);

        self.len = len + 1;
        index
    }

    /// Checked variant of [`insert`](GrowVec::insert).
    ///
    /// Returns [`Error::OutOfRange`] if `index > len`, leaving the vector
    /// unchanged.
    #[inline]
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, Error> {
        if index > self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.insert(index, value))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, GrowVec};

    #[test]
    fn test_insert_into_unallocated_vec() {
        let mut v: GrowVec<i32> = GrowVec::new();
        assert_eq!(v.insert(0, 42), 0);
        assert_eq!(v.as_slice(), &[42]);
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn test_insert_at_end_matches_push() {
        let mut a: GrowVec<i32> = GrowVec::from([1, 2, 3]);
        let mut b: GrowVec<i32> = GrowVec::from([1, 2, 3]);
        let end = a.len();
        assert_eq!(a.insert(end, 4), 3);
        b.push(4);
        assert_eq!(a, b);
        assert_eq!(a.capacity(), b.capacity());
    }

    #[test]
    fn test_insert_interior_full_grows_like_push() {
        let mut v: GrowVec<i32> = GrowVec::from([10, 20, 30]);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.insert(1, 15), 1);
        assert_eq!(v.as_slice(), &[10, 15, 20, 30]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn test_insert_interior_with_spare_capacity_shifts_in_place() {
        let mut v: GrowVec<i32> = GrowVec::with_capacity(8);
        v.extend([1, 2, 3, 4]);
        assert_eq!(v.insert(0, 0), 0);
        assert_eq!(v.insert(3, 99), 3);
        assert_eq!(v.as_slice(), &[0, 1, 2, 99, 3, 4]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn test_insert_front_repeatedly() {
        let mut v: GrowVec<i32> = GrowVec::new();
        let mut caps = [0; 6];
        for (i, cap) in caps.iter_mut().enumerate() {
            v.insert(0, i as i32);
            *cap = v.capacity();
        }
        assert_eq!(v.as_slice(), &[5, 4, 3, 2, 1, 0]);
        assert_eq!(caps, [1, 4, 4, 4, 10, 10]);
    }

    #[test]
    fn test_insert_at_end_of_unallocated_vec_gets_one_slot() {
        let mut v: GrowVec<i32> = GrowVec::new();
        v.insert(0, 1);
        assert_eq!(v.capacity(), 1);
        // Full now, so the next insert follows the push rule.
        v.insert(1, 2);
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn test_insert_does_not_leak_stale_tail() {
        let mut v: GrowVec<i32> = GrowVec::from([1, 2, 3, 4]);
        v.truncate(2);
        v.insert(1, 7);
        assert_eq!(v.as_slice(), &[1, 7, 2]);
    }

    #[test]
    #[should_panic(expected = "insertion index")]
    fn test_insert_past_len_panics() {
        let mut v: GrowVec<i32> = GrowVec::from([1, 2]);
        v.insert(3, 9);
    }

    #[test]
    fn test_try_insert_err_is_noop() {
        let mut v: GrowVec<i32> = GrowVec::from([10, 20]);
        assert_eq!(
            v.try_insert(3, 99),
            Err(Error::OutOfRange { index: 3, len: 2 })
        );
        assert_eq!(v.as_slice(), &[10, 20]);
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.try_insert(2, 30), Ok(2));
        assert_eq!(v.as_slice(), &[10, 20, 30]);
    }
}
