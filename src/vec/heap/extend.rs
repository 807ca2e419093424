// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

impl<T: Default> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Default> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T: Clone + Default> GrowVec<T> {
    /// Appends clones of every element of `src`, in order.
    ///
    /// Reallocates at most once: to the larger of `len + src.len()` and twice
    /// the current capacity.
    pub fn extend_from_slice(&mut self, src: &[T]) {
        let needed = self.len + src.len();
        if needed > self.capacity {
            self.reserve(needed.max(self.capacity.saturating_mul(2)));
        }
        let len = self.len;
        self.buf.as_mut_slice()[len..needed].clone_from_slice(src);
        self.len = needed;
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::GrowVec;

    #[test]
    fn test_extend_appends_in_order() {
        let mut v: GrowVec<i32> = GrowVec::from([1, 2]);
        v.extend([3, 4, 5]);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
        assert!(v.capacity() >= v.len());
    }

    #[test]
    fn test_collect() {
        let v: GrowVec<u32> = (1..=4).collect();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn test_extend_from_slice_single_realloc() {
        let mut v: GrowVec<i32> = GrowVec::from([1]);
        v.extend_from_slice(&[2, 3, 4]);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(v.capacity(), 4);

        v.extend_from_slice(&[5]);
        assert_eq!(v.capacity(), 8);
        v.extend_from_slice(&[]);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_extend_from_slice_within_capacity() {
        let mut v: GrowVec<i32> = GrowVec::with_capacity(4);
        v.extend_from_slice(&[1, 2]);
        v.extend_from_slice(&[3, 4]);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(v.capacity(), 4);
    }
}
