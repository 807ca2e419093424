// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`GrowVec`](crate::GrowVec).
//!
//! - **Serialize**: as a sequence of the `len` elements. Spare capacity is
//!   not part of the encoding.
//! - **Deserialize**: from any sequence, growing as elements arrive.
//!
//! ### Trait bounds
//!
//! Deserializing requires `T: Deserialize<'de> + Default`, since every
//! buffer `GrowVec` allocates is default-filled.

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

// Upper bound on the capacity taken from an untrusted `size_hint`.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for GrowVec<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for VecVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = GrowVec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let hint = a.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut out = GrowVec::<T>::with_capacity(hint);
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for GrowVec<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::GrowVec;

    #[test]
    fn test_serde_roundtrip_json() {
        let v: GrowVec<i32> = GrowVec::from([1, 2, 3]);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: GrowVec<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_serialize_skips_spare_capacity() {
        let mut v: GrowVec<i32> = GrowVec::from([1, 2, 3, 4]);
        v.truncate(1);
        v.reserve(16);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1]");
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let v: GrowVec<i32> = GrowVec::new();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        let back: GrowVec<i32> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_deserialize_nested() {
        let v: GrowVec<GrowVec<u8>> = serde_json::from_str("[[1],[],[2,3]]").unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v[2].as_slice(), &[2, 3]);
        assert!(v[1].is_empty());
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err = serde_json::from_str::<GrowVec<i32>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("a sequence"), "unexpected error message: {msg}");
    }
}
