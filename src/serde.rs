use core::fmt;
use core::marker::PhantomData;

use serde_core::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
};

use crate::fallback::BackingAlloc;
use crate::placed_vec::PlacedVec;

impl<T: Serialize, const N: usize, A: BackingAlloc> Serialize for PlacedVec<T, N, A> {
    /// Serialize a `PlacedVec` as a sequence.
    ///
    /// The format is identical whether the data is currently in place or on
    /// the fallback allocator.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for PlacedVec<T, N> {
    /// Deserialize a `PlacedVec` from a sequence.
    ///
    /// A sequence longer than `N` lands on the heap, exactly as if the
    /// elements had been pushed one by one.
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(PlacedVecVisitor(PhantomData))
    }
}

struct PlacedVecVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for PlacedVecVisitor<T, N> {
    type Value = PlacedVec<T, N>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
    where
        S: SeqAccess<'de>,
    {
        let mut vec = match seq.size_hint() {
            Some(hint) => PlacedVec::with_capacity(hint),
            None => PlacedVec::new(),
        };
        while let Some(element) = seq.next_element()? {
            vec.push(element);
        }
        Ok(vec)
    }
}

#[cfg(test)]
mod tests {
    use crate::{PlacedVec, placedvec};

    #[test]
    fn serialize_is_placement_independent() {
        let mut vec: PlacedVec<i32, 4> = placedvec![1, 2, 3];
        assert_eq!(serde_json::to_string(&vec).unwrap(), "[1,2,3]");

        vec.reserve(32);
        assert!(!vec.is_in_place());
        assert_eq!(serde_json::to_string(&vec).unwrap(), "[1,2,3]");
    }

    #[test]
    fn deserialize_short_sequence_lands_in_place() {
        let vec: PlacedVec<i32, 4> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(vec, [1, 2, 3]);
        assert!(vec.is_in_place());
    }

    #[test]
    fn deserialize_long_sequence_spills() {
        let vec: PlacedVec<i32, 4> = serde_json::from_str("[1,2,3,4,5,6]").unwrap();
        assert_eq!(vec, [1, 2, 3, 4, 5, 6]);
        assert!(!vec.is_in_place());
    }

    #[test]
    fn round_trip_nested() {
        let vec: PlacedVec<PlacedVec<u8, 2>, 2> = placedvec![
            placedvec![1, 2, 3],
            placedvec![],
            placedvec![4],
        ];
        let json = serde_json::to_string(&vec).unwrap();
        assert_eq!(json, "[[1,2,3],[],[4]]");

        let back: PlacedVec<PlacedVec<u8, 2>, 2> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec);
    }
}
