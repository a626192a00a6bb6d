//! Serde helpers for const-generic co-ordinate arrays, which serde's derive does not handle.

pub(crate) mod array {
    use serde::{
        de::{Error, SeqAccess, Visitor},
        ser::SerializeTuple,
        Deserialize, Deserializer, Serialize, Serializer,
    };
    use std::fmt;
    use std::marker::PhantomData;

    pub fn serialize<S: Serializer, A: Serialize, const K: usize>(
        coords: &[A; K],
        ser: S,
    ) -> Result<S::Ok, S::Error> {
        let mut s = ser.serialize_tuple(K)?;
        for coord in coords {
            s.serialize_element(coord)?;
        }
        s.end()
    }

    struct ArrayVisitor<A, const K: usize>(PhantomData<A>);

    impl<'de, A, const K: usize> Visitor<'de> for ArrayVisitor<A, K>
    where
        A: Copy + Default + Deserialize<'de>,
    {
        type Value = [A; K];

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "an array of length {K}")
        }

        #[inline]
        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut coords = [A::default(); K];

            for (idx, coord) in coords.iter_mut().enumerate() {
                *coord = seq
                    .next_element()?
                    .ok_or_else(|| S::Error::invalid_length(idx, &self))?;
            }

            Ok(coords)
        }
    }

    pub fn deserialize<'de, D, A, const K: usize>(deserializer: D) -> Result<[A; K], D::Error>
    where
        D: Deserializer<'de>,
        A: Copy + Default + Deserialize<'de>,
    {
        deserializer.deserialize_tuple(K, ArrayVisitor::<A, K>(PhantomData))
    }
}
