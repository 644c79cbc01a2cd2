//! Serialization support for `BitArray` using serde.
//!
//! A bit array serializes as a struct with its bit length and its words:
//! `{ "len": 10, "words": [255, 3] }`. Deserialization rejects a word count
//! that does not match `len` and any bit set at or beyond `len`.

use alloc::vec::Vec;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Unexpected},
    ser::SerializeStruct,
};

use crate::{BitArray, word::Word};

impl<W: Word + Serialize> Serialize for BitArray<W> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("BitArray", 2)?;
        state.serialize_field("len", &self.len)?;
        state.serialize_field("words", self.as_words())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "BitArray")]
struct RawBitArray<W> {
    len: usize,
    words: Vec<W>,
}

impl<'de, W: Word + Deserialize<'de>> Deserialize<'de> for BitArray<W> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let RawBitArray { len, words } = RawBitArray::<W>::deserialize(deserializer)?;

        let expected = W::words_for(len);
        if words.len() != expected {
            return Err(de::Error::invalid_length(
                words.len(),
                &ExpectedWords(expected),
            ));
        }

        let mut masked = words.clone();
        Self::mask_tail(&mut masked, len);
        if masked != words {
            return Err(de::Error::invalid_value(
                Unexpected::Other("bits set beyond the array length"),
                &"a tail-masked bit array",
            ));
        }

        Ok(Self {
            words: words.into_boxed_slice(),
            len,
        })
    }
}

struct ExpectedWords(usize);

impl de::Expected for ExpectedWords {
    fn fmt(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(formatter, "{} words", self.0)
    }
}
