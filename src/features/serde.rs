use core::fmt::{self, Display};

use serde::{
    Deserialize, Serialize,
    de::{self, DeserializeSeed, Visitor},
};

use crate::{AllocError, Allocator, Buffer, settings::Settings};

impl<A: Allocator, S: Settings> Serialize for Buffer<'_, A, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        serializer.serialize_bytes(self)
    }
}

const BYTES: &str = "a byte array or a string";

struct AllocationFailed;

impl Display for AllocationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("allocation failed")
    }
}

fn map_alloc_error<T, E: de::Error>(result: Result<T, AllocError>) -> Result<(), E> {
    match result {
        Ok(_) => Ok(()),
        Err(AllocError) => Err(E::custom(&AllocationFailed)),
    }
}

impl<'de, A: Allocator + Default, S: Settings> Deserialize<'de> for Buffer<'static, A, S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut buffer = Buffer::new_in(A::default());
        deserializer.deserialize_byte_buf(&mut buffer)?;
        Ok(buffer)
    }
}

/// Appends the deserialized bytes.
impl<'de, A: Allocator, S: Settings> DeserializeSeed<'de> for &'_ mut Buffer<'_, A, S> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_byte_buf(self)
    }
}

impl<'de, A: Allocator, S: Settings> Visitor<'de> for &'_ mut Buffer<'_, A, S> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(BYTES)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        map_alloc_error(self.try_extend(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        map_alloc_error(self.try_extend(v.as_bytes()))
    }

    fn visit_seq<Seq>(self, mut seq: Seq) -> Result<Self::Value, Seq::Error>
    where
        Seq: serde::de::SeqAccess<'de>,
    {
        if let Some(size_hint) = seq.size_hint() {
            map_alloc_error(self.try_reserve(size_hint))?;
        }

        while let Some(byte) = seq.next_element::<u8>()? {
            map_alloc_error(self.try_append(byte))?;
        }

        Ok(())
    }
}
