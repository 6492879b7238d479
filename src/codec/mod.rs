//! Field codec
//!
//! Avro binary encoding of the primitives the sync envelope is built from:
//! - `int`/`long` as zig-zag varints
//! - `bytes`/`string` as a `long` length followed by the raw bytes
//! - optional fields as a `[T, null]` union (branch 0 present, branch 1 absent)
//! - arrays as counted blocks closed by a zero count
//! - records as their fields in order, with no framing
//!
//! Sizes are always computed before writing so a request can be written into
//! a buffer of exactly [`Encode::encoded_len`] bytes.

mod reader;
mod value;
mod writer;

pub use reader::*;
pub use value::*;
pub use writer::*;

use crate::core::CodecError;

/// Encode a value into a freshly allocated buffer of exactly its size.
pub fn encode_to_vec<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(value.encoded_len())
        .map_err(|_| CodecError::OutOfMemory)?;
    buf.resize(value.encoded_len(), 0);
    let mut writer = Writer::new(&mut buf);
    value.encode(&mut writer)?;
    Ok(buf)
}

/// Decode a value that must span all of `data`.
pub fn decode_exact<T: Decode>(data: &[u8]) -> Result<T, CodecError> {
    let mut reader = Reader::new(data);
    let value = T::decode(&mut reader)?;
    reader.finish()?;
    Ok(value)
}

/// Implement [`Encode`] and [`Decode`] for a record: its fields in order.
macro_rules! avro_record {
    ($name:ident { $($field:ident),* $(,)? }) => {
        impl $crate::codec::Encode for $name {
            #[allow(unused_variables)]
            fn encoded_len(&self) -> usize {
                0 $(+ $crate::codec::Encode::encoded_len(&self.$field))*
            }

            #[allow(unused_variables)]
            fn encode(
                &self,
                writer: &mut $crate::codec::Writer<'_>,
            ) -> Result<(), $crate::core::CodecError> {
                $($crate::codec::Encode::encode(&self.$field, writer)?;)*
                Ok(())
            }
        }

        impl $crate::codec::Decode for $name {
            #[allow(unused_variables)]
            fn decode(
                reader: &mut $crate::codec::Reader<'_>,
            ) -> Result<Self, $crate::core::CodecError> {
                Ok(Self {
                    $($field: $crate::codec::Decode::decode(reader)?,)*
                })
            }
        }
    };
}

/// Implement [`Encode`] and [`Decode`] for a fieldless enum as an `int`
/// symbol index.
macro_rules! avro_enum {
    ($name:ident { $($variant:ident = $index:literal),+ $(,)? }) => {
        impl $crate::codec::Encode for $name {
            fn encoded_len(&self) -> usize {
                $crate::codec::long_len(*self as i64)
            }

            fn encode(
                &self,
                writer: &mut $crate::codec::Writer<'_>,
            ) -> Result<(), $crate::core::CodecError> {
                writer.put_int(*self as i32)
            }
        }

        impl $crate::codec::Decode for $name {
            fn decode(
                reader: &mut $crate::codec::Reader<'_>,
            ) -> Result<Self, $crate::core::CodecError> {
                match reader.get_int()? {
                    $($index => Ok(Self::$variant),)+
                    index => Err($crate::core::CodecError::InvalidEnumIndex {
                        name: stringify!($name),
                        index,
                    }),
                }
            }
        }
    };
}

pub(crate) use avro_enum;
pub(crate) use avro_record;
