//! `Encode`/`Decode` traits and their primitive implementations.

use bytes::Bytes;

use super::reader::Reader;
use super::writer::{bytes_len, long_len, Writer};
use crate::core::CodecError;

/// A value with a fixed Avro binary encoding.
///
/// `encoded_len` MUST equal the number of bytes `encode` writes.
pub trait Encode {
    /// Exact encoded size in bytes.
    fn encoded_len(&self) -> usize;

    /// Write the value.
    fn encode(&self, writer: &mut Writer<'_>) -> Result<(), CodecError>;
}

/// A value decodable from its Avro binary encoding.
pub trait Decode: Sized {
    /// Read the value.
    fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError>;
}

impl Encode for i32 {
    fn encoded_len(&self) -> usize {
        long_len(i64::from(*self))
    }

    fn encode(&self, writer: &mut Writer<'_>) -> Result<(), CodecError> {
        writer.put_int(*self)
    }
}

impl Decode for i32 {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        reader.get_int()
    }
}

/// Unsigned ids travel as `int`, bit-for-bit.
impl Encode for u32 {
    fn encoded_len(&self) -> usize {
        (*self as i32).encoded_len()
    }

    fn encode(&self, writer: &mut Writer<'_>) -> Result<(), CodecError> {
        writer.put_int(*self as i32)
    }
}

impl Decode for u32 {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(reader.get_int()? as u32)
    }
}

impl Encode for i64 {
    fn encoded_len(&self) -> usize {
        long_len(*self)
    }

    fn encode(&self, writer: &mut Writer<'_>) -> Result<(), CodecError> {
        writer.put_long(*self)
    }
}

impl Decode for i64 {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        reader.get_long()
    }
}

/// Non-negative `long`; values above `i64::MAX` saturate.
impl Encode for u64 {
    fn encoded_len(&self) -> usize {
        long_len(i64::try_from(*self).unwrap_or(i64::MAX))
    }

    fn encode(&self, writer: &mut Writer<'_>) -> Result<(), CodecError> {
        writer.put_long(i64::try_from(*self).unwrap_or(i64::MAX))
    }
}

impl Decode for u64 {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        let value = reader.get_long()?;
        u64::try_from(value).map_err(|_| CodecError::IntOutOfRange(value))
    }
}

impl Encode for String {
    fn encoded_len(&self) -> usize {
        bytes_len(self.len())
    }

    fn encode(&self, writer: &mut Writer<'_>) -> Result<(), CodecError> {
        writer.put_str(self)
    }
}

impl Decode for String {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        reader.get_string()
    }
}

impl Encode for Bytes {
    fn encoded_len(&self) -> usize {
        bytes_len(self.len())
    }

    fn encode(&self, writer: &mut Writer<'_>) -> Result<(), CodecError> {
        writer.put_bytes(self)
    }
}

impl Decode for Bytes {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        reader.get_bytes()
    }
}

/// Optional fields are a `[T, null]` union.
impl<T: Encode> Encode for Option<T> {
    fn encoded_len(&self) -> usize {
        match self {
            Some(value) => 1 + value.encoded_len(),
            None => 1,
        }
    }

    fn encode(&self, writer: &mut Writer<'_>) -> Result<(), CodecError> {
        writer.put_union_branch(self.is_some())?;
        match self {
            Some(value) => value.encode(writer),
            None => Ok(()),
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        if reader.get_union_branch()? {
            Ok(Some(T::decode(reader)?))
        } else {
            Ok(None)
        }
    }
}

/// Arrays are written as one block followed by the zero terminator.
impl<T: Encode> Encode for Vec<T> {
    fn encoded_len(&self) -> usize {
        let items: usize = self.iter().map(Encode::encoded_len).sum();
        if self.is_empty() {
            1
        } else {
            long_len(self.len() as i64) + items + 1
        }
    }

    fn encode(&self, writer: &mut Writer<'_>) -> Result<(), CodecError> {
        if !self.is_empty() {
            writer.put_long(self.len() as i64)?;
            for item in self {
                item.encode(writer)?;
            }
        }
        writer.put_long(0)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        let mut items = Vec::new();
        loop {
            let mut count = reader.get_long()?;
            if count == 0 {
                return Ok(items);
            }
            if count < 0 {
                // negative count is followed by the block size in bytes
                count = count.checked_neg().ok_or(CodecError::InvalidLength(count))?;
                reader.get_len()?;
            }
            let count = usize::try_from(count).map_err(|_| CodecError::InvalidLength(count))?;
            // every item takes at least one byte except empty records
            items
                .try_reserve(count.min(reader.remaining()))
                .map_err(|_| CodecError::OutOfMemory)?;
            for _ in 0..count {
                items.push(T::decode(reader)?);
            }
        }
    }
}
