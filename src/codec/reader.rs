//! Borrowing reader for Avro binary fields.

use bytes::Bytes;

use crate::core::{CodecError, MAX_VARINT_LEN, UNION_BRANCH_ABSENT, UNION_BRANCH_PRESENT};

#[inline]
fn unzigzag(n: u64) -> i64 {
    ((n >> 1) as i64) ^ -((n & 1) as i64)
}

/// Reader over a caller-owned byte slice. Never retains the slice past its
/// own lifetime; decoded byte fields are copied out.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Fail if any input is left over.
    pub fn finish(&self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(CodecError::TrailingBytes(n)),
        }
    }

    /// Read one raw byte.
    pub fn get_u8(&mut self) -> Result<u8, CodecError> {
        let byte = *self.data.get(self.pos).ok_or(CodecError::UnexpectedEof {
            needed: 1,
            available: 0,
        })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Borrow `len` raw bytes.
    pub fn get_slice(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        if self.remaining() < len {
            return Err(CodecError::UnexpectedEof {
                needed: len,
                available: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Read a zig-zag varint `long`.
    pub fn get_long(&mut self) -> Result<i64, CodecError> {
        let mut value: u64 = 0;
        for i in 0..MAX_VARINT_LEN {
            let byte = self.get_u8()?;
            // tenth byte may only carry the top bit
            if i == MAX_VARINT_LEN - 1 && byte > 1 {
                return Err(CodecError::InvalidVarint);
            }
            value |= u64::from(byte & 0x7f) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(unzigzag(value));
            }
        }
        Err(CodecError::InvalidVarint)
    }

    /// Read an `int`.
    pub fn get_int(&mut self) -> Result<i32, CodecError> {
        let value = self.get_long()?;
        i32::try_from(value).map_err(|_| CodecError::IntOutOfRange(value))
    }

    /// Read a non-negative length prefix.
    pub fn get_len(&mut self) -> Result<usize, CodecError> {
        let len = self.get_long()?;
        usize::try_from(len).map_err(|_| CodecError::InvalidLength(len))
    }

    /// Read a length-prefixed `bytes` field into an owned buffer.
    pub fn get_bytes(&mut self) -> Result<Bytes, CodecError> {
        let len = self.get_len()?;
        let slice = self.get_slice(len)?;
        let mut owned = Vec::new();
        owned
            .try_reserve_exact(len)
            .map_err(|_| CodecError::OutOfMemory)?;
        owned.extend_from_slice(slice);
        Ok(Bytes::from(owned))
    }

    /// Read a length-prefixed UTF-8 `string` field.
    pub fn get_string(&mut self) -> Result<String, CodecError> {
        let len = self.get_len()?;
        let slice = self.get_slice(len)?;
        let text = std::str::from_utf8(slice).map_err(|_| CodecError::InvalidUtf8)?;
        let mut owned = String::new();
        owned
            .try_reserve_exact(len)
            .map_err(|_| CodecError::OutOfMemory)?;
        owned.push_str(text);
        Ok(owned)
    }

    /// Read the branch index of a two-branch optional. `true` means present.
    pub fn get_union_branch(&mut self) -> Result<bool, CodecError> {
        match self.get_long()? {
            UNION_BRANCH_PRESENT => Ok(true),
            UNION_BRANCH_ABSENT => Ok(false),
            other => Err(CodecError::InvalidUnionBranch(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_varints() {
        let data = hex::decode("0001027f8001c0a907").unwrap();
        let mut reader = Reader::new(&data);
        let values: Vec<i64> = (0..6).map(|_| reader.get_long().unwrap()).collect();
        assert_eq!(values, vec![0, -1, 1, -64, 64, 60_000]);
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn test_read_extreme_longs() {
        let data = hex::decode("feffffffffffffffff01ffffffffffffffffff01").unwrap();
        let mut reader = Reader::new(&data);
        assert_eq!(reader.get_long().unwrap(), i64::MAX);
        assert_eq!(reader.get_long().unwrap(), i64::MIN);
    }

    #[test]
    fn test_overlong_varint_rejected() {
        let data = [0xffu8; 11];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.get_long(), Err(CodecError::InvalidVarint));
    }

    #[test]
    fn test_truncated_varint() {
        let data = [0x80u8];
        let mut reader = Reader::new(&data);
        assert!(matches!(
            reader.get_long(),
            Err(CodecError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_int_out_of_range() {
        // zig-zag of 2^31
        let data = hex::decode("8080808010").unwrap();
        let mut reader = Reader::new(&data);
        assert_eq!(reader.get_int(), Err(CodecError::IntOutOfRange(1 << 31)));
    }

    #[test]
    fn test_negative_length_rejected() {
        let data = [0x01u8];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.get_bytes(), Err(CodecError::InvalidLength(-1)));
    }

    #[test]
    fn test_bytes_longer_than_input() {
        let data = [0x0au8, 1, 2];
        let mut reader = Reader::new(&data);
        assert_eq!(
            reader.get_bytes(),
            Err(CodecError::UnexpectedEof {
                needed: 5,
                available: 2
            })
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let data = [0x02u8, 0xff];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.get_string(), Err(CodecError::InvalidUtf8));
    }

    #[test]
    fn test_union_branch_out_of_range() {
        let data = [0x04u8];
        let mut reader = Reader::new(&data);
        assert_eq!(
            reader.get_union_branch(),
            Err(CodecError::InvalidUnionBranch(2))
        );
    }

    #[test]
    fn test_trailing_bytes() {
        let data = [0x00u8, 0x00];
        let mut reader = Reader::new(&data);
        reader.get_long().unwrap();
        assert_eq!(reader.finish(), Err(CodecError::TrailingBytes(1)));
    }
}
