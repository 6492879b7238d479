//! Fixed-buffer writer for Avro binary fields.
//!
//! The writer never grows its buffer. Callers size the buffer from
//! [`Encode::encoded_len`](super::Encode::encoded_len) and a mismatch surfaces
//! as [`CodecError::BufferOverflow`].

use crate::core::{CodecError, UNION_BRANCH_ABSENT, UNION_BRANCH_PRESENT};

/// Zig-zag map a signed value onto an unsigned one.
#[inline]
pub(crate) fn zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Number of bytes a varint takes for an already zig-zagged value.
#[inline]
fn varint_len(mut n: u64) -> usize {
    let mut len = 1;
    while n >= 0x80 {
        n >>= 7;
        len += 1;
    }
    len
}

/// Encoded size of a `long` (or `int`) field.
pub fn long_len(value: i64) -> usize {
    varint_len(zigzag(value))
}

/// Encoded size of a `bytes` or `string` field with `len` payload bytes.
pub fn bytes_len(len: usize) -> usize {
    long_len(len as i64) + len
}

/// Writer over a caller-owned byte slice.
#[derive(Debug)]
pub struct Writer<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Writer<'a> {
    /// Create a writer positioned at the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn reserve(&self, required: usize) -> Result<(), CodecError> {
        if self.remaining() < required {
            return Err(CodecError::BufferOverflow {
                required,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    /// Write raw bytes with no length prefix.
    pub fn put_slice(&mut self, data: &[u8]) -> Result<(), CodecError> {
        self.reserve(data.len())?;
        self.buf[self.pos..self.pos + data.len()].copy_from_slice(data);
        self.pos += data.len();
        Ok(())
    }

    /// Write a zig-zag varint `long`.
    pub fn put_long(&mut self, value: i64) -> Result<(), CodecError> {
        let mut n = zigzag(value);
        self.reserve(varint_len(n))?;
        while n >= 0x80 {
            self.buf[self.pos] = (n as u8 & 0x7f) | 0x80;
            self.pos += 1;
            n >>= 7;
        }
        self.buf[self.pos] = n as u8;
        self.pos += 1;
        Ok(())
    }

    /// Write an `int`.
    pub fn put_int(&mut self, value: i32) -> Result<(), CodecError> {
        self.put_long(i64::from(value))
    }

    /// Write a length-prefixed `bytes` field.
    pub fn put_bytes(&mut self, data: &[u8]) -> Result<(), CodecError> {
        self.reserve(bytes_len(data.len()))?;
        self.put_long(data.len() as i64)?;
        self.put_slice(data)
    }

    /// Write a length-prefixed UTF-8 `string` field.
    pub fn put_str(&mut self, value: &str) -> Result<(), CodecError> {
        self.put_bytes(value.as_bytes())
    }

    /// Write the branch index of a two-branch optional.
    pub fn put_union_branch(&mut self, present: bool) -> Result<(), CodecError> {
        self.put_long(if present {
            UNION_BRANCH_PRESENT
        } else {
            UNION_BRANCH_ABSENT
        })
    }
}
