//! Types shared by several sections.

use std::fmt;

use bytes::Bytes;

use crate::codec::{avro_enum, bytes_len, Decode, Encode, Reader, Writer};
use crate::core::{CodecError, SHA1_DIGEST_LENGTH};

/// Fixed-length SHA-1 fingerprint of an endpoint key or profile body.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; SHA1_DIGEST_LENGTH]);

impl Digest {
    /// Wrap raw digest bytes.
    pub const fn new(bytes: [u8; SHA1_DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Copy a digest out of a slice; `None` on wrong length.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(Self)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

/// Digests travel as `bytes` and must be exactly 20 long.
impl Encode for Digest {
    fn encoded_len(&self) -> usize {
        bytes_len(SHA1_DIGEST_LENGTH)
    }

    fn encode(&self, writer: &mut Writer<'_>) -> Result<(), CodecError> {
        writer.put_bytes(&self.0)
    }
}

impl Decode for Digest {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        let len = reader.get_len()?;
        if len != SHA1_DIGEST_LENGTH {
            return Err(CodecError::InvalidDigestLength(len));
        }
        let slice = reader.get_slice(len)?;
        Self::from_slice(slice).ok_or(CodecError::InvalidDigestLength(len))
    }
}

/// Section of a feature this client does not implement.
///
/// Never produced; received content is kept only as raw bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpaqueSection(pub Bytes);

impl Encode for OpaqueSection {
    fn encoded_len(&self) -> usize {
        self.0.encoded_len()
    }

    fn encode(&self, writer: &mut Writer<'_>) -> Result<(), CodecError> {
        self.0.encode(writer)
    }
}

impl Decode for OpaqueSection {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self(Bytes::decode(reader)?))
    }
}

/// Outcome of a request the server acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncResponseResult {
    /// Request accepted.
    Success = 0,
    /// Request rejected.
    Failure = 1,
}

avro_enum!(SyncResponseResult {
    Success = 0,
    Failure = 1,
});

/// How the server treated the state a section reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncResponseStatus {
    /// Server state already matches.
    NoDelta = 0,
    /// Server applied a delta.
    Delta = 1,
    /// Server requests a full resync.
    Resync = 2,
}

avro_enum!(SyncResponseStatus {
    NoDelta = 0,
    Delta = 1,
    Resync = 2,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_exact, encode_to_vec};

    #[test]
    fn test_digest_wire_form() {
        let digest = Digest::new([0xab; SHA1_DIGEST_LENGTH]);
        let encoded = encode_to_vec(&digest).unwrap();
        assert_eq!(encoded.len(), 21);
        assert_eq!(encoded[0], 0x28);
        assert_eq!(decode_exact::<Digest>(&encoded).unwrap(), digest);
    }

    #[test]
    fn test_digest_wrong_length() {
        let encoded = encode_to_vec(&bytes::Bytes::from_static(&[1, 2, 3])).unwrap();
        assert_eq!(
            decode_exact::<Digest>(&encoded),
            Err(CodecError::InvalidDigestLength(3))
        );
    }

    #[test]
    fn test_digest_display() {
        let mut raw = [0u8; SHA1_DIGEST_LENGTH];
        raw[0] = 0x0f;
        raw[19] = 0xa0;
        let digest = Digest::new(raw);
        let text = digest.to_string();
        assert_eq!(text.len(), 40);
        assert!(text.starts_with("0f"));
        assert!(text.ends_with("a0"));
    }

    #[test]
    fn test_unknown_enum_symbol() {
        assert_eq!(
            decode_exact::<SyncResponseStatus>(&[0x06]),
            Err(CodecError::InvalidEnumIndex {
                name: "SyncResponseStatus",
                index: 3
            })
        );
    }
}
