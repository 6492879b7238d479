//! Error types for the sync envelope.

use thiserror::Error;

use crate::envelope::Service;

/// Errors from the field codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input ended before the value was complete.
    #[error("unexpected end of data: needed {needed} bytes, {available} available")]
    UnexpectedEof {
        /// Bytes required by the value being read.
        needed: usize,
        /// Bytes left in the input.
        available: usize,
    },

    /// Output buffer is too small for the value being written.
    #[error("buffer overflow: required {required} bytes, {available} available")]
    BufferOverflow {
        /// Bytes the write needed.
        required: usize,
        /// Bytes left in the output buffer.
        available: usize,
    },

    /// Varint longer than 10 bytes.
    #[error("malformed varint")]
    InvalidVarint,

    /// Decoded `long` does not fit an `int` field.
    #[error("integer out of range: {0}")]
    IntOutOfRange(i64),

    /// Negative or otherwise impossible length prefix.
    #[error("invalid length: {0}")]
    InvalidLength(i64),

    /// String field is not valid UTF-8.
    #[error("invalid utf-8 in string field")]
    InvalidUtf8,

    /// Union branch index outside the two-branch optional.
    #[error("invalid union branch: {0}")]
    InvalidUnionBranch(i64),

    /// Enum symbol index not known to this schema.
    #[error("invalid {name} symbol index: {index}")]
    InvalidEnumIndex {
        /// Enum type name.
        name: &'static str,
        /// Index found on the wire.
        index: i32,
    },

    /// Digest field has the wrong length.
    #[error("invalid digest length: expected 20, got {0}")]
    InvalidDigestLength(usize),

    /// Required field was encoded as absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Bytes left over after a complete envelope.
    #[error("{0} trailing bytes after envelope")]
    TrailingBytes(usize),

    /// Fallible reservation for a decoded value failed.
    #[error("out of memory")]
    OutOfMemory,
}

/// Errors reported by a feature manager.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// Manager state does not allow the operation.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Manager could not read or write its storage.
    #[error("storage error: {0}")]
    Storage(String),

    /// Manager rejected the section content.
    #[error("rejected: {0}")]
    Rejected(String),
}

/// Errors reported by the device status store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatusError {
    /// Stored value could not be read.
    #[error("status read failed: {0}")]
    Read(String),

    /// Status could not be persisted.
    #[error("status persist failed: {0}")]
    Persist(String),
}

/// Top-level errors of the sync protocol.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Null or zero-length argument.
    #[error("bad parameter: {0}")]
    BadParameter(&'static str),

    /// Allocation failed while compiling or parsing.
    #[error("out of memory")]
    OutOfMemory,

    /// No buffer of the computed size could be obtained or filled.
    #[error("write failed for {size} byte envelope")]
    WriteFailed {
        /// Envelope size reported by the compiler.
        size: usize,
    },

    /// Response bytes are malformed.
    #[error("deserialization failed: {0}")]
    DeserializationFailed(CodecError),

    /// A feature manager failed.
    #[error("{service} manager error: {source}")]
    Feature {
        /// Feature whose manager failed.
        service: Service,
        /// Manager error.
        #[source]
        source: FeatureError,
    },

    /// The device status store failed.
    #[error("status error: {0}")]
    Status(#[from] StatusError),
}

impl ProtocolError {
    /// Wrap a manager failure for the given feature.
    pub fn feature(service: Service, source: FeatureError) -> Self {
        Self::Feature { service, source }
    }

    /// Map a decode failure, keeping allocation failures distinct.
    pub fn from_decode(err: CodecError) -> Self {
        match err {
            CodecError::OutOfMemory => Self::OutOfMemory,
            other => Self::DeserializationFailed(other),
        }
    }
}

/// Result alias for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
