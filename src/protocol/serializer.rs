//! Envelope serializer
//!
//! Writes a compiled request into a caller-owned buffer of exactly the size
//! the compiler reported. The size is trusted, not recomputed.

use tracing::{trace, warn};

use super::compiler::CompiledRequest;
use crate::codec::{Encode, Writer};
use crate::core::{ProtocolError, ProtocolResult};
use crate::envelope::SyncRequest;

/// Source of caller-owned output buffers.
pub trait BufferAllocator {
    /// Return a buffer of exactly `size` bytes, or `None` if none can be had.
    fn allocate(&mut self, size: usize) -> Option<&mut [u8]>;
}

/// A vector is resized in place; failure to reserve yields `None`.
impl BufferAllocator for Vec<u8> {
    fn allocate(&mut self, size: usize) -> Option<&mut [u8]> {
        self.clear();
        self.try_reserve_exact(size).ok()?;
        self.resize(size, 0);
        Some(self.as_mut_slice())
    }
}

/// Write `request` into `buffer`.
///
/// `buffer` must be exactly the compiled size; a shorter or longer buffer
/// fails with [`ProtocolError::WriteFailed`].
pub fn serialize_request(request: &SyncRequest, buffer: &mut [u8]) -> ProtocolResult<()> {
    if buffer.is_empty() {
        return Err(ProtocolError::BadParameter("buffer"));
    }

    let size = buffer.len();
    let mut writer = Writer::new(buffer);
    request.encode(&mut writer).map_err(|err| {
        warn!(request_id = request.request_id, size, error = %err, "failed to write sync request");
        ProtocolError::WriteFailed { size }
    })?;
    if writer.position() != size {
        warn!(
            request_id = request.request_id,
            size,
            written = writer.position(),
            "buffer larger than sync request"
        );
        return Err(ProtocolError::WriteFailed { size });
    }
    trace!(request_id = request.request_id, size, "sync request written");
    Ok(())
}

/// Obtain a buffer of the compiled size from `allocator` and write into it.
///
/// Returns the number of bytes written.
pub fn serialize_with<A>(compiled: &CompiledRequest, allocator: &mut A) -> ProtocolResult<usize>
where
    A: BufferAllocator + ?Sized,
{
    let size = compiled.size;
    let buffer = allocator
        .allocate(size)
        .ok_or(ProtocolError::WriteFailed { size })?;
    serialize_request(&compiled.request, buffer)?;
    Ok(size)
}
