//! Platform protocol facade.

use tracing::debug;

use super::compiler::{CompiledRequest, RequestCompiler};
use super::config::ProtocolConfig;
use super::context::SyncContext;
use super::demux::{dispatch_response, parse_response};
use super::serializer::{serialize_with, BufferAllocator};
use crate::core::ProtocolResult;
use crate::envelope::Service;

/// Client side of one sync channel.
///
/// Owns the configuration and request counter. Feature managers and the
/// status store are lent per call through a [`SyncContext`].
#[derive(Debug, Clone)]
pub struct PlatformProtocol {
    compiler: RequestCompiler,
}

impl PlatformProtocol {
    /// Create a protocol instance that has not sent anything yet.
    pub fn new(config: &ProtocolConfig) -> Self {
        Self {
            compiler: RequestCompiler::new(config),
        }
    }

    /// Id of the last compiled request, 0 before the first.
    pub fn request_id(&self) -> u32 {
        self.compiler.last_request_id()
    }

    /// Compile a request for `services` without serializing it.
    pub fn compile_request(
        &mut self,
        ctx: &mut SyncContext<'_>,
        services: &[Service],
    ) -> ProtocolResult<CompiledRequest> {
        self.compiler.compile(ctx, services)
    }

    /// Compile and serialize a request into a new buffer of exactly its size.
    pub fn serialize_client_sync(
        &mut self,
        ctx: &mut SyncContext<'_>,
        services: &[Service],
    ) -> ProtocolResult<Vec<u8>> {
        let mut buffer = Vec::new();
        self.serialize_client_sync_into(ctx, services, &mut buffer)?;
        Ok(buffer)
    }

    /// Compile a request and serialize it into a buffer from `allocator`.
    ///
    /// Returns the number of bytes written. The request id is consumed even
    /// if allocation or writing fails.
    pub fn serialize_client_sync_into<A>(
        &mut self,
        ctx: &mut SyncContext<'_>,
        services: &[Service],
        allocator: &mut A,
    ) -> ProtocolResult<usize>
    where
        A: BufferAllocator + ?Sized,
    {
        let compiled = self.compiler.compile(ctx, services)?;
        serialize_with(&compiled, allocator)
    }

    /// Parse a server response and hand its sections to the managers.
    pub fn process_server_sync(
        &mut self,
        ctx: &mut SyncContext<'_>,
        buffer: &[u8],
    ) -> ProtocolResult<()> {
        let response = parse_response(buffer)?;
        let last_request_id = self.request_id();
        if let Some(id) = response.request_id.filter(|&id| id != last_request_id) {
            debug!(response_id = id, last_request_id, "response does not match last request");
        }
        dispatch_response(ctx, response)
    }
}
