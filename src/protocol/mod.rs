//! Sync protocol
//!
//! Turns feature-manager output into one request envelope, and one response
//! envelope back into feature-manager input:
//! - [`RequestCompiler`] assembles a [`SyncRequest`](crate::envelope::SyncRequest) and its exact size
//! - [`serialize_request`] writes it into a caller-owned buffer
//! - [`parse_response`] and [`dispatch_response`] route an inbound envelope
//! - [`PlatformProtocol`] ties the three together for one sync channel

mod compiler;
mod config;
mod context;
mod demux;
mod platform;
mod serializer;

#[cfg(test)]
pub(crate) mod testing;

pub use compiler::*;
pub use config::*;
pub use context::*;
pub use demux::*;
pub use platform::*;
pub use serializer::*;
