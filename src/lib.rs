//! # Kaa Sync
//!
//! Client-side multiplexer for the Kaa endpoint sync channel.
//!
//! One sync exchange carries a single request envelope and a single response
//! envelope. Each envelope holds one optional section per feature (profile,
//! user, event, logging, notification, configuration). This crate:
//!
//! - **Compiles** a request from the sections feature managers hand it
//! - **Serializes** the request into a buffer of exactly its encoded size
//! - **Demultiplexes** a response, routing each section to its manager and
//!   persisting device status afterwards
//!
//! Transport, encryption and the feature managers themselves live outside.
//!
//! ## Feature Flags
//!
//! - `event` (default): event section compile and dispatch
//! - `logging` (default): logging section compile and dispatch
//!
//! With a flag off the matching section is always sent absent and ignored on
//! receipt. The wire format is the same either way.
//!
//! ## Modules
//!
//! - [`core`]: constants, error types, collaborator traits
//! - [`codec`]: Avro binary field codec
//! - [`schema`]: section payloads
//! - [`envelope`]: request and response envelopes
//! - [`protocol`]: compiler, serializer, demultiplexer and the [`PlatformProtocol`] facade
//! - [`status`]: in-memory status store
//!
//! ## Example Usage
//!
//! ```rust
//! use kaa_sync::prelude::*;
//!
//! #[derive(Default)]
//! struct Quiet;
//!
//! impl ProfileManager for Quiet {
//!     fn needs_resync(&self) -> Result<bool, FeatureError> {
//!         Ok(false)
//!     }
//!     fn compile_request(&mut self) -> Result<ProfileSyncRequest, FeatureError> {
//!         Ok(ProfileSyncRequest::default())
//!     }
//!     fn handle_sync(&mut self, _: ProfileSyncResponse) -> Result<(), FeatureError> {
//!         Ok(())
//!     }
//! }
//!
//! impl UserManager for Quiet {
//!     fn compile_request(&mut self, _: u32) -> Result<Option<UserSyncRequest>, FeatureError> {
//!         Ok(None)
//!     }
//!     fn handle_sync(
//!         &mut self,
//!         _: Option<UserAttachResponse>,
//!         _: Option<UserAttachNotification>,
//!         _: Option<UserDetachNotification>,
//!     ) -> Result<(), FeatureError> {
//!         Ok(())
//!     }
//! }
//!
//! #[cfg(feature = "event")]
//! impl EventManager for Quiet {
//!     fn compile_request(&mut self, _: u32) -> Result<Option<EventSyncRequest>, FeatureError> {
//!         Ok(None)
//!     }
//!     fn handle_sync(
//!         &mut self,
//!         _: u32,
//!         _: Option<EventSequenceNumberResponse>,
//!         _: Option<Vec<Event>>,
//!     ) -> Result<(), FeatureError> {
//!         Ok(())
//!     }
//! }
//!
//! #[cfg(feature = "logging")]
//! impl LogCollector for Quiet {
//!     fn compile_request(&mut self) -> Result<Option<LogSyncRequest>, FeatureError> {
//!         Ok(None)
//!     }
//!     fn handle_sync(&mut self, _: LogSyncResponse) -> Result<(), FeatureError> {
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<(), ProtocolError> {
//! let config = ProtocolConfig::builder("my-app").build()?;
//! let mut protocol = PlatformProtocol::new(&config);
//!
//! let (mut profile, mut user) = (Quiet, Quiet);
//! #[cfg(feature = "event")]
//! let mut event = Quiet;
//! #[cfg(feature = "logging")]
//! let mut logging = Quiet;
//! let mut status = MemoryStatus::new();
//!
//! let mut ctx = SyncContext {
//!     profile: &mut profile,
//!     user: &mut user,
//!     #[cfg(feature = "event")]
//!     event: &mut event,
//!     #[cfg(feature = "logging")]
//!     logging: &mut logging,
//!     status: &mut status,
//! };
//!
//! let request = protocol.serialize_client_sync(&mut ctx, &[Service::Profile, Service::User])?;
//! assert_eq!(protocol.request_id(), 1);
//! assert!(!request.is_empty());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core module (always included)
pub mod core;

pub mod codec;
pub mod envelope;
pub mod schema;

pub mod protocol;
pub mod status;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::*;
    pub use crate::envelope::{Section, Service, SyncRequest, SyncResponse};
    pub use crate::protocol::{
        CompiledRequest, PlatformProtocol, ProtocolConfig, ProtocolConfigBuilder,
        StatusReadPolicy, SyncContext,
    };
    pub use crate::schema::*;
    pub use crate::status::MemoryStatus;
}

// Re-export commonly used items at crate root
pub use crate::core::{ProtocolError, ProtocolResult};
pub use envelope::{Service, SyncRequest, SyncResponse};
pub use protocol::{PlatformProtocol, ProtocolConfig, SyncContext};
