//! Collaborator traits for the sync envelope.
//!
//! Each feature manager owns its feature's business logic. The protocol only
//! asks it to compile a section for an outbound request and hands it the
//! matching section of an inbound response. All values cross the boundary by
//! ownership; no manager writes into protocol-owned slots.

use super::error::{FeatureError, StatusError};
use crate::schema::{
    Digest, ProfileSyncRequest, ProfileSyncResponse, UserAttachNotification, UserAttachResponse,
    UserDetachNotification, UserSyncRequest,
};

#[cfg(feature = "event")]
use crate::schema::{Event, EventSequenceNumberResponse, EventSyncRequest};

#[cfg(feature = "logging")]
use crate::schema::{LogSyncRequest, LogSyncResponse};

/// Endpoint profile manager.
///
/// The profile is the only feature whose failures abort a whole request.
pub trait ProfileManager {
    /// Whether the server must receive the full profile again.
    fn needs_resync(&self) -> Result<bool, FeatureError>;

    /// Build the profile section. Only called when [`needs_resync`] is true.
    ///
    /// [`needs_resync`]: ProfileManager::needs_resync
    fn compile_request(&mut self) -> Result<ProfileSyncRequest, FeatureError>;

    /// Consume the profile section of a response.
    fn handle_sync(&mut self, response: ProfileSyncResponse) -> Result<(), FeatureError>;
}

/// User-account linkage manager.
pub trait UserManager {
    /// Build the user section. Called for every request.
    ///
    /// `None` means nothing is pending; the section is still sent, empty.
    fn compile_request(&mut self, request_id: u32) -> Result<Option<UserSyncRequest>, FeatureError>;

    /// Consume the parts of a user section. Any part may be absent.
    fn handle_sync(
        &mut self,
        attach_response: Option<UserAttachResponse>,
        attach_notification: Option<UserAttachNotification>,
        detach_notification: Option<UserDetachNotification>,
    ) -> Result<(), FeatureError>;
}

/// Event exchange manager.
#[cfg(feature = "event")]
#[cfg_attr(docsrs, doc(cfg(feature = "event")))]
pub trait EventManager {
    /// Build the event section, tagged with `request_id` so later
    /// acknowledgements can be matched.
    fn compile_request(&mut self, request_id: u32) -> Result<Option<EventSyncRequest>, FeatureError>;

    /// Consume the parts of an event section.
    ///
    /// Called for every response, with both parts `None` when the response
    /// carries no event section. `request_id` is 0 when the response is
    /// uncorrelated.
    fn handle_sync(
        &mut self,
        request_id: u32,
        sequence_number: Option<EventSequenceNumberResponse>,
        events: Option<Vec<Event>>,
    ) -> Result<(), FeatureError>;
}

/// Log upload collector.
#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub trait LogCollector {
    /// Build the logging section. `None` or an empty batch leaves it absent.
    fn compile_request(&mut self) -> Result<Option<LogSyncRequest>, FeatureError>;

    /// Consume the logging section of a response.
    fn handle_sync(&mut self, response: LogSyncResponse) -> Result<(), FeatureError>;
}

/// Durable device status.
pub trait StatusStore {
    /// Hash of the registered endpoint public key, if registered.
    fn endpoint_key_hash(&self) -> Result<Option<Digest>, StatusError>;

    /// Hash of the last profile sent, if any.
    fn profile_hash(&self) -> Result<Option<Digest>, StatusError>;

    /// Flush status to durable storage.
    fn save(&mut self) -> Result<(), StatusError>;
}
