//! Profile section.

use bytes::Bytes;

use super::common::SyncResponseStatus;
use crate::codec::avro_record;

/// Full endpoint profile sent on resync.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSyncRequest {
    /// Endpoint public key; sent until the endpoint is registered.
    pub endpoint_public_key: Option<Bytes>,
    /// Serialized profile body.
    pub profile_body: Bytes,
    /// Access token used to attach this endpoint to a user.
    pub endpoint_access_token: Option<String>,
}

avro_record!(ProfileSyncRequest {
    endpoint_public_key,
    profile_body,
    endpoint_access_token,
});

/// Server verdict on the reported profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSyncResponse {
    /// Whether the server accepted, applied, or wants the profile again.
    pub response_status: SyncResponseStatus,
}

avro_record!(ProfileSyncResponse { response_status });
