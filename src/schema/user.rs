//! User section: attaching endpoints to user accounts.

use super::common::SyncResponseResult;
use crate::codec::avro_record;

/// Request to attach this endpoint to a user account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAttachRequest {
    /// Account id in the external user system.
    pub user_external_id: String,
    /// Token proving access to that account.
    pub user_access_token: String,
}

avro_record!(UserAttachRequest {
    user_external_id,
    user_access_token,
});

/// Request to attach another endpoint to this endpoint's user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointAttachRequest {
    /// Client-chosen id echoed by the server.
    pub request_id: String,
    /// Access token of the endpoint to attach.
    pub endpoint_access_token: String,
}

avro_record!(EndpointAttachRequest {
    request_id,
    endpoint_access_token,
});

/// Request to detach an endpoint from this endpoint's user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointDetachRequest {
    /// Client-chosen id echoed by the server.
    pub request_id: String,
    /// Key hash of the endpoint to detach.
    pub endpoint_key_hash: String,
}

avro_record!(EndpointDetachRequest {
    request_id,
    endpoint_key_hash,
});

/// User linkage state sent with every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSyncRequest {
    /// Pending attach of this endpoint.
    pub user_attach_request: Option<UserAttachRequest>,
    /// Pending attaches of other endpoints.
    pub endpoint_attach_requests: Option<Vec<EndpointAttachRequest>>,
    /// Pending detaches of other endpoints.
    pub endpoint_detach_requests: Option<Vec<EndpointDetachRequest>>,
}

avro_record!(UserSyncRequest {
    user_attach_request,
    endpoint_attach_requests,
    endpoint_detach_requests,
});

/// Result of this endpoint's attach request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserAttachResponse {
    /// Whether the attach succeeded.
    pub result: SyncResponseResult,
}

avro_record!(UserAttachResponse { result });

/// Server notice that this endpoint was attached to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAttachNotification {
    /// Account the endpoint is now attached to.
    pub user_external_id: String,
    /// Token of the endpoint that performed the attach.
    pub endpoint_access_token: String,
}

avro_record!(UserAttachNotification {
    user_external_id,
    endpoint_access_token,
});

/// Server notice that this endpoint was detached from its user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDetachNotification {
    /// Token of the endpoint that performed the detach.
    pub endpoint_access_token: String,
}

avro_record!(UserDetachNotification {
    endpoint_access_token
});

/// User section of a response. Every part is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSyncResponse {
    /// Result of a previous attach request.
    pub user_attach_response: Option<UserAttachResponse>,
    /// Attach performed on this endpoint's behalf.
    pub user_attach_notification: Option<UserAttachNotification>,
    /// Detach performed on this endpoint's behalf.
    pub user_detach_notification: Option<UserDetachNotification>,
}

avro_record!(UserSyncResponse {
    user_attach_response,
    user_attach_notification,
    user_detach_notification,
});
