//! Inbound envelope.

use crate::codec::{avro_record, decode_exact};
use crate::core::CodecError;
use crate::schema::{
    EventSyncResponse, LogSyncResponse, OpaqueSection, ProfileSyncResponse, UserSyncResponse,
};

use super::section::Section;
use super::service::Service;

/// One inbound sync response. Section presence is decided by the server.
///
/// Wire format (fields in order):
/// ```text
/// request_id                   [int, null]
/// user_sync_response           [UserSyncResponse, null]
/// event_sync_response          [EventSyncResponse, null]
/// log_sync_response            [LogSyncResponse, null]
/// notification_sync_response   [bytes, null]
/// configuration_sync_response  [bytes, null]
/// profile_sync_response        [ProfileSyncResponse, null]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncResponse {
    /// Id of the request this answers, if the server echoed it.
    pub request_id: Option<u32>,
    /// User linkage section.
    pub user: Section<UserSyncResponse>,
    /// Event section.
    pub event: Section<EventSyncResponse>,
    /// Logging section.
    pub logging: Section<LogSyncResponse>,
    /// Notification section; parsed and ignored.
    pub notification: Section<OpaqueSection>,
    /// Configuration section; parsed and ignored.
    pub configuration: Section<OpaqueSection>,
    /// Profile section.
    pub profile: Section<ProfileSyncResponse>,
}

avro_record!(SyncResponse {
    request_id,
    user,
    event,
    logging,
    notification,
    configuration,
    profile,
});

impl SyncResponse {
    /// Whether the section for `service` carries content.
    pub fn has_section(&self, service: Service) -> bool {
        match service {
            Service::Profile => self.profile.is_present(),
            Service::User => self.user.is_present(),
            Service::Event => self.event.is_present(),
            Service::Logging => self.logging.is_present(),
            Service::Notification => self.notification.is_present(),
            Service::Configuration => self.configuration.is_present(),
            Service::Bootstrap => false,
        }
    }

    /// Decode a complete response envelope.
    pub fn from_bytes(data: &[u8]) -> Result<Self, CodecError> {
        decode_exact(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_to_vec;
    use crate::schema::{SyncResponseResult, UserAttachResponse};

    #[test]
    fn test_all_absent_response() {
        let data = hex::decode("02020202020202").unwrap();
        let response = SyncResponse::from_bytes(&data).unwrap();
        assert_eq!(response, SyncResponse::default());
    }

    #[test]
    fn test_user_attach_response_bytes() {
        // request_id 5, user present with attach response SUCCESS only
        let data = hex::decode("000a00000002020202020202").unwrap();
        let response = SyncResponse::from_bytes(&data).unwrap();
        assert_eq!(response.request_id, Some(5));
        assert_eq!(
            response.user,
            Section::Present(UserSyncResponse {
                user_attach_response: Some(UserAttachResponse {
                    result: SyncResponseResult::Success,
                }),
                user_attach_notification: None,
                user_detach_notification: None,
            })
        );
        assert!(!response.has_section(Service::Event));
        assert_eq!(encode_to_vec(&response).unwrap(), data);
    }

    #[test]
    fn test_truncated_response() {
        let data = hex::decode("000a00").unwrap();
        assert!(matches!(
            SyncResponse::from_bytes(&data),
            Err(CodecError::UnexpectedEof { .. })
        ));
    }
}
