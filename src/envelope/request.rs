//! Outbound envelope.

use crate::codec::{avro_record, decode_exact, Decode, Encode, Reader, Writer};
use crate::core::CodecError;
use crate::schema::{
    Digest, EventSyncRequest, LogSyncRequest, OpaqueSection, ProfileSyncRequest, UserSyncRequest,
};

use super::section::Section;
use super::service::Service;

/// Metadata sent with every request.
///
/// Wire format:
/// ```text
/// application_token          string
/// endpoint_public_key_hash   [bytes(20), null]
/// profile_hash               [bytes(20), null]
/// timeout                    long (milliseconds)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequestMetaData {
    /// Application this endpoint belongs to.
    pub application_token: String,
    /// Hash of the endpoint public key; absent until registered.
    pub endpoint_public_key_hash: Option<Digest>,
    /// Hash of the last profile sent. Absent is distinct from the hash of an
    /// empty profile and is always written as an explicit null branch.
    pub profile_hash: Option<Digest>,
    /// Advisory server-side timeout in milliseconds.
    pub timeout: u64,
}

avro_record!(SyncRequestMetaData {
    application_token,
    endpoint_public_key_hash,
    profile_hash,
    timeout,
});

/// One outbound sync request.
///
/// Wire format (fields in order):
/// ```text
/// request_id              [int, null]            always present
/// sync_request_meta_data  [SyncRequestMetaData, null]  always present
/// user_sync_request       [UserSyncRequest, null]
/// event_sync_request      [EventSyncRequest, null]
/// log_sync_request        [LogSyncRequest, null]
/// notification_sync_request   [bytes, null]     always absent
/// configuration_sync_request  [bytes, null]     always absent
/// profile_sync_request    [ProfileSyncRequest, null]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    /// Correlation id for this round trip.
    pub request_id: u32,
    /// Endpoint identity and timeout.
    pub meta_data: SyncRequestMetaData,
    /// User linkage section.
    pub user: Section<UserSyncRequest>,
    /// Event section.
    pub event: Section<EventSyncRequest>,
    /// Logging section.
    pub logging: Section<LogSyncRequest>,
    /// Reserved notification section.
    pub notification: Section<OpaqueSection>,
    /// Reserved configuration section.
    pub configuration: Section<OpaqueSection>,
    /// Profile section.
    pub profile: Section<ProfileSyncRequest>,
}

impl SyncRequest {
    /// Create a request with every section absent.
    pub fn new(request_id: u32, meta_data: SyncRequestMetaData) -> Self {
        Self {
            request_id,
            meta_data,
            user: Section::Absent,
            event: Section::Absent,
            logging: Section::Absent,
            notification: Section::Absent,
            configuration: Section::Absent,
            profile: Section::Absent,
        }
    }

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

    /// Decode a complete request envelope.
    pub fn from_bytes(data: &[u8]) -> Result<Self, CodecError> {
        decode_exact(data)
    }
}

impl Encode for SyncRequest {
    fn encoded_len(&self) -> usize {
        1 + self.request_id.encoded_len()
            + 1
            + self.meta_data.encoded_len()
            + self.user.encoded_len()
            + self.event.encoded_len()
            + self.logging.encoded_len()
            + self.notification.encoded_len()
            + self.configuration.encoded_len()
            + self.profile.encoded_len()
    }

    fn encode(&self, writer: &mut Writer<'_>) -> Result<(), CodecError> {
        writer.put_union_branch(true)?;
        self.request_id.encode(writer)?;
        writer.put_union_branch(true)?;
        self.meta_data.encode(writer)?;
        self.user.encode(writer)?;
        self.event.encode(writer)?;
        self.logging.encode(writer)?;
        self.notification.encode(writer)?;
        self.configuration.encode(writer)?;
        self.profile.encode(writer)
    }
}

impl Decode for SyncRequest {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        let request_id =
            Option::<u32>::decode(reader)?.ok_or(CodecError::MissingField("request_id"))?;
        let meta_data = Option::<SyncRequestMetaData>::decode(reader)?
            .ok_or(CodecError::MissingField("sync_request_meta_data"))?;
        Ok(Self {
            request_id,
            meta_data,
            user: Section::decode(reader)?,
            event: Section::decode(reader)?,
            logging: Section::decode(reader)?,
            notification: Section::decode(reader)?,
            configuration: Section::decode(reader)?,
            profile: Section::decode(reader)?,
        })
    }
}
