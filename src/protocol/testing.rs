//! Recording collaborators for protocol tests.

use std::cell::Cell;

use super::context::SyncContext;
use crate::core::{FeatureError, ProfileManager, StatusError, StatusStore, UserManager};
use crate::schema::{
    Digest, Event, EventSequenceNumberResponse, EventSyncRequest, LogSyncRequest, LogSyncResponse,
    ProfileSyncRequest, ProfileSyncResponse, UserAttachNotification, UserAttachResponse,
    UserDetachNotification, UserSyncRequest,
};
use crate::status::MemoryStatus;

#[cfg(feature = "event")]
use crate::core::EventManager;

#[cfg(feature = "logging")]
use crate::core::LogCollector;

pub(crate) struct MockProfile {
    pub resync: Result<bool, FeatureError>,
    pub content: Result<ProfileSyncRequest, FeatureError>,
    pub resync_checks: Cell<usize>,
    pub compile_calls: usize,
    pub handled: Vec<ProfileSyncResponse>,
    pub handle_error: Option<FeatureError>,
}

impl Default for MockProfile {
    fn default() -> Self {
        Self {
            resync: Ok(false),
            content: Ok(ProfileSyncRequest::default()),
            resync_checks: Cell::new(0),
            compile_calls: 0,
            handled: Vec::new(),
            handle_error: None,
        }
    }
}

impl ProfileManager for MockProfile {
    fn needs_resync(&self) -> Result<bool, FeatureError> {
        self.resync_checks.set(self.resync_checks.get() + 1);
        self.resync.clone()
    }

    fn compile_request(&mut self) -> Result<ProfileSyncRequest, FeatureError> {
        self.compile_calls += 1;
        self.content.clone()
    }

    fn handle_sync(&mut self, response: ProfileSyncResponse) -> Result<(), FeatureError> {
        self.handled.push(response);
        self.handle_error.clone().map_or(Ok(()), Err)
    }
}

pub(crate) type UserParts = (
    Option<UserAttachResponse>,
    Option<UserAttachNotification>,
    Option<UserDetachNotification>,
);

pub(crate) struct MockUser {
    pub content: Result<Option<UserSyncRequest>, FeatureError>,
    pub compiled_ids: Vec<u32>,
    pub handled: Vec<UserParts>,
    pub handle_error: Option<FeatureError>,
}

impl Default for MockUser {
    fn default() -> Self {
        Self {
            content: Ok(None),
            compiled_ids: Vec::new(),
            handled: Vec::new(),
            handle_error: None,
        }
    }
}

impl UserManager for MockUser {
    fn compile_request(&mut self, request_id: u32) -> Result<Option<UserSyncRequest>, FeatureError> {
        self.compiled_ids.push(request_id);
        self.content.clone()
    }

    fn handle_sync(
        &mut self,
        attach_response: Option<UserAttachResponse>,
        attach_notification: Option<UserAttachNotification>,
        detach_notification: Option<UserDetachNotification>,
    ) -> Result<(), FeatureError> {
        self.handled
            .push((attach_response, attach_notification, detach_notification));
        self.handle_error.clone().map_or(Ok(()), Err)
    }
}

pub(crate) type EventParts = (u32, Option<EventSequenceNumberResponse>, Option<Vec<Event>>);

#[cfg_attr(not(feature = "event"), allow(dead_code))]
pub(crate) struct MockEvent {
    pub content: Result<Option<EventSyncRequest>, FeatureError>,
    pub compiled_ids: Vec<u32>,
    pub handled: Vec<EventParts>,
    pub handle_error: Option<FeatureError>,
}

impl Default for MockEvent {
    fn default() -> Self {
        Self {
            content: Ok(None),
            compiled_ids: Vec::new(),
            handled: Vec::new(),
            handle_error: None,
        }
    }
}

#[cfg(feature = "event")]
impl EventManager for MockEvent {
    fn compile_request(&mut self, request_id: u32) -> Result<Option<EventSyncRequest>, FeatureError> {
        self.compiled_ids.push(request_id);
        self.content.clone()
    }

    fn handle_sync(
        &mut self,
        request_id: u32,
        sequence_number: Option<EventSequenceNumberResponse>,
        events: Option<Vec<Event>>,
    ) -> Result<(), FeatureError> {
        self.handled.push((request_id, sequence_number, events));
        self.handle_error.clone().map_or(Ok(()), Err)
    }
}

#[cfg_attr(not(feature = "logging"), allow(dead_code))]
pub(crate) struct MockLogging {
    pub content: Result<Option<LogSyncRequest>, FeatureError>,
    pub compile_calls: usize,
    pub handled: Vec<LogSyncResponse>,
    pub handle_error: Option<FeatureError>,
}

impl Default for MockLogging {
    fn default() -> Self {
        Self {
            content: Ok(None),
            compile_calls: 0,
            handled: Vec::new(),
            handle_error: None,
        }
    }
}

#[cfg(feature = "logging")]
impl LogCollector for MockLogging {
    fn compile_request(&mut self) -> Result<Option<LogSyncRequest>, FeatureError> {
        self.compile_calls += 1;
        self.content.clone()
    }

    fn handle_sync(&mut self, response: LogSyncResponse) -> Result<(), FeatureError> {
        self.handled.push(response);
        self.handle_error.clone().map_or(Ok(()), Err)
    }
}

/// Memory status with injectable failures.
#[derive(Default)]
pub(crate) struct MockStatus {
    pub inner: MemoryStatus,
    pub read_error: Option<StatusError>,
    pub save_error: Option<StatusError>,
    pub save_calls: usize,
}

impl StatusStore for MockStatus {
    fn endpoint_key_hash(&self) -> Result<Option<Digest>, StatusError> {
        match &self.read_error {
            Some(err) => Err(err.clone()),
            None => self.inner.endpoint_key_hash(),
        }
    }

    fn profile_hash(&self) -> Result<Option<Digest>, StatusError> {
        match &self.read_error {
            Some(err) => Err(err.clone()),
            None => self.inner.profile_hash(),
        }
    }

    fn save(&mut self) -> Result<(), StatusError> {
        self.save_calls += 1;
        match &self.save_error {
            Some(err) => Err(err.clone()),
            None => self.inner.save(),
        }
    }
}

/// One of each collaborator.
#[derive(Default)]
pub(crate) struct Harness {
    pub profile: MockProfile,
    pub user: MockUser,
    pub event: MockEvent,
    pub logging: MockLogging,
    pub status: MockStatus,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctx(&mut self) -> SyncContext<'_> {
        SyncContext {
            profile: &mut self.profile,
            user: &mut self.user,
            #[cfg(feature = "event")]
            event: &mut self.event,
            #[cfg(feature = "logging")]
            logging: &mut self.logging,
            status: &mut self.status,
        }
    }

    /// Response handler calls across all managers.
    pub fn handle_calls(&self) -> usize {
        self.profile.handled.len()
            + self.user.handled.len()
            + self.event.handled.len()
            + self.logging.handled.len()
    }
}
