//! Request compiler
//!
//! Builds one outbound [`SyncRequest`] per sync cycle:
//! - every request gets a fresh id, even if compilation later fails
//! - metadata and the user section are always filled
//! - event, profile and logging sections are filled only when requested
//!   (profile additionally only when its manager asks for a resync)
//! - everything else stays [`Section::Absent`]

use tracing::{debug, trace, warn};

use super::config::{ProtocolConfig, StatusReadPolicy};
use super::context::SyncContext;
use crate::codec::Encode;
use crate::core::{
    ProtocolError, ProtocolResult, StatusError, StatusStore, FIRST_REQUEST_ID, SYNC_TIMEOUT_MS,
};
use crate::envelope::{Section, Service, SyncRequest, SyncRequestMetaData};
use crate::schema::{Digest, ProfileSyncRequest, UserSyncRequest};

#[cfg(feature = "event")]
use crate::schema::EventSyncRequest;

#[cfg(feature = "logging")]
use crate::schema::LogSyncRequest;

/// A compiled request and its exact encoded size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRequest {
    /// The request envelope.
    pub request: SyncRequest,
    /// Bytes [`serialize_request`](super::serialize_request) will write.
    pub size: usize,
}

/// Compiles request envelopes and owns the request id counter.
///
/// Callers must not compile concurrently; `&mut self` on [`compile`]
/// enforces this within one protocol instance.
///
/// [`compile`]: RequestCompiler::compile
#[derive(Debug, Clone)]
pub struct RequestCompiler {
    /// Last id handed out; 0 before the first compile.
    last_request_id: u32,
    application_token: String,
    status_read_policy: StatusReadPolicy,
}

impl RequestCompiler {
    /// Create a compiler that has not issued any request id yet.
    pub fn new(config: &ProtocolConfig) -> Self {
        Self {
            last_request_id: 0,
            application_token: config.application_token().to_owned(),
            status_read_policy: config.status_read_policy(),
        }
    }

    /// Last request id issued, 0 if none.
    pub fn last_request_id(&self) -> u32 {
        self.last_request_id
    }

    /// Advance the counter. Wraps to 1, never 0, which responses use for
    /// "no correlation".
    fn next_request_id(&mut self) -> u32 {
        self.last_request_id = self
            .last_request_id
            .checked_add(1)
            .unwrap_or(FIRST_REQUEST_ID);
        self.last_request_id
    }

    /// Compile a request for `services`.
    ///
    /// Unsupported or disabled services are skipped, and a service listed
    /// twice is compiled once. Only a profile manager failure aborts the
    /// whole request.
    pub fn compile(
        &mut self,
        ctx: &mut SyncContext<'_>,
        services: &[Service],
    ) -> ProtocolResult<CompiledRequest> {
        if services.is_empty() {
            return Err(ProtocolError::BadParameter("services"));
        }

        let request_id = self.next_request_id();
        let meta_data = self.meta_data(&*ctx.status)?;
        let mut request = SyncRequest::new(request_id, meta_data);

        request.user = Section::Present(compile_user(ctx, request_id));

        for (index, &service) in services.iter().enumerate() {
            if services[..index].contains(&service) {
                continue;
            }
            match service {
                #[cfg(feature = "event")]
                Service::Event => request.event = compile_event(ctx, request_id),
                Service::Profile => request.profile = compile_profile(ctx)?,
                #[cfg(feature = "logging")]
                Service::Logging => request.logging = compile_logging(ctx),
                other => trace!(service = %other, "no request section for service"),
            }
        }

        let size = request.encoded_len();
        debug!(
            request_id,
            size,
            event = request.event.is_present(),
            profile = request.profile.is_present(),
            logging = request.logging.is_present(),
            "compiled sync request"
        );
        Ok(CompiledRequest { request, size })
    }

    fn meta_data(&self, status: &dyn StatusStore) -> ProtocolResult<SyncRequestMetaData> {
        let mut application_token = String::new();
        application_token
            .try_reserve_exact(self.application_token.len())
            .map_err(|_| ProtocolError::OutOfMemory)?;
        application_token.push_str(&self.application_token);

        Ok(SyncRequestMetaData {
            application_token,
            endpoint_public_key_hash: self
                .read_digest("endpoint_public_key_hash", status.endpoint_key_hash())?,
            profile_hash: self.read_digest("profile_hash", status.profile_hash())?,
            timeout: SYNC_TIMEOUT_MS,
        })
    }

    fn read_digest(
        &self,
        field: &'static str,
        read: Result<Option<Digest>, StatusError>,
    ) -> ProtocolResult<Option<Digest>> {
        match (read, self.status_read_policy) {
            (Ok(digest), _) => Ok(digest),
            (Err(err), StatusReadPolicy::Propagate) => Err(err.into()),
            (Err(err), StatusReadPolicy::TreatAsAbsent) => {
                warn!(field, error = %err, "status read failed, sending field as absent");
                Ok(None)
            }
        }
    }
}

/// The user section is sent with every request, empty if nothing is pending.
fn compile_user(ctx: &mut SyncContext<'_>, request_id: u32) -> UserSyncRequest {
    match ctx.user.compile_request(request_id) {
        Ok(content) => content.unwrap_or_default(),
        Err(err) => {
            warn!(request_id, error = %err, "user manager failed to compile, sending empty section");
            UserSyncRequest::default()
        }
    }
}

#[cfg(feature = "event")]
fn compile_event(ctx: &mut SyncContext<'_>, request_id: u32) -> Section<EventSyncRequest> {
    match ctx.event.compile_request(request_id) {
        Ok(content) => Section::Present(content.unwrap_or_default()),
        Err(err) => {
            warn!(request_id, error = %err, "event manager failed to compile, leaving section absent");
            Section::Absent
        }
    }
}

fn compile_profile(ctx: &mut SyncContext<'_>) -> ProtocolResult<Section<ProfileSyncRequest>> {
    let needs_resync = ctx
        .profile
        .needs_resync()
        .map_err(|err| ProtocolError::feature(Service::Profile, err))?;
    if !needs_resync {
        trace!("profile unchanged, leaving section absent");
        return Ok(Section::Absent);
    }

    let content = ctx
        .profile
        .compile_request()
        .map_err(|err| ProtocolError::feature(Service::Profile, err))?;
    Ok(Section::Present(content))
}

#[cfg(feature = "logging")]
fn compile_logging(ctx: &mut SyncContext<'_>) -> Section<LogSyncRequest> {
    match ctx.logging.compile_request() {
        Ok(Some(batch)) if !batch.is_empty() => Section::Present(batch),
        Ok(_) => Section::Absent,
        Err(err) => {
            warn!(error = %err, "log collector failed to compile, leaving section absent");
            Section::Absent
        }
    }
}
