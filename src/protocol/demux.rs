//! Response demultiplexer
//!
//! Parses one inbound envelope and routes each present section to its
//! manager in a fixed order: event, user, profile, logging. Status is
//! persisted once afterwards, whatever the sections contained.
//!
//! A buffer that fails to parse reaches no manager and persists nothing.

use tracing::{debug, trace, warn};

use super::context::SyncContext;
use crate::core::{
    FeatureError, ProtocolError, ProtocolResult, UNCORRELATED_REQUEST_ID,
};
use crate::envelope::{Section, Service, SyncResponse};

/// Parse a complete response envelope.
pub fn parse_response(buffer: &[u8]) -> ProtocolResult<SyncResponse> {
    if buffer.is_empty() {
        return Err(ProtocolError::BadParameter("buffer"));
    }
    SyncResponse::from_bytes(buffer).map_err(|err| {
        warn!(size = buffer.len(), error = %err, "malformed sync response");
        ProtocolError::from_decode(err)
    })
}

/// Keep the first manager failure; later ones are only logged.
fn record_failure(
    first: &mut Option<ProtocolError>,
    service: Service,
    result: Result<(), FeatureError>,
) {
    if let Err(err) = result {
        warn!(service = %service, error = %err, "manager failed to handle sync response");
        if first.is_none() {
            *first = Some(ProtocolError::feature(service, err));
        }
    }
}

/// Route the sections of `response` to their managers, then persist status.
///
/// Every present section is dispatched even if an earlier manager fails.
/// The first manager failure is returned after status is saved; a save
/// failure is returned only when every manager succeeded.
pub fn dispatch_response(ctx: &mut SyncContext<'_>, response: SyncResponse) -> ProtocolResult<()> {
    let request_id = response.request_id.unwrap_or(UNCORRELATED_REQUEST_ID);
    debug!(
        request_id,
        user = response.user.is_present(),
        event = response.event.is_present(),
        profile = response.profile.is_present(),
        logging = response.logging.is_present(),
        "dispatching sync response"
    );

    let mut failure = None;

    // the event manager hears about every response, even one without events
    #[cfg(feature = "event")]
    {
        let (sequence_number, events) = match response.event {
            Section::Present(event) => (event.event_sequence_number_response, event.events),
            Section::Absent => (None, None),
        };
        record_failure(
            &mut failure,
            Service::Event,
            ctx.event.handle_sync(request_id, sequence_number, events),
        );
    }
    #[cfg(not(feature = "event"))]
    if response.event.is_present() {
        trace!("event support disabled, dropping event section");
    }

    if let Section::Present(user) = response.user {
        record_failure(
            &mut failure,
            Service::User,
            ctx.user.handle_sync(
                user.user_attach_response,
                user.user_attach_notification,
                user.user_detach_notification,
            ),
        );
    }

    if let Section::Present(profile) = response.profile {
        record_failure(&mut failure, Service::Profile, ctx.profile.handle_sync(profile));
    }

    #[cfg(feature = "logging")]
    if let Section::Present(logging) = response.logging {
        record_failure(&mut failure, Service::Logging, ctx.logging.handle_sync(logging));
    }
    #[cfg(not(feature = "logging"))]
    if response.logging.is_present() {
        trace!("logging support disabled, dropping logging section");
    }

    if response.notification.is_present() || response.configuration.is_present() {
        trace!("ignoring notification/configuration sections");
    }

    let saved = ctx.status.save();
    match failure {
        Some(err) => {
            if let Err(save_err) = saved {
                warn!(error = %save_err, "status persist failed after manager failure");
            }
            Err(err)
        }
        None => saved.map_err(ProtocolError::from),
    }
}
