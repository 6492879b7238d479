//! Section payloads
//!
//! Per-feature content carried inside the envelope. The multiplexer treats
//! these as opaque apart from the parts it routes to feature managers.
//!
//! | Section       | Request              | Response              |
//! |---------------|----------------------|-----------------------|
//! | profile       | `ProfileSyncRequest` | `ProfileSyncResponse` |
//! | user          | `UserSyncRequest`    | `UserSyncResponse`    |
//! | event         | `EventSyncRequest`   | `EventSyncResponse`   |
//! | logging       | `LogSyncRequest`     | `LogSyncResponse`     |
//! | notification  | `OpaqueSection`      | `OpaqueSection`       |
//! | configuration | `OpaqueSection`      | `OpaqueSection`       |
//!
//! Event and logging payloads stay compiled without their cargo features so
//! the wire format never depends on the build.

mod common;
mod event;
mod logging;
mod profile;
mod user;

pub use common::*;
pub use event::*;
pub use logging::*;
pub use profile::*;
pub use user::*;
