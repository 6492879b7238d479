//! Collaborators lent to the protocol for one operation.

use crate::core::{ProfileManager, StatusStore, UserManager};

#[cfg(feature = "event")]
use crate::core::EventManager;

#[cfg(feature = "logging")]
use crate::core::LogCollector;

/// Feature managers and status store for one compile or dispatch.
///
/// The protocol borrows these only for the duration of a call, so the
/// surrounding client keeps ownership and can keep feeding managers between
/// sync cycles.
pub struct SyncContext<'a> {
    /// Profile manager.
    pub profile: &'a mut dyn ProfileManager,
    /// User manager.
    pub user: &'a mut dyn UserManager,
    /// Event manager.
    #[cfg(feature = "event")]
    #[cfg_attr(docsrs, doc(cfg(feature = "event")))]
    pub event: &'a mut dyn EventManager,
    /// Log collector.
    #[cfg(feature = "logging")]
    #[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
    pub logging: &'a mut dyn LogCollector,
    /// Device status store.
    pub status: &'a mut dyn StatusStore,
}
