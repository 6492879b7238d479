//! In-memory device status.
//!
//! Holds the endpoint key hash and profile hash for clients that persist
//! status elsewhere (or not at all). Durable stores implement
//! [`StatusStore`] directly.

use tracing::trace;

use crate::core::{StatusError, StatusStore};
use crate::schema::Digest;

/// Status kept in process memory. `save` only counts flushes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStatus {
    endpoint_key_hash: Option<Digest>,
    profile_hash: Option<Digest>,
    save_count: u64,
}

impl MemoryStatus {
    /// Status of an unregistered endpoint with no profile sent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Status with both hashes already known.
    pub fn with_hashes(endpoint_key_hash: Option<Digest>, profile_hash: Option<Digest>) -> Self {
        Self {
            endpoint_key_hash,
            profile_hash,
            save_count: 0,
        }
    }

    /// Record the registered endpoint key hash.
    pub fn set_endpoint_key_hash(&mut self, hash: Option<Digest>) {
        self.endpoint_key_hash = hash;
    }

    /// Record the hash of the profile last sent.
    pub fn set_profile_hash(&mut self, hash: Option<Digest>) {
        self.profile_hash = hash;
    }

    /// Number of times status was flushed.
    pub fn save_count(&self) -> u64 {
        self.save_count
    }
}

impl StatusStore for MemoryStatus {
    fn endpoint_key_hash(&self) -> Result<Option<Digest>, StatusError> {
        Ok(self.endpoint_key_hash)
    }

    fn profile_hash(&self) -> Result<Option<Digest>, StatusError> {
        Ok(self.profile_hash)
    }

    fn save(&mut self) -> Result<(), StatusError> {
        self.save_count += 1;
        trace!(save_count = self.save_count, "status saved");
        Ok(())
    }
}
