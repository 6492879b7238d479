//! Protocol constants for the endpoint sync envelope.
//!
//! These values are fixed by the wire protocol shared with the server and
//! MUST NOT be changed.

// =============================================================================
// DIGESTS
// =============================================================================

/// SHA-1 digest size, used for endpoint key and profile fingerprints.
pub const SHA1_DIGEST_LENGTH: usize = 20;

// =============================================================================
// ENVELOPE METADATA
// =============================================================================

/// Timeout advertised to the server in every request (milliseconds).
pub const SYNC_TIMEOUT_MS: u64 = 60_000;

/// First request id issued by a fresh protocol instance.
pub const FIRST_REQUEST_ID: u32 = 1;

/// Request id reported for responses that carry no correlation id.
pub const UNCORRELATED_REQUEST_ID: u32 = 0;

// =============================================================================
// FIELD CODEC
// =============================================================================

/// Union branch carrying a value.
pub const UNION_BRANCH_PRESENT: i64 = 0;

/// Union branch carrying null.
pub const UNION_BRANCH_ABSENT: i64 = 1;

/// Longest zig-zag varint for a 64-bit value.
pub const MAX_VARINT_LEN: usize = 10;
