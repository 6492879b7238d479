//! Logging section: batched log upload.

use bytes::Bytes;

use super::common::SyncResponseResult;
use crate::codec::avro_record;

/// One serialized log record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEntry {
    /// Record body.
    pub data: Bytes,
}

avro_record!(LogEntry { data });

/// Batch of log records for upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSyncRequest {
    /// Batch id echoed by the server.
    pub request_id: Option<String>,
    /// Records in this batch.
    pub log_entries: Option<Vec<LogEntry>>,
}

impl LogSyncRequest {
    /// Whether the batch carries no records.
    pub fn is_empty(&self) -> bool {
        self.log_entries.as_ref().is_none_or(Vec::is_empty)
    }
}

avro_record!(LogSyncRequest {
    request_id,
    log_entries,
});

/// Server verdict on an uploaded batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSyncResponse {
    /// Batch id from the request.
    pub request_id: String,
    /// Whether the batch was stored.
    pub result: SyncResponseResult,
}

avro_record!(LogSyncResponse { request_id, result });
