//! Event section: endpoint-to-endpoint event exchange.

use bytes::Bytes;

use crate::codec::avro_record;

/// One event, outbound or delivered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    /// Sender-assigned sequence number.
    pub seq_num: i32,
    /// Fully qualified event class name.
    pub event_class_fqn: String,
    /// Serialized event body.
    pub event_data: Bytes,
    /// Sender endpoint key hash; absent on outbound events.
    pub source: Option<String>,
    /// Target endpoint key hash; absent means broadcast.
    pub target: Option<String>,
}

avro_record!(Event {
    seq_num,
    event_class_fqn,
    event_data,
    source,
    target,
});

/// Ask the server for the last event sequence number it accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventSequenceNumberRequest {}

avro_record!(EventSequenceNumberRequest {});

/// Event section of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSyncRequest {
    /// Present while the client's sequence number is unsynchronized.
    pub event_sequence_number_request: Option<EventSequenceNumberRequest>,
    /// Outbound events.
    pub events: Option<Vec<Event>>,
}

avro_record!(EventSyncRequest {
    event_sequence_number_request,
    events,
});

/// Last event sequence number the server accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventSequenceNumberResponse {
    /// Accepted sequence number.
    pub seq_num: i32,
}

avro_record!(EventSequenceNumberResponse { seq_num });

/// Event section of a response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSyncResponse {
    /// Sequence number acknowledgement.
    pub event_sequence_number_response: Option<EventSequenceNumberResponse>,
    /// Events delivered to this endpoint.
    pub events: Option<Vec<Event>>,
}

avro_record!(EventSyncResponse {
    event_sequence_number_response,
    events,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_exact, encode_to_vec, Encode};

    #[test]
    fn test_sequence_number_request_has_no_body() {
        let request = EventSyncRequest {
            event_sequence_number_request: Some(EventSequenceNumberRequest {}),
            events: None,
        };
        assert_eq!(encode_to_vec(&request).unwrap(), vec![0x00, 0x02]);
    }

    #[test]
    fn test_event_layout() {
        let event = Event {
            seq_num: 3,
            event_class_fqn: "a.B".into(),
            event_data: Bytes::from_static(&[0xff]),
            source: None,
            target: Some("t".into()),
        };
        let encoded = encode_to_vec(&event).unwrap();
        assert_eq!(hex::encode(&encoded), "0606612e4202ff02000274");
        assert_eq!(event.encoded_len(), encoded.len());
    }

    #[test]
    fn test_response_with_events() {
        let response = EventSyncResponse {
            event_sequence_number_response: Some(EventSequenceNumberResponse { seq_num: 41 }),
            events: Some(vec![
                Event {
                    seq_num: 1,
                    event_class_fqn: "org.example.Ping".into(),
                    event_data: Bytes::from_static(b"{}"),
                    source: Some("peer".into()),
                    target: None,
                },
                Event::default(),
            ]),
        };
        let encoded = encode_to_vec(&response).unwrap();
        let decoded = decode_exact::<EventSyncResponse>(&encoded).unwrap();
        assert_eq!(decoded, response);
    }
}
