//! Canned trace payloads for decoder and end-to-end tests.

use std::collections::HashMap;

use prost::Message;
use proflens_trace::{Device, Resource, Trace, TraceEvent};

/// A minimal two-event trace: one named device with one named resource,
/// a timed event and an instant marker.
pub fn sample_trace() -> Trace {
    let mut resources = HashMap::new();
    resources.insert(
        1,
        Resource {
            name: "queue".to_string(),
            resource_id: 1,
        },
    );
    let mut devices = HashMap::new();
    devices.insert(
        4,
        Device {
            name: "/device:TPU:0".to_string(),
            device_id: 4,
            resources,
        },
    );
    Trace {
        devices,
        trace_events: vec![
            TraceEvent {
                device_id: 4,
                resource_id: 1,
                name: "matmul".to_string(),
                timestamp_ps: 2_000_000,
                duration_ps: 1_000_000,
            },
            TraceEvent {
                device_id: 4,
                resource_id: 1,
                name: "checkpoint".to_string(),
                timestamp_ps: 5_000_000,
                duration_ps: 0,
            },
        ],
    }
}

/// Wire bytes for a trace, as the external producer would write them
pub fn encode_trace(trace: &Trace) -> Vec<u8> {
    trace.encode_to_vec()
}
