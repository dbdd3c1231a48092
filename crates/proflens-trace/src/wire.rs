//! Wire format of the profiler trace payload.
//!
//! Hand-maintained prost messages. The field tags below are the
//! contract with the external trace producer and must not change.

use std::collections::HashMap;

/// A complete profiling trace: device metadata plus timed events
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Trace {
    /// Devices the trace has information about, keyed by device id
    #[prost(map = "uint32, message", tag = "1")]
    pub devices: HashMap<u32, Device>,
    /// Events captured during the profiling period, in occurrence order
    #[prost(message, repeated, tag = "4")]
    pub trace_events: Vec<TraceEvent>,
}

/// A device (e.g. an accelerator chip or the host CPU) events ran on
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Device {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(uint32, tag = "2")]
    pub device_id: u32,
    /// Execution lanes within the device, keyed by resource id
    #[prost(map = "uint32, message", tag = "3")]
    pub resources: HashMap<u32, Resource>,
}

/// An execution lane within a device (queue, stream, thread)
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Resource {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(uint32, tag = "2")]
    pub resource_id: u32,
}

/// One timed record within a trace
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TraceEvent {
    #[prost(uint32, tag = "1")]
    pub device_id: u32,
    #[prost(uint32, tag = "2")]
    pub resource_id: u32,
    #[prost(string, tag = "3")]
    pub name: String,
    /// Event start, picoseconds since trace start
    #[prost(uint64, tag = "9")]
    pub timestamp_ps: u64,
    /// Zero for instantaneous events
    #[prost(uint64, tag = "10")]
    pub duration_ps: u64,
}
