//! Binary trace decoding for the trace-viewer frontend.
//!
//! A trace payload is a complete serialized `Trace` message: device and
//! resource metadata plus an ordered sequence of timed events. Decoding
//! is not fault-tolerant: corrupt payloads are a hard error, since a
//! partial event stream would silently mislead the viewer.

mod error;
mod json_stream;
mod wire;

pub use error::{Error, Result};
pub use json_stream::JsonFragments;
pub use wire::{Device, Resource, Trace, TraceEvent};

use prost::Message;

/// Parse payload bytes into the wire model
pub fn parse(raw: &[u8]) -> Result<Trace> {
    Trace::decode(raw).map_err(Error::Malformed)
}

/// Decode a complete binary trace payload into the viewer JSON text.
///
/// Deterministic: identical input bytes yield identical output. Callers
/// that want to stream instead of buffering should use [`parse`] and
/// iterate [`JsonFragments`] themselves.
pub fn decode(raw: &[u8]) -> Result<String> {
    Ok(JsonFragments::new(parse(raw)?).collect())
}
