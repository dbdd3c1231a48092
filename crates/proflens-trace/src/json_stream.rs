//! Streaming conversion of a decoded trace into the trace-viewer JSON
//! document.
//!
//! The document is emitted as an ordered sequence of text fragments
//! that concatenate into one valid JSON object, so a large trace can be
//! written to a response without buffering the whole rendering. Records
//! are encoded with keys in sorted order (`serde_json::Value` objects).

use serde_json::{Value, json};

use crate::wire::{Trace, TraceEvent};

/// Opening fragment. `ts`/`dur` are microseconds; the viewer renders at
/// nanosecond granularity.
const PREAMBLE: &str =
    r#"{"displayTimeUnit": "ns", "metadata": {"highres-ticks": true}, "traceEvents": ["#;

/// Closing fragment: the empty record absorbs the trailing comma.
const CLOSER: &str = "{}]}";

const PS_PER_MICROSECOND: f64 = 1_000_000.0;

/// One-shot fragment stream for a decoded trace.
///
/// Yields the preamble, one fragment per naming/event record (each with
/// its trailing comma), then the closer. Single-pass and not
/// restartable; event records are rendered lazily as the stream is
/// consumed.
pub struct JsonFragments {
    preamble_done: bool,
    naming: std::vec::IntoIter<Value>,
    events: std::vec::IntoIter<TraceEvent>,
    closer_done: bool,
}

impl JsonFragments {
    pub fn new(trace: Trace) -> Self {
        let naming = naming_records(&trace).into_iter();
        Self {
            preamble_done: false,
            naming,
            events: trace.trace_events.into_iter(),
            closer_done: false,
        }
    }
}

impl Iterator for JsonFragments {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if !self.preamble_done {
            self.preamble_done = true;
            return Some(PREAMBLE.to_string());
        }
        if let Some(record) = self.naming.next() {
            return Some(format!("{},", record));
        }
        if let Some(event) = self.events.next() {
            return Some(format!("{},", event_record(&event)));
        }
        if !self.closer_done {
            self.closer_done = true;
            return Some(CLOSER.to_string());
        }
        None
    }
}

/// Process/thread naming and ordering records, devices and resources in
/// ascending id order. Unnamed devices and resources still get a sort
/// index so the viewer lays their lanes out deterministically.
fn naming_records(trace: &Trace) -> Vec<Value> {
    let mut records = Vec::new();
    let mut device_ids: Vec<&u32> = trace.devices.keys().collect();
    device_ids.sort();
    for did in device_ids {
        let device = &trace.devices[did];
        if !device.name.is_empty() {
            records.push(json!({
                "ph": "M",
                "pid": did,
                "name": "process_name",
                "args": {"name": device.name},
            }));
        }
        records.push(json!({
            "ph": "M",
            "pid": did,
            "name": "process_sort_index",
            "args": {"sort_index": did},
        }));
        let mut resource_ids: Vec<&u32> = device.resources.keys().collect();
        resource_ids.sort();
        for rid in resource_ids {
            let resource = &device.resources[rid];
            if !resource.name.is_empty() {
                records.push(json!({
                    "ph": "M",
                    "pid": did,
                    "tid": rid,
                    "name": "thread_name",
                    "args": {"name": resource.name},
                }));
            }
            records.push(json!({
                "ph": "M",
                "pid": did,
                "tid": rid,
                "name": "thread_sort_index",
                "args": {"sort_index": rid},
            }));
        }
    }
    records
}

/// A complete (`X`) record for events with a duration, an instant (`i`)
/// record otherwise. Timestamps convert from picoseconds to the
/// viewer's microseconds.
fn event_record(event: &TraceEvent) -> Value {
    let mut record = json!({
        "pid": event.device_id,
        "tid": event.resource_id,
        "name": event.name,
        "ts": event.timestamp_ps as f64 / PS_PER_MICROSECOND,
    });
    if event.duration_ps != 0 {
        record["ph"] = json!("X");
        record["dur"] = json!(event.duration_ps as f64 / PS_PER_MICROSECOND);
    } else {
        record["ph"] = json!("i");
        record["s"] = json!("t");
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{Device, Resource};
    use std::collections::HashMap;

    fn trace_with_devices(ids: &[u32]) -> Trace {
        let mut devices = HashMap::new();
        for &id in ids {
            devices.insert(
                id,
                Device {
                    name: format!("/device:TPU:{}", id),
                    device_id: id,
                    resources: HashMap::new(),
                },
            );
        }
        Trace {
            devices,
            trace_events: Vec::new(),
        }
    }

    #[test]
    fn fragments_concatenate_into_valid_json() {
        let mut trace = trace_with_devices(&[0]);
        trace.trace_events.push(TraceEvent {
            device_id: 0,
            resource_id: 0,
            name: "step".to_string(),
            timestamp_ps: 1_500_000,
            duration_ps: 500_000,
        });

        let text: String = JsonFragments::new(trace).collect();
        let doc: Value = serde_json::from_str(&text).expect("concatenated fragments parse");
        assert_eq!(doc["displayTimeUnit"], "ns");
        assert_eq!(doc["metadata"]["highres-ticks"], true);

        // Closing record is the empty object absorbing the trailing comma.
        let events = doc["traceEvents"].as_array().unwrap();
        assert_eq!(events.last().unwrap(), &json!({}));
    }

    #[test]
    fn stream_starts_with_preamble_and_ends_with_closer() {
        let fragments: Vec<String> = JsonFragments::new(trace_with_devices(&[0])).collect();
        assert_eq!(fragments.first().unwrap(), PREAMBLE);
        assert_eq!(fragments.last().unwrap(), CLOSER);
    }

    #[test]
    fn devices_are_emitted_in_ascending_id_order() {
        let fragments: Vec<String> = JsonFragments::new(trace_with_devices(&[2, 0, 1])).collect();
        let pids: Vec<u64> = fragments[1..fragments.len() - 1]
            .iter()
            .map(|f| {
                let record: Value =
                    serde_json::from_str(f.trim_end_matches(',')).expect("record parses");
                record["pid"].as_u64().unwrap()
            })
            .collect();
        let mut sorted = pids.clone();
        sorted.sort();
        assert_eq!(pids, sorted);
    }

    #[test]
    fn named_device_gets_process_name_record() {
        let text: String = JsonFragments::new(trace_with_devices(&[3])).collect();
        let doc: Value = serde_json::from_str(&text).unwrap();
        let events = doc["traceEvents"].as_array().unwrap();
        assert!(events.iter().any(|e| {
            e["ph"] == "M"
                && e["name"] == "process_name"
                && e["pid"] == 3
                && e["args"]["name"] == "/device:TPU:3"
        }));
        assert!(events.iter().any(|e| {
            e["name"] == "process_sort_index" && e["args"]["sort_index"] == 3
        }));
    }

    #[test]
    fn named_resource_gets_thread_records() {
        let mut trace = trace_with_devices(&[1]);
        trace.devices.get_mut(&1).unwrap().resources.insert(
            7,
            Resource {
                name: "queue".to_string(),
                resource_id: 7,
            },
        );
        let doc: Value =
            serde_json::from_str(&JsonFragments::new(trace).collect::<String>()).unwrap();
        let events = doc["traceEvents"].as_array().unwrap();
        assert!(events.iter().any(|e| {
            e["ph"] == "M" && e["name"] == "thread_name" && e["tid"] == 7 && e["args"]["name"] == "queue"
        }));
        assert!(events.iter().any(|e| {
            e["name"] == "thread_sort_index" && e["tid"] == 7 && e["args"]["sort_index"] == 7
        }));
    }

    #[test]
    fn timed_event_becomes_complete_record_in_microseconds() {
        let record = event_record(&TraceEvent {
            device_id: 1,
            resource_id: 2,
            name: "matmul".to_string(),
            timestamp_ps: 3_000_000,
            duration_ps: 1_500_000,
        });
        assert_eq!(record["ph"], "X");
        assert_eq!(record["ts"], json!(3.0));
        assert_eq!(record["dur"], json!(1.5));
        assert_eq!(record["pid"], 1);
        assert_eq!(record["tid"], 2);
        assert_eq!(record["name"], "matmul");
    }

    #[test]
    fn zero_duration_event_becomes_instant_record() {
        let record = event_record(&TraceEvent {
            device_id: 0,
            resource_id: 0,
            name: "marker".to_string(),
            timestamp_ps: 250_000,
            duration_ps: 0,
        });
        assert_eq!(record["ph"], "i");
        assert_eq!(record["s"], "t");
        assert_eq!(record["ts"], json!(0.25));
        assert!(record.get("dur").is_none());
    }

    #[test]
    fn records_serialize_with_sorted_keys() {
        let record = event_record(&TraceEvent {
            device_id: 0,
            resource_id: 0,
            name: "step".to_string(),
            timestamp_ps: 0,
            duration_ps: 1,
        });
        let text = record.to_string();
        let dur = text.find("\"dur\"").unwrap();
        let name = text.find("\"name\"").unwrap();
        let ph = text.find("\"ph\"").unwrap();
        let ts = text.find("\"ts\"").unwrap();
        assert!(dur < name && name < ph && ph < ts);
    }
}
